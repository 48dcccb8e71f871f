//! # FakeCMS Model
//!
//! Declaration types for FakeCMS fixtures.
//!
//! This crate provides:
//! - [`DbItem`] - a fake content node declaration
//! - [`DbTemplate`] - a fake content-type declaration
//! - [`DbField`] - a language/version-indexed field value container
//! - [`Language`] / [`LanguageScope`] - the ambient language context
//! - The well-known system-field table
//!
//! Declarations are plain values. Nothing in this crate touches storage;
//! materializing a declaration into a backing store is the job of
//! `fakecms_core`.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod access;
mod error;
mod field;
mod fields;
mod id;
mod item;
mod language;
mod standard_fields;
mod template;

pub use access::{AccessRight, AccessRules, Permission};
pub use error::{ModelError, ModelResult};
pub use field::DbField;
pub use fields::DbFieldCollection;
pub use id::{FieldId, ItemId, TemplateId};
pub use item::DbItem;
pub use language::{Language, LanguageScope};
pub use standard_fields::{standard_field_by_id, standard_field_by_name, StandardField};
pub use template::DbTemplate;
