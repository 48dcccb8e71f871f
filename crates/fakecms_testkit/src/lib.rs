//! # FakeCMS Testkit
//!
//! Test utilities for FakeCMS.
//!
//! This crate provides:
//! - Fixture database helpers and pre-built scenarios
//! - Property-based test generators using proptest
//!
//! ## Usage
//!
//! ```rust
//! use fakecms_testkit::prelude::*;
//!
//! with_db(|db| {
//!     db.add_item(DbItem::new("Home").field("Title", "Welcome"))
//!         .unwrap();
//!     assert!(db.get_item("/content/Home").unwrap().is_some());
//! });
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use fakecms_core::{Db, DbField, DbItem, DbTemplate};
}

pub use fixtures::*;
pub use generators::*;
