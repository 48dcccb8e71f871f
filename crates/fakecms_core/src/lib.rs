//! # FakeCMS Core
//!
//! An in-memory substitute for a content-management database, used to
//! let unit tests exercise code that depends on a real CMS repository
//! without touching persistent storage.
//!
//! This crate provides:
//! - [`Db`] - the fixture builder that materializes declared item and
//!   template graphs into the backing store
//! - [`DataStorage`] - the identity-keyed registry of fake items and
//!   templates
//! - [`Database`] - the named data-access handle for node creation and
//!   retrieval
//! - [`AuthorizationAdapter`] - the seam the host authorization layer
//!   is pointed at
//!
//! Not a database engine: no querying, no transactions, no indexing,
//! no persistence. Fixtures are deterministic, fast and isolated.
//!
//! ## Example
//!
//! ```rust
//! use fakecms_core::{Db, DbItem};
//!
//! let mut db = Db::new();
//! db.add_item(DbItem::new("Home").field("Title", "Welcome")).unwrap();
//!
//! let home = db.get_item("/content/Home").unwrap().unwrap();
//! assert_eq!(home.field("Title"), "Welcome");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod auth;
mod config;
mod database;
mod db;
mod error;
mod storage;

pub use auth::AuthorizationAdapter;
pub use config::Config;
pub use database::{Database, Item};
pub use db::{derive_template, Db};
pub use error::{CoreError, CoreResult};
pub use storage::{DataStorage, CONTENT_ROOT_ID, CONTENT_ROOT_PATH};

pub use fakecms_model::{
    AccessRight, AccessRules, DbField, DbFieldCollection, DbItem, DbTemplate, FieldId, ItemId,
    Language, LanguageScope, ModelError, Permission, TemplateId,
};
