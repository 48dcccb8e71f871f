//! The fixture builder.

use crate::auth::AuthorizationAdapter;
use crate::config::Config;
use crate::database::{Database, Item};
use crate::error::{CoreError, CoreResult};
use crate::storage::{DataStorage, CONTENT_ROOT_ID};
use fakecms_model::{DbField, DbItem, DbTemplate, ItemId, Language};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

/// Derives the implicit template for an item declaration.
///
/// The template's identity equals the item's template reference and its
/// fields are name/id pairs copied from the declared fields; declared
/// values are dropped, only the shape is kept. Pure: no storage is
/// touched.
#[must_use]
pub fn derive_template(item: &DbItem) -> DbTemplate {
    let mut template = DbTemplate::new(item.name()).with_id(item.template_id());
    for field in item.fields() {
        template = template.field_def(DbField::new(field.name()).with_id(field.id()));
    }
    template
}

/// An in-memory fixture database.
///
/// `Db` orchestrates construction: given declarative item and template
/// descriptions it derives implicit templates, creates nodes through
/// the [`Database`] handle, populates fields, computes full paths,
/// wires access rules and recurses into children.
///
/// Each instance exclusively owns one [`DataStorage`]. Construction is
/// single-threaded and synchronous; a precondition failure aborts
/// mid-pipeline and leaves storage partially populated. Do not share
/// one instance across concurrent test executions.
///
/// # Example
///
/// ```rust
/// use fakecms_core::{Db, DbItem};
///
/// let mut db = Db::new();
/// db.add_item(
///     DbItem::new("Home")
///         .field("Title", "Welcome")
///         .child(DbItem::new("About").field("Title", "About us")),
/// )
/// .unwrap();
///
/// let about = db.get_item("/content/Home/About").unwrap().unwrap();
/// assert_eq!(about.field("Title"), "About us");
/// ```
pub struct Db {
    config: Config,
    storage: Arc<RwLock<DataStorage>>,
    database: Database,
    authorization: AuthorizationAdapter,
}

impl Db {
    /// Creates a fixture bound to the default `"master"` store.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates a fixture bound to a named store.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::with_config(Config::new().database_name(name))
    }

    /// Creates a fixture from a configuration.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        let storage = Arc::new(RwLock::new(DataStorage::with_root(
            &config.content_root_path,
        )));
        let database = Database::new(config.database_name.clone(), Arc::clone(&storage));
        let authorization = AuthorizationAdapter::bind(&storage);

        debug!(database = %config.database_name, "fixture database created");
        Self {
            config,
            storage,
            database,
            authorization,
        }
    }

    /// The data-access handle for this fixture.
    #[must_use]
    pub fn database(&self) -> &Database {
        &self.database
    }

    /// The authorization seam for this fixture.
    ///
    /// Point the host authorization layer at the returned adapter; it
    /// reverts to default-allow when this fixture is dropped.
    #[must_use]
    pub fn authorization(&self) -> AuthorizationAdapter {
        self.authorization.clone()
    }

    /// Materializes an item declaration, descendants included.
    ///
    /// Runs the fixed pipeline: derive implicit template, create the
    /// node, populate fields, compute the full path, recurse into
    /// children, attach access rules. There is no rollback; a failure
    /// aborts and leaves storage partially populated.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidArgument`] when an explicit parent does not
    /// resolve. Implicit template derivation is skipped when the item's
    /// template reference is already registered, so pre-registered
    /// templates and item declarations compose.
    pub fn add_item(&mut self, item: DbItem) -> CoreResult<()> {
        debug!(name = item.name(), id = %item.id(), "adding fixture item");

        let mut item = item;
        self.register_implicit_template(&item)?;
        let parent_id = self.create_item(&mut item)?;
        self.populate_fields(&item);
        let path = self.set_full_path(&mut item, parent_id)?;
        self.add_children(&mut item, &path)?;
        self.set_access(&item)
    }

    /// Pre-registers a template.
    ///
    /// # Errors
    ///
    /// [`CoreError::DuplicateTemplate`] if a template with the same
    /// identity has already been added.
    pub fn add_template(&mut self, template: DbTemplate) -> CoreResult<()> {
        debug!(name = template.name(), id = %template.id(), "adding fixture template");
        self.storage.write().insert_template(template)
    }

    /// Step 1: register the implicit template unless the reference is
    /// already registered.
    fn register_implicit_template(&mut self, item: &DbItem) -> CoreResult<()> {
        if self.storage.read().contains_template(&item.template_id()) {
            return Ok(());
        }
        self.add_template(derive_template(item))
    }

    /// Step 2: default the parent to the content root and create the
    /// node through the data-access handle.
    fn create_item(&mut self, item: &mut DbItem) -> CoreResult<ItemId> {
        let parent_id = item.parent_id().unwrap_or(CONTENT_ROOT_ID);
        item.set_parent_id(parent_id);

        self.database
            .create_item(item.name(), parent_id, item.template_id(), item.id())?;
        Ok(parent_id)
    }

    /// Step 3: append the declared fields onto the stored record.
    fn populate_fields(&mut self, item: &DbItem) {
        if item.fields().is_empty() {
            return;
        }

        let mut storage = self.storage.write();
        if let Some(record) = storage.item_mut(&item.id()) {
            for field in item.fields() {
                record.fields_mut().push(field.clone());
            }
        }
    }

    /// Step 4: compute the full path and write it to the stored record.
    fn set_full_path(&mut self, item: &mut DbItem, parent_id: ItemId) -> CoreResult<String> {
        let path = if parent_id == CONTENT_ROOT_ID {
            format!("{}/{}", self.config.content_root_path, item.name())
        } else {
            let storage = self.storage.read();
            let parent = storage.item(&parent_id).ok_or_else(|| {
                CoreError::invalid_argument(
                    "parent",
                    format!("no stored item with id {parent_id}"),
                )
            })?;
            format!("{}/{}", parent.full_path(), item.name())
        };

        item.set_full_path(path.clone());
        if let Some(record) = self.storage.write().item_mut(&item.id()) {
            record.set_full_path(path.clone());
        }
        Ok(path)
    }

    /// Step 5: recurse into declared children, stamping parent identity
    /// and path prefix first.
    fn add_children(&mut self, item: &mut DbItem, path: &str) -> CoreResult<()> {
        for mut child in item.take_children() {
            child.set_parent_id(item.id());
            child.set_full_path(format!("{path}/{}", child.name()));
            self.add_item(child)?;
        }
        Ok(())
    }

    /// Step 6: attach the declared access rules to the stored record.
    fn set_access(&mut self, item: &DbItem) -> CoreResult<()> {
        self.storage.write().set_access(item.id(), item.access())
    }

    /// Resolves an item by full path under the ambient current language.
    ///
    /// # Errors
    ///
    /// Invalid-argument if `path` is empty.
    pub fn get_item(&self, path: &str) -> CoreResult<Option<Item>> {
        if path.is_empty() {
            return Err(CoreError::invalid_argument("path", "path must not be empty"));
        }
        Ok(self.database.get_item(path))
    }

    /// Resolves an item by full path under an explicit language.
    ///
    /// # Errors
    ///
    /// Invalid-argument if `path` or `language` is empty.
    pub fn get_item_in_language(&self, path: &str, language: &str) -> CoreResult<Option<Item>> {
        if path.is_empty() {
            return Err(CoreError::invalid_argument("path", "path must not be empty"));
        }
        if language.is_empty() {
            return Err(CoreError::invalid_argument(
                "language",
                "language must not be empty",
            ));
        }
        Ok(self
            .database
            .get_item_in_language(path, &Language::new(language)))
    }

    /// Resolves an item by identity under the ambient current language.
    ///
    /// Resolution is idempotent: it never mutates storage.
    pub fn get_item_by_id(&self, id: ItemId) -> CoreResult<Option<Item>> {
        Ok(self.database.get_item_by_id(id))
    }

    /// Resolves an item by identity under an explicit language.
    ///
    /// # Errors
    ///
    /// Invalid-argument if `language` is empty.
    pub fn get_item_by_id_in_language(
        &self,
        id: ItemId,
        language: &str,
    ) -> CoreResult<Option<Item>> {
        if language.is_empty() {
            return Err(CoreError::invalid_argument(
                "language",
                "language must not be empty",
            ));
        }
        Ok(self
            .database
            .get_item_by_id_in_language(id, &Language::new(language)))
    }

    /// Enumeration over the fixture's items is deliberately unsupported
    /// and always fails, so a caller relying on it finds out
    /// immediately instead of observing an empty sequence.
    pub fn iter(&self) -> CoreResult<std::iter::Empty<Item>> {
        Err(CoreError::unsupported("enumerating fixture items"))
    }

    /// The number of stored items, content root included.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.storage.read().item_count()
    }

    /// The number of registered templates.
    #[must_use]
    pub fn template_count(&self) -> usize {
        self.storage.read().template_count()
    }

    /// The fixture configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for Db {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Db {
    fn drop(&mut self) {
        // Storage and the authorization binding die with the fixture;
        // adapter clones held by the host revert to default-allow.
        debug!(database = %self.config.database_name, "fixture database disposed");
    }
}

impl std::fmt::Debug for Db {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Db")
            .field("database", &self.config.database_name)
            .field("item_count", &self.item_count())
            .field("template_count", &self.template_count())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::CONTENT_ROOT_PATH;
    use fakecms_model::TemplateId;

    #[test]
    fn binds_to_master_by_default() {
        let db = Db::new();
        assert_eq!(db.database().name(), "master");
    }

    #[test]
    fn binds_to_named_store() {
        let db = Db::named("web");
        assert_eq!(db.database().name(), "web");
    }

    #[test]
    fn derive_template_keeps_field_shape_only() {
        let item = DbItem::new("Home")
            .field("Title", "Welcome")
            .field("Body", "Hello");

        let template = derive_template(&item);
        assert_eq!(template.id(), item.template_id());
        assert_eq!(template.fields().len(), 2);

        let title = template.fields().get("Title").unwrap();
        assert_eq!(title.id(), item.fields().get("Title").unwrap().id());
        assert_eq!(title.get_value(&Language::current(), 1), "");
    }

    #[test]
    fn add_item_registers_implicit_template() {
        let mut db = Db::new();
        let item = DbItem::new("Home").field("Title", "Welcome");
        let template_id = item.template_id();

        db.add_item(item).unwrap();

        let storage = db.storage.read();
        let template = storage.template(&template_id).unwrap();
        assert_eq!(template.fields().len(), 1);
    }

    #[test]
    fn add_item_skips_derivation_for_registered_template() {
        let mut db = Db::new();
        let template = DbTemplate::new("Page").field("Title");
        let template_id = template.id();
        db.add_template(template).unwrap();

        db.add_item(
            DbItem::new("Home")
                .with_template(template_id)
                .field("Title", "Welcome"),
        )
        .unwrap();

        assert_eq!(db.template_count(), 1);
        let storage = db.storage.read();
        assert_eq!(storage.template(&template_id).unwrap().name(), "Page");
    }

    #[test]
    fn parentless_item_lands_under_content_root() {
        let mut db = Db::new();
        db.add_item(DbItem::new("Home")).unwrap();

        let home = db.get_item("/content/Home").unwrap().unwrap();
        assert_eq!(home.path(), format!("{CONTENT_ROOT_PATH}/Home"));
    }

    #[test]
    fn explicit_parent_extends_its_path() {
        let mut db = Db::new();
        let parent = DbItem::new("Home");
        let parent_id = parent.id();
        db.add_item(parent).unwrap();

        db.add_item(DbItem::new("About").with_parent(parent_id))
            .unwrap();

        let about = db.get_item("/content/Home/About").unwrap().unwrap();
        assert_eq!(about.path(), "/content/Home/About");
    }

    #[test]
    fn unresolvable_parent_fails_fast() {
        let mut db = Db::new();
        let err = db
            .add_item(DbItem::new("Orphan").with_parent(ItemId::new()))
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidArgument { .. }));
    }

    #[test]
    fn declared_fields_roundtrip_onto_the_node() {
        let mut db = Db::new();
        db.add_item(
            DbItem::new("Home")
                .field("Title", "Welcome")
                .field("Body", "Hello")
                .field("Footer", "Bye"),
        )
        .unwrap();

        let home = db.get_item("/content/Home").unwrap().unwrap();
        assert_eq!(home.fields().len(), 3);
        assert_eq!(home.field("Title"), "Welcome");
        assert_eq!(home.field("Body"), "Hello");
        assert_eq!(home.field("Footer"), "Bye");
    }

    #[test]
    fn children_materialize_recursively() {
        let mut db = Db::new();
        let grandchild = DbItem::new("Deep");
        let grandchild_id = grandchild.id();
        db.add_item(DbItem::new("Home").child(DbItem::new("About").child(grandchild)))
            .unwrap();

        let deep = db.get_item_by_id(grandchild_id).unwrap().unwrap();
        assert_eq!(deep.path(), "/content/Home/About/Deep");
    }

    #[test]
    fn duplicate_explicit_template_fails() {
        let mut db = Db::new();
        let id = TemplateId::new();

        db.add_template(DbTemplate::new("Page").with_id(id)).unwrap();
        let err = db
            .add_template(DbTemplate::new("Other").with_id(id))
            .unwrap_err();
        assert!(matches!(err, CoreError::DuplicateTemplate { .. }));
    }

    #[test]
    fn get_item_rejects_empty_path() {
        let db = Db::new();
        let err = db.get_item("").unwrap_err();
        assert!(matches!(err, CoreError::InvalidArgument { ref param, .. } if param == "path"));
    }

    #[test]
    fn get_item_rejects_empty_language() {
        let db = Db::new();
        let err = db.get_item_in_language("/content", "").unwrap_err();
        assert!(
            matches!(err, CoreError::InvalidArgument { ref param, .. } if param == "language")
        );
    }

    #[test]
    fn get_item_is_idempotent() {
        let mut db = Db::new();
        db.add_item(DbItem::new("Home").field("Title", "Welcome"))
            .unwrap();

        let count = db.item_count();
        let first = db.get_item("/content/Home").unwrap().unwrap();
        let second = db.get_item("/content/Home").unwrap().unwrap();

        assert_eq!(first.id(), second.id());
        assert_eq!(first.field("Title"), second.field("Title"));
        assert_eq!(db.item_count(), count);
    }

    #[test]
    fn iteration_is_unsupported() {
        let db = Db::new();
        let err = db.iter().unwrap_err();
        assert!(matches!(err, CoreError::Unsupported { .. }));
    }

    #[test]
    fn localized_lookup_selects_language() {
        let mut db = Db::new();
        let mut title = DbField::new("Title");
        title.set_value("en".into(), 1, "Welcome");
        title.set_value("da".into(), 1, "Velkommen");
        db.add_item(DbItem::new("Home").field_def(title)).unwrap();

        let da = db
            .get_item_in_language("/content/Home", "da")
            .unwrap()
            .unwrap();
        assert_eq!(da.field("Title"), "Velkommen");
    }

    #[test]
    fn custom_content_root() {
        let mut db = Db::with_config(Config::new().content_root_path("/site/content"));
        db.add_item(DbItem::new("Home")).unwrap();

        let home = db.get_item("/site/content/Home").unwrap().unwrap();
        assert_eq!(home.path(), "/site/content/Home");
    }
}
