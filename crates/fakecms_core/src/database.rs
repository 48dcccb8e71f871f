//! Named data-access handle over the fixture storage.
//!
//! `Database` stands in for the host CMS data-access layer: it owns the
//! node-creation and node-retrieval primitives that higher-level APIs
//! (path resolution, language selection) call into.

use crate::error::{CoreError, CoreResult};
use crate::storage::DataStorage;
use fakecms_model::{DbFieldCollection, DbItem, ItemId, Language, TemplateId};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

/// A named handle over one fixture's [`DataStorage`].
pub struct Database {
    name: String,
    storage: Arc<RwLock<DataStorage>>,
}

impl Database {
    pub(crate) fn new(name: String, storage: Arc<RwLock<DataStorage>>) -> Self {
        Self { name, storage }
    }

    /// The backing store name, `"master"` by default.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Creates a node in the backing store.
    ///
    /// The node is stored bare: fields, path and access rules are
    /// attached by later steps of the fixture-builder pipeline.
    ///
    /// # Errors
    ///
    /// Invalid-argument if the parent does not resolve.
    pub fn create_item(
        &self,
        name: &str,
        parent_id: ItemId,
        template_id: TemplateId,
        desired_id: ItemId,
    ) -> CoreResult<ItemId> {
        let mut storage = self.storage.write();
        if storage.item(&parent_id).is_none() {
            return Err(CoreError::invalid_argument(
                "parent",
                format!("no stored item with id {parent_id}"),
            ));
        }

        debug!(database = %self.name, name, id = %desired_id, "creating item");
        let mut record = DbItem::new(name)
            .with_id(desired_id)
            .with_template(template_id);
        record.set_parent_id(parent_id);
        storage.insert_item(record);
        Ok(desired_id)
    }

    /// Resolves an item by full path under the ambient current language.
    #[must_use]
    pub fn get_item(&self, path: &str) -> Option<Item> {
        self.get_item_in_language(path, &Language::current())
    }

    /// Resolves an item by full path under an explicit language.
    #[must_use]
    pub fn get_item_in_language(&self, path: &str, language: &Language) -> Option<Item> {
        let storage = self.storage.read();
        storage
            .item_by_path(path)
            .map(|record| Item::resolve(record, language.clone()))
    }

    /// Resolves an item by identity under the ambient current language.
    #[must_use]
    pub fn get_item_by_id(&self, id: ItemId) -> Option<Item> {
        self.get_item_by_id_in_language(id, &Language::current())
    }

    /// Resolves an item by identity under an explicit language.
    #[must_use]
    pub fn get_item_by_id_in_language(&self, id: ItemId, language: &Language) -> Option<Item> {
        let storage = self.storage.read();
        storage
            .item(&id)
            .map(|record| Item::resolve(record, language.clone()))
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// A resolved, read-only view of a stored item.
///
/// Resolution snapshots the stored record: reading an `Item` never
/// mutates storage, and resolving the same path or identity twice
/// yields equivalent views.
#[derive(Debug, Clone)]
pub struct Item {
    id: ItemId,
    name: String,
    template_id: TemplateId,
    path: String,
    language: Language,
    fields: DbFieldCollection,
}

impl Item {
    fn resolve(record: &DbItem, language: Language) -> Self {
        Self {
            id: record.id(),
            name: record.name().to_owned(),
            template_id: record.template_id(),
            path: record.full_path().to_owned(),
            language,
            fields: record.fields().clone(),
        }
    }

    /// The item identity.
    #[must_use]
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// The item name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The template reference.
    #[must_use]
    pub fn template_id(&self) -> TemplateId {
        self.template_id
    }

    /// The full path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The language this view was resolved under.
    #[must_use]
    pub fn language(&self) -> &Language {
        &self.language
    }

    /// The snapshot of the item's fields.
    #[must_use]
    pub fn fields(&self) -> &DbFieldCollection {
        &self.fields
    }

    /// Returns a field's value in the resolution language, latest
    /// version, or the empty string when the field or value is absent.
    ///
    /// Shared fields ignore the language.
    #[must_use]
    pub fn field(&self, name: &str) -> String {
        self.fields
            .get(name)
            .map(|field| {
                let version = field.latest_version(&self.language).max(1);
                field.get_value(&self.language, version)
            })
            .unwrap_or_default()
    }
}
