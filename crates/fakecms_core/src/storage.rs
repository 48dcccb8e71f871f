//! In-memory registry of fake items and templates.

use crate::error::{CoreError, CoreResult};
use fakecms_model::{AccessRules, DbItem, DbTemplate, ItemId, TemplateId};
use std::collections::HashMap;
use tracing::trace;
use uuid::uuid;

/// Fixed identity of the content root every fixture is seeded with.
pub const CONTENT_ROOT_ID: ItemId = ItemId::from_uuid(uuid!("0de95ae4-41ab-4d01-9eb0-67441b7c2450"));

/// Default full path of the content root.
pub const CONTENT_ROOT_PATH: &str = "/content";

/// The identity-keyed registry of fake items and templates.
///
/// One `DataStorage` is the single source of truth for one fixture
/// database. It is owned exclusively by its [`Db`](crate::Db) instance,
/// populated incrementally as items and templates are added, and
/// dropped when the fixture is disposed.
#[derive(Debug)]
pub struct DataStorage {
    items: HashMap<ItemId, DbItem>,
    templates: HashMap<TemplateId, DbTemplate>,
    content_root_path: String,
}

impl DataStorage {
    /// Creates a storage seeded with the default content root.
    #[must_use]
    pub fn new() -> Self {
        Self::with_root(CONTENT_ROOT_PATH)
    }

    /// Creates a storage seeded with a content root at the given path.
    #[must_use]
    pub fn with_root(root_path: &str) -> Self {
        let root_name = root_path.rsplit('/').next().unwrap_or_default();
        let mut root = DbItem::new(root_name).with_id(CONTENT_ROOT_ID);
        root.set_full_path(root_path);

        let mut items = HashMap::new();
        items.insert(CONTENT_ROOT_ID, root);

        Self {
            items,
            templates: HashMap::new(),
            content_root_path: root_path.to_owned(),
        }
    }

    /// The full path of the seeded content root.
    #[must_use]
    pub fn content_root_path(&self) -> &str {
        &self.content_root_path
    }

    /// Inserts or replaces a stored item record.
    pub fn insert_item(&mut self, item: DbItem) {
        trace!(id = %item.id(), name = item.name(), "storing fake item");
        self.items.insert(item.id(), item);
    }

    /// Looks up a stored item by identity.
    #[must_use]
    pub fn item(&self, id: &ItemId) -> Option<&DbItem> {
        self.items.get(id)
    }

    /// Looks up a stored item by identity for mutation.
    pub fn item_mut(&mut self, id: &ItemId) -> Option<&mut DbItem> {
        self.items.get_mut(id)
    }

    /// Looks up a stored item by full path (case-insensitive, as the
    /// host CMS resolves paths).
    #[must_use]
    pub fn item_by_path(&self, path: &str) -> Option<&DbItem> {
        self.items
            .values()
            .find(|item| item.full_path().eq_ignore_ascii_case(path))
    }

    /// Registers a template.
    ///
    /// # Errors
    ///
    /// [`CoreError::DuplicateTemplate`] if a template with this
    /// identity is already registered.
    pub fn insert_template(&mut self, template: DbTemplate) -> CoreResult<()> {
        if self.templates.contains_key(&template.id()) {
            return Err(CoreError::DuplicateTemplate { id: template.id() });
        }
        trace!(id = %template.id(), name = template.name(), "storing fake template");
        self.templates.insert(template.id(), template);
        Ok(())
    }

    /// Looks up a registered template by identity.
    #[must_use]
    pub fn template(&self, id: &TemplateId) -> Option<&DbTemplate> {
        self.templates.get(id)
    }

    /// Whether a template with this identity is registered.
    #[must_use]
    pub fn contains_template(&self, id: &TemplateId) -> bool {
        self.templates.contains_key(id)
    }

    /// Attaches access rules to a stored item.
    ///
    /// # Errors
    ///
    /// Invalid-argument if no item with this identity is stored.
    pub fn set_access(&mut self, id: ItemId, access: AccessRules) -> CoreResult<()> {
        let item = self.items.get_mut(&id).ok_or_else(|| {
            CoreError::invalid_argument("item", format!("no stored item with id {id}"))
        })?;
        item.set_access(access);
        Ok(())
    }

    /// The number of stored items, content root included.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// The number of registered templates.
    #[must_use]
    pub fn template_count(&self) -> usize {
        self.templates.len()
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fakecms_model::{AccessRight, Permission};

    #[test]
    fn seeds_content_root() {
        let storage = DataStorage::new();
        let root = storage.item(&CONTENT_ROOT_ID).unwrap();
        assert_eq!(root.full_path(), "/content");
        assert_eq!(root.name(), "content");
        assert_eq!(storage.item_count(), 1);
    }

    #[test]
    fn custom_root_path() {
        let storage = DataStorage::with_root("/site/content");
        let root = storage.item(&CONTENT_ROOT_ID).unwrap();
        assert_eq!(root.full_path(), "/site/content");
        assert_eq!(root.name(), "content");
    }

    #[test]
    fn item_roundtrip() {
        let mut storage = DataStorage::new();
        let item = DbItem::new("Home");
        let id = item.id();
        storage.insert_item(item);

        assert_eq!(storage.item(&id).unwrap().name(), "Home");
        assert!(storage.item(&ItemId::new()).is_none());
    }

    #[test]
    fn path_lookup_is_case_insensitive() {
        let mut storage = DataStorage::new();
        let mut item = DbItem::new("Home");
        item.set_full_path("/content/Home");
        storage.insert_item(item);

        assert!(storage.item_by_path("/content/home").is_some());
        assert!(storage.item_by_path("/CONTENT/HOME").is_some());
        assert!(storage.item_by_path("/content/Missing").is_none());
    }

    #[test]
    fn duplicate_template_id_is_rejected() {
        let mut storage = DataStorage::new();
        let id = TemplateId::new();

        storage
            .insert_template(DbTemplate::new("Page").with_id(id))
            .unwrap();
        let err = storage
            .insert_template(DbTemplate::new("Other").with_id(id))
            .unwrap_err();

        assert!(matches!(err, CoreError::DuplicateTemplate { id: got } if got == id));
    }

    #[test]
    fn set_access_attaches_rules() {
        let mut storage = DataStorage::new();
        let item = DbItem::new("Home");
        let id = item.id();
        storage.insert_item(item);

        let rules = AccessRules::new().read(Permission::Deny);
        storage.set_access(id, rules).unwrap();

        let stored = storage.item(&id).unwrap();
        assert_eq!(stored.access().is_allowed(AccessRight::Read), Some(false));
    }

    #[test]
    fn set_access_on_missing_item_fails() {
        let mut storage = DataStorage::new();
        let err = storage
            .set_access(ItemId::new(), AccessRules::new())
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidArgument { .. }));
    }
}
