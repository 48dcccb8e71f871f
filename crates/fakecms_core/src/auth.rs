//! Authorization seam.
//!
//! The host authorization subsystem is an external collaborator; the
//! adapter's only responsibility is retrieval of declared access rules
//! keyed by item identity. The binding is explicit dependency
//! injection: [`Db`](crate::Db) creates the adapter at construction,
//! the host is pointed at it for the duration of the test, and
//! dropping the fixture reverts every adapter clone to default-allow.
//! No process-wide singleton is mutated.

use crate::storage::DataStorage;
use fakecms_model::{AccessRight, ItemId};
use parking_lot::RwLock;
use std::sync::{Arc, Weak};

/// Evaluates access rules declared on fixture items.
///
/// Cloneable; all clones observe the same fixture storage. When the
/// owning [`Db`](crate::Db) is dropped the adapter unbinds and every
/// permission check falls back to the host's default, "allowed".
#[derive(Clone)]
pub struct AuthorizationAdapter {
    storage: Weak<RwLock<DataStorage>>,
}

impl AuthorizationAdapter {
    pub(crate) fn bind(storage: &Arc<RwLock<DataStorage>>) -> Self {
        Self {
            storage: Arc::downgrade(storage),
        }
    }

    /// Whether the fixture this adapter was bound to is still alive.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.storage.strong_count() > 0
    }

    /// Evaluates a right for an item.
    ///
    /// Declared `Allow` and `Deny` rules resolve to `true` and `false`.
    /// Inherited rights, unknown items and unbound adapters resolve to
    /// the default, `true`.
    #[must_use]
    pub fn is_allowed(&self, item_id: ItemId, right: AccessRight) -> bool {
        let Some(storage) = self.storage.upgrade() else {
            return true;
        };
        let storage = storage.read();
        storage
            .item(&item_id)
            .and_then(|item| item.access().is_allowed(right))
            .unwrap_or(true)
    }
}

impl std::fmt::Debug for AuthorizationAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthorizationAdapter")
            .field("bound", &self.is_bound())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Db;
    use fakecms_model::{AccessRules, DbItem, Permission};

    #[test]
    fn declared_rules_resolve_through_the_adapter() {
        let mut db = Db::new();
        let item = DbItem::new("Secret")
            .with_access(AccessRules::new().read(Permission::Deny).write(Permission::Allow));
        let id = item.id();
        db.add_item(item).unwrap();

        let auth = db.authorization();
        assert!(!auth.is_allowed(id, AccessRight::Read));
        assert!(auth.is_allowed(id, AccessRight::Write));
        // Undeclared rights inherit the default.
        assert!(auth.is_allowed(id, AccessRight::Delete));
    }

    #[test]
    fn unknown_items_default_to_allow() {
        let db = Db::new();
        let auth = db.authorization();
        assert!(auth.is_allowed(ItemId::new(), AccessRight::Read));
    }

    #[test]
    fn dropping_the_fixture_unbinds_the_adapter() {
        let mut db = Db::new();
        let item = DbItem::new("Secret").with_access(AccessRules::new().read(Permission::Deny));
        let id = item.id();
        db.add_item(item).unwrap();

        let auth = db.authorization();
        assert!(auth.is_bound());
        assert!(!auth.is_allowed(id, AccessRight::Read));

        drop(db);
        assert!(!auth.is_bound());
        assert!(auth.is_allowed(id, AccessRight::Read));
    }
}
