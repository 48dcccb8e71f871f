//! Access-rule declarations.

/// A permission an access rule grants or withholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessRight {
    /// Reading the item.
    Read,
    /// Writing item fields.
    Write,
    /// Creating children under the item.
    Create,
    /// Deleting the item.
    Delete,
    /// Changing the item's security settings.
    Admin,
}

/// The outcome an access rule declares for a right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Permission {
    /// Explicitly granted.
    Allow,
    /// Explicitly denied.
    Deny,
    /// No declaration; the host's default applies.
    #[default]
    Inherit,
}

/// Access rules declared on an item.
///
/// Each right is independently Allow, Deny or Inherit. Undeclared
/// rights inherit the host's default, which for a test fixture is
/// "allowed".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccessRules {
    read: Permission,
    write: Permission,
    create: Permission,
    delete: Permission,
    admin: Permission,
}

impl AccessRules {
    /// Creates rules with every right inherited.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the read permission.
    #[must_use]
    pub const fn read(mut self, permission: Permission) -> Self {
        self.read = permission;
        self
    }

    /// Sets the write permission.
    #[must_use]
    pub const fn write(mut self, permission: Permission) -> Self {
        self.write = permission;
        self
    }

    /// Sets the create permission.
    #[must_use]
    pub const fn create(mut self, permission: Permission) -> Self {
        self.create = permission;
        self
    }

    /// Sets the delete permission.
    #[must_use]
    pub const fn delete(mut self, permission: Permission) -> Self {
        self.delete = permission;
        self
    }

    /// Sets the admin permission.
    #[must_use]
    pub const fn admin(mut self, permission: Permission) -> Self {
        self.admin = permission;
        self
    }

    /// The declared permission for a right.
    #[must_use]
    pub const fn get(&self, right: AccessRight) -> Permission {
        match right {
            AccessRight::Read => self.read,
            AccessRight::Write => self.write,
            AccessRight::Create => self.create,
            AccessRight::Delete => self.delete,
            AccessRight::Admin => self.admin,
        }
    }

    /// The declared outcome for a right, `None` when inherited.
    #[must_use]
    pub const fn is_allowed(&self, right: AccessRight) -> Option<bool> {
        match self.get(right) {
            Permission::Allow => Some(true),
            Permission::Deny => Some(false),
            Permission::Inherit => None,
        }
    }
}
