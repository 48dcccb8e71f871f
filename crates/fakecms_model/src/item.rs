//! Item declaration.

use crate::access::AccessRules;
use crate::field::DbField;
use crate::fields::DbFieldCollection;
use crate::id::{ItemId, TemplateId};
use crate::language::Language;

/// A fake content node declaration.
///
/// An item belongs to exactly one template (a fresh template identity
/// is generated per item unless one is given) and has at most one
/// parent. Declared children are consumed at construction time to
/// recurse; the full path is computed by the fixture builder top-down
/// from the content root.
///
/// # Example
///
/// ```rust
/// use fakecms_model::DbItem;
///
/// let home = DbItem::new("Home")
///     .field("Title", "Welcome")
///     .child(DbItem::new("About"));
/// assert_eq!(home.children().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct DbItem {
    id: ItemId,
    name: String,
    template_id: TemplateId,
    parent_id: Option<ItemId>,
    full_path: String,
    fields: DbFieldCollection,
    children: Vec<DbItem>,
    access: AccessRules,
}

impl DbItem {
    /// Creates an item declaration with fresh item and template
    /// identities, no parent and no fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            template_id: TemplateId::new(),
            parent_id: None,
            full_path: String::new(),
            fields: DbFieldCollection::new(),
            children: Vec::new(),
            access: AccessRules::default(),
        }
    }

    /// Replaces the item identity.
    #[must_use]
    pub fn with_id(mut self, id: ItemId) -> Self {
        self.id = id;
        self
    }

    /// Replaces the template reference.
    #[must_use]
    pub fn with_template(mut self, template_id: TemplateId) -> Self {
        self.template_id = template_id;
        self
    }

    /// Sets an explicit parent.
    #[must_use]
    pub fn with_parent(mut self, parent_id: ItemId) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    /// Declares a field with a value under the ambient current
    /// language, version 1.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut field = DbField::new(name);
        field.set_value(Language::current(), 1, value);
        self.fields.push(field);
        self
    }

    /// Declares a complete field.
    #[must_use]
    pub fn field_def(mut self, field: DbField) -> Self {
        self.fields.push(field);
        self
    }

    /// Declares a child item.
    #[must_use]
    pub fn child(mut self, child: DbItem) -> Self {
        self.children.push(child);
        self
    }

    /// Declares access rules.
    #[must_use]
    pub fn with_access(mut self, access: AccessRules) -> Self {
        self.access = access;
        self
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

    /// The parent identity, `None` until defaulted by the builder.
    #[must_use]
    pub fn parent_id(&self) -> Option<ItemId> {
        self.parent_id
    }

    /// Sets the parent identity.
    pub fn set_parent_id(&mut self, parent_id: ItemId) {
        self.parent_id = Some(parent_id);
    }

    /// The computed full path, empty until the builder materializes the
    /// item.
    #[must_use]
    pub fn full_path(&self) -> &str {
        &self.full_path
    }

    /// Sets the computed full path.
    pub fn set_full_path(&mut self, full_path: impl Into<String>) {
        self.full_path = full_path.into();
    }

    /// The declared fields.
    #[must_use]
    pub fn fields(&self) -> &DbFieldCollection {
        &self.fields
    }

    /// The declared fields, mutable.
    pub fn fields_mut(&mut self) -> &mut DbFieldCollection {
        &mut self.fields
    }

    /// The declared children.
    #[must_use]
    pub fn children(&self) -> &[DbItem] {
        &self.children
    }

    /// Removes and returns the declared children.
    pub fn take_children(&mut self) -> Vec<DbItem> {
        std::mem::take(&mut self.children)
    }

    /// The declared access rules.
    #[must_use]
    pub fn access(&self) -> AccessRules {
        self.access
    }

    /// Replaces the access rules.
    pub fn set_access(&mut self, access: AccessRules) {
        self.access = access;
    }
}
