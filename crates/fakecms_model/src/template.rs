//! Template declaration.

use crate::field::DbField;
use crate::fields::DbFieldCollection;
use crate::id::TemplateId;

/// A fake content-type declaration: a named, ordered set of field
/// definitions with a stable identity.
///
/// Templates are either pre-registered explicitly through the fixture
/// builder or derived implicitly from an item's declared field shape.
/// The identity is generated at construction when not given explicitly.
///
/// # Example
///
/// ```rust
/// use fakecms_model::DbTemplate;
///
/// let template = DbTemplate::new("Product").field("Title").field("Price");
/// assert_eq!(template.fields().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct DbTemplate {
    id: TemplateId,
    name: String,
    fields: DbFieldCollection,
}

impl DbTemplate {
    /// Creates a template with a freshly generated identity.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: TemplateId::new(),
            name: name.into(),
            fields: DbFieldCollection::new(),
        }
    }

    /// Replaces the template identity with an explicit one.
    #[must_use]
    pub fn with_id(mut self, id: TemplateId) -> Self {
        self.id = id;
        self
    }

    /// Appends a field definition by name.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.fields.push(DbField::new(name));
        self
    }

    /// Appends a complete field definition.
    #[must_use]
    pub fn field_def(mut self, field: DbField) -> Self {
        self.fields.push(field);
        self
    }

    /// The template identity.
    #[must_use]
    pub fn id(&self) -> TemplateId {
        self.id
    }

    /// The template name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The ordered field definitions.
    #[must_use]
    pub fn fields(&self) -> &DbFieldCollection {
        &self.fields
    }

    /// The ordered field definitions, mutable.
    pub fn fields_mut(&mut self) -> &mut DbFieldCollection {
        &mut self.fields
    }
}
