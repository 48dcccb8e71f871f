//! Ordered field collection.

use crate::field::DbField;
use crate::id::FieldId;

/// An insertion-ordered collection of [`DbField`]s.
///
/// Order is observable (field editors enumerate definitions in the
/// order they were declared) and must be preserved. Names are looked up
/// case-insensitively, matching how the host CMS resolves field names.
#[derive(Debug, Clone, Default)]
pub struct DbFieldCollection {
    fields: Vec<DbField>,
}

impl DbFieldCollection {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field, preserving insertion order.
    pub fn push(&mut self, field: DbField) {
        self.fields.push(field);
    }

    /// Looks up a field by name (case-insensitive).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&DbField> {
        self.fields
            .iter()
            .find(|field| field.name().eq_ignore_ascii_case(name))
    }

    /// Looks up a field by name for mutation.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut DbField> {
        self.fields
            .iter_mut()
            .find(|field| field.name().eq_ignore_ascii_case(name))
    }

    /// Looks up a field by identity.
    #[must_use]
    pub fn get_by_id(&self, id: FieldId) -> Option<&DbField> {
        self.fields.iter().find(|field| field.id() == id)
    }

    /// Whether a field with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// The number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates the fields in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, DbField> {
        self.fields.iter()
    }

    /// Iterates the fields mutably in insertion order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, DbField> {
        self.fields.iter_mut()
    }
}

impl IntoIterator for DbFieldCollection {
    type Item = DbField;
    type IntoIter = std::vec::IntoIter<DbField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a DbFieldCollection {
    type Item = &'a DbField;
    type IntoIter = std::slice::Iter<'a, DbField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl FromIterator<DbField> for DbFieldCollection {
    fn from_iter<I: IntoIterator<Item = DbField>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
