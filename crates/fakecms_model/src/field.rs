//! Field value container.

use crate::error::{ModelError, ModelResult};
use crate::id::FieldId;
use crate::language::Language;
use crate::standard_fields::{standard_field_by_id, standard_field_by_name};
use std::collections::{BTreeMap, HashMap};

/// A named, typed, optionally shared, language/version-indexed value
/// container.
///
/// Values are stored per language in version slots numbered from 1.
/// Adding an explicit version beyond the current maximum materializes
/// the versions in between as empty strings, so version numbering never
/// has real gaps.
///
/// When [`shared`](DbField::is_shared) is true the field has exactly
/// one value: every write through any language or version lands in the
/// single shared slot and every read returns it.
///
/// # Example
///
/// ```rust
/// use fakecms_model::DbField;
///
/// let mut field = DbField::new("Title");
/// field.add("en".into(), "Hello");
/// field.add("da".into(), "Hej");
/// assert_eq!(field.get_value(&"en".into(), 1), "Hello");
/// assert_eq!(field.get_value(&"da".into(), 1), "Hej");
/// ```
#[derive(Debug, Clone)]
pub struct DbField {
    id: FieldId,
    name: String,
    field_type: String,
    source: String,
    shared: bool,
    shared_value: String,
    values: HashMap<Language, BTreeMap<u32, String>>,
}

impl DbField {
    /// Creates a field by name.
    ///
    /// Well-known system-field names resolve their fixed identity and
    /// default type/shared-ness from the standard-field table; any other
    /// name gets a fresh identity, no type and `shared = false`.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        match standard_field_by_name(&name) {
            Some(standard) => Self {
                id: standard.id,
                name,
                field_type: standard.field_type.to_owned(),
                source: String::new(),
                shared: standard.shared,
                shared_value: String::new(),
                values: HashMap::new(),
            },
            None => Self {
                id: FieldId::new(),
                name,
                field_type: String::new(),
                source: String::new(),
                shared: false,
                shared_value: String::new(),
                values: HashMap::new(),
            },
        }
    }

    /// Creates a field by identity.
    ///
    /// Well-known identities resolve their name and defaults from the
    /// standard-field table; unknown identities get an empty name.
    #[must_use]
    pub fn from_id(id: FieldId) -> Self {
        match standard_field_by_id(id) {
            Some(standard) => Self {
                id,
                name: standard.name.to_owned(),
                field_type: standard.field_type.to_owned(),
                source: String::new(),
                shared: standard.shared,
                shared_value: String::new(),
                values: HashMap::new(),
            },
            None => Self {
                id,
                name: String::new(),
                field_type: String::new(),
                source: String::new(),
                shared: false,
                shared_value: String::new(),
                values: HashMap::new(),
            },
        }
    }

    /// Replaces the field identity.
    #[must_use]
    pub fn with_id(mut self, id: FieldId) -> Self {
        self.id = id;
        self
    }

    /// Sets the declared type.
    #[must_use]
    pub fn with_type(mut self, field_type: impl Into<String>) -> Self {
        self.field_type = field_type.into();
        self
    }

    /// Sets the value source.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Sets the shared flag.
    #[must_use]
    pub fn shared(mut self, shared: bool) -> Self {
        self.shared = shared;
        self
    }

    /// The field identity.
    #[must_use]
    pub fn id(&self) -> FieldId {
        self.id
    }

    /// The field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared type, empty when unset.
    #[must_use]
    pub fn field_type(&self) -> &str {
        &self.field_type
    }

    /// Sets the declared type.
    pub fn set_type(&mut self, field_type: impl Into<String>) {
        self.field_type = field_type.into();
    }

    /// The value source, e.g. a validation list reference.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Sets the value source.
    pub fn set_source(&mut self, source: impl Into<String>) {
        self.source = source.into();
    }

    /// Whether the value is shared across languages and versions.
    #[must_use]
    pub fn is_shared(&self) -> bool {
        self.shared
    }

    /// Sets the shared flag.
    pub fn set_shared(&mut self, shared: bool) {
        self.shared = shared;
    }

    /// Whether the field name is a well-known system field.
    #[must_use]
    pub fn is_standard(&self) -> bool {
        standard_field_by_name(&self.name).is_some()
    }

    /// Appends a value as the next version for a language.
    ///
    /// The new version number is the current maximum plus one, starting
    /// at 1.
    pub fn add(&mut self, language: Language, value: impl Into<String>) {
        let value = value.into();
        let versions = self.values.entry(language).or_default();
        let next = versions.keys().next_back().copied().unwrap_or(0) + 1;
        versions.insert(next, value.clone());
        if self.shared {
            self.shared_value = value;
        }
    }

    /// Adds a value at an explicit version.
    ///
    /// Version slots between the previous maximum and `version` are
    /// materialized as empty strings.
    ///
    /// # Errors
    ///
    /// - [`ModelError::VersionOutOfRange`] if `version` is zero.
    /// - [`ModelError::DuplicateVersion`] if this language/version pair
    ///   already holds a value.
    pub fn add_version(
        &mut self,
        language: Language,
        version: u32,
        value: impl Into<String>,
    ) -> ModelResult<()> {
        if version < 1 {
            return Err(ModelError::VersionOutOfRange { version });
        }

        let value = value.into();
        let code = language.as_str().to_owned();
        let versions = self.values.entry(language).or_default();
        if versions.contains_key(&version) {
            return Err(ModelError::DuplicateVersion {
                language: code,
                version,
            });
        }

        for missing in 1..version {
            versions.entry(missing).or_default();
        }
        versions.insert(version, value.clone());
        if self.shared {
            self.shared_value = value;
        }
        Ok(())
    }

    /// Upserts a value at an explicit version.
    ///
    /// Unlike [`add_version`](DbField::add_version) this overwrites an
    /// existing value and creates the language/version slot as needed.
    pub fn set_value(&mut self, language: Language, version: u32, value: impl Into<String>) {
        let value = value.into();
        self.values
            .entry(language)
            .or_default()
            .insert(version.max(1), value.clone());
        if self.shared {
            self.shared_value = value;
        }
    }

    /// Upserts a value at the latest version for a language (version 1
    /// when the language has no versions yet).
    pub fn set_latest(&mut self, language: Language, value: impl Into<String>) {
        let version = self.latest_version(&language).max(1);
        self.set_value(language, version, value);
    }

    /// Returns the value for a language/version pair, or the empty
    /// string when absent.
    ///
    /// For shared fields the language and version are ignored and the
    /// single shared value is returned.
    #[must_use]
    pub fn get_value(&self, language: &Language, version: u32) -> String {
        if self.shared {
            return self.shared_value.clone();
        }
        self.values
            .get(language)
            .and_then(|versions| versions.get(&version))
            .cloned()
            .unwrap_or_default()
    }

    /// The highest version number stored for a language, 0 when none.
    #[must_use]
    pub fn latest_version(&self, language: &Language) -> u32 {
        self.values
            .get(language)
            .and_then(|versions| versions.keys().next_back().copied())
            .unwrap_or(0)
    }

    /// The number of version slots stored for a language.
    #[must_use]
    pub fn version_count(&self, language: &Language) -> usize {
        self.values.get(language).map_or(0, BTreeMap::len)
    }

    /// The languages this field holds values for.
    pub fn languages(&self) -> impl Iterator<Item = &Language> {
        self.values.keys()
    }

    /// Reads version 1 under the ambient current language.
    ///
    /// For shared fields the single shared value is returned regardless
    /// of the current language.
    #[must_use]
    pub fn value(&self) -> String {
        if self.shared {
            return self.shared_value.clone();
        }
        self.get_value(&Language::current(), 1)
    }

    /// Writes version 1 under the ambient current language, mirroring
    /// [`value`](DbField::value).
    ///
    /// For shared fields the single shared value is written regardless
    /// of the current language.
    pub fn set_value_for_current(&mut self, value: impl Into<String>) {
        if self.shared {
            self.shared_value = value.into();
            return;
        }
        self.set_value(Language::current(), 1, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::FieldId;
    use crate::language::LanguageScope;

    fn title() -> DbField {
        DbField::new("Title")
    }

    #[test]
    fn sets_name() {
        assert_eq!(title().name(), "Title");
    }

    #[test]
    fn sets_type_and_source() {
        let mut field = title();
        field.set_type("Single-Line Text");
        field.set_source("/content/lists/colors");
        assert_eq!(field.field_type(), "Single-Line Text");
        assert_eq!(field.source(), "/content/lists/colors");
    }

    #[test]
    fn adds_and_gets_localized_values() {
        let mut field = title();
        field.add("en".into(), "en_value");
        field.add("da".into(), "da_value");

        assert_eq!(field.get_value(&"en".into(), 1), "en_value");
        assert_eq!(field.get_value(&"da".into(), 1), "da_value");
    }

    #[test]
    fn adds_and_gets_versioned_values() {
        let mut field = title();
        field.add_version("en".into(), 1, "en_value1").unwrap();
        field.add_version("en".into(), 2, "en_value2").unwrap();
        field.add_version("da".into(), 1, "da_value1").unwrap();

        assert_eq!(field.get_value(&"en".into(), 1), "en_value1");
        assert_eq!(field.get_value(&"en".into(), 2), "en_value2");
        assert_eq!(field.get_value(&"da".into(), 1), "da_value1");
    }

    #[test]
    fn gets_value_in_current_language() {
        let mut field = title();
        field.add("en".into(), "en_value");
        field.add("da".into(), "da_value");

        let _scope = LanguageScope::enter("da");
        assert_eq!(field.value(), "da_value");
    }

    #[test]
    fn gets_empty_string_if_no_version_found() {
        let mut field = title();
        field.add_version("en".into(), 1, "value").unwrap();
        assert_eq!(field.get_value(&"en".into(), 100), "");
    }

    #[test]
    fn sets_and_gets_value_in_current_language() {
        let mut field = title();
        field.set_value_for_current("Hi there!");
        assert_eq!(field.value(), "Hi there!");
    }

    #[test]
    fn value_property_roundtrips_with_multiple_versions() {
        let mut field = title();
        field.add("en".into(), "v1");
        field.add("en".into(), "v2");

        field.set_value_for_current("updated");

        assert_eq!(field.value(), "updated");
        // Later versions are untouched.
        assert_eq!(field.get_value(&"en".into(), 2), "v2");
    }

    #[test]
    fn returns_empty_string_if_no_value_in_current_language() {
        let mut field = title();
        field.add("en".into(), "en_value");

        let _scope = LanguageScope::enter("da");
        assert_eq!(field.value(), "");
    }

    #[test]
    fn add_without_version_appends() {
        let mut field = title();
        field.add("en".into(), "v1");
        field.add("en".into(), "v2");

        assert_eq!(field.get_value(&"en".into(), 1), "v1");
        assert_eq!(field.get_value(&"en".into(), 2), "v2");
        assert_eq!(field.latest_version(&"en".into()), 2);
    }

    #[test]
    fn adds_versions_implicitly() {
        let mut field = title();
        field.add_version("en".into(), 3, "Hello!").unwrap();

        assert_eq!(field.get_value(&"en".into(), 1), "");
        assert_eq!(field.get_value(&"en".into(), 2), "");
        assert_eq!(field.get_value(&"en".into(), 3), "Hello!");
        assert_eq!(field.version_count(&"en".into()), 3);
    }

    #[test]
    fn implicit_versions_do_not_override_existing() {
        let mut field = title();
        field.add_version("en".into(), 1, "Hello v1!").unwrap();
        field.add_version("en".into(), 3, "Hello v3!").unwrap();

        assert_eq!(field.get_value(&"en".into(), 1), "Hello v1!");
        assert_eq!(field.get_value(&"en".into(), 2), "");
        assert_eq!(field.get_value(&"en".into(), 3), "Hello v3!");
    }

    #[test]
    fn rejects_zero_version() {
        let mut field = title();
        let err = field.add_version("en".into(), 0, "value").unwrap_err();
        assert!(matches!(err, ModelError::VersionOutOfRange { version: 0 }));
        assert!(err.to_string().contains("version cannot be zero or negative"));
    }

    #[test]
    fn rejects_duplicate_version() {
        let mut field = title();
        field.add_version("en".into(), 1, "value").unwrap();

        let err = field.add_version("en".into(), 1, "value").unwrap_err();
        assert!(matches!(err, ModelError::DuplicateVersion { version: 1, .. }));
    }

    #[test]
    fn set_value_overwrites_without_failing() {
        let mut field = title();
        field.set_value("en".into(), 1, "v1");
        field.set_value("en".into(), 2, "v2");
        field.set_value("en".into(), 2, "v2-updated");

        assert_eq!(field.get_value(&"en".into(), 1), "v1");
        assert_eq!(field.get_value(&"en".into(), 2), "v2-updated");
    }

    #[test]
    fn set_latest_twice_resets_existing_value() {
        for shared in [true, false] {
            let mut field = title().shared(shared);
            field.set_latest("en".into(), "old");
            field.set_latest("en".into(), "new");
            assert_eq!(field.value(), "new");
        }
    }

    #[test]
    fn shared_value_roundtrip() {
        let mut field = title().shared(true);
        assert_eq!(field.value(), "");

        field.set_value_for_current("shared value");
        assert_eq!(field.value(), "shared value");
    }

    #[test]
    fn shared_ignores_localized_versions() {
        let mut field = title().shared(true);
        field.add("en".into(), "shared value");
        field.add("da".into(), "new shared value");

        assert_eq!(field.value(), "new shared value");
        let _scope = LanguageScope::enter("ja");
        assert_eq!(field.value(), "new shared value");
    }

    #[test]
    fn shared_updates_all_version_reads() {
        let mut field = title().shared(true);
        field.add_version("en".into(), 1, "first").unwrap();
        field.add_version("en".into(), 2, "latest").unwrap();

        assert_eq!(field.get_value(&"en".into(), 1), "latest");
        assert_eq!(field.get_value(&"en".into(), 2), "latest");
    }

    #[test]
    fn invariant_language_reads_shared_only() {
        let mut field = title();
        field.add("en".into(), "value");
        assert_eq!(field.get_value(&Language::invariant(), 0), "");

        let mut shared = title().shared(true);
        shared.add("en".into(), "value");
        assert_eq!(shared.get_value(&Language::invariant(), 0), "value");
    }

    #[test]
    fn maps_default_field_id_by_name() {
        let created = DbField::new("__Created");
        assert_eq!(
            created.id(),
            FieldId::from_uuid(uuid::uuid!("25bed78c-4957-4165-998a-ca1b52f67497"))
        );
    }

    #[test]
    fn maps_default_field_name_by_id() {
        let id = FieldId::from_uuid(uuid::uuid!("f1a1fe9e-a60c-4ddb-a3a0-bb5b29fe732e"));
        let renderings = DbField::from_id(id);
        assert_eq!(renderings.name(), "__Renderings");
    }

    #[test]
    fn renderings_defaults_to_shared_layout() {
        let renderings = DbField::new("__Renderings");
        assert!(renderings.is_shared());
        assert_eq!(renderings.field_type(), "layout");

        let final_renderings = DbField::new("__Final Renderings");
        assert!(!final_renderings.is_shared());
    }

    #[test]
    fn standard_is_table_membership_not_prefix() {
        assert!(DbField::new("__Created").is_standard());
        assert!(!DbField::new("Title").is_standard());
        assert!(!DbField::new("__Final Renderings").is_standard());
    }

    #[test]
    fn unknown_id_gets_empty_name() {
        let field = DbField::from_id(FieldId::new());
        assert_eq!(field.name(), "");
        assert!(!field.is_shared());
    }
}
