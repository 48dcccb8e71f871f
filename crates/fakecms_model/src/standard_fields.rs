//! The well-known system-field table.
//!
//! System fields carry internal metadata and are conventionally prefixed
//! with `__`. The table is an immutable bidirectional mapping from name
//! to identity (and back), loaded once and queried read-only.

use crate::id::FieldId;
use std::collections::HashMap;
use std::sync::LazyLock;
use uuid::uuid;

/// Default definition of a well-known system field.
#[derive(Debug, Clone, Copy)]
pub struct StandardField {
    /// The field name, including the `__` prefix.
    pub name: &'static str,
    /// The fixed field identity.
    pub id: FieldId,
    /// The default declared type, empty when unspecified.
    pub field_type: &'static str,
    /// Whether the field defaults to shared.
    pub shared: bool,
}

const fn plain(name: &'static str, id: FieldId) -> StandardField {
    StandardField {
        name,
        id,
        field_type: "",
        shared: false,
    }
}

static STANDARD_FIELDS: &[StandardField] = &[
    plain(
        "__Base template",
        FieldId::from_uuid(uuid!("12c33f3f-86c5-43a5-aeb4-5598cec45116")),
    ),
    plain(
        "__Created",
        FieldId::from_uuid(uuid!("25bed78c-4957-4165-998a-ca1b52f67497")),
    ),
    plain(
        "__Created by",
        FieldId::from_uuid(uuid!("5dd74568-4d4b-44c1-b513-0af5f4cda34f")),
    ),
    plain(
        "__Hidden",
        FieldId::from_uuid(uuid!("39c4902e-9960-4469-aeef-e878e9c8218f")),
    ),
    plain(
        "__Lock",
        FieldId::from_uuid(uuid!("001dd393-96c5-490b-924a-b0f25cd9efd8")),
    ),
    plain(
        "__Read Only",
        FieldId::from_uuid(uuid!("9c6106ea-7a5a-48e2-8cad-f0f693b1e2d4")),
    ),
    StandardField {
        name: "__Renderings",
        id: FieldId::from_uuid(uuid!("f1a1fe9e-a60c-4ddb-a3a0-bb5b29fe732e")),
        field_type: "layout",
        shared: true,
    },
    plain(
        "__Revision",
        FieldId::from_uuid(uuid!("8cdc337e-a112-42fb-bbb4-4143751e123f")),
    ),
    plain(
        "__Security",
        FieldId::from_uuid(uuid!("dec8d2d5-e3cf-48b6-a653-8e69e2716641")),
    ),
    plain(
        "__Standard values",
        FieldId::from_uuid(uuid!("f7d48a55-2158-4f02-9356-756654404f73")),
    ),
    plain(
        "__Updated",
        FieldId::from_uuid(uuid!("d9cf14b1-fa16-4ba6-9288-e8a174d4d522")),
    ),
    plain(
        "__Updated by",
        FieldId::from_uuid(uuid!("badd9cf9-53e0-4d0c-bcc0-2d784c282f6a")),
    ),
];

static BY_NAME: LazyLock<HashMap<&'static str, &'static StandardField>> = LazyLock::new(|| {
    STANDARD_FIELDS
        .iter()
        .map(|field| (field.name, field))
        .collect()
});

static BY_ID: LazyLock<HashMap<FieldId, &'static StandardField>> = LazyLock::new(|| {
    STANDARD_FIELDS
        .iter()
        .map(|field| (field.id, field))
        .collect()
});

/// Looks up a well-known field by name.
#[must_use]
pub fn standard_field_by_name(name: &str) -> Option<&'static StandardField> {
    BY_NAME.get(name).copied()
}

/// Looks up a well-known field by identity.
#[must_use]
pub fn standard_field_by_id(id: FieldId) -> Option<&'static StandardField> {
    BY_ID.get(&id).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_and_id_are_bidirectional() {
        for field in STANDARD_FIELDS {
            let by_name = standard_field_by_name(field.name).unwrap();
            assert_eq!(by_name.id, field.id);

            let by_id = standard_field_by_id(field.id).unwrap();
            assert_eq!(by_id.name, field.name);
        }
    }

    #[test]
    fn renderings_is_shared_layout() {
        let renderings = standard_field_by_name("__Renderings").unwrap();
        assert!(renderings.shared);
        assert_eq!(renderings.field_type, "layout");
    }

    #[test]
    fn unknown_names_are_absent() {
        assert!(standard_field_by_name("Title").is_none());
        assert!(standard_field_by_name("__Final Renderings").is_none());
        assert!(standard_field_by_id(FieldId::new()).is_none());
    }
}
