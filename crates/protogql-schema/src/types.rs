//! Protobuf field kinds → GraphQL type names.

use crate::descriptor::{FieldDescriptor, FieldKind};
use crate::names::simple_name;

pub const INT: &str = "Int";
pub const FLOAT: &str = "Float";
pub const BOOLEAN: &str = "Boolean";
pub const STRING: &str = "String";

/// GraphQL type for a field.
///
/// Scalars map to the built-in GraphQL scalars; message and enum fields map to
/// the simple name of the referenced type. Anything else (groups, unknown or
/// absent kinds) falls back to `String` rather than failing.
pub fn graphql_type_name(field: &FieldDescriptor) -> String {
    match field.kind {
        Some(FieldKind::Double | FieldKind::Float) => FLOAT.to_string(),
        Some(
            FieldKind::Int32
            | FieldKind::Int64
            | FieldKind::Uint32
            | FieldKind::Uint64
            | FieldKind::Sint32
            | FieldKind::Sint64
            | FieldKind::Fixed32
            | FieldKind::Fixed64
            | FieldKind::Sfixed32
            | FieldKind::Sfixed64,
        ) => INT.to_string(),
        Some(FieldKind::Bool) => BOOLEAN.to_string(),
        Some(FieldKind::String | FieldKind::Bytes) => STRING.to_string(),
        Some(FieldKind::Message | FieldKind::Enum) => simple_name(field.type_name.as_deref()),
        Some(FieldKind::Group | FieldKind::Unknown) | None => STRING.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(kind: Option<FieldKind>, type_name: Option<&str>) -> FieldDescriptor {
        FieldDescriptor {
            name: Some("f".to_string()),
            label: None,
            kind,
            type_name: type_name.map(str::to_string),
        }
    }

    #[test]
    fn scalar_kinds() {
        let cases = [
            (FieldKind::Double, FLOAT),
            (FieldKind::Float, FLOAT),
            (FieldKind::Int32, INT),
            (FieldKind::Int64, INT),
            (FieldKind::Uint32, INT),
            (FieldKind::Uint64, INT),
            (FieldKind::Sint32, INT),
            (FieldKind::Sint64, INT),
            (FieldKind::Fixed32, INT),
            (FieldKind::Fixed64, INT),
            (FieldKind::Sfixed32, INT),
            (FieldKind::Sfixed64, INT),
            (FieldKind::Bool, BOOLEAN),
            (FieldKind::String, STRING),
            (FieldKind::Bytes, STRING),
        ];
        for (kind, expected) in cases {
            assert_eq!(graphql_type_name(&field(Some(kind), None)), expected, "{kind:?}");
        }
    }

    #[test]
    fn references_resolve_to_simple_names() {
        let msg = field(Some(FieldKind::Message), Some(".acme.v1.Address"));
        assert_eq!(graphql_type_name(&msg), "Address");

        let en = field(Some(FieldKind::Enum), Some(".acme.v1.Color"));
        assert_eq!(graphql_type_name(&en), "Color");

        let dangling = field(Some(FieldKind::Message), None);
        assert_eq!(graphql_type_name(&dangling), "");
    }

    #[test]
    fn unmapped_kinds_fall_back_to_string() {
        assert_eq!(graphql_type_name(&field(Some(FieldKind::Group), None)), STRING);
        assert_eq!(graphql_type_name(&field(Some(FieldKind::Unknown), None)), STRING);
        assert_eq!(graphql_type_name(&field(None, Some(".x.Y"))), STRING);
    }
}
