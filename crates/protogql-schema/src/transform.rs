//! Messages and enums → GraphQL object types and enums.
//!
//! One output entry per descriptor, in declaration order. Nothing is skipped
//! or deduplicated: duplicate names in the input stay duplicated.

use crate::descriptor::{EnumDescriptor, FieldDescriptor, MessageDescriptor};
use crate::model::{GraphQLEnum, GraphQLField, GraphQLType};
use crate::types::graphql_type_name;

pub fn graphql_field(field: &FieldDescriptor) -> GraphQLField {
    GraphQLField {
        name: field.name.clone().unwrap_or_default(),
        type_name: graphql_type_name(field),
        repeated: field.is_repeated(),
    }
}

pub fn graphql_type(message: &MessageDescriptor) -> GraphQLType {
    GraphQLType {
        name: message.name.clone().unwrap_or_default(),
        fields: message.fields.iter().map(graphql_field).collect(),
    }
}

pub fn graphql_enum(e: &EnumDescriptor) -> GraphQLEnum {
    GraphQLEnum {
        name: e.name.clone().unwrap_or_default(),
        values: e
            .values
            .iter()
            .map(|v| v.name.clone().unwrap_or_default())
            .collect(),
    }
}
