//! [`GraphQLSchema`] → GraphQL SDL text.
//!
//! Section order is fixed: object types, enums, inputs, `Query`, `Mutation`.
//! Blocks inside a section and the sections themselves are separated by one
//! blank line; empty sections leave no trace. The model is rendered as-is,
//! without reordering or deduplication, so the output is deterministic.

use crate::model::{GraphQLEndpoint, GraphQLEnum, GraphQLField, GraphQLSchema, GraphQLType};

const INDENT: &str = "    ";
const BLOCK_SEPARATOR: &str = "\n\n";

pub fn render_schema(schema: &GraphQLSchema) -> String {
    let sections = [
        render_definitions("type", &schema.types),
        render_enums(&schema.enums),
        render_definitions("input", &schema.inputs),
        render_root("Query", &schema.queries),
        render_root("Mutation", &schema.mutations),
    ];
    sections
        .iter()
        .filter(|s| !s.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
        .trim()
        .to_string()
}

fn render_definitions(keyword: &str, types: &[GraphQLType]) -> String {
    types
        .iter()
        .map(|t| block(keyword, &t.name, &render_fields(&t.fields)))
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
        .trim()
        .to_string()
}

fn render_fields(fields: &[GraphQLField]) -> String {
    fields
        .iter()
        .map(|f| {
            if f.repeated {
                format!("{INDENT}{}: [{}]", f.name, f.type_name)
            } else {
                format!("{INDENT}{}: {}", f.name, f.type_name)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_enums(enums: &[GraphQLEnum]) -> String {
    enums
        .iter()
        .map(|e| {
            let values = e
                .values
                .iter()
                .map(|v| format!("{INDENT}{v}"))
                .collect::<Vec<_>>()
                .join("\n");
            block("enum", &e.name, &values)
        })
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
        .trim()
        .to_string()
}

fn render_root(name: &str, endpoints: &[GraphQLEndpoint]) -> String {
    if endpoints.is_empty() {
        return String::new();
    }
    let body = endpoints
        .iter()
        .map(|e| format!("{INDENT}{}(input: {}): {}", e.name, e.input_type, e.output_type))
        .collect::<Vec<_>>()
        .join("\n");
    block("type", name, &body)
}

fn block(keyword: &str, name: &str, body: &str) -> String {
    format!("{keyword} {name} {{\n{body}\n}}")
}
