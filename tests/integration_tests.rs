//! Integration tests for the complete protogql pipeline
//!
//! These tests drive whole files through the public API:
//! - CodeGeneratorRequest → handle_request → CodeGeneratorResponse
//! - descriptor set (binary / JSON) → generate_set → SDL
//!
//! Run with: cargo test --test integration_tests

use prost::Message;
use prost_types::compiler::CodeGeneratorRequest;
use prost_types::field_descriptor_proto::{Label, Type};
use prost_types::{
    DescriptorProto, EnumDescriptorProto, EnumValueDescriptorProto, FieldDescriptorProto,
    FileDescriptorProto, MethodDescriptorProto, ServiceDescriptorProto,
};
use protogql_schema::{
    decode_file_descriptor_set, generate_file, generate_set, handle_request,
    parse_descriptor_set_json, DiagnosticKind, FileDescriptor, GraphQLEndpoint,
};

// ============================================================================
// Fixtures
// ============================================================================

fn field(name: &str, ty: Type, label: Label, type_name: Option<&str>) -> FieldDescriptorProto {
    FieldDescriptorProto {
        name: Some(name.to_string()),
        label: Some(label as i32),
        r#type: Some(ty as i32),
        type_name: type_name.map(str::to_string),
        ..Default::default()
    }
}

fn message(name: &str, fields: Vec<FieldDescriptorProto>) -> DescriptorProto {
    DescriptorProto {
        name: Some(name.to_string()),
        field: fields,
        ..Default::default()
    }
}

fn rpc(name: &str, input: &str, output: &str) -> MethodDescriptorProto {
    MethodDescriptorProto {
        name: Some(name.to_string()),
        input_type: Some(format!(".people.v1.{input}")),
        output_type: Some(format!(".people.v1.{output}")),
        ..Default::default()
    }
}

fn person() -> DescriptorProto {
    message(
        "Person",
        vec![
            field("name", Type::String, Label::Optional, None),
            field("age", Type::Int32, Label::Optional, None),
            field("tags", Type::String, Label::Repeated, None),
        ],
    )
}

fn color() -> EnumDescriptorProto {
    EnumDescriptorProto {
        name: Some("Color".to_string()),
        value: ["RED", "GREEN", "BLUE"]
            .into_iter()
            .enumerate()
            .map(|(i, v)| EnumValueDescriptorProto {
                name: Some(v.to_string()),
                number: Some(i as i32),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    }
}

fn people_file(methods: Vec<MethodDescriptorProto>) -> FileDescriptorProto {
    FileDescriptorProto {
        name: Some("people/v1/people.proto".to_string()),
        package: Some("people.v1".to_string()),
        message_type: vec![
            person(),
            message(
                "PersonRequest",
                vec![field("id", Type::String, Label::Optional, None)],
            ),
            message(
                "PersonResponse",
                vec![field(
                    "person",
                    Type::Message,
                    Label::Optional,
                    Some(".people.v1.Person"),
                )],
            ),
        ],
        service: if methods.is_empty() {
            vec![]
        } else {
            vec![ServiceDescriptorProto {
                name: Some("PeopleService".to_string()),
                method: methods,
                ..Default::default()
            }]
        },
        ..Default::default()
    }
}

// ============================================================================
// Structural rendering
// ============================================================================

#[test]
fn test_message_renders_as_object_type() {
    let file = FileDescriptorProto {
        name: Some("person.proto".to_string()),
        message_type: vec![person()],
        ..Default::default()
    };
    let out = generate_file(&FileDescriptor::from(&file));
    assert_eq!(
        out.content,
        "type Person {\n    name: String\n    age: Int\n    tags: [String]\n}"
    );
}

#[test]
fn test_enum_renders_values_in_order() {
    let file = FileDescriptorProto {
        name: Some("color.proto".to_string()),
        enum_type: vec![color()],
        ..Default::default()
    };
    let out = generate_file(&FileDescriptor::from(&file));
    assert_eq!(out.content, "enum Color {\n    RED\n    GREEN\n    BLUE\n}");
}

#[test]
fn test_repeated_message_and_enum_fields_render_as_lists() {
    let file = FileDescriptorProto {
        name: Some("people/v1/contact.proto".to_string()),
        package: Some("people.v1".to_string()),
        message_type: vec![
            message(
                "Address",
                vec![field("city", Type::String, Label::Optional, None)],
            ),
            message(
                "Contact",
                vec![
                    field(
                        "addresses",
                        Type::Message,
                        Label::Repeated,
                        Some(".people.v1.Address"),
                    ),
                    field(
                        "favorite_colors",
                        Type::Enum,
                        Label::Repeated,
                        Some(".common.Color"),
                    ),
                    field(
                        "primary",
                        Type::Message,
                        Label::Optional,
                        Some(".people.v1.Address"),
                    ),
                ],
            ),
        ],
        enum_type: vec![color()],
        ..Default::default()
    };
    let out = generate_file(&FileDescriptor::from(&file));

    let expected = "\
type Address {
    city: String
}

type Contact {
    addresses: [Address]
    favorite_colors: [Color]
    primary: Address
}

enum Color {
    RED
    GREEN
    BLUE
}";
    assert_eq!(out.content, expected);
}

// ============================================================================
// Services
// ============================================================================

#[test]
fn test_get_method_becomes_query_and_moves_request_to_inputs() {
    let file = people_file(vec![rpc("GetPerson", "PersonRequest", "PersonResponse")]);
    let out = generate_file(&FileDescriptor::from(&file));

    assert_eq!(
        out.schema.queries,
        vec![GraphQLEndpoint {
            name: "GetPerson".to_string(),
            input_type: "PersonRequest".to_string(),
            output_type: "PersonResponse".to_string(),
        }]
    );
    let inputs: Vec<_> = out.schema.inputs.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(inputs, vec!["PersonRequest"]);

    let expected = "\
type Person {
    name: String
    age: Int
    tags: [String]
}

type PersonResponse {
    person: Person
}

input PersonRequest {
    id: String
}

type Query {
    GetPerson(input: PersonRequest): PersonResponse
}";
    assert_eq!(out.content, expected);
}

#[test]
fn test_unrecognized_method_is_diagnosed_and_dropped() {
    let file = people_file(vec![rpc("ArchivePerson", "PersonRequest", "Person")]);
    let out = generate_file(&FileDescriptor::from(&file));

    assert!(out.schema.queries.is_empty());
    assert!(out.schema.mutations.is_empty());
    assert!(out.schema.inputs.is_empty());
    assert_eq!(out.diagnostics.len(), 1);
    assert_eq!(out.diagnostics[0].kind, DiagnosticKind::UnrecognizedMethod);
    assert_eq!(out.diagnostics[0].method, "ArchivePerson");
    assert!(!out.content.contains("ArchivePerson"));
}

#[test]
fn test_file_without_services_omits_root_types() {
    let file = people_file(vec![]);
    let out = generate_file(&FileDescriptor::from(&file));

    assert!(out.schema.queries.is_empty());
    assert!(out.schema.mutations.is_empty());
    assert!(!out.content.contains("Query"));
    assert!(!out.content.contains("Mutation"));
    assert!(!out.content.contains("\n\n\n"));
    assert!(out.content.ends_with('}'));
}

#[test]
fn test_queries_and_mutations_together() {
    let file = people_file(vec![
        rpc("ListPeople", "PersonRequest", "PersonResponse"),
        rpc("CreatePerson", "Person", "PersonResponse"),
        rpc("DeletePerson", "PersonRequest", "PersonResponse"),
    ]);
    let out = generate_file(&FileDescriptor::from(&file));

    let types: Vec<_> = out.schema.types.iter().map(|t| t.name.as_str()).collect();
    let inputs: Vec<_> = out.schema.inputs.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(types, vec!["PersonResponse"]);
    assert_eq!(inputs, vec!["Person", "PersonRequest"]);

    assert!(out.content.ends_with(
        "type Query {\n    ListPeople(input: PersonRequest): PersonResponse\n}\n\n\
         type Mutation {\n    CreatePerson(input: Person): PersonResponse\n    \
         DeletePerson(input: PersonRequest): PersonResponse\n}"
    ));
}

// ============================================================================
// Plugin protocol
// ============================================================================

#[test]
fn test_plugin_request_produces_graphql_files() {
    let request = CodeGeneratorRequest {
        file_to_generate: vec!["people/v1/people.proto".to_string()],
        proto_file: vec![
            FileDescriptorProto {
                name: Some("common/color.proto".to_string()),
                enum_type: vec![color()],
                ..Default::default()
            },
            people_file(vec![rpc("GetPerson", "PersonRequest", "PersonResponse")]),
        ],
        ..Default::default()
    };

    let out = handle_request(&request);
    let names: Vec<_> = out
        .response
        .file
        .iter()
        .filter_map(|f| f.name.as_deref())
        .collect();
    assert_eq!(names, vec!["common/color.graphql", "people/v1/people.graphql"]);

    let decoded = prost_types::compiler::CodeGeneratorResponse::decode(
        out.response.encode_to_vec().as_slice(),
    )
    .expect("response round trip");
    assert_eq!(decoded, out.response);
}

// ============================================================================
// Descriptor sets
// ============================================================================

#[test]
fn test_binary_and_json_descriptor_sets_render_identically() {
    let set = prost_types::FileDescriptorSet {
        file: vec![FileDescriptorProto {
            name: Some("color.proto".to_string()),
            enum_type: vec![color()],
            message_type: vec![message(
                "Palette",
                vec![field(
                    "colors",
                    Type::Enum,
                    Label::Repeated,
                    Some(".paint.Color"),
                )],
            )],
            ..Default::default()
        }],
    };
    let from_binary = decode_file_descriptor_set(&set.encode_to_vec()).expect("decode");

    let json = serde_json::json!({
        "file": [{
            "name": "color.proto",
            "messageType": [{
                "name": "Palette",
                "field": [{
                    "name": "colors",
                    "number": 1,
                    "label": "LABEL_REPEATED",
                    "type": "TYPE_ENUM",
                    "typeName": ".paint.Color"
                }]
            }],
            "enumType": [{
                "name": "Color",
                "value": [
                    { "name": "RED", "number": 0 },
                    { "name": "GREEN", "number": 1 },
                    { "name": "BLUE", "number": 2 }
                ]
            }]
        }]
    });
    let from_json = parse_descriptor_set_json(&json.to_string()).expect("parse");

    let binary_out = generate_set(&from_binary);
    let json_out = generate_set(&from_json);
    assert_eq!(binary_out.len(), 1);
    assert_eq!(binary_out[0].content, json_out[0].content);
    assert_eq!(
        binary_out[0].content,
        "type Palette {\n    colors: [Color]\n}\n\nenum Color {\n    RED\n    GREEN\n    BLUE\n}"
    );
}
