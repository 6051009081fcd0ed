//! Protobuf descriptors → GraphQL schema definitions.
//!
//! Pipeline, per `.proto` file:
//!
//! ```text
//! FileDescriptor ─┬─> transform (messages, enums) ─┐
//!                 └─> classify (services)  ────────┴─> assemble ─> GraphQLSchema ─> render ─> SDL
//! ```
//!
//! - message fields map to GraphQL scalars or to the simple name of the
//!   referenced type ([`types`], [`names`]);
//! - RPC methods become `Query`/`Mutation` fields by name prefix
//!   (`Get`/`List` vs `Create`/`Update`/`Delete`); their input messages are
//!   emitted as `input` types ([`classify`]);
//! - methods matching neither prefix are reported as [`Diagnostic`]s and left
//!   out, never failing the run.
//!
//! # Example
//!
//! ```
//! use protogql_schema::descriptor::parse_descriptor_set_json;
//! use protogql_schema::generate_file;
//!
//! let set = parse_descriptor_set_json(r#"{"file": [{
//!     "name": "color.proto",
//!     "enumType": [{"name": "Color", "value": [{"name": "RED"}, {"name": "BLUE"}]}]
//! }]}"#).unwrap();
//!
//! let out = generate_file(&set.file[0]);
//! assert_eq!(out.name, "color.graphql");
//! assert_eq!(out.content, "enum Color {\n    RED\n    BLUE\n}");
//! ```

pub mod assemble;
pub mod classify;
pub mod descriptor;
pub mod diagnostics;
pub mod error;
pub mod model;
pub mod names;
pub mod plugin;
pub mod render;
pub mod transform;
pub mod types;

pub use assemble::{assemble, Assembled};
pub use classify::{classify_method_name, classify_services, Classification, Operation};
pub use descriptor::{
    decode_file_descriptor_set, parse_descriptor_set_json, FileDescriptor, FileDescriptorSet,
};
pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use error::SchemaError;
pub use model::{GraphQLEndpoint, GraphQLEnum, GraphQLField, GraphQLSchema, GraphQLType};
pub use names::simple_name;
pub use plugin::{
    generate_file, generate_set, graphql_file_name, handle_request, handle_request_bytes,
    FileSelection, GeneratedFile, PluginOptions, PluginOutput,
};
pub use render::render_schema;
pub use types::graphql_type_name;
