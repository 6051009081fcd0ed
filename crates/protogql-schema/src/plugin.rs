//! protoc plugin protocol: `CodeGeneratorRequest` → `CodeGeneratorResponse`.
//!
//! Framing (stdin/stdout) lives in the `protoc-gen-graphql` binary; this module
//! only turns decoded requests into responses so it can be tested in-process.

use prost::Message as _;
use prost_types::compiler::code_generator_response::File as ResponseFile;
use prost_types::compiler::{CodeGeneratorRequest, CodeGeneratorResponse};
use rayon::prelude::*;

use crate::assemble::assemble;
use crate::descriptor::{FileDescriptor, FileDescriptorSet};
use crate::diagnostics::Diagnostic;
use crate::error::SchemaError;
use crate::model::GraphQLSchema;
use crate::render::render_schema;

// =============================================================================
// Options
// =============================================================================

/// Which request files get a `.graphql` output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FileSelection {
    /// Every file in `proto_file`, imports included.
    #[default]
    All,
    /// Only files named in `file_to_generate`.
    Requested,
}

/// Options passed through protoc's `--graphql_opt=key=value,...`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PluginOptions {
    pub files: FileSelection,
}

impl PluginOptions {
    pub fn parse(parameter: &str) -> Result<Self, SchemaError> {
        let mut options = PluginOptions::default();
        for pair in parameter.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let invalid = |message: &str| SchemaError::InvalidParameter {
                parameter: pair.to_string(),
                message: message.to_string(),
            };
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| invalid("expected `key=value`"))?;
            match (key.trim(), value.trim()) {
                ("files", "all") => options.files = FileSelection::All,
                ("files", "requested") => options.files = FileSelection::Requested,
                ("files", _) => return Err(invalid("`files` must be `all` or `requested`")),
                _ => return Err(invalid("unknown option")),
            }
        }
        Ok(options)
    }
}

// =============================================================================
// Generation
// =============================================================================

/// Output for one `.proto` file.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    /// Output path (`foo/bar.graphql`).
    pub name: String,
    pub content: String,
    pub schema: GraphQLSchema,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug, Clone, Default)]
pub struct PluginOutput {
    pub response: CodeGeneratorResponse,
    pub diagnostics: Vec<Diagnostic>,
}

/// `foo/bar.proto` → `foo/bar.graphql`. Other names pass through unchanged.
pub fn graphql_file_name(proto_file_name: &str) -> String {
    match proto_file_name.strip_suffix(".proto") {
        Some(stem) => format!("{stem}.graphql"),
        None => proto_file_name.to_string(),
    }
}

/// Assemble and render one file.
pub fn generate_file(file: &FileDescriptor) -> GeneratedFile {
    let assembled = assemble(file);
    let content = render_schema(&assembled.schema);
    let name = graphql_file_name(file.name.as_deref().unwrap_or_default());
    if assembled.schema.is_empty() {
        tracing::debug!(file = %name, "no messages, enums, or endpoints; emitting empty schema");
    }
    GeneratedFile {
        name,
        content,
        schema: assembled.schema,
        diagnostics: assembled.diagnostics,
    }
}

/// Generate every file of a descriptor set, preserving set order.
///
/// Files share no state, so they are processed in parallel.
pub fn generate_set(set: &FileDescriptorSet) -> Vec<GeneratedFile> {
    set.file.par_iter().map(generate_file).collect()
}

pub fn handle_request(request: &CodeGeneratorRequest) -> PluginOutput {
    let parameter = request.parameter.as_deref().unwrap_or_default();
    let options = match PluginOptions::parse(parameter) {
        Ok(options) => options,
        Err(err) => {
            return PluginOutput {
                response: CodeGeneratorResponse {
                    error: Some(err.to_string()),
                    ..Default::default()
                },
                diagnostics: Vec::new(),
            };
        }
    };

    let selected: Vec<&prost_types::FileDescriptorProto> = request
        .proto_file
        .iter()
        .filter(|f| match options.files {
            FileSelection::All => true,
            FileSelection::Requested => f
                .name
                .as_ref()
                .is_some_and(|name| request.file_to_generate.contains(name)),
        })
        .collect();

    tracing::debug!(
        files = selected.len(),
        requested = request.file_to_generate.len(),
        "handling code generator request"
    );

    let generated: Vec<GeneratedFile> = selected
        .par_iter()
        .map(|f| generate_file(&FileDescriptor::from(*f)))
        .collect();

    let mut response = CodeGeneratorResponse::default();
    let mut diagnostics = Vec::new();
    for g in generated {
        response.file.push(ResponseFile {
            name: Some(g.name),
            content: Some(g.content),
            ..Default::default()
        });
        diagnostics.extend(g.diagnostics);
    }

    PluginOutput {
        response,
        diagnostics,
    }
}

/// Decode an encoded `CodeGeneratorRequest` and handle it.
pub fn handle_request_bytes(bytes: &[u8]) -> Result<PluginOutput, SchemaError> {
    let request = CodeGeneratorRequest::decode(bytes)?;
    Ok(handle_request(&request))
}
