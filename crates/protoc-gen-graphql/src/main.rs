//! protoc-gen-graphql
//!
//! Generates GraphQL schemas (`.graphql`) from Protobuf definitions.
//!
//! - As a protoc plugin (no subcommand): reads a `CodeGeneratorRequest` from
//!   stdin and writes a `CodeGeneratorResponse` to stdout.
//! - Offline (`generate`): reads a descriptor set produced by
//!   `protoc --descriptor_set_out` or `buf build` and writes the schemas to disk.
//!
//! Logs and diagnostics always go to stderr; stdout belongs to protoc.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use prost::Message as _;
use protogql_schema::{handle_request_bytes, Diagnostic};
use std::io::{self, Read, Write};
use tracing_subscriber::EnvFilter;

mod generate;

#[derive(Parser)]
#[command(name = "protoc-gen-graphql")]
#[command(
    author,
    version,
    about = "Generate GraphQL schema from Protobuf definitions"
)]
struct Cli {
    /// Log level for stderr output (overridden by `RUST_LOG`).
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate `.graphql` files from a descriptor set file.
    ///
    /// Accepts binary `google.protobuf.FileDescriptorSet` files
    /// (`protoc --descriptor_set_out`, `buf build -o api.binpb`) and Buf JSON
    /// (`buf build -o api.json`).
    Generate(generate::GenerateArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match cli.command {
        None => run_plugin(),
        Some(Commands::Generate(args)) => generate::cmd_generate(&args),
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run_plugin() -> Result<()> {
    let mut input = Vec::new();
    io::stdin()
        .lock()
        .read_to_end(&mut input)
        .context("couldn't read CodeGeneratorRequest from stdin")?;

    let output = handle_request_bytes(&input).context(
        "couldn't decode CodeGeneratorRequest, make sure this is running as a protoc plugin",
    )?;

    report_diagnostics(&output.diagnostics);
    if let Some(error) = &output.response.error {
        tracing::error!(%error, "request rejected");
    }
    tracing::debug!(files = output.response.file.len(), "writing CodeGeneratorResponse");

    io::stdout()
        .lock()
        .write_all(&output.response.encode_to_vec())
        .context("couldn't write CodeGeneratorResponse to stdout")?;
    Ok(())
}

pub(crate) fn report_diagnostics(diagnostics: &[Diagnostic]) {
    for d in diagnostics {
        tracing::warn!(
            file = %d.file,
            service = %d.service,
            method = %d.method,
            "{d}"
        );
    }
}
