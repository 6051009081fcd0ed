//! Offline generation from descriptor set files.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use protogql_schema::{
    decode_file_descriptor_set, generate_set, parse_descriptor_set_json, FileDescriptorSet,
};
use std::fs;
use std::path::{Component, Path, PathBuf};

#[derive(Args)]
pub struct GenerateArgs {
    /// Descriptor set file (binary, or JSON when it ends in `.json`).
    pub descriptor: PathBuf,
    /// Output directory; `.graphql` paths mirror the `.proto` paths under it.
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,
    /// Parse the descriptor set as Buf JSON regardless of its extension.
    #[arg(long)]
    pub json: bool,
}

pub fn cmd_generate(args: &GenerateArgs) -> Result<()> {
    println!(
        "{} {}",
        "Generating GraphQL schema".green().bold(),
        args.descriptor.display()
    );

    let set = read_descriptor_set(&args.descriptor, args.json)?;
    let generated = generate_set(&set);

    let mut written = 0usize;
    let mut diagnostics = 0usize;
    for file in &generated {
        crate::report_diagnostics(&file.diagnostics);
        diagnostics += file.diagnostics.len();

        if file.name.is_empty() {
            tracing::warn!("skipping descriptor without a file name");
            continue;
        }
        let Some(path) = output_path(&args.out_dir, &file.name) else {
            tracing::warn!(file = %file.name, "skipping file name that escapes the output directory");
            continue;
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        fs::write(&path, &file.content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("  {} {}", "→".cyan(), path.display());
        written += 1;
    }

    println!(
        "{} {} file(s), {} skipped method(s)",
        "Done".green().bold(),
        written,
        diagnostics
    );
    Ok(())
}

/// `out_dir` joined with `name`, or `None` when `name` is absolute or climbs out
/// with `..`.
fn output_path(out_dir: &Path, name: &str) -> Option<PathBuf> {
    let relative = Path::new(name);
    let contained = relative
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
    contained.then(|| out_dir.join(relative))
}

fn read_descriptor_set(path: &Path, force_json: bool) -> Result<FileDescriptorSet> {
    let is_json = force_json || path.extension().is_some_and(|ext| ext == "json");
    if is_json {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        parse_descriptor_set_json(&text)
            .with_context(|| format!("failed to parse {}", path.display()))
    } else {
        let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        decode_file_descriptor_set(&bytes)
            .with_context(|| format!("failed to decode {}", path.display()))
    }
}
