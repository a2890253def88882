//! tsgen: generate a TypeScript declaration file for C# `[JSExport]` methods.
//!
//! Scans a C# project for exported static methods and writes a single
//! `dotnetEx.d.ts` describing them, one interface member per class:
//!
//! `tsgen path/to/CsProject path/to/ts/types`

mod config;
mod discover;
mod docs;
mod model;
mod params;
mod scanner;
mod signature;
mod types;
mod writer;

use anyhow::{Context, Result};
use clap::Parser;
use config::GeneratorConfig;
use model::DeclarationModel;
use scanner::Scanner;
use std::borrow::Cow;
use std::fs;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "tsgen",
    about = "Generate TypeScript declarations for C# [JSExport] members"
)]
struct Cli {
    /// C# project directory, scanned recursively for .cs files
    source_dir: PathBuf,

    /// Directory that receives the generated .d.ts (created if missing)
    output_dir: PathBuf,

    /// Namespace a file must declare to be scanned
    #[arg(long, default_value = "VoxelML")]
    namespace: String,

    /// Name of the generated TypeScript module
    #[arg(long, default_value = "dotnetEx")]
    module_name: String,

    /// Log skipped files and abandoned signatures
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.quiet {
        Level::WARN
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .init();

    let config = GeneratorConfig {
        namespace: cli.namespace,
        module_name: cli.module_name,
    };

    let model = scan_project(&cli.source_dir, &config)?;
    if model.is_empty() {
        tracing::warn!("no [JSExport] members found, nothing written");
        return Ok(());
    }

    match writer::write_declarations(&model, &cli.output_dir, &config) {
        Ok(Some(path)) => tracing::info!(
            classes = model.len(),
            methods = model.method_count(),
            "wrote {}",
            path.display()
        ),
        Ok(None) => {}
        Err(e) => tracing::error!("Failed to write TypeScript definitions: {:#}", e),
    }

    Ok(())
}

/// Scan every eligible source file under `root` into one model.
fn scan_project(root: &Path, config: &GeneratorConfig) -> Result<DeclarationModel> {
    let scanner = Scanner::new(config);
    let mut model = DeclarationModel::new();

    for path in discover::discover_sources(root)? {
        tracing::info!("Processing file: {}", path.display());

        if discover::in_lowercase_directory(&path) {
            tracing::debug!("skipping {}: lowercase directory", path.display());
            continue;
        }

        let bytes =
            fs::read(&path).with_context(|| format!("failed to read {}", path.display()))?;
        let content = String::from_utf8_lossy(&bytes);
        if let Cow::Owned(_) = content {
            tracing::warn!("{} is not valid UTF-8, invalid bytes replaced", path.display());
        }
        let recorded = scanner.scan(&content, &mut model);
        if recorded > 0 {
            tracing::debug!(methods = recorded, "exports found in {}", path.display());
        }
    }

    Ok(model)
}
