//! `.d.ts` rendering and output.
//!
//! Layout, one tab per nesting level:
//!
//! ```text
//! /** Automatically generated for C# JSExport decorated members. */
//! export module dotnetEx {
//! 	export interface VoxelML {
//! 		ClassName: {
//! 			method(a: number): void;
//! 		};
//! 	}
//!
//! 	const VoxelML: VoxelML;
//! }
//!
//! export type dotnetExports = typeof dotnetEx;
//! ```
//!
//! Doc blocks keep the indentation they had in the C# source.

use crate::config::{GeneratorConfig, EXPORT_ATTRIBUTE};
use crate::model::DeclarationModel;
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Render the declaration file. `None` when there is nothing to declare.
pub fn render(model: &DeclarationModel, config: &GeneratorConfig) -> Option<String> {
    if model.is_empty() {
        return None;
    }

    let module = &config.module_name;
    let namespace = &config.namespace;
    let mut out = String::new();

    out.push_str(&format!(
        "/** Automatically generated for C# {EXPORT_ATTRIBUTE} decorated members. */\n"
    ));
    out.push_str(&format!("export module {module} {{\n"));
    out.push_str(&format!("\texport interface {namespace} {{\n"));

    for (class, entry) in model.classes() {
        out.push_str(&format!("\t\t{class}: {{\n"));
        for method in &entry.methods {
            if let Some(ref doc) = method.doc {
                for line in doc.render_lines() {
                    out.push_str(&line);
                    out.push('\n');
                }
            }
            out.push_str(&format!("\t\t\t{}\n", method.signature));
        }
        out.push_str("\t\t};\n");
    }

    out.push_str("\t}\n");
    out.push('\n');
    out.push_str(&format!("\tconst {namespace}: {namespace};\n"));
    out.push_str("}\n");
    out.push('\n');
    out.push_str(&format!("export type {module}Exports = typeof {module};\n"));

    Some(out)
}

/// Write the declaration file into `output_dir`, creating it if needed.
///
/// Returns the written path, or `None` when the model is empty and nothing
/// was written.
pub fn write_declarations(
    model: &DeclarationModel,
    output_dir: &Path,
    config: &GeneratorConfig,
) -> Result<Option<PathBuf>> {
    let Some(contents) = render(model, config) else {
        return Ok(None);
    };

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let path = output_dir.join(config.output_file_name());
    let file =
        File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .with_context(|| format!("failed to write {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("failed to write {}", path.display()))?;

    Ok(Some(path))
}
