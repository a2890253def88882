//! Generator settings shared by the scanner and the writer.

/// Attribute that marks a method for export.
pub const EXPORT_ATTRIBUTE: &str = "JSExport";

/// Extension of scanned source files.
pub const SOURCE_EXTENSION: &str = "cs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Files whose `namespace` line does not mention this are ignored from there on.
    pub namespace: String,
    /// Name of the emitted `export module`.
    pub module_name: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            namespace: "VoxelML".to_string(),
            module_name: "dotnetEx".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Attribute text that marks an exported method, e.g. `[JSExport]`.
    pub fn export_marker(&self) -> String {
        format!("[{EXPORT_ATTRIBUTE}]")
    }

    /// File name of the generated declarations, e.g. `dotnetEx.d.ts`.
    pub fn output_file_name(&self) -> String {
        format!("{}.d.ts", self.module_name)
    }
}
