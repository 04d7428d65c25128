use serde::Deserialize;

/// Layout used when printing enumeration tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum OutputFormat {
    /// Aligned columns with a header line
    Table,
    /// Tab separated, no header
    Plain,
}

#[derive(Debug, Clone)]
pub struct CfgLogging {
    /// EnvFilter directive for stderr output, e.g. "info" or "rrc_core=debug"
    pub level: String,
}

impl Default for CfgLogging {
    fn default() -> Self {
        Self { level: "info".to_string() }
    }
}

#[derive(Debug, Clone)]
pub struct CfgOutput {
    pub format: OutputFormat,
    /// Print number and number string columns
    pub show_numbers: bool,
    /// Print the extension marker of each enumeration
    pub show_ext: bool,
    /// Exit with an error when a lookup hits an out-of-range tag, instead of printing ""
    pub strict: bool,
}

impl Default for CfgOutput {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            show_numbers: true,
            show_ext: false,
            strict: false,
        }
    }
}

/// Configuration of the enumeration lookup tool
#[derive(Debug, Clone, Default)]
pub struct ToolConfig {
    /// Verbose log file, written next to the stderr output
    pub debug_log: Option<String>,
    pub logging: CfgLogging,
    pub output: CfgOutput,
}
