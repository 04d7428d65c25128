use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use toml::Value;

use super::tool_config::{CfgLogging, CfgOutput, OutputFormat, ToolConfig};

/// Build `ToolConfig` from a TOML configuration string
pub fn from_toml_str(toml_str: &str) -> Result<ToolConfig, Box<dyn std::error::Error>> {
    let root: TomlConfigRoot = toml::from_str(toml_str)?;

    // Various sanity checks
    let expected_config_version = "0.1";
    if !root.config_version.eq(expected_config_version) {
        return Err(format!(
            "Unrecognized config_version: {}, expect {}",
            root.config_version, expected_config_version
        )
        .into());
    }
    if !root.extra.is_empty() {
        return Err(format!("Unrecognized top-level fields: {:?}", sorted_keys(&root.extra)).into());
    }
    if let Some(ref logging) = root.logging {
        if !logging.extra.is_empty() {
            return Err(format!("Unrecognized fields in logging: {:?}", sorted_keys(&logging.extra)).into());
        }
    }
    if let Some(ref output) = root.output {
        if !output.extra.is_empty() {
            return Err(format!("Unrecognized fields in output: {:?}", sorted_keys(&output.extra)).into());
        }
    }

    let mut cfg = ToolConfig {
        debug_log: root.debug_log,
        logging: CfgLogging::default(),
        output: CfgOutput::default(),
    };

    if let Some(logging) = root.logging {
        if let Some(level) = logging.level {
            if level.trim().is_empty() {
                return Err("logging.level must not be empty".into());
            }
            cfg.logging.level = level;
        }
    }

    if let Some(output) = root.output {
        apply_output_patch(&mut cfg.output, output);
    }

    Ok(cfg)
}

/// Build `ToolConfig` from any reader.
pub fn from_reader<R: Read>(reader: R) -> Result<ToolConfig, Box<dyn std::error::Error>> {
    let mut contents = String::new();
    let mut reader = BufReader::new(reader);
    reader.read_to_string(&mut contents)?;
    from_toml_str(&contents)
}

/// Build `ToolConfig` from a file path.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<ToolConfig, Box<dyn std::error::Error>> {
    let f = File::open(path)?;
    let r = BufReader::new(f);
    let cfg = from_reader(r)?;
    Ok(cfg)
}

fn apply_output_patch(dst: &mut CfgOutput, src: OutputDto) {
    if let Some(v) = src.format {
        dst.format = v;
    }
    if let Some(v) = src.show_numbers {
        dst.show_numbers = v;
    }
    if let Some(v) = src.show_ext {
        dst.show_ext = v;
    }
    if let Some(v) = src.strict {
        dst.strict = v;
    }
}

fn sorted_keys(map: &HashMap<String, Value>) -> Vec<&str> {
    let mut v: Vec<&str> = map.keys().map(|s| s.as_str()).collect();
    v.sort_unstable();
    v
}

/// ----------------------- DTOs for input shape -----------------------

#[derive(Deserialize)]
struct TomlConfigRoot {
    config_version: String,
    debug_log: Option<String>,

    #[serde(default)]
    logging: Option<LoggingDto>,

    #[serde(default)]
    output: Option<OutputDto>,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

#[derive(Default, Deserialize)]
struct LoggingDto {
    pub level: Option<String>,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

#[derive(Default, Deserialize)]
struct OutputDto {
    pub format: Option<OutputFormat>,
    pub show_numbers: Option<bool>,
    pub show_ext: Option<bool>,
    pub strict: Option<bool>,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config() {
        let cfg = from_toml_str(
            r#"
            config_version = "0.1"
            debug_log = "/tmp/rrc-enum-tool.log"

            [logging]
            level = "rrc_core=debug"

            [output]
            format = "Plain"
            show_numbers = false
            show_ext = true
            strict = true
            "#,
        )
        .unwrap();

        assert_eq!(cfg.debug_log.as_deref(), Some("/tmp/rrc-enum-tool.log"));
        assert_eq!(cfg.logging.level, "rrc_core=debug");
        assert_eq!(cfg.output.format, OutputFormat::Plain);
        assert!(!cfg.output.show_numbers);
        assert!(cfg.output.show_ext);
        assert!(cfg.output.strict);
    }

    #[test]
    fn test_defaults() {
        let cfg = from_toml_str("config_version = \"0.1\"").unwrap();
        assert_eq!(cfg.debug_log, None);
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.output.format, OutputFormat::Table);
        assert!(cfg.output.show_numbers);
        assert!(!cfg.output.strict);
    }

    #[test]
    fn test_rejects_bad_input() {
        let err = from_toml_str("config_version = \"0.5\"").unwrap_err();
        assert_eq!(err.to_string(), "Unrecognized config_version: 0.5, expect 0.1");

        let err = from_toml_str("config_version = \"0.1\"\nverbose = true\nalpha = 1").unwrap_err();
        assert_eq!(err.to_string(), "Unrecognized top-level fields: [\"alpha\", \"verbose\"]");

        let err = from_toml_str("config_version = \"0.1\"\n[output]\nshow_number = true").unwrap_err();
        assert_eq!(err.to_string(), "Unrecognized fields in output: [\"show_number\"]");

        let err = from_toml_str("config_version = \"0.1\"\n[logging]\nlevel = \" \"").unwrap_err();
        assert_eq!(err.to_string(), "logging.level must not be empty");

        assert!(from_toml_str("config_version = \"0.1\"\n[output]\nformat = \"Json\"").is_err());
    }

    #[test]
    fn test_from_reader() {
        let input = "config_version = \"0.1\"\n[output]\nshow_ext = true\n";
        let cfg = from_reader(input.as_bytes()).unwrap();
        assert!(cfg.output.show_ext);
    }
}
