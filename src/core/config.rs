use crate::core::AppError;
use clap::ValueEnum;
use serde::Deserialize;
use std::fs;
use std::path::Path;

include!(concat!(env!("OUT_DIR"), "/config_embedded.rs"));

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub output: OutputFormat,
    pub pretty_json: bool,
    pub log_level: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[value(name = "text")]
    Text,
    #[value(name = "json")]
    Json,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("Invalid default config")
    }
}

impl Config {
    /// Loads `config.toml` from the working directory, falling back to the
    /// configuration embedded at build time.
    pub fn load() -> Result<Self, AppError> {
        let config_path = Path::new("config.toml");
        if config_path.exists() {
            Self::load_from(config_path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, AppError> {
        let contents = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read config file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| AppError::Config(format!("Failed to parse config file: {e}")))
    }

    pub fn update_output(&mut self, output: OutputFormat) {
        self.output = output;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_parses() {
        let config = Config::default();
        assert_eq!(config.output, OutputFormat::Text);
        assert!(config.pretty_json);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "output = \"json\"\npretty_json = false\nlog_level = \"debug\"").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.output, OutputFormat::Json);
        assert!(!config.pretty_json);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_load_from_invalid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "output = \"yaml\"").unwrap();

        match Config::load_from(file.path()) {
            Err(AppError::Config(msg)) => assert!(msg.contains("Failed to parse")),
            other => panic!("Expected a config error, got {other:?}"),
        }
    }
}
