//! Job configuration.
//!
//! Values come from the built-in defaults, then an optional TOML file, then
//! command-line overrides applied by the caller.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{JoinError, Result};

pub const DEFAULT_HEADER: &str = "UF;ANO;MES;CHUVA;DENGUE";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JobConfig {
    /// Pipe-delimited dengue case file.
    pub cases_path: PathBuf,
    /// Comma-delimited rainfall file.
    pub rain_path: PathBuf,
    /// Output path prefix; shard names are `{prefix}-00000-of-00001{suffix}`.
    pub output_prefix: String,
    pub output_suffix: String,
    pub case_delimiter: char,
    pub rain_delimiter: char,
    pub output_delimiter: char,
    /// Literal first line of every output shard.
    pub header: String,
    /// Header lines skipped at the top of each input file.
    pub skip_header_lines: usize,
    pub shards: usize,
    /// Worker threads; `None` lets the pool pick one per logical CPU.
    pub threads: Option<usize>,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            cases_path: PathBuf::from("casos_dengue.txt"),
            rain_path: PathBuf::from("chuvas.csv"),
            output_prefix: "resultado".to_string(),
            output_suffix: ".csv".to_string(),
            case_delimiter: '|',
            rain_delimiter: ',',
            output_delimiter: ';',
            header: DEFAULT_HEADER.to_string(),
            skip_header_lines: 1,
            shards: 1,
            threads: None,
        }
    }
}

impl JobConfig {
    pub fn from_toml_str(source: &str, path: &Path) -> Result<Self> {
        toml::from_str(source).map_err(|source| JoinError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|e| JoinError::io(path, e))?;
        Self::from_toml_str(&source, path)
    }

    pub fn validate(&self) -> Result<()> {
        if self.shards == 0 {
            return Err(config_error("shards must be at least 1"));
        }
        if self.threads == Some(0) {
            return Err(config_error("threads must be at least 1"));
        }
        if self.cases_path == self.rain_path {
            return Err(config_error(format!(
                "case and rain inputs are the same file: {}",
                self.cases_path.display()
            )));
        }
        if self.output_prefix.is_empty() {
            return Err(config_error("output prefix must not be empty"));
        }
        Ok(())
    }
}

fn config_error(message: impl Into<String>) -> JoinError {
    JoinError::Config {
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_input_layout() {
        let config = JobConfig::default();
        assert_eq!(config.case_delimiter, '|');
        assert_eq!(config.rain_delimiter, ',');
        assert_eq!(config.output_delimiter, ';');
        assert_eq!(config.header, "UF;ANO;MES;CHUVA;DENGUE");
        assert_eq!(config.skip_header_lines, 1);
        assert_eq!(config.shards, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = JobConfig::from_toml_str(
            "rain_path = \"data/chuvas.csv\"\nshards = 3\n",
            Path::new("job.toml"),
        )
        .unwrap();
        assert_eq!(config.rain_path, PathBuf::from("data/chuvas.csv"));
        assert_eq!(config.shards, 3);
        assert_eq!(config.cases_path, PathBuf::from("casos_dengue.txt"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = JobConfig::from_toml_str("delimiter = \";\"\n", Path::new("job.toml"));
        assert!(matches!(err, Err(JoinError::Toml { .. })));
    }

    #[test]
    fn zero_shards_is_invalid() {
        let config = JobConfig {
            shards: 0,
            ..JobConfig::default()
        };
        assert!(matches!(config.validate(), Err(JoinError::Config { .. })));
    }

    #[test]
    fn same_input_twice_is_invalid() {
        let config = JobConfig {
            rain_path: PathBuf::from("casos_dengue.txt"),
            ..JobConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
