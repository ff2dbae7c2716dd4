use std::fs;
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use dengue_model::{JobConfig, JoinError, Result};

/// Counters collected while the job runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    pub case_lines: usize,
    pub rain_lines: usize,
    /// Region-months with at least one case record.
    pub case_keys: usize,
    /// Region-months with at least one rainfall reading.
    pub rain_keys: usize,
    pub joined_keys: usize,
    pub case_only_keys: usize,
    pub rain_only_keys: usize,
    pub negative_rain_readings: usize,
    pub zeroed_case_counts: usize,
    pub duration_ms: u128,
}

impl RunStats {
    pub fn dropped_keys(&self) -> usize {
        self.case_only_keys + self.rain_only_keys
    }
}

/// Machine-readable record of one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub generated_at: String,
    pub dry_run: bool,
    pub config: JobConfig,
    pub stats: RunStats,
    pub outputs: Vec<PathBuf>,
}

impl RunReport {
    pub fn new(config: JobConfig, stats: RunStats, outputs: Vec<PathBuf>, dry_run: bool) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            dry_run,
            config,
            stats,
            outputs,
        }
    }
}

/// Writes the report as pretty-printed JSON.
pub fn write_run_report(path: &Path, report: &RunReport) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| JoinError::io(parent, e))?;
    }
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| JoinError::io(path, std::io::Error::other(e)))?;
    fs::write(path, json).map_err(|e| JoinError::io(path, e))
}
