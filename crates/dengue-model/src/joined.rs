//! Co-grouped and flattened join results.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::key::JoinKey;

/// The two inputs of the join.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Rainfall totals.
    Chuvas,
    /// Dengue case totals.
    Dengue,
}

impl Source {
    pub fn name(self) -> &'static str {
        match self {
            Source::Chuvas => "chuvas",
            Source::Dengue => "dengue",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Every value each source contributed under one key.
///
/// After aggregation each list holds at most one value, but nothing here
/// relies on that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinedGroup {
    pub key: JoinKey,
    pub chuvas: Vec<f64>,
    pub dengue: Vec<f64>,
}

impl JoinedGroup {
    pub fn new(key: JoinKey) -> Self {
        Self {
            key,
            chuvas: Vec::new(),
            dengue: Vec::new(),
        }
    }

    pub fn values(&self, source: Source) -> &[f64] {
        match source {
            Source::Chuvas => &self.chuvas,
            Source::Dengue => &self.dengue,
        }
    }

    pub fn values_mut(&mut self, source: Source) -> &mut Vec<f64> {
        match source {
            Source::Chuvas => &mut self.chuvas,
            Source::Dengue => &mut self.dengue,
        }
    }
}

/// One output line before serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRow {
    pub uf: String,
    pub ano: String,
    pub mes: String,
    pub chuva: String,
    pub dengue: String,
}

impl OutputRow {
    /// Fields in output column order.
    pub fn fields(&self) -> [&str; 5] {
        [&self.uf, &self.ano, &self.mes, &self.chuva, &self.dengue]
    }
}

/// Output column names, in order.
pub const OUTPUT_COLUMNS: [&str; 5] = ["UF", "ANO", "MES", "CHUVA", "DENGUE"];
