use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{JoinError, Result};

/// Separator between the parts of a join key and of a date.
pub const KEY_SEPARATOR: char = '-';

/// Region-month key shared by both sources, e.g. `CE-2015-11`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JoinKey(String);

impl JoinKey {
    /// Builds `{uf}-{ano_mes}`. Both sources go through here so that equal
    /// region-months produce equal keys.
    pub fn new(uf: &str, ano_mes: &str) -> Self {
        Self(format!("{uf}{KEY_SEPARATOR}{ano_mes}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Splits the key back into `(uf, ano, mes)`.
    pub fn parts(&self) -> Result<(&str, &str, &str)> {
        let mut parts = self.0.split(KEY_SEPARATOR);
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(uf), Some(ano), Some(mes), None) => Ok((uf, ano, mes)),
            _ => Err(JoinError::MalformedKey {
                key: self.0.clone(),
            }),
        }
    }
}

impl fmt::Display for JoinKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for JoinKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
