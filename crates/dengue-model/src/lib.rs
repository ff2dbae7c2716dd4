//! Data model for the rainfall/dengue monthly join.

pub mod case;
pub mod config;
pub mod error;
pub mod joined;
pub mod key;

pub use case::{ANO_MES, CaseColumn, CaseRecord};
pub use config::{DEFAULT_HEADER, JobConfig};
pub use error::{JoinError, Result};
pub use joined::{JoinedGroup, OUTPUT_COLUMNS, OutputRow, Source};
pub use key::{JoinKey, KEY_SEPARATOR};
