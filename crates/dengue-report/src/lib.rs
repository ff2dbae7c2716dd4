//! Report generation for the rainfall/dengue join.
//!
//! - **shards**: header-prefixed, delimiter-separated output files
//! - **run_report**: JSON summary of a run

mod run_report;
mod shards;

pub use run_report::{RunReport, RunStats, write_run_report};
pub use shards::{ShardSpec, write_shards};
