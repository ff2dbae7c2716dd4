//! CLI library components for the rainfall/dengue join.

#![allow(missing_docs)]

pub mod cli;
pub mod commands;
pub mod logging;
pub mod pipeline;
pub mod summary;
pub mod types;
