//! Input side of the join: reading source files and splitting lines.

pub mod parse;
pub mod text;

pub use parse::parse;
pub use text::{SourceLine, read_lines};
