//! Line-delimited text input.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use dengue_model::{JoinError, Result};

/// One input line with its 1-based position in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    pub number: usize,
    pub text: String,
}

/// Reads every line of `path` after the first `skip_header_lines`.
///
/// Both `\n` and `\r\n` terminators are accepted and stripped.
pub fn read_lines(path: &Path, skip_header_lines: usize) -> Result<Vec<SourceLine>> {
    let file = File::open(path).map_err(|e| JoinError::io(path, e))?;
    let reader = BufReader::new(file);
    let mut lines = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let text = line.map_err(|e| JoinError::io(path, e))?;
        if idx < skip_header_lines {
            continue;
        }
        lines.push(SourceLine {
            number: idx + 1,
            text,
        });
    }
    debug!(
        path = %path.display(),
        line_count = lines.len(),
        skipped = skip_header_lines,
        "read input lines"
    );
    Ok(lines)
}
