use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use dengue_model::{JobConfig, JoinError, Result};

/// Where and how output shards are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShardSpec {
    pub prefix: String,
    pub suffix: String,
    pub count: usize,
    pub header: String,
}

impl ShardSpec {
    pub fn from_config(config: &JobConfig) -> Self {
        Self {
            prefix: config.output_prefix.clone(),
            suffix: config.output_suffix.clone(),
            count: config.shards.max(1),
            header: config.header.clone(),
        }
    }

    /// `{prefix}-{index:05}-of-{count:05}{suffix}`.
    pub fn shard_path(&self, index: usize) -> PathBuf {
        PathBuf::from(format!(
            "{}-{index:05}-of-{:05}{}",
            self.prefix, self.count, self.suffix
        ))
    }

    /// Contiguous, key-ordered slices of `lines`, one per shard. Trailing
    /// shards are empty when there are fewer lines than shards.
    fn split<'a>(&self, lines: &'a [String]) -> Vec<&'a [String]> {
        let count = self.count.max(1);
        let per_shard = lines.len().div_ceil(count).max(1);
        (0..count)
            .map(|index| {
                let start = (index * per_shard).min(lines.len());
                let end = (start + per_shard).min(lines.len());
                &lines[start..end]
            })
            .collect()
    }
}

fn write_shard(path: &Path, header: &str, lines: &[String]) -> Result<NamedTempFile> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&dir).map_err(|e| JoinError::io(&dir, e))?;
    let file = NamedTempFile::new_in(&dir).map_err(|e| JoinError::io(&dir, e))?;
    {
        let mut writer = BufWriter::new(file.as_file());
        writeln!(writer, "{header}").map_err(|e| JoinError::io(path, e))?;
        for line in lines {
            writeln!(writer, "{line}").map_err(|e| JoinError::io(path, e))?;
        }
        writer.flush().map_err(|e| JoinError::io(path, e))?;
    }
    Ok(file)
}

/// Writes `lines` across the configured shards, each starting with the header.
///
/// Shards are staged as temporary files next to their destination and only
/// moved into place once every shard has been written, so a failure leaves
/// no partial output behind.
pub fn write_shards(lines: &[String], spec: &ShardSpec) -> Result<Vec<PathBuf>> {
    let mut staged = Vec::with_capacity(spec.count);
    for (index, chunk) in spec.split(lines).into_iter().enumerate() {
        let path = spec.shard_path(index);
        let file = write_shard(&path, &spec.header, chunk)?;
        debug!(path = %path.display(), rows = chunk.len(), "staged shard");
        staged.push((path, file));
    }

    let mut written = Vec::with_capacity(staged.len());
    for (path, file) in staged {
        file.persist(&path)
            .map_err(|e| JoinError::io(&path, e.error))?;
        written.push(path);
    }
    info!(
        shard_count = written.len(),
        row_count = lines.len(),
        "wrote output shards"
    );
    Ok(written)
}
