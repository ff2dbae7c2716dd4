//! Job pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: read both input files, skipping their header lines
//! 2. **Map**: parse lines, derive `ano_mes`, key rain readings
//! 3. **Aggregate**: total each source per region-month
//! 4. **Join**: co-group by key, keep keys present on both sides, format rows
//! 5. **Output**: write the sharded result files
//!
//! Each stage takes the output of the previous stage and returns typed results.
//! Record-level failures carry the file and line they came from.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use dengue_ingest::{SourceLine, parse, read_lines};
use dengue_model::{CaseColumn, CaseRecord, JobConfig, JoinKey};
use dengue_report::{ShardSpec, write_shards};
use dengue_transform::runtime::par_map;
use dengue_transform::{
    KeyedTotals, RainReading, aggregate_cases, aggregate_rain, case_count, co_group, derive_month,
    flatten, format_row, has_digit, is_complete, to_case_record,
};

// ============================================================================
// Stage 1: Ingest
// ============================================================================

/// Raw lines of both inputs.
#[derive(Debug)]
pub struct IngestResult {
    pub case_lines: Vec<SourceLine>,
    pub rain_lines: Vec<SourceLine>,
}

/// Reads both input files.
pub fn ingest(config: &JobConfig) -> Result<IngestResult> {
    let case_lines = read_lines(&config.cases_path, config.skip_header_lines)
        .with_context(|| format!("read case file {}", config.cases_path.display()))?;
    let rain_lines = read_lines(&config.rain_path, config.skip_header_lines)
        .with_context(|| format!("read rain file {}", config.rain_path.display()))?;
    Ok(IngestResult {
        case_lines,
        rain_lines,
    })
}

// ============================================================================
// Stage 2: Map
// ============================================================================

/// Case records with their derived month.
#[derive(Debug)]
pub struct MappedCases {
    pub records: Vec<CaseRecord>,
    /// Records whose `casos` field had no digit and counts as zero.
    pub zeroed_counts: usize,
}

/// Keyed rainfall contributions.
#[derive(Debug)]
pub struct MappedRain {
    pub readings: Vec<(JoinKey, f64)>,
    /// Readings below zero that were clamped.
    pub negative_readings: usize,
}

fn line_context(path: &Path, number: usize) -> String {
    format!("{}:{number}", path.display())
}

/// Checks every field aggregation will need so failures keep their line.
fn case_line(text: &str, delimiter: char) -> dengue_model::Result<(CaseRecord, bool)> {
    let record = derive_month(to_case_record(parse(text, delimiter)))?;
    record.require(CaseColumn::Uf)?;
    let zeroed = {
        let casos = record.require(CaseColumn::Casos)?;
        case_count(casos)?;
        !has_digit(casos)
    };
    Ok((record, zeroed))
}

fn rain_line(text: &str, delimiter: char) -> dengue_model::Result<((JoinKey, f64), bool)> {
    let fields = parse(text, delimiter);
    let reading = RainReading::from_fields(&fields)?;
    Ok((reading.keyed(), reading.is_negative()))
}

/// Parses case lines into records keyed for aggregation.
pub fn map_cases(lines: Vec<SourceLine>, path: &Path, delimiter: char) -> Result<MappedCases> {
    let mapped = par_map(lines, |line| {
        case_line(&line.text, delimiter).with_context(|| line_context(path, line.number))
    })?;
    let zeroed_counts = mapped.iter().filter(|(_, zeroed)| *zeroed).count();
    let records = mapped.into_iter().map(|(record, _)| record).collect();
    Ok(MappedCases {
        records,
        zeroed_counts,
    })
}

/// Parses rain lines into `(uf-ano-mes, mm)` pairs.
pub fn map_rain(lines: Vec<SourceLine>, path: &Path, delimiter: char) -> Result<MappedRain> {
    let mapped = par_map(lines, |line| {
        rain_line(&line.text, delimiter).with_context(|| line_context(path, line.number))
    })?;
    let negative_readings = mapped.iter().filter(|(_, negative)| *negative).count();
    let readings = mapped.into_iter().map(|(reading, _)| reading).collect();
    Ok(MappedRain {
        readings,
        negative_readings,
    })
}

// ============================================================================
// Stage 3: Aggregate
// ============================================================================

/// Per-source totals keyed by region-month.
#[derive(Debug)]
pub struct Aggregated {
    pub chuvas: KeyedTotals,
    pub dengue: KeyedTotals,
}

pub fn aggregate(cases: Vec<CaseRecord>, readings: Vec<(JoinKey, f64)>) -> Result<Aggregated> {
    let dengue = aggregate_cases(cases).context("aggregate case counts")?;
    let chuvas = aggregate_rain(readings);
    Ok(Aggregated { chuvas, dengue })
}

// ============================================================================
// Stage 4: Join
// ============================================================================

/// Formatted output lines plus key accounting for the summary.
#[derive(Debug)]
pub struct JoinOutcome {
    pub rows: Vec<String>,
    pub rain_keys: usize,
    pub case_keys: usize,
    pub rain_only_keys: usize,
    pub case_only_keys: usize,
}

/// Co-groups both totals and formats the keys present on both sides.
pub fn join(aggregated: Aggregated, delimiter: char) -> Result<JoinOutcome> {
    let rain_keys = aggregated.chuvas.len();
    let case_keys = aggregated.dengue.len();
    let groups = co_group(aggregated.chuvas, aggregated.dengue);
    let rain_only_keys = groups.iter().filter(|g| g.dengue.is_empty()).count();
    let case_only_keys = groups.iter().filter(|g| g.chuvas.is_empty()).count();
    let rows = groups
        .iter()
        .filter(|group| is_complete(group))
        .map(|group| {
            flatten(group)
                .map(|row| format_row(&row, delimiter))
                .with_context(|| format!("format joined key {}", group.key))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(JoinOutcome {
        rows,
        rain_keys,
        case_keys,
        rain_only_keys,
        case_only_keys,
    })
}

// ============================================================================
// Stage 5: Output
// ============================================================================

/// Writes the shards, or nothing on a dry run.
pub fn output(rows: &[String], spec: &ShardSpec, dry_run: bool) -> Result<Vec<PathBuf>> {
    if dry_run {
        info!(
            row_count = rows.len(),
            shard_count = spec.count,
            "dry run, skipping output"
        );
        return Ok(Vec::new());
    }
    write_shards(rows, spec).with_context(|| format!("write output shards {}", spec.prefix))
}
