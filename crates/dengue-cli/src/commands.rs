use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{debug, info, info_span};

use dengue_model::{CaseColumn, JobConfig, OUTPUT_COLUMNS};
use dengue_report::{RunReport, RunStats, ShardSpec, write_run_report};
use dengue_transform::runtime::{configure_threads, worker_count};

use crate::cli::RunArgs;
use crate::pipeline::{IngestResult, aggregate, ingest, join, map_cases, map_rain, output};
use crate::summary::apply_table_style;
use crate::types::JobResult;

const RAIN_COLUMNS: [&str; 3] = ["data", "mm", "uf"];

pub fn run_schema() -> Result<()> {
    let config = JobConfig::default();
    print_layout(
        &format!("Case file ({:?}-delimited)", config.case_delimiter),
        CaseColumn::ALL.into_iter().map(CaseColumn::name),
    );
    print_layout(
        &format!("Rain file ({:?}-delimited)", config.rain_delimiter),
        RAIN_COLUMNS,
    );
    print_layout(
        &format!("Output ({:?}-delimited)", config.output_delimiter),
        OUTPUT_COLUMNS,
    );
    Ok(())
}

fn print_layout<'a>(title: &str, columns: impl IntoIterator<Item = &'a str>) {
    let mut table = Table::new();
    table.set_header(vec!["#", "Column"]);
    apply_table_style(&mut table);
    for (position, name) in columns.into_iter().enumerate() {
        table.add_row(vec![position.to_string(), name.to_string()]);
    }
    println!("{title}");
    println!("{table}");
}

/// Built-in defaults, then the TOML file, then flags.
pub fn resolve_config(args: &RunArgs) -> Result<JobConfig> {
    let mut config = match &args.config {
        Some(path) => JobConfig::from_toml_file(path)
            .with_context(|| format!("load job config {}", path.display()))?,
        None => JobConfig::default(),
    };
    if let Some(path) = &args.cases {
        config.cases_path = path.clone();
    }
    if let Some(path) = &args.rain {
        config.rain_path = path.clone();
    }
    if let Some(prefix) = &args.output_prefix {
        config.output_prefix = prefix.clone();
    }
    if let Some(shards) = args.shards {
        config.shards = shards;
    }
    if args.threads.is_some() {
        config.threads = args.threads;
    }
    config.validate().context("validate job config")?;
    Ok(config)
}

pub fn run_job(args: &RunArgs) -> Result<JobResult> {
    let config = resolve_config(args)?;
    let report = execute(config, args.dry_run)?;
    if let Some(path) = &args.report_json {
        write_run_report(path, &report)
            .with_context(|| format!("write run report {}", path.display()))?;
    }
    Ok(JobResult {
        report,
        report_path: args.report_json.clone(),
    })
}

/// Runs every stage for an already resolved configuration.
pub fn execute(config: JobConfig, dry_run: bool) -> Result<RunReport> {
    if !configure_threads(config.threads) {
        debug!("worker pool already initialized");
    }
    let job_span = info_span!(
        "job",
        cases = %config.cases_path.display(),
        rain = %config.rain_path.display(),
        dry_run
    );
    let _job_guard = job_span.enter();
    let job_start = Instant::now();
    info!(workers = worker_count(), "starting job");

    // =========================================================================
    // Stage 1: Ingest
    // =========================================================================
    let ingest_start = Instant::now();
    let IngestResult {
        case_lines,
        rain_lines,
    } = info_span!("ingest").in_scope(|| ingest(&config))?;
    let mut stats = RunStats {
        case_lines: case_lines.len(),
        rain_lines: rain_lines.len(),
        ..RunStats::default()
    };
    info!(
        case_lines = stats.case_lines,
        rain_lines = stats.rain_lines,
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    // =========================================================================
    // Stage 2: Map
    // =========================================================================
    let map_start = Instant::now();
    let (cases, rain) = info_span!("map").in_scope(|| -> Result<_> {
        let cases = map_cases(case_lines, &config.cases_path, config.case_delimiter)?;
        let rain = map_rain(rain_lines, &config.rain_path, config.rain_delimiter)?;
        Ok((cases, rain))
    })?;
    stats.zeroed_case_counts = cases.zeroed_counts;
    stats.negative_rain_readings = rain.negative_readings;
    info!(
        zeroed_case_counts = stats.zeroed_case_counts,
        negative_rain_readings = stats.negative_rain_readings,
        duration_ms = map_start.elapsed().as_millis(),
        "map complete"
    );

    // =========================================================================
    // Stage 3: Aggregate
    // =========================================================================
    let aggregate_start = Instant::now();
    let aggregated =
        info_span!("aggregate").in_scope(|| aggregate(cases.records, rain.readings))?;
    info!(
        case_keys = aggregated.dengue.len(),
        rain_keys = aggregated.chuvas.len(),
        duration_ms = aggregate_start.elapsed().as_millis(),
        "aggregate complete"
    );

    // =========================================================================
    // Stage 4: Join
    // =========================================================================
    let join_start = Instant::now();
    let joined = info_span!("join").in_scope(|| join(aggregated, config.output_delimiter))?;
    stats.case_keys = joined.case_keys;
    stats.rain_keys = joined.rain_keys;
    stats.joined_keys = joined.rows.len();
    stats.case_only_keys = joined.case_only_keys;
    stats.rain_only_keys = joined.rain_only_keys;
    info!(
        joined_keys = stats.joined_keys,
        dropped_keys = stats.dropped_keys(),
        duration_ms = join_start.elapsed().as_millis(),
        "join complete"
    );

    // =========================================================================
    // Stage 5: Output
    // =========================================================================
    let output_start = Instant::now();
    let spec = ShardSpec::from_config(&config);
    let outputs = info_span!("output", prefix = %spec.prefix)
        .in_scope(|| output(&joined.rows, &spec, dry_run))?;
    info!(
        file_count = outputs.len(),
        duration_ms = output_start.elapsed().as_millis(),
        "output complete"
    );

    stats.duration_ms = job_start.elapsed().as_millis();
    info!(duration_ms = stats.duration_ms, "job complete");
    Ok(RunReport::new(config, stats, outputs, dry_run))
}
