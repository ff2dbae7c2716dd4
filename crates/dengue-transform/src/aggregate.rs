//! Reduce-by-key totals for both sources.

use std::collections::BTreeMap;

use tracing::trace;

use dengue_model::{CaseColumn, CaseRecord, JoinError, JoinKey, Result};

use crate::runtime::{combine_per_key, group_by_key, par_flat_map, par_map};

/// Keyed totals of one source, ordered by key.
pub type KeyedTotals = BTreeMap<JoinKey, f64>;

/// Sum of every contribution under one key.
pub fn sum_reducer(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Rounds to one decimal place, ties to even on the exact binary value.
pub fn round1(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.1}").parse().unwrap_or(value)
}

/// True when `value` has at least one ASCII digit.
pub fn has_digit(value: &str) -> bool {
    value.bytes().any(|b| b.is_ascii_digit())
}

/// Numeric case count; values without any digit count as zero.
pub fn case_count(value: &str) -> Result<f64> {
    if !has_digit(value) {
        trace!(value, "case count without digits treated as zero");
        return Ok(0.0);
    }
    value
        .trim()
        .parse::<f64>()
        .map_err(|source| JoinError::InvalidCaseCount {
            value: value.to_string(),
            source,
        })
}

/// Keys a case record by its region only.
pub fn key_by_region(record: CaseRecord) -> Result<(String, CaseRecord)> {
    let region = record.require(CaseColumn::Uf)?.to_string();
    Ok((region, record))
}

/// Re-keys every record of a region group by `{region}-{ano_mes}` and
/// extracts its case count.
pub fn expand_case_values(region: &str, records: &[CaseRecord]) -> Result<Vec<(JoinKey, f64)>> {
    records
        .iter()
        .map(|record| {
            let key = JoinKey::new(region, record.require_ano_mes()?);
            let value = case_count(record.require(CaseColumn::Casos)?)?;
            Ok((key, value))
        })
        .collect()
}

/// Total rainfall per region-month, rounded to one decimal after summing.
pub fn aggregate_rain(readings: Vec<(JoinKey, f64)>) -> KeyedTotals {
    combine_per_key(readings, sum_reducer)
        .into_iter()
        .map(|(key, total)| (key, round1(total)))
        .collect()
}

/// Total cases per region-month.
///
/// Records are first grouped by region, then each region group is expanded
/// into month-keyed counts, which are summed without rounding.
pub fn aggregate_cases(records: Vec<CaseRecord>) -> Result<KeyedTotals> {
    let by_region = group_by_key(par_map(records, key_by_region)?);
    let expanded = par_flat_map(by_region.into_iter().collect(), |(region, records)| {
        expand_case_values(&region, &records)
    })?;
    Ok(combine_per_key(expanded, sum_reducer))
}
