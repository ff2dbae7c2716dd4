//! Transform core of the rainfall/dengue join.
//!
//! - **mapping**: naming case fields, deriving `ano_mes`, keying rain readings
//! - **aggregate**: per-source reduce-by-key totals
//! - **join**: outer co-group and the completeness filter
//! - **format**: output rows and delimited lines
//! - **runtime**: rayon-backed map / group / combine primitives
//!
//! Everything outside `runtime` is a pure per-record function.

pub mod aggregate;
pub mod format;
pub mod join;
pub mod mapping;
pub mod runtime;

pub use aggregate::{
    KeyedTotals, aggregate_cases, aggregate_rain, case_count, expand_case_values, has_digit,
    key_by_region, round1, sum_reducer,
};
pub use format::{flatten, format_float, format_row};
pub use join::{co_group, is_complete};
pub use mapping::{RainReading, derive_month, rain_to_keyed, to_case_record, year_month};
