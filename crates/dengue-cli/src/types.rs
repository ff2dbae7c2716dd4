use std::path::PathBuf;

use dengue_report::RunReport;

#[derive(Debug)]
pub struct JobResult {
    pub report: RunReport,
    /// Where the JSON copy of `report` was written, if requested.
    pub report_path: Option<PathBuf>,
}
