//! JSON report files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Local};
use tracing::info;

use crate::error::{Result, ShopcheckError};

use super::CheckSuiteReport;

/// File name for a suite report, e.g. `admin_test_report_20261018_142501.json`.
pub fn report_file_name(suite: &str, timestamp: &DateTime<Local>) -> String {
    format!(
        "{}_test_report_{}.json",
        suite,
        timestamp.format("%Y%m%d_%H%M%S")
    )
}

/// Write the report into `dir` and return the file path.
pub fn write_report(report: &CheckSuiteReport, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(report_file_name(&report.suite, &report.summary.timestamp));
    write_json(report, dir, &path).map_err(|e| ShopcheckError::ReportWrite {
        path: path.clone(),
        message: format!("{:#}", e),
    })?;

    info!(path = %path.display(), "Report saved");
    Ok(path)
}

fn write_json(report: &CheckSuiteReport, dir: &Path, path: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let json = report.to_json_pretty().context("serializing report")?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
