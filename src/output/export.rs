use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::report::PortfolioReport;
use crate::scoring::RatedApplication;

/// Document written by [`save_results`]
#[derive(Debug, Serialize)]
pub struct ExportDocument<'a> {
    pub results: &'a [RatedApplication],
    pub report: &'a PortfolioReport,
}

/// Save rated results and the portfolio report to a JSON file atomically
///
/// The parent directory is created when missing. A failed write leaves any
/// previous file at `path` untouched.
pub fn save_results(
    path: &Path,
    results: &[RatedApplication],
    report: &PortfolioReport,
) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    let document = ExportDocument { results, report };
    serde_json::to_writer_pretty(&mut file, &document)
        .context("Failed to serialize rating results")?;

    file.commit()
        .with_context(|| format!("Failed to save results to {}", path.display()))?;

    tracing::info!(
        "Exported {} results to {}",
        results.len(),
        path.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::build_report;
    use crate::scoring::rate_applications;
    use serde_json::{json, Value};

    fn sample() -> Vec<RatedApplication> {
        let doc = json!({ "Applications": {
            "APP1": { "businessApplicationName": "Payroll", "portfolio": "Finance" },
            "APP2": { "dataClassification": "Red - Highly Confidential" }
        }});
        rate_applications(&doc).unwrap()
    }

    #[test]
    fn test_save_results_writes_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        let results = sample();
        let report = build_report(&results, 5);

        save_results(&path, &results, &report).unwrap();

        let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let exported = written["results"].as_array().unwrap();
        assert_eq!(exported.len(), 2);
        assert_eq!(exported[0]["app_id"], "APP2");
        assert_eq!(exported[0]["total_score"], 50);
        assert_eq!(exported[0]["rating"], "Low");
        assert_eq!(
            exported[0]["score_breakdown"]["impact_factors"][0]["factor"],
            "Data Classification"
        );
        assert_eq!(exported[1]["app_name"], "Payroll");
        assert_eq!(written["report"]["total_applications"], 2);
        assert_eq!(written["report"]["top_risks"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_save_results_creates_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out").join("results.json");
        let report = build_report(&[], 5);

        save_results(&path, &[], &report).unwrap();

        let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["results"], json!([]));
        assert_eq!(written["report"]["total_applications"], 0);
    }

    #[test]
    fn test_save_results_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        fs::write(&path, "stale").unwrap();

        let results = sample();
        let report = build_report(&results, 1);
        save_results(&path, &results, &report).unwrap();

        let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["report"]["top_risks"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_save_results_into_file_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let path = blocker.join("results.json");

        let report = build_report(&[], 5);
        assert!(save_results(&path, &[], &report).is_err());
    }
}
