use std::path::Path;

use serde::Serialize;

use crate::pipeline::batch::ClassOutcome;

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub tool: &'static str,
    pub version: &'static str,
    pub seed: u64,
    pub classes: Vec<ClassSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassSummary {
    pub class: String,
    pub source: String,
    pub variant: Option<&'static str>,
    pub rows: usize,
    pub reports: usize,
    pub duplicates: Vec<String>,
    pub invalid: Vec<InvalidRecordSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InvalidRecordSummary {
    pub line: usize,
    pub message: String,
}

pub fn build_summary(seed: u64, outcomes: &[ClassOutcome]) -> RunSummary {
    RunSummary {
        tool: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        seed,
        classes: outcomes.iter().map(class_summary).collect(),
    }
}

fn class_summary(outcome: &ClassOutcome) -> ClassSummary {
    ClassSummary {
        class: outcome.class_id.clone(),
        source: outcome.path.display().to_string(),
        variant: outcome.variant.map(|v| v.name()),
        rows: outcome.rows,
        reports: outcome.entries.len(),
        duplicates: outcome.duplicates.iter().map(|d| d.to_string()).collect(),
        invalid: outcome
            .invalid
            .iter()
            .map(|e| InvalidRecordSummary {
                line: e.line(),
                message: e.to_string(),
            })
            .collect(),
        failure: outcome.failure.clone(),
    }
}

pub fn render_summary_json(summary: &RunSummary) -> serde_json::Result<String> {
    serde_json::to_string_pretty(summary)
}

pub fn write_summary(summary: &RunSummary, out_dir: &Path) -> std::io::Result<std::path::PathBuf> {
    std::fs::create_dir_all(out_dir)?;
    let path = out_dir.join("summary.json");
    let json = render_summary_json(summary).map_err(std::io::Error::other)?;
    std::fs::write(&path, json + "\n")?;
    Ok(path)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;
