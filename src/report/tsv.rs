use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::pipeline::batch::ClassOutcome;
use crate::report::{ReportSink, sanitize_cell};

/// Writes `<out>/<class>/<class>.tsv`: student identifier and report text.
#[derive(Debug, Clone)]
pub struct TsvReportWriter {
    out_dir: PathBuf,
    written: Vec<PathBuf>,
}

impl TsvReportWriter {
    pub fn new(out_dir: &Path) -> Self {
        Self {
            out_dir: out_dir.to_path_buf(),
            written: Vec::new(),
        }
    }

    pub fn class_path(&self, class_id: &str) -> PathBuf {
        self.out_dir.join(class_id).join(format!("{class_id}.tsv"))
    }

    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl ReportSink for TsvReportWriter {
    fn write_class(&mut self, outcome: &ClassOutcome) -> std::io::Result<()> {
        let path = self.class_path(&outcome.class_id);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        write_class_tsv(outcome, &path)?;
        tracing::info!(path = %path.display(), "class report written");
        self.written.push(path);
        Ok(())
    }
}

fn write_class_tsv(outcome: &ClassOutcome, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    for entry in &outcome.entries {
        writeln!(
            w,
            "{}\t{}",
            sanitize_cell(&entry.id.to_string()),
            sanitize_cell(&entry.report.text)
        )?;
    }
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/tsv.rs"]
mod tests;
