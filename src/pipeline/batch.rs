use std::collections::HashSet;
use std::path::{Path, PathBuf};

use rand::Rng;

use crate::input::record::{RecordError, StudentId, parse_record};
use crate::input::{ClassFile, class_id_for, load_class_file};
use crate::model::thresholds::{RoutingTable, RuleVariant};
use crate::pipeline::RunError;
use crate::pipeline::accumulate::{StudentReport, assemble};
use crate::pipeline::rules::CommentEngine;
use crate::report::ReportSink;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentEntry {
    pub id: StudentId,
    pub report: StudentReport,
}

#[derive(Debug, Clone, Default)]
pub struct ClassOutcome {
    pub class_id: String,
    pub path: PathBuf,
    pub variant: Option<RuleVariant>,
    pub rows: usize,
    /// Reports in input order, at most one per student.
    pub entries: Vec<StudentEntry>,
    pub invalid: Vec<RecordError>,
    pub duplicates: Vec<StudentId>,
    /// Set when the file could not be read as a class at all.
    pub failure: Option<String>,
}

impl ClassOutcome {
    fn failed(path: &Path, reason: String) -> Self {
        Self {
            class_id: class_id_for(path),
            path: path.to_path_buf(),
            failure: Some(reason),
            ..Self::default()
        }
    }
}

pub fn process_class<R: Rng + ?Sized>(
    class: &ClassFile,
    engine: &CommentEngine<'_>,
    routing: &RoutingTable,
    rng: &mut R,
) -> Result<ClassOutcome, RunError> {
    let variant = routing.variant_for(&class.class_id);
    match variant {
        Some(v) => tracing::info!(class = %class.class_id, variant = v.name(), "final-mark rules selected"),
        None => tracing::info!(
            class = %class.class_id,
            "no final-mark rule matches class; band comments skipped"
        ),
    }

    let mut outcome = ClassOutcome {
        class_id: class.class_id.clone(),
        path: class.path.clone(),
        variant,
        rows: class.table.rows.len(),
        ..ClassOutcome::default()
    };
    let mut seen: HashSet<StudentId> = HashSet::new();

    for row in &class.table.rows {
        let record = match parse_record(&class.layout, row) {
            Ok(r) => r,
            Err(err) => {
                tracing::warn!(class = %class.class_id, "{err}; student skipped");
                outcome.invalid.push(err);
                continue;
            }
        };
        if seen.contains(&record.id) {
            tracing::warn!(
                class = %class.class_id,
                student = %record.id,
                line = row.line,
                "duplicate student; keeping first"
            );
            outcome.duplicates.push(record.id);
            continue;
        }
        let comments = engine.evaluate(&record, variant, rng)?;
        let report = assemble(comments);
        tracing::debug!(student = %record.id, comments = report.comment_count, "report assembled");
        seen.insert(record.id.clone());
        outcome.entries.push(StudentEntry {
            id: record.id,
            report,
        });
    }

    Ok(outcome)
}

/// Processes every class file in order and hands each finished class to
/// `sink`. A class file that cannot be loaded is recorded and skipped;
/// template faults abort the run.
pub fn run_batch<R: Rng + ?Sized>(
    files: &[PathBuf],
    engine: &CommentEngine<'_>,
    routing: &RoutingTable,
    rng: &mut R,
    sink: &mut dyn ReportSink,
) -> Result<Vec<ClassOutcome>, RunError> {
    let mut outcomes = Vec::with_capacity(files.len());
    for path in files {
        let class = match load_class_file(path) {
            Ok(c) => c,
            Err(err) => {
                tracing::error!(path = %path.display(), "{err}; class skipped");
                outcomes.push(ClassOutcome::failed(path, err.to_string()));
                continue;
            }
        };
        let outcome = process_class(&class, engine, routing, rng)?;
        sink.write_class(&outcome).map_err(|source| RunError::Output {
            class: outcome.class_id.clone(),
            source,
        })?;
        tracing::info!(
            class = %outcome.class_id,
            reports = outcome.entries.len(),
            invalid = outcome.invalid.len(),
            "class processed"
        );
        outcomes.push(outcome);
    }
    Ok(outcomes)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/batch.rs"]
mod tests;
