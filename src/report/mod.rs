pub mod json;
pub mod tsv;

use crate::pipeline::batch::ClassOutcome;

/// Receives each class as soon as all of its students are processed.
pub trait ReportSink {
    fn write_class(&mut self, outcome: &ClassOutcome) -> std::io::Result<()>;
}

/// Collects outcomes in memory.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemorySink {
    pub classes: Vec<ClassOutcome>,
}

#[cfg(test)]
impl ReportSink for MemorySink {
    fn write_class(&mut self, outcome: &ClassOutcome) -> std::io::Result<()> {
        self.classes.push(outcome.clone());
        Ok(())
    }
}

/// Single-line cell text: tabs and line breaks become spaces.
pub fn sanitize_cell(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\t' | '\n' | '\r' => ' ',
            other => other,
        })
        .collect()
}
