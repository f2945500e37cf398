/// Cell value marking a task or final mark the student has no score for.
pub const ABSENT_SENTINEL: &str = "A";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Score {
    Value(f64),
    Absent,
}

impl Score {
    pub fn value(self) -> Option<f64> {
        match self {
            Score::Value(v) => Some(v),
            Score::Absent => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoreParseError {
    #[error("neither a number nor the absent marker")]
    NotNumeric,
    #[error("outside 0..=1")]
    OutOfRange,
}

/// Parses one score cell. Empty cells count as absent.
pub fn parse_score(raw: &str) -> Result<Score, ScoreParseError> {
    let s = raw.trim();
    if s.is_empty() || s == ABSENT_SENTINEL {
        return Ok(Score::Absent);
    }
    let v: f64 = s.parse().map_err(|_| ScoreParseError::NotNumeric)?;
    if !v.is_finite() {
        return Err(ScoreParseError::NotNumeric);
    }
    if !(0.0..=1.0).contains(&v) {
        return Err(ScoreParseError::OutOfRange);
    }
    Ok(Score::Value(v))
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/scores.rs"]
mod tests;
