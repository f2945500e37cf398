use std::fmt;

use crate::input::InputError;
use crate::input::table::Row;
use crate::model::flags::{BehaviourFlag, FlagSet, flag_order, parse_flag_cell};
use crate::model::pronouns::Gender;
use crate::model::scores::{Score, ScoreParseError, parse_score};

pub const COL_SURNAME: &str = "Surname";
pub const COL_NICKNAME: &str = "Nickname";
pub const COL_SEX: &str = "Sex";
pub const COL_NUMBER: &str = "Number";
pub const COL_FINAL: &str = "FINAL";

/// Where each field lives in a class file. Task columns are everything
/// strictly between `Number` and `FINAL`, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    pub surname: usize,
    pub nickname: usize,
    pub sex: usize,
    pub number: usize,
    pub final_mark: usize,
    pub tasks: Vec<(usize, String)>,
    pub flags: Vec<(BehaviourFlag, usize)>,
}

impl ColumnLayout {
    pub fn from_header(class_id: &str, header: &[String]) -> Result<Self, InputError> {
        let find = |name: &'static str| {
            header
                .iter()
                .position(|h| h.eq_ignore_ascii_case(name))
                .ok_or_else(|| InputError::MissingColumn {
                    class: class_id.to_string(),
                    column: name,
                })
        };
        let surname = find(COL_SURNAME)?;
        let nickname = find(COL_NICKNAME)?;
        let sex = find(COL_SEX)?;
        let number = find(COL_NUMBER)?;
        let final_mark = find(COL_FINAL)?;
        if final_mark <= number {
            return Err(InputError::InvalidLayout {
                class: class_id.to_string(),
                reason: format!("{COL_FINAL} must come after {COL_NUMBER}"),
            });
        }

        let tasks = (number + 1..final_mark)
            .map(|idx| (idx, header[idx].clone()))
            .collect();

        let mut flags = Vec::new();
        for &flag in flag_order() {
            match header.iter().position(|h| h.eq_ignore_ascii_case(flag.column())) {
                Some(idx) => flags.push((flag, idx)),
                None => tracing::warn!(
                    class = class_id,
                    column = flag.column(),
                    "flag column missing; treating flag as unset"
                ),
            }
        }

        Ok(Self {
            surname,
            nickname,
            sex,
            number,
            final_mark,
            tasks,
            flags,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StudentId {
    pub surname: String,
    pub preferred_name: String,
    pub number: String,
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}_{}", self.surname, self.preferred_name, self.number)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskScore {
    pub name: String,
    pub score: Score,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    pub id: StudentId,
    pub gender: Gender,
    pub tasks: Vec<TaskScore>,
    pub final_score: Score,
    pub flags: FlagSet,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("invalid record at line {line} ({student}): {field} = {value:?} is {source}")]
    InvalidScore {
        line: usize,
        student: String,
        field: String,
        value: String,
        #[source]
        source: ScoreParseError,
    },
    #[error("invalid record at line {line}: {field} is empty")]
    MissingIdentity { line: usize, field: &'static str },
    #[error("invalid record at line {line}: student number {value:?} is not numeric")]
    InvalidNumber { line: usize, value: String },
}

impl RecordError {
    pub fn line(&self) -> usize {
        match self {
            RecordError::InvalidScore { line, .. }
            | RecordError::MissingIdentity { line, .. }
            | RecordError::InvalidNumber { line, .. } => *line,
        }
    }
}

pub fn parse_record(layout: &ColumnLayout, row: &Row) -> Result<StudentRecord, RecordError> {
    let identity = |idx: usize, field: &'static str| {
        let v = row.cell(idx);
        if v.is_empty() {
            Err(RecordError::MissingIdentity {
                line: row.line,
                field,
            })
        } else {
            Ok(v.to_string())
        }
    };
    let id = StudentId {
        surname: identity(layout.surname, COL_SURNAME)?,
        preferred_name: identity(layout.nickname, COL_NICKNAME)?,
        number: identity(layout.number, COL_NUMBER)?,
    };
    if !id.number.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RecordError::InvalidNumber {
            line: row.line,
            value: id.number,
        });
    }

    let score = |idx: usize, field: &str| {
        let raw = row.cell(idx);
        parse_score(raw).map_err(|source| RecordError::InvalidScore {
            line: row.line,
            student: id.to_string(),
            field: field.to_string(),
            value: raw.to_string(),
            source,
        })
    };

    let mut tasks = Vec::with_capacity(layout.tasks.len());
    for (idx, name) in &layout.tasks {
        tasks.push(TaskScore {
            name: name.clone(),
            score: score(*idx, name)?,
        });
    }
    let final_score = score(layout.final_mark, COL_FINAL)?;

    let mut flags = FlagSet::empty();
    for &(flag, idx) in &layout.flags {
        if parse_flag_cell(row.cell(idx)) {
            flags.insert(flag);
        }
    }

    Ok(StudentRecord {
        gender: Gender::from_marker(row.cell(layout.sex)),
        id,
        tasks,
        final_score,
        flags,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/record.rs"]
mod tests;
