use std::path::{Path, PathBuf};

pub mod record;
pub mod table;

use record::ColumnLayout;
use table::{Table, parse_table};

use crate::templates::loader::decode_text;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("missing column {column} in {class}")]
    MissingColumn { class: String, column: &'static str },
    #[error("invalid layout in {class}: {reason}")]
    InvalidLayout { class: String, reason: String },
    #[error("parse error in {class} at line {line}: {reason}")]
    Parse {
        class: String,
        line: usize,
        reason: String,
    },
}

impl InputError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        InputError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// One class file: its identifier, column layout and raw rows.
#[derive(Debug, Clone)]
pub struct ClassFile {
    pub class_id: String,
    pub path: PathBuf,
    pub layout: ColumnLayout,
    pub table: Table,
}

/// Class files in `input_dir`, sorted by name so runs are reproducible.
pub fn discover_class_files(input_dir: &Path) -> Result<Vec<PathBuf>, InputError> {
    if !input_dir.is_dir() {
        return Err(InputError::MissingInput(format!(
            "input directory {} does not exist",
            input_dir.display()
        )));
    }
    let mut files = Vec::new();
    let entries = std::fs::read_dir(input_dir).map_err(|e| InputError::io(input_dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| InputError::io(input_dir, e))?;
        let path = entry.path();
        let is_csv = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if is_csv && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

pub fn class_id_for(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

pub fn load_class_file(path: &Path) -> Result<ClassFile, InputError> {
    let class_id = class_id_for(path);
    let bytes = std::fs::read(path).map_err(|e| InputError::io(path, e))?;
    let text = decode_text(bytes);
    let table = parse_table(&text).map_err(|(line, reason)| InputError::Parse {
        class: class_id.clone(),
        line,
        reason,
    })?;
    let layout = ColumnLayout::from_header(&class_id, &table.header)?;
    Ok(ClassFile {
        class_id,
        path: path.to_path_buf(),
        layout,
        table,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
