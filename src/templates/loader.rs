use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::templates::defs::{TemplateDef, builtin_templates};
use crate::templates::{TemplateError, TemplateSet, TemplateStore};

/// Loads all builtin template sets from `dir`. A missing or blank file is a
/// configuration fault and stops the run.
pub fn load_templates(dir: &Path) -> Result<TemplateStore, TemplateError> {
    let defs = builtin_templates();
    let mut sets = Vec::with_capacity(defs.len());
    for def in defs {
        let set = load_set(dir, def)?;
        tracing::debug!(file = def.file_name, templates = set.len(), "loaded template set");
        sets.push(set);
    }
    Ok(TemplateStore::from_sets(dir.to_path_buf(), sets))
}

fn load_set(dir: &Path, def: &TemplateDef) -> Result<TemplateSet, TemplateError> {
    let path = dir.join(def.file_name);
    let bytes = match fs::read(&path) {
        Ok(b) => b,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(TemplateError::SetNotFound {
                file: def.file_name,
                path,
            });
        }
        Err(source) => return Err(TemplateError::Io { path, source }),
    };
    let templates = split_templates(&decode_text(bytes));
    if templates.is_empty() {
        return Err(TemplateError::SetNotFound {
            file: def.file_name,
            path,
        });
    }
    Ok(TemplateSet::new(def.key, templates))
}

/// UTF-8 when valid, otherwise ISO-8859-1 where every byte is one code point.
pub fn decode_text(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(s) => s.strip_prefix('\u{feff}').map(str::to_string).unwrap_or(s),
        Err(e) => e.into_bytes().iter().map(|&b| b as char).collect(),
    }
}

/// One template per line. Trailing spaces are kept since they separate
/// consecutive comments in a report.
pub fn split_templates(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/templates/loader.rs"]
mod tests;
