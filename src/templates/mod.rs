pub mod defs;
pub mod loader;
pub mod render;

use std::collections::BTreeMap;
use std::path::PathBuf;

use rand::Rng;
use rand::seq::SliceRandom;

pub use defs::TemplateKey;
use defs::file_name_for;
use render::{RenderContext, RenderFault};

#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("template set {file} not found or empty at {}", .path.display())]
    SetNotFound { file: &'static str, path: PathBuf },

    #[error("template in {file} cannot be rendered ({fault}): {template:?}")]
    Render {
        file: &'static str,
        template: String,
        fault: RenderFault,
    },

    #[error("failed to read template set {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone)]
pub struct TemplateSet {
    pub key: TemplateKey,
    pub templates: Vec<String>,
}

impl TemplateSet {
    pub fn new(key: TemplateKey, templates: Vec<String>) -> Self {
        Self { key, templates }
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Uniform draw; every call is independent of the previous ones.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.templates.choose(rng).map(String::as_str)
    }

    pub fn render<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        ctx: &RenderContext<'_>,
    ) -> Result<String, TemplateError> {
        let template = self.choose(rng).ok_or_else(|| self.not_found())?;
        render::render(template, ctx).map_err(|fault| TemplateError::Render {
            file: file_name_for(self.key),
            template: template.to_string(),
            fault,
        })
    }

    fn not_found(&self) -> TemplateError {
        TemplateError::SetNotFound {
            file: file_name_for(self.key),
            path: PathBuf::from(file_name_for(self.key)),
        }
    }
}

/// Every template set of a run, loaded once and read-only afterwards.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    source_dir: PathBuf,
    sets: BTreeMap<TemplateKey, TemplateSet>,
}

impl TemplateStore {
    pub fn from_sets(source_dir: PathBuf, sets: impl IntoIterator<Item = TemplateSet>) -> Self {
        let sets = sets.into_iter().map(|s| (s.key, s)).collect();
        Self { source_dir, sets }
    }

    pub fn get(&self, key: TemplateKey) -> Result<&TemplateSet, TemplateError> {
        match self.sets.get(&key) {
            Some(set) if !set.is_empty() => Ok(set),
            _ => {
                let file = file_name_for(key);
                Err(TemplateError::SetNotFound {
                    file,
                    path: self.source_dir.join(file),
                })
            }
        }
    }

    pub fn sets(&self) -> impl Iterator<Item = &TemplateSet> {
        self.sets.values()
    }

    /// Validates every template of every set, returning the template count.
    pub fn lint(&self) -> Result<usize, TemplateError> {
        let mut count = 0usize;
        for set in self.sets.values() {
            for template in &set.templates {
                render::validate(template).map_err(|fault| TemplateError::Render {
                    file: file_name_for(set.key),
                    template: template.clone(),
                    fault,
                })?;
                count += 1;
            }
        }
        Ok(count)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/templates/tests.rs"]
mod tests;
