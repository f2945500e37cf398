pub mod accumulate;
pub mod batch;
pub mod rules;

use crate::input::InputError;
use crate::templates::TemplateError;

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("failed to write output for {class}: {source}")]
    Output {
        class: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to archive class files: {0}")]
    Archive(#[source] std::io::Error),
}
