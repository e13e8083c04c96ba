//! Page rendering error types.

use crate::data::DataError;
use thiserror::Error;

/// Errors raised while rendering one page.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error("Template error in `{template}`")]
    Template {
        template: String,
        #[source]
        source: minijinja::Error,
    },
}
