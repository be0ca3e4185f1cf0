use autoimport_resolver::ResolveError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    /// A resolver returned an error while resolving `name`.
    #[error("resolver failed for `{name}`")]
    Resolver {
        name: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("invalid ignore pattern `{pattern}`")]
    InvalidIgnorePattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl From<ResolveError> for TransformError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::Resolver { name, source } => TransformError::Resolver { name, source },
        }
    }
}
