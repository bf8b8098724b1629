use thiserror::Error;

use crate::domain::error::DomainError;

/// Code reported for failures that carry no [`DomainError`].
pub const UNEXPECTED_ERROR_CODE: &str = "UNEXPECTED_ERROR";

/// Failures seen at an application boundary.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Domain error occurred: {0}")]
    Domain(#[from] DomainError),

    #[error("Unexpected error: {source:#}")]
    Unexpected {
        #[from]
        source: anyhow::Error,
    },
}

impl ApplicationError {
    /// The domain error behind this failure, if any.
    ///
    /// An `Unexpected` error still yields one when a `DomainError` sits
    /// somewhere in its `anyhow` context chain.
    pub fn domain_error(&self) -> Option<&DomainError> {
        match self {
            ApplicationError::Domain(err) => Some(err),
            ApplicationError::Unexpected { source } => source
                .chain()
                .find_map(|cause| cause.downcast_ref::<DomainError>()),
        }
    }

    pub fn code(&self) -> &'static str {
        self.domain_error()
            .map_or(UNEXPECTED_ERROR_CODE, DomainError::code)
    }

    pub fn is_domain(&self) -> bool {
        self.domain_error().is_some()
    }
}
