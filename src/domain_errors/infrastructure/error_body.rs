//! JSON error bodies for transport adapters.
//!
//! Renders `{"error": {"code": ..., "name": ..., "message": ...}}`. Details of
//! unexpected failures never leave the process.

use serde::Serialize;

use crate::application::error::{ApplicationError, UNEXPECTED_ERROR_CODE};
use crate::domain::error::DomainError;

const UNEXPECTED_ERROR_NAME: &str = "UnexpectedError";
const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub error: ErrorPayload,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorPayload {
    pub code: String,
    pub name: String,
    pub message: String,
}

impl ErrorBody {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

impl From<&DomainError> for ErrorBody {
    fn from(err: &DomainError) -> Self {
        Self {
            error: ErrorPayload {
                code: err.code().to_string(),
                name: err.name().to_string(),
                message: err.message().to_string(),
            },
        }
    }
}

impl From<&ApplicationError> for ErrorBody {
    fn from(err: &ApplicationError) -> Self {
        if let Some(domain) = err.domain_error() {
            return domain.into();
        }

        Self {
            error: ErrorPayload {
                code: UNEXPECTED_ERROR_CODE.to_string(),
                name: UNEXPECTED_ERROR_NAME.to_string(),
                message: UNEXPECTED_ERROR_MESSAGE.to_string(),
            },
        }
    }
}
