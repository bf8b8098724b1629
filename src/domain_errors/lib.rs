//! Base type for business-domain errors.
//!
//! Every domain failure is a [`DomainError`] built for a declared
//! [`DomainErrorKind`]. Each error carries a stable `code` for programmatic
//! dispatch, the `name` of its kind, and a human-readable `message`.
//!
//! ```
//! use domain_errors::{domain_error_kind, DomainErrorKind, DomainResult};
//!
//! domain_error_kind! {
//!     pub ValidationError => "VALIDATION_ERROR";
//! }
//!
//! fn require_email(email: &str) -> DomainResult<&str> {
//!     if email.is_empty() {
//!         return ValidationError::fail("field 'email' is required");
//!     }
//!     Ok(email)
//! }
//!
//! let err = require_email("").unwrap_err();
//! assert_eq!(err.code(), "VALIDATION_ERROR");
//! assert_eq!(err.name(), "ValidationError");
//! assert_eq!(err.message(), "field 'email' is required");
//! ```
//!
//! The `application` and `infrastructure` modules hold the consumer side:
//! routing by code, reporting, and (with the `serde` feature) JSON bodies.

#![deny(unsafe_code)]

pub mod application;
pub mod domain;
pub mod infrastructure;

#[cfg(test)]
mod test_support;

pub use application::dispatch::CodeDispatcher;
pub use application::error::{ApplicationError, UNEXPECTED_ERROR_CODE};
pub use application::reporter::{ErrorReporter, NoopReporter, ReportExt};
pub use domain::error::{DomainError, DomainErrorKind, DomainResult};
pub use domain::registry::{is_well_formed_code, CodeRegistry, RegistryError};
pub use infrastructure::tracing_reporter::TracingReporter;
