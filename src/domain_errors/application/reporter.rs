//! Where handled domain errors go.
//!
//! The library never logs by itself. An application picks an
//! [`ErrorReporter`] (for example
//! [`TracingReporter`](crate::infrastructure::tracing_reporter::TracingReporter))
//! and reports errors at the boundaries it cares about.

use crate::domain::error::{DomainError, DomainResult};

#[cfg_attr(test, mockall::automock)]
pub trait ErrorReporter: Send + Sync {
    fn report(&self, error: &DomainError);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReporter;

impl ErrorReporter for NoopReporter {
    fn report(&self, _error: &DomainError) {}
}

impl<R: ErrorReporter + ?Sized> ErrorReporter for &R {
    fn report(&self, error: &DomainError) {
        (**self).report(error)
    }
}

impl<R: ErrorReporter + ?Sized> ErrorReporter for std::sync::Arc<R> {
    fn report(&self, error: &DomainError) {
        (**self).report(error)
    }
}

/// Reports the error of a result and hands the result back unchanged.
pub trait ReportExt {
    fn report_err<R: ErrorReporter + ?Sized>(self, reporter: &R) -> Self;
}

impl<T> ReportExt for DomainResult<T> {
    fn report_err<R: ErrorReporter + ?Sized>(self, reporter: &R) -> Self {
        if let Err(ref error) = self {
            reporter.report(error);
        }
        self
    }
}
