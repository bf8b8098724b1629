#[cfg(feature = "serde")]
pub mod error_body;
pub mod tracing_reporter;
