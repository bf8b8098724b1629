use std::error::Error as StdError;

use thiserror::Error;

/// Result type for operations that fail with a [`DomainError`].
pub type DomainResult<T> = Result<T, DomainError>;

/// Declaration of a concrete domain error variant.
///
/// A kind is a type-level tag: it fixes the `code` and `name` every
/// [`DomainError`] built for it carries. Declare kinds with
/// [`domain_error_kind!`](crate::domain_error_kind), or implement the trait by
/// hand when a kind needs to live on an existing type.
///
/// ```
/// use domain_errors::DomainErrorKind;
///
/// struct PaymentDeclined;
///
/// impl DomainErrorKind for PaymentDeclined {
///     const CODE: &'static str = "PAYMENT_DECLINED";
///     const NAME: &'static str = "PaymentDeclined";
/// }
///
/// let err = PaymentDeclined::error("card expired");
/// assert_eq!(err.code(), "PAYMENT_DECLINED");
/// assert_eq!(err.name(), "PaymentDeclined");
/// ```
pub trait DomainErrorKind: 'static {
    /// Stable machine-readable identifier of this kind.
    const CODE: &'static str;

    /// Identity of the variant as shown in logs and `Display` output.
    const NAME: &'static str;

    /// Builds an error of this kind.
    fn error(message: impl Into<String>) -> DomainError
    where
        Self: Sized,
    {
        DomainError::new::<Self>(message)
    }

    /// Shorthand for `Err(Self::error(message))`.
    fn fail<T>(message: impl Into<String>) -> DomainResult<T>
    where
        Self: Sized,
    {
        Err(Self::error(message))
    }
}

/// Base type of every business-domain failure.
///
/// There is no way to build one without naming a [`DomainErrorKind`], and the
/// fields cannot be touched after construction:
///
/// ```compile_fail
/// use domain_errors::DomainError;
///
/// // no kind, no error
/// let err = DomainError::new("something went wrong");
/// ```
///
/// ```compile_fail
/// use domain_errors::{domain_error_kind, DomainErrorKind};
///
/// domain_error_kind! {
///     pub ValidationError => "VALIDATION_ERROR";
/// }
///
/// let mut err = ValidationError::error("field 'email' is required");
/// err.code = "SOMETHING_ELSE";
/// ```
///
/// Consumers should branch on [`code`](Self::code); it is the identifier that
/// survives crossing process and language boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("{name}: {message}")]
pub struct DomainError {
    code: &'static str,
    name: &'static str,
    message: String,
}

impl DomainError {
    /// Builds an error of kind `K` carrying `message`.
    ///
    /// No validation is performed on either the code or the message.
    pub fn new<K: DomainErrorKind>(message: impl Into<String>) -> Self {
        Self {
            code: K::CODE,
            name: K::NAME,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn code(&self) -> &'static str {
        self.code
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns true if this error was built for kind `K`.
    #[must_use]
    pub fn is<K: DomainErrorKind>(&self) -> bool {
        self.code == K::CODE && self.name == K::NAME
    }

    /// Finds the first `DomainError` in `err` or its chain of sources.
    ///
    /// ```
    /// use domain_errors::{domain_error_kind, DomainError, DomainErrorKind};
    ///
    /// domain_error_kind! {
    ///     pub ConflictError => "CONFLICT";
    /// }
    ///
    /// let boxed: Box<dyn std::error::Error> = Box::new(ConflictError::error("version mismatch"));
    /// let found = DomainError::find(boxed.as_ref()).map(DomainError::code);
    /// assert_eq!(found, Some("CONFLICT"));
    /// ```
    pub fn find<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a DomainError> {
        let mut current = Some(err);
        while let Some(e) = current {
            if let Some(domain) = e.downcast_ref::<DomainError>() {
                return Some(domain);
            }
            current = e.source();
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ValidationError;

    impl DomainErrorKind for ValidationError {
        const CODE: &'static str = "VALIDATION_ERROR";
        const NAME: &'static str = "ValidationError";
    }

    struct NotFoundError;

    impl DomainErrorKind for NotFoundError {
        const CODE: &'static str = "NOT_FOUND";
        const NAME: &'static str = "NotFoundError";
    }

    #[derive(Debug, Error)]
    #[error("loading user failed")]
    struct LoadUserError {
        #[source]
        source: DomainError,
    }

    #[test]
    fn construction_sets_code_name_and_message() {
        let err = DomainError::new::<ValidationError>("field 'email' is required");

        assert_eq!(err.code(), "VALIDATION_ERROR");
        assert_eq!(err.name(), "ValidationError");
        assert_eq!(err.message(), "field 'email' is required");
    }

    #[test]
    fn kind_constructors_match_base_constructor() {
        let via_kind = ValidationError::error("bad");
        let via_base = DomainError::new::<ValidationError>("bad");
        assert_eq!(via_kind, via_base);

        let failed: DomainResult<()> = NotFoundError::fail("user 42");
        assert_eq!(failed.unwrap_err().code(), "NOT_FOUND");
    }

    #[test]
    fn display_shows_variant_name_and_message() {
        let err = NotFoundError::error("user 42");
        assert_eq!(err.to_string(), "NotFoundError: user 42");
    }

    #[test]
    fn empty_message_is_accepted() {
        let err = NotFoundError::error("");
        assert_eq!(err.message(), "");
        assert_eq!(err.to_string(), "NotFoundError: ");
    }

    #[test]
    fn same_message_different_kinds_are_distinguishable() {
        let a = ValidationError::error("nope");
        let b = NotFoundError::error("nope");

        assert_ne!(a, b);
        assert_ne!(a.code(), b.code());
        assert_ne!(a.name(), b.name());
        assert!(a.is::<ValidationError>());
        assert!(!a.is::<NotFoundError>());
    }

    #[test]
    fn find_walks_the_source_chain() {
        let wrapped = LoadUserError {
            source: NotFoundError::error("user 42"),
        };

        let found = DomainError::find(&wrapped).expect("domain error in chain");
        assert_eq!(found.code(), "NOT_FOUND");
    }

    #[test]
    fn find_returns_none_for_foreign_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk");
        assert!(DomainError::find(&io).is_none());
    }

    #[test]
    fn is_send_sync_and_static() {
        fn assert_bounds<T: Send + Sync + 'static>() {}
        assert_bounds::<DomainError>();
    }

    #[test]
    fn shared_across_threads() {
        let err = std::sync::Arc::new(ValidationError::error("shared"));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let err = std::sync::Arc::clone(&err);
                std::thread::spawn(move || err.code())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), "VALIDATION_ERROR");
        }
    }
}
