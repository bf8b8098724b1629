/// Declares one or more domain error kinds.
///
/// Each entry becomes a zero-sized marker type implementing
/// [`DomainErrorKind`](crate::DomainErrorKind). The kind's `NAME` is the
/// identifier itself, so it always matches the type. An empty code fails to
/// compile.
///
/// ```
/// use domain_errors::{domain_error_kind, DomainErrorKind};
///
/// domain_error_kind! {
///     /// A required field was missing or malformed.
///     pub ValidationError => "VALIDATION_ERROR";
///     pub NotFoundError => "NOT_FOUND";
/// }
///
/// let err = ValidationError::error("field 'email' is required");
/// assert_eq!(err.code(), "VALIDATION_ERROR");
/// assert_eq!(err.name(), "ValidationError");
/// assert_eq!(NotFoundError::CODE, "NOT_FOUND");
/// ```
///
/// ```compile_fail
/// use domain_errors::domain_error_kind;
///
/// domain_error_kind! {
///     pub Anonymous => "";
/// }
/// ```
#[macro_export]
macro_rules! domain_error_kind {
    ($($(#[$meta:meta])* $vis:vis $name:ident => $code:literal;)+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
            $vis struct $name;

            const _: () = assert!(!$code.is_empty(), "domain error code must not be empty");

            impl $crate::DomainErrorKind for $name {
                const CODE: &'static str = $code;
                const NAME: &'static str = stringify!($name);
            }
        )+
    };
}
