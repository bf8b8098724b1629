use std::collections::HashMap;
use std::error::Error as StdError;
use std::fmt;

use crate::domain::error::{DomainError, DomainErrorKind};

type Handler<T> = Box<dyn Fn(&DomainError) -> T + Send + Sync>;

/// Routes domain errors to handlers by their `code`.
///
/// ```
/// use domain_errors::application::dispatch::CodeDispatcher;
/// use domain_errors::{domain_error_kind, DomainErrorKind};
///
/// domain_error_kind! {
///     pub NotFoundError => "NOT_FOUND";
///     pub ConflictError => "CONFLICT";
/// }
///
/// let status = CodeDispatcher::new(|_| 500)
///     .on::<NotFoundError>(|_| 404)
///     .on::<ConflictError>(|_| 409);
///
/// assert_eq!(status.dispatch(&ConflictError::error("stale")), 409);
/// assert_eq!(status.dispatch(&NotFoundError::error("user 42")), 404);
/// ```
pub struct CodeDispatcher<T> {
    routes: HashMap<&'static str, Handler<T>>,
    fallback: Handler<T>,
}

impl<T> CodeDispatcher<T> {
    /// Creates a dispatcher; `fallback` handles every code without a route.
    pub fn new<F>(fallback: F) -> Self
    where
        F: Fn(&DomainError) -> T + Send + Sync + 'static,
    {
        Self {
            routes: HashMap::new(),
            fallback: Box::new(fallback),
        }
    }

    pub fn on<K: DomainErrorKind>(
        self,
        handler: impl Fn(&DomainError) -> T + Send + Sync + 'static,
    ) -> Self {
        self.on_code(K::CODE, handler)
    }

    /// Routes `code` to `handler`, replacing any earlier route for it.
    pub fn on_code<F>(mut self, code: &'static str, handler: F) -> Self
    where
        F: Fn(&DomainError) -> T + Send + Sync + 'static,
    {
        self.routes.insert(code, Box::new(handler));
        self
    }

    pub fn handles(&self, code: &str) -> bool {
        self.routes.contains_key(code)
    }

    pub fn dispatch(&self, error: &DomainError) -> T {
        match self.routes.get(error.code()) {
            Some(handler) => handler(error),
            None => (self.fallback)(error),
        }
    }

    /// `None` when the source chain holds no `DomainError`.
    pub fn dispatch_any(&self, error: &(dyn StdError + 'static)) -> Option<T> {
        DomainError::find(error).map(|domain| self.dispatch(domain))
    }
}

impl<T> fmt::Debug for CodeDispatcher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut codes: Vec<_> = self.routes.keys().collect();
        codes.sort();
        f.debug_struct("CodeDispatcher").field("routes", &codes).finish()
    }
}
