//! Opt-in enforcement of the code conventions.
//!
//! [`DomainError`](crate::DomainError) itself accepts any code its kind
//! declares. Applications that want codes to be unique and uniformly shaped
//! register their kinds in a [`CodeRegistry`] at startup and fail fast on the
//! first conflict.

use std::any::TypeId;
use std::collections::BTreeMap;

use thiserror::Error;

use super::error::DomainErrorKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("malformed error code {code:?} declared by {name}")]
    MalformedCode { code: &'static str, name: &'static str },

    #[error("error code {code} is already used by {existing}, cannot register {incoming}")]
    DuplicateCode {
        code: &'static str,
        existing: &'static str,
        incoming: &'static str,
    },
}

/// Returns true for SCREAMING_SNAKE_CASE codes such as `NOT_FOUND` or `E2E_TIMEOUT`.
///
/// The first character must be an ASCII uppercase letter; the rest are
/// uppercase letters, digits, or single underscores between them.
#[must_use]
pub const fn is_well_formed_code(code: &str) -> bool {
    let bytes = code.as_bytes();
    if bytes.is_empty() || !bytes[0].is_ascii_uppercase() {
        return false;
    }

    let mut i = 1;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b'_' {
            if bytes[i - 1] == b'_' || i == bytes.len() - 1 {
                return false;
            }
        } else if !(b.is_ascii_uppercase() || b.is_ascii_digit()) {
            return false;
        }
        i += 1;
    }
    true
}

#[derive(Debug, Clone, Copy)]
struct Claim {
    kind: TypeId,
    name: &'static str,
}

/// Catalog of registered codes, keyed by code.
#[derive(Debug, Clone, Default)]
pub struct CodeRegistry {
    codes: BTreeMap<&'static str, Claim>,
}

impl CodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims `K::CODE` for `K`.
    ///
    /// Registering the same kind type again is a no-op; another type with the
    /// same name is still a duplicate.
    pub fn register<K: DomainErrorKind>(&mut self) -> Result<(), RegistryError> {
        if !is_well_formed_code(K::CODE) {
            return Err(RegistryError::MalformedCode {
                code: K::CODE,
                name: K::NAME,
            });
        }

        match self.codes.get(K::CODE) {
            Some(claim) if claim.kind == TypeId::of::<K>() => Ok(()),
            Some(claim) => Err(RegistryError::DuplicateCode {
                code: K::CODE,
                existing: claim.name,
                incoming: K::NAME,
            }),
            None => {
                self.codes.insert(
                    K::CODE,
                    Claim {
                        kind: TypeId::of::<K>(),
                        name: K::NAME,
                    },
                );
                Ok(())
            }
        }
    }

    pub fn with<K: DomainErrorKind>(mut self) -> Result<Self, RegistryError> {
        self.register::<K>()?;
        Ok(self)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains_key(code)
    }

    pub fn name_of(&self, code: &str) -> Option<&'static str> {
        self.codes.get(code).map(|claim| claim.name)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// `(code, name)` pairs in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.codes.iter().map(|(code, claim)| (*code, claim.name))
    }
}
