//! # Error: Immutable Failure Descriptors
//!
//! `Error` is the payload of every `Failed` state. It is a domain value, not a
//! panic: it travels through return values only, and it can be inspected,
//! rewritten with `with_error`, and aggregated with other errors.
//!
//! An `Error` is reference counted. Cloning it shares the same descriptor, so
//! "the same error instance" survives any number of combinators and can be
//! checked with [`Error::ptr_eq`].

use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// Machine-readable codes for the errors this crate produces itself.
pub mod codes {
    /// Used when `Absent` is coerced into `Failed` without an override.
    pub const NOT_FOUND: &str = "NotFound";
    /// Code carried by every composite error.
    pub const COMPOSITE: &str = "Composite";
    /// A `map_some` callback produced no value.
    pub const EMPTY_MAPPING: &str = "EmptyMapping";
    /// A result built through `Default` rather than a factory.
    pub const UNINITIALIZED: &str = "Uninitialized";
    /// A single-element search matched more than one element.
    pub const MULTIPLE_MATCHES: &str = "MultipleMatches";
}

/// An immutable failure descriptor: code, message, and nested errors.
///
/// A plain error has no nested errors. A composite error (see
/// [`CompositeError`](crate::composite::CompositeError)) has at least two,
/// none of which is itself composite.
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorRepr>,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
struct ErrorRepr {
    code: String,
    message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    nested: Vec<Error>,
}

impl Error {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::from_repr(ErrorRepr {
            code: code.into(),
            message: message.into(),
            nested: Vec::new(),
        })
    }

    /// The fixed error used when absence is coerced to failure.
    pub fn not_found() -> Self {
        Self::new(codes::NOT_FOUND, "The requested value was not found")
    }

    pub fn empty_mapping() -> Self {
        Self::new(
            codes::EMPTY_MAPPING,
            "The mapping callback did not produce a value",
        )
    }

    pub fn uninitialized() -> Self {
        Self::new(
            codes::UNINITIALIZED,
            "The result was default-constructed and never initialized",
        )
    }

    pub fn multiple_matches() -> Self {
        Self::new(
            codes::MULTIPLE_MATCHES,
            "More than one element matched where at most one was expected",
        )
    }

    /// Builds a composite from an already flattened list.
    ///
    /// Callers must guarantee `nested.len() >= 2` and that no entry is
    /// composite; [`crate::composite::aggregate`] is the checked entry point.
    pub(crate) fn composite(nested: Vec<Error>) -> Self {
        debug_assert!(nested.len() >= 2);
        debug_assert!(nested.iter().all(|e| !e.is_composite()));

        let message = nested
            .iter()
            .map(|e| e.message())
            .collect::<Vec<_>>()
            .join("; ");

        Self::from_repr(ErrorRepr {
            code: codes::COMPOSITE.to_string(),
            message,
            nested,
        })
    }

    fn from_repr(repr: ErrorRepr) -> Self {
        Self {
            inner: Arc::new(repr),
        }
    }

    pub fn code(&self) -> &str {
        &self.inner.code
    }

    pub fn message(&self) -> &str {
        &self.inner.message
    }

    /// Nested errors in their original order. Empty for a plain error.
    pub fn nested(&self) -> &[Error] {
        &self.inner.nested
    }

    pub fn is_composite(&self) -> bool {
        !self.inner.nested.is_empty()
    }

    /// Whether both handles point at the same descriptor.
    pub fn ptr_eq(this: &Error, other: &Error) -> bool {
        Arc::ptr_eq(&this.inner, &other.inner)
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        Error::ptr_eq(self, other) || self.inner == other.inner
    }
}

impl Eq for Error {}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Error");
        s.field("code", &self.inner.code)
            .field("message", &self.inner.message);
        if self.is_composite() {
            s.field("nested", &self.inner.nested);
        }
        s.finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_composite() {
            write!(f, "{} errors occurred", self.nested().len())?;
            for (index, nested) in self.nested().iter().enumerate() {
                write!(f, "\n  [{index}] {nested}")?;
            }
            Ok(())
        } else {
            write!(f, "{}: {}", self.code(), self.message())
        }
    }
}

impl std::error::Error for Error {}

impl Serialize for Error {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.inner.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_error_has_no_nested() {
        let err = Error::new("Invalid", "bad input");
        assert_eq!(err.code(), "Invalid");
        assert_eq!(err.message(), "bad input");
        assert!(err.nested().is_empty());
        assert!(!err.is_composite());
    }

    #[test]
    fn test_clone_shares_instance() {
        let err = Error::new("Invalid", "bad input");
        let copy = err.clone();
        assert!(Error::ptr_eq(&err, &copy));

        let lookalike = Error::new("Invalid", "bad input");
        assert!(!Error::ptr_eq(&err, &lookalike));
        assert_eq!(err, lookalike);
    }

    #[test]
    fn test_display() {
        let err = Error::new("Timeout", "upstream took too long");
        assert_eq!(err.to_string(), "Timeout: upstream took too long");

        let composite = Error::composite(vec![Error::new("A", "first"), Error::new("B", "second")]);
        assert_eq!(
            composite.to_string(),
            "2 errors occurred\n  [0] A: first\n  [1] B: second"
        );
        assert_eq!(composite.message(), "first; second");
        assert_eq!(composite.code(), codes::COMPOSITE);
    }

    #[test]
    fn test_serialization() {
        let err = Error::new("Invalid", "bad input");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "code": "Invalid", "message": "bad input" })
        );

        let composite = Error::composite(vec![Error::new("A", "a"), Error::new("B", "b")]);
        let json = serde_json::to_value(&composite).unwrap();
        assert_eq!(json["code"], "Composite");
        assert_eq!(json["nested"][1]["code"], "B");
    }
}
