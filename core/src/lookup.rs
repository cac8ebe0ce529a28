use crate::error::Error;
use crate::state::{Fault, State, mismatch};
use serde::Serialize;

/// A value-or-absent result: `Succeeded(T)`, `Absent`, or `Failed(Error)`.
///
/// Absence is deliberately distinct from failure. A `Lookup` only turns
/// `Absent` into `Failed` at an explicit conversion (see
/// [`Lookup::to_outcome_with`]), and `filter` can only ever produce `Absent`,
/// never `Failed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
#[must_use = "a Lookup may be Absent or Failed, which should be handled"]
pub enum Lookup<T> {
    Succeeded(T),
    Absent,
    Failed(Error),
}

impl<T> Lookup<T> {
    pub fn succeed(value: T) -> Self {
        Lookup::Succeeded(value)
    }

    pub fn absent() -> Self {
        Lookup::Absent
    }

    pub fn fail(error: Error) -> Self {
        Lookup::Failed(error)
    }

    pub fn state(&self) -> State {
        match self {
            Lookup::Succeeded(_) => State::Succeeded,
            Lookup::Absent => State::Absent,
            Lookup::Failed(_) => State::Failed,
        }
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self, Lookup::Succeeded(_))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Lookup::Absent)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Lookup::Failed(_))
    }

    /// The success payload.
    ///
    /// # Panics
    ///
    /// Panics with [`Fault::StateMismatch`] unless the lookup is `Succeeded`.
    #[track_caller]
    pub fn value(&self) -> &T {
        match self {
            Lookup::Succeeded(value) => value,
            _ => mismatch(State::Succeeded, self.state()),
        }
    }

    pub fn try_value(&self) -> Result<&T, Fault> {
        match self {
            Lookup::Succeeded(value) => Ok(value),
            _ => Err(Fault::StateMismatch {
                expected: State::Succeeded,
                actual: self.state(),
            }),
        }
    }

    /// The failure payload.
    ///
    /// # Panics
    ///
    /// Panics with [`Fault::StateMismatch`] unless the lookup is `Failed`.
    #[track_caller]
    pub fn error(&self) -> &Error {
        match self {
            Lookup::Failed(error) => error,
            _ => mismatch(State::Failed, self.state()),
        }
    }

    pub fn try_error(&self) -> Result<&Error, Fault> {
        match self {
            Lookup::Failed(error) => Ok(error),
            _ => Err(Fault::StateMismatch {
                expected: State::Failed,
                actual: self.state(),
            }),
        }
    }

    pub fn ok(&self) -> Option<&T> {
        match self {
            Lookup::Succeeded(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Lookup::Succeeded(value) => Some(value),
            _ => None,
        }
    }

    /// `Absent` maps to `Ok(None)`; only `Failed` becomes `Err`.
    pub fn into_result(self) -> Result<Option<T>, Error> {
        match self {
            Lookup::Succeeded(value) => Ok(Some(value)),
            Lookup::Absent => Ok(None),
            Lookup::Failed(error) => Err(error),
        }
    }

    pub fn as_ref(&self) -> Lookup<&T> {
        match self {
            Lookup::Succeeded(value) => Lookup::Succeeded(value),
            Lookup::Absent => Lookup::Absent,
            Lookup::Failed(error) => Lookup::Failed(error.clone()),
        }
    }

    pub fn value_or(self, fallback: T) -> T {
        match self {
            Lookup::Succeeded(value) => value,
            _ => fallback,
        }
    }

    pub fn value_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Lookup::Succeeded(value) => value,
            _ => fallback(),
        }
    }

    pub fn map<U, F>(self, op: F) -> Lookup<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Lookup::Succeeded(value) => Lookup::Succeeded(op(value)),
            Lookup::Absent => Lookup::Absent,
            Lookup::Failed(error) => Lookup::Failed(error),
        }
    }

    /// Like `map`, for callbacks that may produce nothing.
    ///
    /// `None` is a broken mapping, not absence: it becomes `Failed` with
    /// [`Error::empty_mapping`].
    pub fn map_some<U, F>(self, op: F) -> Lookup<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Lookup::Succeeded(value) => match op(value) {
                Some(mapped) => Lookup::Succeeded(mapped),
                None => Lookup::Failed(Error::empty_mapping()),
            },
            Lookup::Absent => Lookup::Absent,
            Lookup::Failed(error) => Lookup::Failed(error),
        }
    }

    pub fn and_then<U, F>(self, op: F) -> Lookup<U>
    where
        F: FnOnce(T) -> Lookup<U>,
    {
        match self {
            Lookup::Succeeded(value) => op(value),
            Lookup::Absent => Lookup::Absent,
            Lookup::Failed(error) => Lookup::Failed(error),
        }
    }

    /// Keeps a succeeded value only if `predicate` holds; otherwise `Absent`.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Lookup::Succeeded(value) => {
                if predicate(&value) {
                    Lookup::Succeeded(value)
                } else {
                    Lookup::Absent
                }
            }
            Lookup::Absent => Lookup::Absent,
            Lookup::Failed(error) => Lookup::Failed(error),
        }
    }

    /// Replaces `Absent` and `Failed` with `fallback`.
    pub fn or(self, fallback: Lookup<T>) -> Self {
        match self {
            Lookup::Succeeded(value) => Lookup::Succeeded(value),
            _ => fallback,
        }
    }

    pub fn or_else<F>(self, fallback: F) -> Self
    where
        F: FnOnce() -> Lookup<T>,
    {
        match self {
            Lookup::Succeeded(value) => Lookup::Succeeded(value),
            _ => fallback(),
        }
    }

    pub fn inspect<F>(self, op: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Lookup::Succeeded(value) = &self {
            op(value);
        }
        self
    }

    pub fn inspect_absent<F>(self, op: F) -> Self
    where
        F: FnOnce(),
    {
        if let Lookup::Absent = &self {
            op();
        }
        self
    }

    pub fn inspect_err<F>(self, op: F) -> Self
    where
        F: FnOnce(&Error),
    {
        if let Lookup::Failed(error) = &self {
            op(error);
        }
        self
    }

    pub fn with_error<F>(self, op: F) -> Self
    where
        F: FnOnce(Error) -> Error,
    {
        match self {
            Lookup::Failed(error) => Lookup::Failed(op(error)),
            other => other,
        }
    }

    /// Total match over all three states.
    pub fn fold<R, S, A, F>(self, on_succeeded: S, on_absent: A, on_failed: F) -> R
    where
        S: FnOnce(T) -> R,
        A: FnOnce() -> R,
        F: FnOnce(Error) -> R,
    {
        match self {
            Lookup::Succeeded(value) => on_succeeded(value),
            Lookup::Absent => on_absent(),
            Lookup::Failed(error) => on_failed(error),
        }
    }
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Lookup::Succeeded(value),
            None => Lookup::Absent,
        }
    }
}

impl<T> From<Result<Option<T>, Error>> for Lookup<T> {
    fn from(result: Result<Option<T>, Error>) -> Self {
        match result {
            Ok(Some(value)) => Lookup::Succeeded(value),
            Ok(None) => Lookup::Absent,
            Err(error) => Lookup::Failed(error),
        }
    }
}
