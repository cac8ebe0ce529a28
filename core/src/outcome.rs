use crate::error::Error;
use crate::state::{Fault, State, mismatch};
use serde::Serialize;

/// A value-bearing result: either `Succeeded(T)` or `Failed(Error)`.
///
/// `Outcome` represents "Failure as Data". Instead of panics or sentinel
/// values, a fallible computation returns an `Outcome` and the caller threads
/// it through combinators. Every combinator consumes `self` and returns a new
/// instance; callbacks run only for the state they are declared for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
#[must_use = "an Outcome may be Failed, which should be handled"]
pub enum Outcome<T> {
    Succeeded(T),
    Failed(Error),
}

impl<T> Outcome<T> {
    pub fn succeed(value: T) -> Self {
        Outcome::Succeeded(value)
    }

    pub fn fail(error: Error) -> Self {
        Outcome::Failed(error)
    }

    pub fn state(&self) -> State {
        match self {
            Outcome::Succeeded(_) => State::Succeeded,
            Outcome::Failed(_) => State::Failed,
        }
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self, Outcome::Succeeded(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }

    /// The success payload.
    ///
    /// # Panics
    ///
    /// Panics with [`Fault::StateMismatch`] when the outcome is `Failed`.
    /// Check the state first, or use [`Outcome::try_value`] / a combinator.
    #[track_caller]
    pub fn value(&self) -> &T {
        match self {
            Outcome::Succeeded(value) => value,
            Outcome::Failed(_) => mismatch(State::Succeeded, self.state()),
        }
    }

    pub fn try_value(&self) -> Result<&T, Fault> {
        match self {
            Outcome::Succeeded(value) => Ok(value),
            Outcome::Failed(_) => Err(Fault::StateMismatch {
                expected: State::Succeeded,
                actual: self.state(),
            }),
        }
    }

    /// The failure payload.
    ///
    /// # Panics
    ///
    /// Panics with [`Fault::StateMismatch`] when the outcome is `Succeeded`.
    #[track_caller]
    pub fn error(&self) -> &Error {
        match self {
            Outcome::Failed(error) => error,
            Outcome::Succeeded(_) => mismatch(State::Failed, self.state()),
        }
    }

    pub fn try_error(&self) -> Result<&Error, Fault> {
        match self {
            Outcome::Failed(error) => Ok(error),
            Outcome::Succeeded(_) => Err(Fault::StateMismatch {
                expected: State::Failed,
                actual: self.state(),
            }),
        }
    }

    pub fn ok(&self) -> Option<&T> {
        match self {
            Outcome::Succeeded(value) => Some(value),
            Outcome::Failed(_) => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Outcome::Succeeded(value) => Some(value),
            Outcome::Failed(_) => None,
        }
    }

    pub fn into_result(self) -> Result<T, Error> {
        self.into()
    }

    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Outcome::Succeeded(value) => Outcome::Succeeded(value),
            Outcome::Failed(error) => Outcome::Failed(error.clone()),
        }
    }

    pub fn value_or(self, fallback: T) -> T {
        match self {
            Outcome::Succeeded(value) => value,
            Outcome::Failed(_) => fallback,
        }
    }

    pub fn value_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce(Error) -> T,
    {
        match self {
            Outcome::Succeeded(value) => value,
            Outcome::Failed(error) => fallback(error),
        }
    }

    pub fn map<U, F>(self, op: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Succeeded(value) => Outcome::Succeeded(op(value)),
            Outcome::Failed(error) => Outcome::Failed(error),
        }
    }

    /// Like `map`, for callbacks that may produce nothing.
    ///
    /// `None` becomes `Failed` with [`Error::empty_mapping`].
    pub fn map_some<U, F>(self, op: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Outcome::Succeeded(value) => match op(value) {
                Some(mapped) => Outcome::Succeeded(mapped),
                None => Outcome::Failed(Error::empty_mapping()),
            },
            Outcome::Failed(error) => Outcome::Failed(error),
        }
    }

    /// Chains a computation that itself returns an `Outcome`.
    pub fn and_then<U, F>(self, op: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Outcome::Succeeded(value) => op(value),
            Outcome::Failed(error) => Outcome::Failed(error),
        }
    }

    /// Fails a succeeded outcome whose value does not satisfy `predicate`.
    pub fn ensure<P, E>(self, predicate: P, violation: E) -> Self
    where
        P: FnOnce(&T) -> bool,
        E: FnOnce(&T) -> Error,
    {
        match self {
            Outcome::Succeeded(value) => {
                if predicate(&value) {
                    Outcome::Succeeded(value)
                } else {
                    Outcome::Failed(violation(&value))
                }
            }
            Outcome::Failed(error) => Outcome::Failed(error),
        }
    }

    pub fn or(self, fallback: Outcome<T>) -> Self {
        match self {
            Outcome::Succeeded(value) => Outcome::Succeeded(value),
            Outcome::Failed(_) => fallback,
        }
    }

    pub fn or_else<F>(self, fallback: F) -> Self
    where
        F: FnOnce(Error) -> Outcome<T>,
    {
        match self {
            Outcome::Succeeded(value) => Outcome::Succeeded(value),
            Outcome::Failed(error) => fallback(error),
        }
    }

    pub fn inspect<F>(self, op: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Outcome::Succeeded(value) = &self {
            op(value);
        }
        self
    }

    pub fn inspect_err<F>(self, op: F) -> Self
    where
        F: FnOnce(&Error),
    {
        if let Outcome::Failed(error) = &self {
            op(error);
        }
        self
    }

    /// Rewrites the error of a failed outcome; succeeded ones pass through.
    pub fn with_error<F>(self, op: F) -> Self
    where
        F: FnOnce(Error) -> Error,
    {
        match self {
            Outcome::Succeeded(value) => Outcome::Succeeded(value),
            Outcome::Failed(error) => Outcome::Failed(op(error)),
        }
    }

    /// Total match: exactly one branch runs.
    pub fn fold<R, S, F>(self, on_succeeded: S, on_failed: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(Error) -> R,
    {
        match self {
            Outcome::Succeeded(value) => on_succeeded(value),
            Outcome::Failed(error) => on_failed(error),
        }
    }
}

impl<T> Default for Outcome<T> {
    fn default() -> Self {
        Outcome::Failed(Error::uninitialized())
    }
}

impl<T> From<Result<T, Error>> for Outcome<T> {
    fn from(result: Result<T, Error>) -> Self {
        match result {
            Ok(value) => Outcome::Succeeded(value),
            Err(error) => Outcome::Failed(error),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, Error> {
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Outcome::Succeeded(value) => Ok(value),
            Outcome::Failed(error) => Err(error),
        }
    }
}
