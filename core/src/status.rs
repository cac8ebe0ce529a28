use crate::error::Error;
use crate::outcome::Outcome;
use crate::state::{Fault, State, mismatch};
use serde::Serialize;

/// A value-less result: `Succeeded` or `Failed(Error)`.
///
/// A default-constructed `Status` is `Failed` with
/// [`Error::uninitialized`]; nothing succeeds by accident.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
#[must_use = "a Status may be Failed, which should be handled"]
pub enum Status {
    Succeeded,
    Failed(Error),
}

impl Status {
    pub fn succeed() -> Self {
        Status::Succeeded
    }

    pub fn fail(error: Error) -> Self {
        Status::Failed(error)
    }

    pub fn state(&self) -> State {
        match self {
            Status::Succeeded => State::Succeeded,
            Status::Failed(_) => State::Failed,
        }
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self, Status::Succeeded)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Status::Failed(_))
    }

    /// The failure payload.
    ///
    /// # Panics
    ///
    /// Panics with [`Fault::StateMismatch`] when the status is `Succeeded`.
    #[track_caller]
    pub fn error(&self) -> &Error {
        match self {
            Status::Failed(error) => error,
            Status::Succeeded => mismatch(State::Failed, self.state()),
        }
    }

    pub fn try_error(&self) -> Result<&Error, Fault> {
        match self {
            Status::Failed(error) => Ok(error),
            Status::Succeeded => Err(Fault::StateMismatch {
                expected: State::Failed,
                actual: self.state(),
            }),
        }
    }

    pub fn into_result(self) -> Result<(), Error> {
        match self {
            Status::Succeeded => Ok(()),
            Status::Failed(error) => Err(error),
        }
    }

    pub fn and_then<F>(self, op: F) -> Status
    where
        F: FnOnce() -> Status,
    {
        match self {
            Status::Succeeded => op(),
            Status::Failed(error) => Status::Failed(error),
        }
    }

    /// Produces a value once the status has succeeded.
    pub fn then_value<T, F>(self, op: F) -> Outcome<T>
    where
        F: FnOnce() -> T,
    {
        match self {
            Status::Succeeded => Outcome::Succeeded(op()),
            Status::Failed(error) => Outcome::Failed(error),
        }
    }

    /// Runs `op` only on success; its outcome replaces this status.
    pub fn and_then_outcome<T, F>(self, op: F) -> Outcome<T>
    where
        F: FnOnce() -> Outcome<T>,
    {
        match self {
            Status::Succeeded => op(),
            Status::Failed(error) => Outcome::Failed(error),
        }
    }

    pub fn or(self, fallback: Status) -> Status {
        match self {
            Status::Succeeded => Status::Succeeded,
            Status::Failed(_) => fallback,
        }
    }

    pub fn or_else<F>(self, fallback: F) -> Status
    where
        F: FnOnce(Error) -> Status,
    {
        match self {
            Status::Succeeded => Status::Succeeded,
            Status::Failed(error) => fallback(error),
        }
    }

    pub fn inspect<F>(self, op: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_succeeded() {
            op();
        }
        self
    }

    pub fn inspect_err<F>(self, op: F) -> Self
    where
        F: FnOnce(&Error),
    {
        if let Status::Failed(error) = &self {
            op(error);
        }
        self
    }

    pub fn with_error<F>(self, op: F) -> Self
    where
        F: FnOnce(Error) -> Error,
    {
        match self {
            Status::Succeeded => Status::Succeeded,
            Status::Failed(error) => Status::Failed(op(error)),
        }
    }

    pub fn fold<R, S, F>(self, on_succeeded: S, on_failed: F) -> R
    where
        S: FnOnce() -> R,
        F: FnOnce(Error) -> R,
    {
        match self {
            Status::Succeeded => on_succeeded(),
            Status::Failed(error) => on_failed(error),
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Failed(Error::uninitialized())
    }
}

impl From<Result<(), Error>> for Status {
    fn from(result: Result<(), Error>) -> Self {
        match result {
            Ok(()) => Status::Succeeded,
            Err(error) => Status::Failed(error),
        }
    }
}
