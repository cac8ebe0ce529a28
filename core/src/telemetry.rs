//! # Telemetry: Observability Decorators
//!
//! `traced` is an inspect-style combinator that reports the state of a result
//! through `tracing` and hands the instance back untouched.

use crate::error::Error;
use crate::lookup::Lookup;
use crate::outcome::Outcome;
use crate::state::State;
use crate::status::Status;

/// Emits one `tracing` event describing the current state.
///
/// Succeeded and absent results log at `debug`, failed ones at `warn` with
/// the error code and message.
pub trait Traced: Sized {
    fn traced(self, label: &str) -> Self;
}

fn record(label: &str, state: State, error: Option<&Error>) {
    match error {
        Some(error) => tracing::warn!(
            verdict.label = %label,
            verdict.state = %state,
            error.code = %error.code(),
            error.nested = error.nested().len(),
            "{}",
            error.message()
        ),
        None => tracing::debug!(verdict.label = %label, verdict.state = %state, "result resolved"),
    }
}

impl Traced for Status {
    fn traced(self, label: &str) -> Self {
        record(label, self.state(), self.try_error().ok());
        self
    }
}

impl<T> Traced for Outcome<T> {
    fn traced(self, label: &str) -> Self {
        record(label, self.state(), self.try_error().ok());
        self
    }
}

impl<T> Traced for Lookup<T> {
    fn traced(self, label: &str) -> Self {
        record(label, self.state(), self.try_error().ok());
        self
    }
}
