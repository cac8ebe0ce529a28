//! State tags and caller faults.
//!
//! Two fault classes never mix: domain failures are [`Error`](crate::Error)
//! values inside `Failed`, while [`Fault`] reports misuse of the API itself
//! (reading a value out of a failed result, aggregating nothing).

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// The terminal state a result was constructed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum State {
    Succeeded,
    Absent,
    Failed,
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            State::Succeeded => "succeeded",
            State::Absent => "absent",
            State::Failed => "failed",
        };
        f.write_str(label)
    }
}

/// A programming error in how a result was used.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    #[error("state mismatch: expected a {expected} result, found {actual}")]
    StateMismatch { expected: State, actual: State },
    #[error("cannot aggregate an empty sequence of errors")]
    EmptyAggregate,
}

/// Fails fast on a wrong-state accessor.
#[track_caller]
pub(crate) fn mismatch(expected: State, actual: State) -> ! {
    panic!("{}", Fault::StateMismatch { expected, actual })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_serializes_as_label() {
        for state in [State::Succeeded, State::Absent, State::Failed] {
            let json = serde_json::to_value(state).unwrap();
            assert_eq!(json, serde_json::Value::String(state.to_string()));
        }
    }

    #[test]
    fn test_mismatch_fault_message() {
        let fault = Fault::StateMismatch {
            expected: State::Succeeded,
            actual: State::Absent,
        };
        assert_eq!(fault.to_string(), "state mismatch: expected a succeeded result, found absent");
    }
}
