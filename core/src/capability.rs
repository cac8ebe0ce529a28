//! # Verdict: The Minimal Result Capability
//!
//! `Verdict` is what every result shape looks like once its payload type is
//! erased: a success predicate, the error it would report, and an untyped
//! view of the value. The N-ary layer works against `&dyn Verdict` so one
//! aggregation routine serves every arity and every mix of shapes.
//!
//! `Member` layers typed payload access back on top, for the places where
//! callbacks receive the actual values.

use crate::composite::Aggregator;
use crate::error::Error;
use crate::lookup::Lookup;
use crate::outcome::Outcome;
use crate::policy::AbsencePolicy;
use crate::status::Status;
use std::any::Any;

/// Object-safe view of a result with its payload type erased.
///
/// Contract: `failure` returns `Some` exactly when `is_succeeded` is false.
pub trait Verdict {
    fn is_succeeded(&self) -> bool;

    /// The error this result stands for, if it did not succeed.
    ///
    /// `Absent` reports `policy.not_found()`.
    fn failure(&self, policy: &AbsencePolicy) -> Option<Error>;

    /// The success payload as `&dyn Any`, if succeeded.
    fn success_any(&self) -> Option<&dyn Any>;
}

/// A `Verdict` whose payload can be moved out and put back.
pub trait Member: Verdict + Sized {
    type Value;

    /// The payload if succeeded, otherwise the untouched result.
    fn into_value(self) -> Result<Self::Value, Self>;

    /// Rebuilds a succeeded result around `value`.
    fn from_value(value: Self::Value) -> Self;
}

impl Verdict for Status {
    fn is_succeeded(&self) -> bool {
        Status::is_succeeded(self)
    }

    fn failure(&self, _policy: &AbsencePolicy) -> Option<Error> {
        match self {
            Status::Succeeded => None,
            Status::Failed(error) => Some(error.clone()),
        }
    }

    fn success_any(&self) -> Option<&dyn Any> {
        match self {
            Status::Succeeded => Some(&()),
            Status::Failed(_) => None,
        }
    }
}

impl Member for Status {
    type Value = ();

    fn into_value(self) -> Result<(), Self> {
        match self {
            Status::Succeeded => Ok(()),
            failed => Err(failed),
        }
    }

    fn from_value(_value: ()) -> Self {
        Status::Succeeded
    }
}

impl<T: Any> Verdict for Outcome<T> {
    fn is_succeeded(&self) -> bool {
        Outcome::is_succeeded(self)
    }

    fn failure(&self, _policy: &AbsencePolicy) -> Option<Error> {
        match self {
            Outcome::Succeeded(_) => None,
            Outcome::Failed(error) => Some(error.clone()),
        }
    }

    fn success_any(&self) -> Option<&dyn Any> {
        self.ok().map(|value| value as &dyn Any)
    }
}

impl<T: Any> Member for Outcome<T> {
    type Value = T;

    fn into_value(self) -> Result<T, Self> {
        match self {
            Outcome::Succeeded(value) => Ok(value),
            failed => Err(failed),
        }
    }

    fn from_value(value: T) -> Self {
        Outcome::Succeeded(value)
    }
}

impl<T: Any> Verdict for Lookup<T> {
    fn is_succeeded(&self) -> bool {
        Lookup::is_succeeded(self)
    }

    fn failure(&self, policy: &AbsencePolicy) -> Option<Error> {
        match self {
            Lookup::Succeeded(_) => None,
            Lookup::Absent => Some(policy.not_found().clone()),
            Lookup::Failed(error) => Some(error.clone()),
        }
    }

    fn success_any(&self) -> Option<&dyn Any> {
        self.ok().map(|value| value as &dyn Any)
    }
}

impl<T: Any> Member for Lookup<T> {
    type Value = T;

    fn into_value(self) -> Result<T, Self> {
        match self {
            Lookup::Succeeded(value) => Ok(value),
            other => Err(other),
        }
    }

    fn from_value(value: T) -> Self {
        Lookup::Succeeded(value)
    }
}

/// Aggregates the failures of `members` in positional order.
///
/// Returns `None` when every member succeeded, the lone error when exactly
/// one did not, and a flattened composite otherwise.
pub fn aggregate_failures(members: &[&dyn Verdict], policy: &AbsencePolicy) -> Option<Error> {
    let mut aggregator = Aggregator::new();
    aggregator.extend(members.iter().filter_map(|member| member.failure(policy)));
    aggregator.finish()
}
