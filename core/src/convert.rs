//! Conversions between the three result shapes.
//!
//! Widening (`Outcome` → `Lookup`) never produces `Absent`. Narrowing
//! (`Lookup` → `Outcome`) turns `Absent` into `Failed` using an
//! [`AbsencePolicy`]; once coerced, the absence cannot be recovered.

use crate::error::Error;
use crate::lookup::Lookup;
use crate::outcome::Outcome;
use crate::policy::AbsencePolicy;
use crate::status::Status;

impl<T> Outcome<T> {
    pub fn to_lookup(self) -> Lookup<T> {
        match self {
            Outcome::Succeeded(value) => Lookup::Succeeded(value),
            Outcome::Failed(error) => Lookup::Failed(error),
        }
    }

    pub fn to_status(self) -> Status {
        match self {
            Outcome::Succeeded(_) => Status::Succeeded,
            Outcome::Failed(error) => Status::Failed(error),
        }
    }
}

impl<T> Lookup<T> {
    /// Narrows with the default policy (`NotFound`).
    pub fn to_outcome(self) -> Outcome<T> {
        self.to_outcome_with(&AbsencePolicy::default())
    }

    pub fn to_outcome_with(self, policy: &AbsencePolicy) -> Outcome<T> {
        self.to_outcome_or(policy.not_found().clone())
    }

    pub fn to_outcome_or(self, not_found: Error) -> Outcome<T> {
        match self {
            Lookup::Succeeded(value) => Outcome::Succeeded(value),
            Lookup::Absent => Outcome::Failed(not_found),
            Lookup::Failed(error) => Outcome::Failed(error),
        }
    }

    pub fn to_status_with(self, policy: &AbsencePolicy) -> Status {
        self.to_outcome_with(policy).to_status()
    }
}

impl<T> From<Outcome<T>> for Lookup<T> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.to_lookup()
    }
}
