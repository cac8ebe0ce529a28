//! # Join: N-ary Composition
//!
//! A tuple of 2 to 8 results (any mix of `Status`, `Outcome<T>` and
//! `Lookup<T>`) is judged as one decision: it succeeds only when every member
//! succeeded, and otherwise reports the failures of all non-succeeded
//! members, aggregated in positional order.
//!
//! ```rust
//! use verdict_core::prelude::*;
//!
//! let total = (Outcome::succeed(2), Lookup::succeed(3), Status::succeed())
//!     .match_all(|(a, b, ())| a * b, |_| 0);
//! assert_eq!(total, 6);
//! ```
//!
//! Failure detection goes through the erased [`Verdict`] view, so there is a
//! single aggregation routine ([`aggregate_failures`]); the macro below only
//! supplies typed payload plumbing per arity.

use crate::capability::{Member, Verdict, aggregate_failures};
use crate::error::Error;
use crate::outcome::Outcome;
use crate::policy::AbsencePolicy;

/// Fixed-size heterogeneous collection of results.
pub trait Join: Sized {
    /// The payload tuple handed to success callbacks.
    type Values;

    /// Every member, erased, in positional order.
    fn verdicts(&self) -> Vec<&dyn Verdict>;

    /// All payloads if every member succeeded, otherwise the untouched tuple.
    fn into_values(self) -> Result<Self::Values, Self>;

    fn from_values(values: Self::Values) -> Self;

    fn is_all_succeeded(&self) -> bool {
        self.verdicts().iter().all(|member| member.is_succeeded())
    }

    fn failure(&self) -> Option<Error> {
        self.failure_with(&AbsencePolicy::default())
    }

    /// Aggregated failure of every non-succeeded member, left to right.
    fn failure_with(&self, policy: &AbsencePolicy) -> Option<Error> {
        aggregate_failures(&self.verdicts(), policy)
    }

    /// Runs `on_all` with every payload when all members succeeded.
    ///
    /// The tuple is returned unchanged either way.
    fn all_succeeded<F>(self, on_all: F) -> Self
    where
        F: FnOnce(&Self::Values),
    {
        match self.into_values() {
            Ok(values) => {
                on_all(&values);
                Self::from_values(values)
            }
            Err(original) => original,
        }
    }

    fn any_failed<F>(self, on_any: F) -> Self
    where
        F: FnOnce(Error),
    {
        self.any_failed_with(&AbsencePolicy::default(), on_any)
    }

    /// Runs `on_any` once with the aggregated failure, if any member did
    /// not succeed. `Absent` members report `policy.not_found()`.
    fn any_failed_with<F>(self, policy: &AbsencePolicy, on_any: F) -> Self
    where
        F: FnOnce(Error),
    {
        if let Some(error) = self.failure_with(policy) {
            on_any(error);
        }
        self
    }

    fn match_all<R, S, F>(self, on_all: S, on_any: F) -> R
    where
        S: FnOnce(Self::Values) -> R,
        F: FnOnce(Error) -> R,
    {
        self.match_all_with(&AbsencePolicy::default(), on_all, on_any)
    }

    /// Total two-branch decision over the whole tuple.
    fn match_all_with<R, S, F>(self, policy: &AbsencePolicy, on_all: S, on_any: F) -> R
    where
        S: FnOnce(Self::Values) -> R,
        F: FnOnce(Error) -> R,
    {
        match self.into_values() {
            Ok(values) => on_all(values),
            // A member that did not succeed always reports a failure.
            Err(original) => on_any(
                original
                    .failure_with(policy)
                    .unwrap_or_else(Error::uninitialized),
            ),
        }
    }

    /// Collapses the tuple into a single `Outcome` of all payloads.
    fn join(self) -> Outcome<Self::Values> {
        self.join_with(&AbsencePolicy::default())
    }

    fn join_with(self, policy: &AbsencePolicy) -> Outcome<Self::Values> {
        self.match_all_with(policy, Outcome::Succeeded, Outcome::Failed)
    }
}

macro_rules! impl_join {
    ($($member:ident $slot:ident),+) => {
        impl<$($member: Member),+> Join for ($($member,)+) {
            type Values = ($($member::Value,)+);

            fn verdicts(&self) -> Vec<&dyn Verdict> {
                let ($($slot,)+) = self;
                vec![$($slot as &dyn Verdict),+]
            }

            fn into_values(self) -> Result<Self::Values, Self> {
                let ($($slot,)+) = self;
                match ($($slot.into_value(),)+) {
                    ($(Ok($slot),)+) => Ok(($($slot,)+)),
                    ($($slot,)+) => Err(($(
                        match $slot {
                            Ok(value) => $member::from_value(value),
                            Err(original) => original,
                        },
                    )+)),
                }
            }

            fn from_values(values: Self::Values) -> Self {
                let ($($slot,)+) = values;
                ($($member::from_value($slot),)+)
            }
        }
    };
}

impl_join!(A a, B b);
impl_join!(A a, B b, C c);
impl_join!(A a, B b, C c, D d);
impl_join!(A a, B b, C c, D d, E e);
impl_join!(A a, B b, C c, D d, E e, F f);
impl_join!(A a, B b, C c, D d, E e, F f, G g);
impl_join!(A a, B b, C c, D d, E e, F f, G g, H h);
