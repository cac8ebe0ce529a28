//! # Verdict Core
//!
//! A value-based error and absence algebra. Fallible and optional
//! computations return one of three closed result shapes and are composed
//! with combinators instead of panics or sentinel values.
//!
//! ## Architecture
//!
//! ```text
//! Error / CompositeError   ← immutable failure descriptors, ordered aggregation
//!     │
//! Status / Outcome / Lookup ← no-value, value, value-or-absent results
//!     │
//! combinators              ← map, and_then, filter, or, inspect, with_error, fold
//!     │
//! Verdict / Join           ← erased capability + N-ary tuple composition
//! ```
//!
//! Misuse of the API (reading a value out of a failed result, aggregating
//! nothing) is a [`Fault`], never a domain [`Error`].

pub mod capability;
pub mod composite;
pub mod convert;
pub mod error;
pub mod join;
pub mod lookup;
pub mod outcome;
pub mod policy;
pub mod state;
pub mod status;
pub mod telemetry;

pub use capability::{Member, Verdict, aggregate_failures};
pub use composite::{Aggregator, CompositeError, aggregate};
pub use error::{Error, codes};
pub use join::Join;
pub use lookup::Lookup;
pub use outcome::Outcome;
pub use policy::{AbsencePolicy, AbsencePolicyConfig, ConfigError, ErrorConfig};
pub use state::{Fault, State};
pub use status::Status;
pub use telemetry::Traced;

pub mod prelude {
    pub use crate::capability::{Member, Verdict};
    pub use crate::composite::{CompositeError, aggregate};
    pub use crate::error::Error;
    pub use crate::join::Join;
    pub use crate::lookup::Lookup;
    pub use crate::outcome::Outcome;
    pub use crate::policy::AbsencePolicy;
    pub use crate::state::{Fault, State};
    pub use crate::status::Status;
    pub use crate::telemetry::Traced;
}
