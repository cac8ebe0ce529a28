//! Verdict facade crate.
//!
//! Re-exports the core algebra, the async combinators and (with the default
//! `std` feature) the collection helpers behind a single entry point.

pub use verdict_core as core;
pub use verdict_runtime as runtime;
#[cfg(feature = "std")]
pub use verdict_std as std;

pub use verdict_core::{
    AbsencePolicy, CompositeError, Error, Fault, Join, Lookup, Outcome, State, Status, codes,
};

pub mod prelude {
    pub use verdict_core::prelude::*;
    pub use verdict_runtime::prelude::*;
    #[cfg(feature = "std")]
    pub use verdict_std::prelude::*;
}
