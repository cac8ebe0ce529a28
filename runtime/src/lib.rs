//! # Verdict Runtime
//!
//! Async variants of the verdict combinators. Every `*_async` method keeps
//! the contract of its synchronous namesake in `verdict-core`; the only
//! difference is that the callback returns a future which is awaited.
//!
//! Callbacks are `Send` and payloads are `Send + 'static`, so chains can be
//! spawned on a multi-threaded executor.

pub mod join;
pub mod lookup;
pub mod outcome;
pub mod status;
pub mod telemetry;

pub use join::JoinAsyncExt;
pub use lookup::LookupAsyncExt;
pub use outcome::OutcomeAsyncExt;
pub use status::StatusAsyncExt;
pub use telemetry::TracedFutureExt;

pub mod prelude {
    pub use crate::join::JoinAsyncExt;
    pub use crate::lookup::LookupAsyncExt;
    pub use crate::outcome::OutcomeAsyncExt;
    pub use crate::status::StatusAsyncExt;
    pub use crate::telemetry::TracedFutureExt;
}
