//! # Verdict Test
//!
//! Assertion macros for `Status`, `Outcome` and `Lookup`, and a one-call
//! tracing setup for test binaries.
//!
//! ```rust
//! use verdict_core::prelude::*;
//! use verdict_test::{assert_absent, assert_error_code, assert_succeeded};
//!
//! let port = assert_succeeded!(Outcome::succeed(8080));
//! assert_eq!(port, 8080);
//!
//! assert_absent!(Lookup::<u16>::absent());
//! assert_error_code!(Lookup::<u16>::absent().to_outcome(), "NotFound");
//! ```

use std::fmt::Debug;
use std::sync::Once;
use tracing_subscriber::EnvFilter;
use verdict_core::{Error, Lookup, Outcome, State, Status};

const DEFAULT_FILTER: &str = concat!(
    "verdict_core=debug,verdict_runtime=debug,",
    "verdict_std=debug,verdict_test=debug,warn",
);

/// Installs a `fmt` subscriber writing through the test harness.
///
/// `RUST_LOG` overrides the default filter. Safe to call from every test;
/// only the first call installs anything.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        // Another harness may already own the global subscriber.
        if tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
            .is_ok()
        {
            tracing::debug!("test tracing initialized");
        }
    });
}

/// Uniform view over the three shapes, used by the assertion macros.
pub trait Shape: Debug + Sized {
    type Value;

    fn shape_state(&self) -> State;

    fn shape_error(&self) -> Option<&Error>;

    fn into_success(self) -> Result<Self::Value, Self>;
}

impl Shape for Status {
    type Value = ();

    fn shape_state(&self) -> State {
        self.state()
    }

    fn shape_error(&self) -> Option<&Error> {
        self.try_error().ok()
    }

    fn into_success(self) -> Result<(), Self> {
        match self {
            Status::Succeeded => Ok(()),
            failed => Err(failed),
        }
    }
}

impl<T: Debug> Shape for Outcome<T> {
    type Value = T;

    fn shape_state(&self) -> State {
        self.state()
    }

    fn shape_error(&self) -> Option<&Error> {
        self.try_error().ok()
    }

    fn into_success(self) -> Result<T, Self> {
        match self {
            Outcome::Succeeded(value) => Ok(value),
            failed => Err(failed),
        }
    }
}

impl<T: Debug> Shape for Lookup<T> {
    type Value = T;

    fn shape_state(&self) -> State {
        self.state()
    }

    fn shape_error(&self) -> Option<&Error> {
        self.try_error().ok()
    }

    fn into_success(self) -> Result<T, Self> {
        match self {
            Lookup::Succeeded(value) => Ok(value),
            other => Err(other),
        }
    }
}

#[doc(hidden)]
#[track_caller]
pub fn expect_succeeded<S: Shape>(subject: S, expr: &str) -> S::Value {
    match subject.into_success() {
        Ok(value) => value,
        Err(other) => panic!("expected `{expr}` to be succeeded, got {other:?}"),
    }
}

#[doc(hidden)]
#[track_caller]
pub fn expect_failed<S: Shape>(subject: S, expr: &str) -> Error {
    match subject.shape_error() {
        Some(error) => error.clone(),
        None => panic!("expected `{expr}` to be failed, got {subject:?}"),
    }
}

#[doc(hidden)]
#[track_caller]
pub fn expect_absent<S: Shape>(subject: S, expr: &str) {
    if subject.shape_state() != State::Absent {
        panic!("expected `{expr}` to be absent, got {subject:?}");
    }
}

#[doc(hidden)]
#[track_caller]
pub fn expect_error_code<S: Shape>(subject: S, code: &str, expr: &str) -> Error {
    let error = expect_failed(subject, expr);
    if error.code() != code {
        panic!(
            "expected `{expr}` to fail with code `{code}`, got `{}`: {}",
            error.code(),
            error.message()
        );
    }
    error
}

/// Asserts the result succeeded and evaluates to its payload.
#[macro_export]
macro_rules! assert_succeeded {
    ($subject:expr $(,)?) => {
        $crate::expect_succeeded($subject, stringify!($subject))
    };
}

/// Asserts the result failed and evaluates to a clone of its error.
#[macro_export]
macro_rules! assert_failed {
    ($subject:expr $(,)?) => {
        $crate::expect_failed($subject, stringify!($subject))
    };
}

#[macro_export]
macro_rules! assert_absent {
    ($subject:expr $(,)?) => {
        $crate::expect_absent($subject, stringify!($subject))
    };
}

/// Asserts the result failed with the given error code.
#[macro_export]
macro_rules! assert_error_code {
    ($subject:expr, $code:expr $(,)?) => {
        $crate::expect_error_code($subject, $code, stringify!($subject))
    };
}
