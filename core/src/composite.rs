//! # Composite Errors
//!
//! Several independent failures are reported as one [`Error`] whose identity
//! is the ordered list of its members. Aggregation never wraps a single error,
//! and never nests a composite inside another one: a composite input is
//! spliced in place, keeping left-to-right order.

use crate::error::Error;
use crate::state::Fault;
use std::ops::Deref;

/// A checked view over a composite [`Error`].
///
/// Holding a `CompositeError` guarantees at least two nested errors, none of
/// them composite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeError(Error);

impl CompositeError {
    /// Merges `errors` into a single error.
    ///
    /// One element is returned unchanged. Two or more become a composite in
    /// input order, with composite members flattened one level. An empty
    /// input is a caller fault.
    pub fn aggregate<I>(errors: I) -> Result<Error, Fault>
    where
        I: IntoIterator<Item = Error>,
    {
        let mut aggregator = Aggregator::new();
        aggregator.extend(errors);
        aggregator.finish().ok_or(Fault::EmptyAggregate)
    }

    /// The member errors in their original order.
    pub fn errors(&self) -> &[Error] {
        self.0.nested()
    }

    pub fn len(&self) -> usize {
        self.errors().len()
    }

    /// Always false; kept for symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn into_error(self) -> Error {
        self.0
    }
}

impl TryFrom<Error> for CompositeError {
    type Error = Error;

    /// Succeeds only for composite errors; plain errors are handed back.
    fn try_from(error: Error) -> Result<Self, Self::Error> {
        if error.is_composite() {
            Ok(Self(error))
        } else {
            Err(error)
        }
    }
}

impl Deref for CompositeError {
    type Target = Error;

    fn deref(&self) -> &Error {
        &self.0
    }
}

impl From<CompositeError> for Error {
    fn from(composite: CompositeError) -> Self {
        composite.0
    }
}

/// Free-function form of [`CompositeError::aggregate`].
pub fn aggregate<I>(errors: I) -> Result<Error, Fault>
where
    I: IntoIterator<Item = Error>,
{
    CompositeError::aggregate(errors)
}

/// Incremental, order-preserving error accumulator.
///
/// Used where the number of failures is only known after inspecting every
/// member; `finish` returns `None` when nothing failed.
#[derive(Debug, Default)]
pub struct Aggregator {
    first: Option<Error>,
    flat: Vec<Error>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: Error) {
        if self.first.is_none() && self.flat.is_empty() {
            self.first = Some(error);
            return;
        }
        if let Some(first) = self.first.take() {
            Self::splice(&mut self.flat, first);
        }
        Self::splice(&mut self.flat, error);
    }

    fn splice(flat: &mut Vec<Error>, error: Error) {
        if error.is_composite() {
            flat.extend(error.nested().iter().cloned());
        } else {
            flat.push(error);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_none() && self.flat.is_empty()
    }

    pub fn finish(self) -> Option<Error> {
        if let Some(only) = self.first {
            return Some(only);
        }
        match self.flat.len() {
            0 => None,
            count => {
                tracing::trace!(members = count, "aggregated failures into composite error");
                Some(Error::composite(self.flat))
            }
        }
    }
}

impl Extend<Error> for Aggregator {
    fn extend<I: IntoIterator<Item = Error>>(&mut self, iter: I) {
        for error in iter {
            self.push(error);
        }
    }
}
