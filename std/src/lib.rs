//! # Verdict Std
//!
//! Everyday helpers that produce verdict results from standard collections:
//! iterator searches ([`SeekExt`]), gathering outcomes ([`CollectOutcomes`])
//! and keyed reads ([`lookup_key`]).

pub mod collect;
pub mod prelude;
pub mod seek;

pub use collect::{CollectOutcomes, Keyed, lookup_key};
pub use seek::SeekExt;
