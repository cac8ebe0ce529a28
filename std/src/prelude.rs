pub use crate::collect::{CollectOutcomes, Keyed, lookup_key};
pub use crate::seek::SeekExt;
