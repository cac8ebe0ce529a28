use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};
use verdict_core::{Aggregator, Lookup, Outcome};

/// Gathers a sequence of outcomes into one.
pub trait CollectOutcomes<T>: Iterator<Item = Outcome<T>> + Sized {
    /// Every payload in order when all succeeded. Otherwise every failure,
    /// aggregated positionally; a single failure is returned as is.
    ///
    /// The whole sequence is consumed either way.
    fn collect_outcomes(self) -> Outcome<Vec<T>> {
        let mut values = Vec::new();
        let mut failures = Aggregator::new();
        for outcome in self {
            match outcome {
                Outcome::Succeeded(value) => values.push(value),
                Outcome::Failed(error) => failures.push(error),
            }
        }
        match failures.finish() {
            Some(error) => Outcome::Failed(error),
            None => Outcome::Succeeded(values),
        }
    }
}

impl<T, I> CollectOutcomes<T> for I where I: Iterator<Item = Outcome<T>> {}

/// Keyed containers whose entries can be read as a [`Lookup`].
pub trait Keyed<Q: ?Sized> {
    type Value;

    fn entry_for(&self, key: &Q) -> Option<&Self::Value>;
}

impl<K, V, S, Q> Keyed<Q> for HashMap<K, V, S>
where
    K: Borrow<Q> + Hash + Eq,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    type Value = V;

    fn entry_for(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

impl<K, V, Q> Keyed<Q> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    type Value = V;

    fn entry_for(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

/// A missing key is `Absent`, never `Failed`.
pub fn lookup_key<'m, M, Q>(map: &'m M, key: &Q) -> Lookup<&'m M::Value>
where
    M: Keyed<Q> + ?Sized,
    Q: ?Sized,
{
    map.entry_for(key).into()
}
