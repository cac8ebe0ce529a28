//! # Seek: Iterator Searches as Lookups
//!
//! Searches whose "nothing matched" outcome is ordinary absence rather than
//! an error. Only [`SeekExt::single_or_absent`] can fail: more than one
//! match is ambiguous and reported as [`codes::MULTIPLE_MATCHES`].
//!
//! [`codes::MULTIPLE_MATCHES`]: verdict_core::codes::MULTIPLE_MATCHES

use verdict_core::{AbsencePolicy, Error, Lookup, Outcome};

pub trait SeekExt: Iterator + Sized {
    /// The first item, or `Absent` for an empty iterator.
    fn first_lookup(mut self) -> Lookup<Self::Item> {
        self.next().into()
    }

    fn first_where<P>(mut self, predicate: P) -> Lookup<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.find(predicate).into()
    }

    fn last_lookup(self) -> Lookup<Self::Item> {
        self.last().into()
    }

    fn last_where<P>(self, mut predicate: P) -> Lookup<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.filter(|item| predicate(item)).last().into()
    }

    /// Exactly one item succeeds, none is `Absent`, several fail.
    ///
    /// Stops after the second item.
    fn single_or_absent(mut self) -> Lookup<Self::Item> {
        match (self.next(), self.next()) {
            (None, _) => Lookup::Absent,
            (Some(item), None) => Lookup::Succeeded(item),
            (Some(_), Some(_)) => {
                tracing::debug!("sequence holds more than one item");
                Lookup::Failed(Error::multiple_matches())
            }
        }
    }

    /// [`SeekExt::single_or_absent`] with absence coerced to
    /// `policy.not_found()`.
    fn single_outcome(self, policy: &AbsencePolicy) -> Outcome<Self::Item> {
        self.single_or_absent().to_outcome_with(policy)
    }
}

impl<I: Iterator> SeekExt for I {}

#[cfg(test)]
mod tests {
    use super::*;
    use verdict_core::codes;

    #[test]
    fn test_first_and_last() {
        assert_eq!([1, 2, 3].into_iter().first_lookup(), Lookup::succeed(1));
        assert_eq!([1, 2, 3].into_iter().last_lookup(), Lookup::succeed(3));
        assert_eq!(Vec::<i32>::new().into_iter().first_lookup(), Lookup::absent());
        assert_eq!(Vec::<i32>::new().into_iter().last_lookup(), Lookup::absent());
    }

    #[test]
    fn test_predicate_searches() {
        let names = ["ada", "bob", "alan", "cy"];
        assert_eq!(names.iter().first_where(|n| n.starts_with('a')), Lookup::succeed(&"ada"));
        assert_eq!(names.iter().last_where(|n| n.starts_with('a')), Lookup::succeed(&"alan"));
        assert!(names.iter().first_where(|n| n.is_empty()).is_absent());
    }

    #[test]
    fn test_single_or_absent() {
        assert_eq!(std::iter::once(7).single_or_absent(), Lookup::succeed(7));
        assert!(std::iter::empty::<i32>().single_or_absent().is_absent());

        let many = [1, 2, 3].into_iter().single_or_absent();
        assert_eq!(many.error().code(), codes::MULTIPLE_MATCHES);
    }

    #[test]
    fn test_single_or_absent_stops_after_second_item() {
        let mut pulled = 0;
        let _ = (0..100).inspect(|_| pulled += 1).single_or_absent();
        assert_eq!(pulled, 2);
    }

    #[test]
    fn test_single_outcome_uses_policy() {
        let policy = AbsencePolicy::new(Error::new("NoAdmin", "no admin configured"));
        let out = std::iter::empty::<&str>().single_outcome(&policy);
        assert!(Error::ptr_eq(out.error(), policy.not_found()));

        assert_eq!(["root"].into_iter().single_outcome(&policy), Outcome::succeed("root"));
    }
}
