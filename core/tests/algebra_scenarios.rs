//! End-to-end scenarios across shapes, conversions and joins.

use verdict_core::prelude::*;
use verdict_core::{AbsencePolicy, codes};

fn e(code: &str) -> Error {
    Error::new(code, format!("{code} happened"))
}

#[test]
fn succeeded_map_and_chain() {
    assert_eq!(Outcome::succeed(5).map(|x| x + 1), Outcome::succeed(6));

    let chained = Outcome::succeed(5).and_then(|x| Outcome::succeed(x.to_string()));
    assert_eq!(chained, Outcome::succeed("5".to_string()));
}

#[test]
fn failed_is_inert_until_rewritten() {
    let original = e("E");

    let mapped = Outcome::<i32>::fail(original.clone())
        .map(|x| x + 1)
        .and_then(|x| Outcome::succeed(x * 2));
    assert!(Error::ptr_eq(mapped.error(), &original));

    let filtered = Lookup::<i32>::fail(original.clone()).filter(|_| true);
    assert!(Error::ptr_eq(filtered.error(), &original));

    let rewritten = Lookup::<i32>::fail(original).with_error(|_| e("Replaced"));
    assert_eq!(rewritten.error().code(), "Replaced");
}

#[test]
fn absent_stays_absent() {
    assert_eq!(Lookup::<i32>::absent().filter(|_| true), Lookup::absent());
    assert_eq!(Lookup::<i32>::absent().map(|x| x + 1), Lookup::absent());
    assert_eq!(
        Lookup::<i32>::absent().and_then(|x| Lookup::succeed(x + 1)),
        Lookup::absent()
    );
}

#[test]
fn conversion_round_trips() {
    assert_eq!(
        Lookup::succeed(9).to_outcome().to_lookup(),
        Lookup::succeed(9)
    );

    let failure = e("E");
    let back = Outcome::<i32>::fail(failure.clone()).to_lookup().to_outcome();
    assert!(Error::ptr_eq(back.error(), &failure));

    let coerced = Lookup::<i32>::absent().to_outcome();
    assert_eq!(coerced.error().code(), codes::NOT_FOUND);
    let widened = coerced.to_lookup();
    assert!(widened.is_failed(), "absence is lost once coerced");
}

#[test]
fn aggregation_rules() {
    let (e1, e2, e3) = (e("E1"), e("E2"), e("E3"));

    assert!(Error::ptr_eq(&aggregate([e1.clone()]).unwrap(), &e1));

    let pair = aggregate([e1.clone(), e2.clone()]).unwrap();
    assert_eq!(pair.nested(), &[e1.clone(), e2.clone()]);

    let inner = aggregate([e2.clone(), e3.clone()]).unwrap();
    let flat = aggregate([e1.clone(), inner]).unwrap();
    assert_eq!(flat.nested(), &[e1, e2, e3]);

    assert_eq!(aggregate(Vec::new()), Err(Fault::EmptyAggregate));
}

#[test]
fn join_reports_absence_then_failure() {
    let failure = e("E");
    let mut calls = 0;
    let mut reported = None;
    let _ = (Outcome::succeed(1), Lookup::<i32>::absent(), Outcome::<i32>::fail(failure.clone()))
        .any_failed(|error| {
            calls += 1;
            reported = Some(error);
        });

    assert_eq!(calls, 1);
    let reported = CompositeError::try_from(reported.unwrap()).unwrap();
    assert_eq!(reported.errors()[0].code(), codes::NOT_FOUND);
    assert!(Error::ptr_eq(&reported.errors()[1], &failure));
}

#[test]
fn join_with_custom_absence_policy() {
    let policy = AbsencePolicy::from_toml_str(
        r#"
        [not_found]
        code = "ProfileMissing"
        message = "the user has no profile"
        "#,
    )
    .unwrap();

    let joined =
        (Outcome::succeed("alice".to_string()), Lookup::<u32>::absent()).join_with(&policy);
    assert_eq!(joined.error().code(), "ProfileMissing");
}
