//! A small checkout flow written against the facade crate.

use std::collections::HashMap;
use verdict::prelude::*;
use verdict::codes;
use verdict_test::{assert_absent, assert_error_code, assert_succeeded, init_tracing};

#[derive(Debug, Clone, PartialEq)]
struct User {
    id: u32,
    name: String,
}

struct Store {
    users: HashMap<u32, User>,
    coupons: HashMap<String, u32>,
    stock: HashMap<String, u32>,
}

impl Store {
    fn seeded() -> Self {
        Store {
            users: [(1, User { id: 1, name: "ada".into() })].into_iter().collect(),
            coupons: [("WELCOME".to_string(), 10)].into_iter().collect(),
            stock: [("book".to_string(), 2), ("lamp".to_string(), 0)].into_iter().collect(),
        }
    }

    fn user(&self, id: u32) -> Outcome<User> {
        lookup_key(&self.users, &id)
            .map(Clone::clone)
            .to_outcome_or(Error::new("UnknownUser", format!("no user {id}")))
    }

    fn coupon(&self, code: &str) -> Lookup<u32> {
        lookup_key(&self.coupons, code).map(|pct| *pct)
    }

    fn reserve(&self, item: &str) -> Status {
        match self.stock.get(item) {
            Some(count) if *count > 0 => Status::succeed(),
            Some(_) => Status::fail(Error::new("OutOfStock", format!("{item} is sold out"))),
            None => Status::fail(Error::new("UnknownItem", format!("no item {item}"))),
        }
    }

    async fn price(&self, item: &str) -> Outcome<u32> {
        tokio::task::yield_now().await;
        match item {
            "book" => Outcome::succeed(40),
            "lamp" => Outcome::succeed(25),
            other => Outcome::fail(Error::new("UnknownItem", format!("no price for {other}"))),
        }
    }
}

#[test]
fn checkout_succeeds_with_optional_coupon() {
    init_tracing();
    let store = Store::seeded();

    let buyer = (store.user(1), store.reserve("book")).match_all(|(user, ())| user.id, |_| 0);
    assert_eq!(buyer, 1);

    let pct = store.coupon("WELCOME").or(Lookup::succeed(0)).traced("coupon");
    assert_eq!(assert_succeeded!(pct), 10);
    assert_absent!(store.coupon("SPRING"));
}

#[test]
fn checkout_reports_every_problem_at_once() {
    let store = Store::seeded();
    let policy = AbsencePolicy::new(Error::new("CouponRequired", "a coupon is required"));

    let error = (store.user(7), store.coupon("SPRING"), store.reserve("lamp"))
        .join_with(&policy)
        .traced("checkout");

    let error = assert_error_code!(error, codes::COMPOSITE);
    let order: Vec<_> = error.nested().iter().map(|e| e.code()).collect();
    assert_eq!(order, ["UnknownUser", "CouponRequired", "OutOfStock"]);
}

#[test]
fn cart_totals_collect_positionally() {
    let store = Store::seeded();
    let cart = ["book", "lamp", "kettle", "sofa"];

    let reserved = cart
        .iter()
        .map(|item| store.reserve(item).then_value(|| *item))
        .collect_outcomes();

    let failure = CompositeError::try_from(reserved.error().clone()).unwrap();
    let messages: Vec<_> = failure.errors().iter().map(|e| e.message()).collect();
    assert_eq!(messages, ["lamp is sold out", "no item kettle", "no item sofa"]);

    let first_known = cart.iter().first_where(|item| store.stock.contains_key(**item));
    assert_eq!(first_known, Lookup::succeed(&"book"));
}

#[test]
fn results_serialize_as_tagged_json() {
    let store = Store::seeded();
    let json = serde_json::to_value(store.user(1).map(|u| u.name)).unwrap();
    assert_eq!(json, serde_json::json!({ "succeeded": "ada" }));

    let json = serde_json::to_value(store.coupon("NONE")).unwrap();
    assert_eq!(json, serde_json::json!("absent"));

    let json = serde_json::to_value(store.reserve("lamp")).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "failed": { "code": "OutOfStock", "message": "lamp is sold out" } })
    );
}

#[tokio::test]
async fn async_checkout_prices_the_cart() {
    init_tracing();
    let store = Store::seeded();

    let book = store.price("book").await;
    let lamp = store.price("lamp").await;
    let total = (book, lamp)
        .match_all_async(|(a, b)| async move { a + b }, |_| async { 0 })
        .await;
    assert_eq!(total, 65);

    let name = store
        .user(1)
        .map_async(|user| async move { user.name.to_uppercase() })
        .await;
    assert_eq!(name, Outcome::succeed("ADA".to_string()));

    let coupon = store
        .coupon("SPRING")
        .or_else_async(|| async { Lookup::succeed(5) })
        .traced_async("coupon")
        .await;
    assert_eq!(coupon, Lookup::succeed(5));
}

#[tokio::test]
async fn async_failure_keeps_original_error() {
    let store = Store::seeded();
    let original = store.price("kettle").await;
    let expected = original.error().clone();

    let charged = original
        .and_then_async(|cents| async move { Outcome::succeed(cents * 2) })
        .await;
    assert!(Error::ptr_eq(charged.error(), &expected));

    let status = store
        .reserve("lamp")
        .or_else_async(|e| async move { Status::fail(Error::new("Backorder", e.message())) })
        .await;
    assert_error_code!(status, "Backorder");
}
