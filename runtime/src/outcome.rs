//! Async combinators for [`Outcome`].

use async_trait::async_trait;
use std::future::Future;
use verdict_core::{Error, Outcome};

/// Async counterparts of the `Outcome` combinators.
///
/// Each method has the contract of its synchronous namesake; only the
/// callback's result is awaited. Callbacks that receive a reference must
/// return a future that does not borrow from it.
#[async_trait]
pub trait OutcomeAsyncExt<T>: Sized + Send
where
    T: Send + 'static,
{
    async fn map_async<U, F, Fut>(self, op: F) -> Outcome<U>
    where
        U: Send,
        F: FnOnce(T) -> Fut + Send,
        Fut: Future<Output = U> + Send;

    async fn and_then_async<U, F, Fut>(self, op: F) -> Outcome<U>
    where
        U: Send,
        F: FnOnce(T) -> Fut + Send,
        Fut: Future<Output = Outcome<U>> + Send;

    async fn or_else_async<F, Fut>(self, fallback: F) -> Outcome<T>
    where
        F: FnOnce(Error) -> Fut + Send,
        Fut: Future<Output = Outcome<T>> + Send;

    async fn inspect_async<F, Fut>(self, op: F) -> Outcome<T>
    where
        F: FnOnce(&T) -> Fut + Send,
        Fut: Future<Output = ()> + Send;

    async fn inspect_err_async<F, Fut>(self, op: F) -> Outcome<T>
    where
        F: FnOnce(&Error) -> Fut + Send,
        Fut: Future<Output = ()> + Send;

    async fn with_error_async<F, Fut>(self, op: F) -> Outcome<T>
    where
        F: FnOnce(Error) -> Fut + Send,
        Fut: Future<Output = Error> + Send;

    async fn fold_async<R, S, SFut, F, FFut>(self, on_succeeded: S, on_failed: F) -> R
    where
        R: Send,
        S: FnOnce(T) -> SFut + Send,
        SFut: Future<Output = R> + Send,
        F: FnOnce(Error) -> FFut + Send,
        FFut: Future<Output = R> + Send;
}

#[async_trait]
impl<T> OutcomeAsyncExt<T> for Outcome<T>
where
    T: Send + 'static,
{
    async fn map_async<U, F, Fut>(self, op: F) -> Outcome<U>
    where
        U: Send,
        F: FnOnce(T) -> Fut + Send,
        Fut: Future<Output = U> + Send,
    {
        match self {
            Outcome::Succeeded(value) => Outcome::Succeeded(op(value).await),
            Outcome::Failed(error) => Outcome::Failed(error),
        }
    }

    async fn and_then_async<U, F, Fut>(self, op: F) -> Outcome<U>
    where
        U: Send,
        F: FnOnce(T) -> Fut + Send,
        Fut: Future<Output = Outcome<U>> + Send,
    {
        match self {
            Outcome::Succeeded(value) => op(value).await,
            Outcome::Failed(error) => Outcome::Failed(error),
        }
    }

    async fn or_else_async<F, Fut>(self, fallback: F) -> Outcome<T>
    where
        F: FnOnce(Error) -> Fut + Send,
        Fut: Future<Output = Outcome<T>> + Send,
    {
        match self {
            Outcome::Succeeded(value) => Outcome::Succeeded(value),
            Outcome::Failed(error) => fallback(error).await,
        }
    }

    async fn inspect_async<F, Fut>(self, op: F) -> Outcome<T>
    where
        F: FnOnce(&T) -> Fut + Send,
        Fut: Future<Output = ()> + Send,
    {
        let pending = match &self {
            Outcome::Succeeded(value) => Some(op(value)),
            Outcome::Failed(_) => None,
        };
        if let Some(pending) = pending {
            pending.await;
        }
        self
    }

    async fn inspect_err_async<F, Fut>(self, op: F) -> Outcome<T>
    where
        F: FnOnce(&Error) -> Fut + Send,
        Fut: Future<Output = ()> + Send,
    {
        let pending = match &self {
            Outcome::Succeeded(_) => None,
            Outcome::Failed(error) => Some(op(error)),
        };
        if let Some(pending) = pending {
            pending.await;
        }
        self
    }

    async fn with_error_async<F, Fut>(self, op: F) -> Outcome<T>
    where
        F: FnOnce(Error) -> Fut + Send,
        Fut: Future<Output = Error> + Send,
    {
        match self {
            Outcome::Succeeded(value) => Outcome::Succeeded(value),
            Outcome::Failed(error) => Outcome::Failed(op(error).await),
        }
    }

    async fn fold_async<R, S, SFut, F, FFut>(self, on_succeeded: S, on_failed: F) -> R
    where
        R: Send,
        S: FnOnce(T) -> SFut + Send,
        SFut: Future<Output = R> + Send,
        F: FnOnce(Error) -> FFut + Send,
        FFut: Future<Output = R> + Send,
    {
        match self {
            Outcome::Succeeded(value) => on_succeeded(value).await,
            Outcome::Failed(error) => on_failed(error).await,
        }
    }
}
