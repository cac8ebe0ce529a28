//! # Join: Async Decisions over Result Tuples
//!
//! Async versions of the [`Join`] decisions. Evaluation and aggregation stay
//! synchronous; only the selected branch is awaited.

use async_trait::async_trait;
use std::future::Future;
use verdict_core::{AbsencePolicy, Error, Join};

#[async_trait]
pub trait JoinAsyncExt: Join + Send {
    async fn match_all_async<R, S, SFut, F, FFut>(self, on_all: S, on_any: F) -> R
    where
        Self::Values: Send,
        R: Send,
        S: FnOnce(Self::Values) -> SFut + Send,
        SFut: Future<Output = R> + Send,
        F: FnOnce(Error) -> FFut + Send,
        FFut: Future<Output = R> + Send;

    /// Like [`JoinAsyncExt::match_all_async`], with absent members reported as
    /// `policy.not_found()`.
    async fn match_all_with_async<R, S, SFut, F, FFut>(
        self,
        policy: &AbsencePolicy,
        on_all: S,
        on_any: F,
    ) -> R
    where
        Self::Values: Send,
        R: Send,
        S: FnOnce(Self::Values) -> SFut + Send,
        SFut: Future<Output = R> + Send,
        F: FnOnce(Error) -> FFut + Send,
        FFut: Future<Output = R> + Send;

    async fn all_succeeded_async<S, Fut>(self, on_all: S) -> Self
    where
        Self::Values: Send,
        S: FnOnce(&Self::Values) -> Fut + Send,
        Fut: Future<Output = ()> + Send;

    async fn any_failed_async<F, Fut>(self, on_any: F) -> Self
    where
        F: FnOnce(Error) -> Fut + Send,
        Fut: Future<Output = ()> + Send;

    /// Like `any_failed_async`, with `policy` standing in for absent members.
    async fn any_failed_with_async<F, Fut>(self, policy: &AbsencePolicy, on_any: F) -> Self
    where
        F: FnOnce(Error) -> Fut + Send,
        Fut: Future<Output = ()> + Send;
}

#[async_trait]
impl<J> JoinAsyncExt for J
where
    J: Join + Send,
{
    async fn match_all_async<R, S, SFut, F, FFut>(self, on_all: S, on_any: F) -> R
    where
        Self::Values: Send,
        R: Send,
        S: FnOnce(Self::Values) -> SFut + Send,
        SFut: Future<Output = R> + Send,
        F: FnOnce(Error) -> FFut + Send,
        FFut: Future<Output = R> + Send,
    {
        let policy = AbsencePolicy::default();
        self.match_all_with_async(&policy, on_all, on_any).await
    }

    async fn match_all_with_async<R, S, SFut, F, FFut>(
        self,
        policy: &AbsencePolicy,
        on_all: S,
        on_any: F,
    ) -> R
    where
        Self::Values: Send,
        R: Send,
        S: FnOnce(Self::Values) -> SFut + Send,
        SFut: Future<Output = R> + Send,
        F: FnOnce(Error) -> FFut + Send,
        FFut: Future<Output = R> + Send,
    {
        let branch = match self.into_values() {
            Ok(values) => Ok(on_all(values)),
            Err(original) => Err(on_any(
                original
                    .failure_with(policy)
                    .unwrap_or_else(Error::uninitialized),
            )),
        };
        match branch {
            Ok(pending) => pending.await,
            Err(pending) => pending.await,
        }
    }

    async fn all_succeeded_async<S, Fut>(self, on_all: S) -> Self
    where
        Self::Values: Send,
        S: FnOnce(&Self::Values) -> Fut + Send,
        Fut: Future<Output = ()> + Send,
    {
        match self.into_values() {
            Ok(values) => {
                let pending = on_all(&values);
                pending.await;
                Self::from_values(values)
            }
            Err(original) => original,
        }
    }

    async fn any_failed_async<F, Fut>(self, on_any: F) -> Self
    where
        F: FnOnce(Error) -> Fut + Send,
        Fut: Future<Output = ()> + Send,
    {
        let policy = AbsencePolicy::default();
        self.any_failed_with_async(&policy, on_any).await
    }

    async fn any_failed_with_async<F, Fut>(self, policy: &AbsencePolicy, on_any: F) -> Self
    where
        F: FnOnce(Error) -> Fut + Send,
        Fut: Future<Output = ()> + Send,
    {
        let failure = self.failure_with(policy);
        if let Some(error) = failure {
            on_any(error).await;
        }
        self
    }
}
