//! Async combinators for [`Lookup`].

use async_trait::async_trait;
use std::future::Future;
use verdict_core::{Error, Lookup};

/// Async counterparts of the `Lookup` combinators.
#[async_trait]
pub trait LookupAsyncExt<T>: Sized + Send
where
    T: Send + 'static,
{
    async fn map_async<U, F, Fut>(self, op: F) -> Lookup<U>
    where
        U: Send,
        F: FnOnce(T) -> Fut + Send,
        Fut: Future<Output = U> + Send;

    async fn and_then_async<U, F, Fut>(self, op: F) -> Lookup<U>
    where
        U: Send,
        F: FnOnce(T) -> Fut + Send,
        Fut: Future<Output = Lookup<U>> + Send;

    /// `false` turns a succeeded lookup into `Absent`, never `Failed`.
    async fn filter_async<P, Fut>(self, predicate: P) -> Lookup<T>
    where
        P: FnOnce(&T) -> Fut + Send,
        Fut: Future<Output = bool> + Send;

    async fn or_else_async<F, Fut>(self, fallback: F) -> Lookup<T>
    where
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = Lookup<T>> + Send;

    async fn inspect_async<F, Fut>(self, op: F) -> Lookup<T>
    where
        F: FnOnce(&T) -> Fut + Send,
        Fut: Future<Output = ()> + Send;

    async fn inspect_absent_async<F, Fut>(self, op: F) -> Lookup<T>
    where
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = ()> + Send;

    async fn inspect_err_async<F, Fut>(self, op: F) -> Lookup<T>
    where
        F: FnOnce(&Error) -> Fut + Send,
        Fut: Future<Output = ()> + Send;

    /// Absent lookups pass through; only `Failed` is rewritten.
    async fn with_error_async<F, Fut>(self, op: F) -> Lookup<T>
    where
        F: FnOnce(Error) -> Fut + Send,
        Fut: Future<Output = Error> + Send;

    async fn fold_async<R, S, SFut, A, AFut, F, FFut>(
        self,
        on_succeeded: S,
        on_absent: A,
        on_failed: F,
    ) -> R
    where
        R: Send,
        S: FnOnce(T) -> SFut + Send,
        SFut: Future<Output = R> + Send,
        A: FnOnce() -> AFut + Send,
        AFut: Future<Output = R> + Send,
        F: FnOnce(Error) -> FFut + Send,
        FFut: Future<Output = R> + Send;
}

#[async_trait]
impl<T> LookupAsyncExt<T> for Lookup<T>
where
    T: Send + 'static,
{
    async fn map_async<U, F, Fut>(self, op: F) -> Lookup<U>
    where
        U: Send,
        F: FnOnce(T) -> Fut + Send,
        Fut: Future<Output = U> + Send,
    {
        match self {
            Lookup::Succeeded(value) => Lookup::Succeeded(op(value).await),
            Lookup::Absent => Lookup::Absent,
            Lookup::Failed(error) => Lookup::Failed(error),
        }
    }

    async fn and_then_async<U, F, Fut>(self, op: F) -> Lookup<U>
    where
        U: Send,
        F: FnOnce(T) -> Fut + Send,
        Fut: Future<Output = Lookup<U>> + Send,
    {
        match self {
            Lookup::Succeeded(value) => op(value).await,
            Lookup::Absent => Lookup::Absent,
            Lookup::Failed(error) => Lookup::Failed(error),
        }
    }

    async fn filter_async<P, Fut>(self, predicate: P) -> Lookup<T>
    where
        P: FnOnce(&T) -> Fut + Send,
        Fut: Future<Output = bool> + Send,
    {
        match self {
            Lookup::Succeeded(value) => {
                let keep = predicate(&value).await;
                if keep {
                    Lookup::Succeeded(value)
                } else {
                    Lookup::Absent
                }
            }
            Lookup::Absent => Lookup::Absent,
            Lookup::Failed(error) => Lookup::Failed(error),
        }
    }

    async fn or_else_async<F, Fut>(self, fallback: F) -> Lookup<T>
    where
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = Lookup<T>> + Send,
    {
        match self {
            Lookup::Succeeded(value) => Lookup::Succeeded(value),
            Lookup::Absent | Lookup::Failed(_) => fallback().await,
        }
    }

    async fn inspect_async<F, Fut>(self, op: F) -> Lookup<T>
    where
        F: FnOnce(&T) -> Fut + Send,
        Fut: Future<Output = ()> + Send,
    {
        let pending = match &self {
            Lookup::Succeeded(value) => Some(op(value)),
            Lookup::Absent | Lookup::Failed(_) => None,
        };
        if let Some(pending) = pending {
            pending.await;
        }
        self
    }

    async fn inspect_absent_async<F, Fut>(self, op: F) -> Lookup<T>
    where
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = ()> + Send,
    {
        if self.is_absent() {
            op().await;
        }
        self
    }

    async fn inspect_err_async<F, Fut>(self, op: F) -> Lookup<T>
    where
        F: FnOnce(&Error) -> Fut + Send,
        Fut: Future<Output = ()> + Send,
    {
        let pending = match &self {
            Lookup::Failed(error) => Some(op(error)),
            Lookup::Succeeded(_) | Lookup::Absent => None,
        };
        if let Some(pending) = pending {
            pending.await;
        }
        self
    }

    async fn with_error_async<F, Fut>(self, op: F) -> Lookup<T>
    where
        F: FnOnce(Error) -> Fut + Send,
        Fut: Future<Output = Error> + Send,
    {
        match self {
            Lookup::Failed(error) => Lookup::Failed(op(error).await),
            other => other,
        }
    }

    async fn fold_async<R, S, SFut, A, AFut, F, FFut>(
        self,
        on_succeeded: S,
        on_absent: A,
        on_failed: F,
    ) -> R
    where
        R: Send,
        S: FnOnce(T) -> SFut + Send,
        SFut: Future<Output = R> + Send,
        A: FnOnce() -> AFut + Send,
        AFut: Future<Output = R> + Send,
        F: FnOnce(Error) -> FFut + Send,
        FFut: Future<Output = R> + Send,
    {
        match self {
            Lookup::Succeeded(value) => on_succeeded(value).await,
            Lookup::Absent => on_absent().await,
            Lookup::Failed(error) => on_failed(error).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::future::ready;

    #[tokio::test]
    async fn test_filter_async() {
        let kept = Lookup::succeed(4).filter_async(|x| ready(x % 2 == 0)).await;
        assert_eq!(kept, Lookup::succeed(4));

        let dropped = Lookup::succeed(3).filter_async(|x| ready(x % 2 == 0)).await;
        assert_eq!(dropped, Lookup::absent());

        let absent = Lookup::<i32>::absent().filter_async(|_| ready(true)).await;
        assert_eq!(absent, Lookup::absent());
    }

    #[tokio::test]
    async fn test_filter_async_skips_failed() {
        let e = Error::new("Boom", "x");
        let mut called = false;
        let out = Lookup::<i32>::fail(e.clone())
            .filter_async(|_| {
                called = true;
                ready(true)
            })
            .await;
        assert!(!called);
        assert!(Error::ptr_eq(out.error(), &e));
    }

    #[tokio::test]
    async fn test_and_then_async_from_absent() {
        let out = Lookup::<i32>::absent()
            .and_then_async(|x| ready(Lookup::succeed(x + 1)))
            .await;
        assert!(out.is_absent());
    }

    #[tokio::test]
    async fn test_or_else_async_on_absent_and_failed() {
        let a = Lookup::<i32>::absent().or_else_async(|| ready(Lookup::succeed(1))).await;
        let f = Lookup::<i32>::fail(Error::new("Boom", "x"))
            .or_else_async(|| ready(Lookup::succeed(2)))
            .await;
        assert_eq!((a, f), (Lookup::succeed(1), Lookup::succeed(2)));
    }

    #[tokio::test]
    async fn test_inspect_async_one_callback_per_state() {
        let mut seen = Vec::new();

        let found = Lookup::succeed(5)
            .inspect_async(|v| {
                seen.push(format!("value {v}"));
                ready(())
            })
            .await;
        let found = found
            .inspect_absent_async(|| {
                seen.push("absent".to_string());
                ready(())
            })
            .await;
        assert_eq!(found, Lookup::succeed(5));

        let missing = Lookup::<i32>::absent()
            .inspect_async(|v| {
                seen.push(format!("value {v}"));
                ready(())
            })
            .await;
        let missing = missing
            .inspect_absent_async(|| {
                seen.push("absent".to_string());
                ready(())
            })
            .await;
        let missing = missing
            .inspect_err_async(|e| {
                seen.push(e.code().to_string());
                ready(())
            })
            .await;
        assert!(missing.is_absent());

        let _ = Lookup::<i32>::fail(Error::new("Boom", "x"))
            .inspect_err_async(|e| {
                seen.push(e.code().to_string());
                ready(())
            })
            .await;

        assert_eq!(seen, ["value 5", "absent", "Boom"]);
    }

    #[tokio::test]
    async fn test_with_error_async_leaves_absent() {
        let out = Lookup::<i32>::fail(Error::new("Io", "closed"))
            .with_error_async(|e| async move { Error::new("Store", e.message()) })
            .await;
        assert_eq!(out.error().code(), "Store");

        let mut called = false;
        let out = Lookup::<i32>::absent()
            .with_error_async(|e| {
                called = true;
                ready(e)
            })
            .await;
        assert!(!called);
        assert!(out.is_absent());
    }

    #[tokio::test]
    async fn test_fold_async_absent_branch() {
        let label = Lookup::<i32>::absent()
            .fold_async(
                |v| ready(format!("value {v}")),
                || ready("none".to_string()),
                |e| ready(e.code().to_string()),
            )
            .await;
        assert_eq!(label, "none");
    }
}
