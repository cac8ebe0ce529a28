use async_trait::async_trait;
use std::future::Future;
use verdict_core::{Error, Outcome, Status};

/// Async counterparts of the `Status` combinators.
#[async_trait]
pub trait StatusAsyncExt: Sized + Send {
    async fn and_then_async<F, Fut>(self, op: F) -> Status
    where
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = Status> + Send;

    async fn then_value_async<T, F, Fut>(self, op: F) -> Outcome<T>
    where
        T: Send,
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = T> + Send;

    async fn or_else_async<F, Fut>(self, fallback: F) -> Status
    where
        F: FnOnce(Error) -> Fut + Send,
        Fut: Future<Output = Status> + Send;

    async fn fold_async<R, S, SFut, F, FFut>(self, on_succeeded: S, on_failed: F) -> R
    where
        R: Send,
        S: FnOnce() -> SFut + Send,
        SFut: Future<Output = R> + Send,
        F: FnOnce(Error) -> FFut + Send,
        FFut: Future<Output = R> + Send;
}

#[async_trait]
impl StatusAsyncExt for Status {
    async fn and_then_async<F, Fut>(self, op: F) -> Status
    where
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = Status> + Send,
    {
        match self {
            Status::Succeeded => op().await,
            Status::Failed(error) => Status::Failed(error),
        }
    }

    async fn then_value_async<T, F, Fut>(self, op: F) -> Outcome<T>
    where
        T: Send,
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = T> + Send,
    {
        match self {
            Status::Succeeded => Outcome::Succeeded(op().await),
            Status::Failed(error) => Outcome::Failed(error),
        }
    }

    async fn or_else_async<F, Fut>(self, fallback: F) -> Status
    where
        F: FnOnce(Error) -> Fut + Send,
        Fut: Future<Output = Status> + Send,
    {
        match self {
            Status::Succeeded => Status::Succeeded,
            Status::Failed(error) => fallback(error).await,
        }
    }

    async fn fold_async<R, S, SFut, F, FFut>(self, on_succeeded: S, on_failed: F) -> R
    where
        R: Send,
        S: FnOnce() -> SFut + Send,
        SFut: Future<Output = R> + Send,
        F: FnOnce(Error) -> FFut + Send,
        FFut: Future<Output = R> + Send,
    {
        match self {
            Status::Succeeded => on_succeeded().await,
            Status::Failed(error) => on_failed(error).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::future::ready;
    use std::time::Duration;

    #[tokio::test]
    async fn test_and_then_async_sequences_steps() {
        let status = Status::succeed()
            .and_then_async(|| async {
                tokio::time::sleep(Duration::from_millis(1)).await;
                Status::succeed()
            })
            .await
            .and_then_async(|| ready(Status::fail(Error::new("Disk", "full"))))
            .await;
        assert_eq!(status.error().code(), "Disk");
    }

    #[tokio::test]
    async fn test_then_value_async() {
        let out = Status::succeed().then_value_async(|| ready(42)).await;
        assert_eq!(out, Outcome::succeed(42));

        let e = Error::new("X", "x");
        let out = Status::fail(e.clone()).then_value_async(|| ready(42)).await;
        assert!(Error::ptr_eq(out.error(), &e));
    }

    #[tokio::test]
    async fn test_or_else_async_and_fold_async() {
        let recovered = Status::fail(Error::new("X", "x"))
            .or_else_async(|_| ready(Status::succeed()))
            .await;
        let label = recovered.fold_async(|| ready("ok"), |_| ready("err")).await;
        assert_eq!(label, "ok");
    }
}
