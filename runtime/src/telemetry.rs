//! # Telemetry: Async Observability
//!
//! [`TracedFutureExt::traced_async`] runs a result-producing future inside an
//! `info_span` and reports the settled state through [`Traced`].

use async_trait::async_trait;
use std::future::Future;
use tracing::{Instrument, info_span};
use verdict_core::Traced;

#[async_trait]
pub trait TracedFutureExt: Future + Sized + Send {
    /// Awaits the future, then logs its result with `label` and the elapsed
    /// time. The result is returned untouched.
    async fn traced_async(self, label: &str) -> Self::Output
    where
        Self::Output: Traced + Send;
}

#[async_trait]
impl<F> TracedFutureExt for F
where
    F: Future + Send,
{
    async fn traced_async(self, label: &str) -> Self::Output
    where
        Self::Output: Traced + Send,
    {
        let span = info_span!("Verdict", verdict.label = %label);

        async move {
            let start = std::time::Instant::now();
            let result = self.await;
            tracing::debug!(duration = ?start.elapsed(), "future settled");
            result.traced(label)
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use verdict_core::{Error, Lookup, Outcome};

    #[tokio::test]
    async fn test_traced_async_passes_result_through() {
        let e = Error::new("Timeout", "upstream slow");
        let failed = {
            let e = e.clone();
            async move {
                tokio::time::sleep(Duration::from_millis(1)).await;
                Outcome::<u8>::fail(e)
            }
        }
        .traced_async("fetch")
        .await;
        assert!(Error::ptr_eq(failed.error(), &e));

        let found = async { Lookup::succeed("row") }.traced_async("find").await;
        assert_eq!(found, Lookup::succeed("row"));
    }
}
