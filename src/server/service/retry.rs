//! Retry logic with exponential backoff for service operations.
//!
//! [`RetryContext`] runs an operation until it succeeds, fails with an error classified as
//! permanent, or runs out of attempts. A cache of type `T` survives between attempts so a
//! retry after a failed write can reuse records already fetched from UEX.

use std::time::Duration;

use crate::server::error::{retry::ErrorRetryStrategy, Error};

/// Context for executing operations with automatic retry logic and caching.
///
/// # Retry Behavior
///
/// - **Max attempts**: 1 by default (no retries), configured through `UEX_MAX_ATTEMPTS`
/// - **Backoff strategy**: Exponential starting at 1 second (1s, 2s, 4s, ...)
/// - **Retry conditions**: Only errors with `ErrorRetryStrategy::Retry` are retried
///
/// # Example
///
/// ```ignore
/// let mut ctx: RetryContext<Option<Vec<Commodity>>> = RetryContext::with_max_attempts(3);
///
/// ctx.execute_with_retry("commodity sync", |cache| {
///     let db = db.clone();
///     let uex_client = uex_client.clone();
///
///     Box::pin(async move {
///         let commodities = match cache.as_ref() {
///             Some(cached) => cached.clone(),
///             None => uex_client.commodities().get_commodities().await?,
///         };
///         // ... persist within a transaction
///         Ok(())
///     })
/// }).await?;
/// ```
pub struct RetryContext<T> {
    /// Cache to be used between retries to prevent unnecessary additional fetches
    cache: T,
    /// Maximum number of attempts before giving up
    max_attempts: u32,
    /// Initial backoff duration in seconds (doubles with each retry)
    initial_backoff_secs: u64,
}

impl<T> Default for RetryContext<T>
where
    T: Clone + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RetryContext<T>
where
    T: Clone + Default,
{
    const DEFAULT_MAX_ATTEMPTS: u32 = 1;
    const DEFAULT_INITIAL_BACKOFF_SECS: u64 = 1;

    /// Creates a new retry context making a single attempt.
    pub fn new() -> Self {
        Self::with_max_attempts(Self::DEFAULT_MAX_ATTEMPTS)
    }

    /// Creates a new retry context making up to `max_attempts` attempts, at least one.
    pub fn with_max_attempts(max_attempts: u32) -> Self {
        Self {
            cache: T::default(),
            max_attempts: max_attempts.max(1),
            initial_backoff_secs: Self::DEFAULT_INITIAL_BACKOFF_SECS,
        }
    }

    #[cfg(test)]
    fn with_initial_backoff_secs(mut self, secs: u64) -> Self {
        self.initial_backoff_secs = secs;
        self
    }

    /// Executes an operation with automatic retry logic and exponential backoff.
    ///
    /// # Arguments
    /// - `description` - Human-readable description for logging (e.g., "commodity sync")
    /// - `operation` - Async function that receives mutable cache reference and returns
    ///   `Result<R, Error>`
    ///
    /// # Returns
    /// - `Ok(R)` - Operation succeeded
    /// - `Err(Error)` - Operation failed permanently or exhausted all retry attempts
    pub async fn execute_with_retry<R, F>(
        &mut self,
        description: &str,
        operation: F,
    ) -> Result<R, Error>
    where
        F: for<'a> Fn(
            &'a mut T,
        ) -> std::pin::Pin<
            Box<dyn std::future::Future<Output = Result<R, Error>> + Send + 'a>,
        >,
    {
        let mut attempt_count = 0;

        loop {
            tracing::debug!(
                "Processing {} (attempt {}/{})",
                description,
                attempt_count + 1,
                self.max_attempts
            );

            match operation(&mut self.cache).await {
                Ok(result) => {
                    tracing::debug!("Successfully processed {}", description);
                    return Ok(result);
                }
                Err(e) => match e.to_retry_strategy() {
                    ErrorRetryStrategy::Fail => {
                        tracing::error!("Permanent error for {}: {}", description, e);
                        return Err(e);
                    }
                    ErrorRetryStrategy::Retry => {
                        attempt_count += 1;
                        if attempt_count >= self.max_attempts {
                            tracing::error!(
                                "Max attempts ({}) exceeded for {}: {}",
                                self.max_attempts,
                                description,
                                e
                            );
                            return Err(e);
                        }

                        let backoff_secs = self.initial_backoff_secs * 2_u64.pow(attempt_count - 1);
                        let backoff = Duration::from_secs(backoff_secs);

                        tracing::warn!(
                            "Retrying {} (attempt {}/{}) after {:?}: {}",
                            description,
                            attempt_count,
                            self.max_attempts,
                            backoff,
                            e
                        );

                        tokio::time::sleep(backoff).await;
                    }
                },
            }
        }
    }
}
