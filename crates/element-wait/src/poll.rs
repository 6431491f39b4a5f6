// Poll - Bounded retry loop around a single-shot lookup
//
// Converts "is this element there right now?" into "wait until it is there,
// up to a fixed budget". Each attempt is a fresh lookup; nothing from a
// failed attempt is carried into the next one.
//
// Schedule for a budget of N attempts:
//   lookup, sleep, lookup, sleep, ..., lookup   (N lookups, at most N-1 sleeps)

use crate::api::PollPolicy;
use crate::error::Result;
use std::fmt::Display;
use std::future::Future;

/// Runs `attempt` until it yields a value or the policy's attempts are used up.
///
/// Returns `Ok(Some(_))` as soon as an attempt finds something, without any
/// further waiting, and `Ok(None)` once every attempt has come back empty.
/// Exhaustion is not an error here; callers decide whether absence is fatal.
///
/// An `Err` from an attempt ends the poll immediately and is returned as is.
///
/// A `trace` event naming `target` is emitted before every attempt.
///
/// There is no cancellation hook. Drop the future to abandon a poll.
///
/// # Example
///
/// ```ignore
/// use element_wait::{poll, Locator, Page, PollPolicy};
///
/// let locator = Locator::css("#app.ready");
/// let element = poll(&PollPolicy::default(), &locator, || page.find_first(&locator)).await?;
/// ```
pub async fn poll<T, F, Fut>(
    policy: &PollPolicy,
    target: &(dyn Display + Sync),
    mut attempt: F,
) -> Result<Option<T>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Option<T>>>,
{
    let max_attempts = policy.attempts();

    for n in 1..=max_attempts {
        tracing::trace!(attempt = n, max_attempts, "{}", target);

        if let Some(found) = attempt().await? {
            return Ok(Some(found));
        }

        if n < max_attempts {
            tokio::time::sleep(policy.interval()).await;
        }
    }

    tracing::debug!(
        max_attempts,
        interval_ms = policy.interval_ms,
        "Gave up waiting for {}",
        target
    );
    Ok(None)
}
