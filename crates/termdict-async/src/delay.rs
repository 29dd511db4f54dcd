//! Artificial response latency.

use std::time::Duration;

use rand::Rng;
use termdict_core::Delay;

/// Draw one delay: the fixed value, or a uniform pick from the inclusive
/// range.
pub(crate) fn sample(delay: Delay) -> Duration {
    let (min, max) = delay.bounds();
    let ms = if min == max {
        min
    } else {
        rand::thread_rng().gen_range(min..=max)
    };
    Duration::from_millis(ms)
}

/// Hand `value` back on a later scheduling turn, after sleeping for the
/// sampled delay when it is non-zero.
pub(crate) async fn deliver<T>(value: T, delay: Delay) -> T {
    tokio::task::yield_now().await;
    let wait = sample(delay);
    if !wait.is_zero() {
        tracing::trace!(delay_ms = wait.as_millis() as u64, "delaying result");
        tokio::time::sleep(wait).await;
    }
    value
}
