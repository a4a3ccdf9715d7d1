//! Browser timer bridge.
//!
//! In the browser this awaits a `setTimeout` via `gloo-timers`. Server-side
//! rendering never drives simulated work, and native test builds inject their
//! own sleepers, so the non-`hydrate` build resolves immediately.

use std::time::Duration;

pub async fn sleep(duration: Duration) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::sleep(duration).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = duration;
    }
}
