//! Timer-driven upload/processing simulation.
//!
//! DESIGN
//! ======
//! The simulation is a plain async function over an injected sleeper and an
//! `apply` sink, so the browser drives it with real timers while tests drive
//! it synchronously. It checks its [`LiveFlag`] after every sleep: once the
//! owning component is gone no further steps are applied.

#[cfg(test)]
#[path = "simulation_test.rs"]
mod simulation_test;

use std::future::Future;
use std::time::Duration;

use crate::state::upload::UploadStep;
use crate::util::lifecycle::LiveFlag;

/// Delay before each progress step.
pub const PROGRESS_TICK: Duration = Duration::from_millis(200);

/// Percentage added per progress step.
pub const PROGRESS_STEP: u8 = 10;

/// Simulated transcription/analysis time after the upload reaches 100%.
pub const PROCESSING_DELAY: Duration = Duration::from_millis(3000);

/// Progress values reported during upload: 0, 10, ..., 100.
pub fn progress_schedule() -> impl Iterator<Item = u8> {
    (0..=100u8).step_by(usize::from(PROGRESS_STEP))
}

/// Synthetic identifier for a processed file, derived from the session clock.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn mock_file_id(now_ms: f64) -> String {
    format!("mock-file-id-{}", now_ms.max(0.0) as u64)
}

/// Run the upload sequence to completion or cancellation.
///
/// Returns `true` when `Complete` was applied, `false` when `alive` was
/// cleared part-way.
pub async fn run_upload<S, Fut, C, A>(alive: &LiveFlag, mut sleep: S, clock: C, mut apply: A) -> bool
where
    S: FnMut(Duration) -> Fut,
    Fut: Future<Output = ()>,
    C: FnOnce() -> f64,
    A: FnMut(UploadStep),
{
    for pct in progress_schedule() {
        sleep(PROGRESS_TICK).await;
        if !alive.is_live() {
            return false;
        }
        apply(UploadStep::Progress(pct));
    }

    apply(UploadStep::Processing);
    sleep(PROCESSING_DELAY).await;
    if !alive.is_live() {
        return false;
    }

    apply(UploadStep::Complete(mock_file_id(clock())));
    true
}
