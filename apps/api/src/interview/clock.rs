//! Session clock — one cancellable tick per elapsed second, bound to a
//! single session epoch.
//!
//! The clock never aborts from outside: it stops itself the moment the
//! controller reports the epoch stale or the session out of `in_progress`,
//! which is what makes resets and restarts race-free.

use std::time::Duration;

use tracing::debug;

use crate::interview::controller::SessionController;
use crate::interview::session::Tick;

const TICK: Duration = Duration::from_secs(1);

/// Spawns the countdown loop for the session epoch that just started.
pub(crate) fn spawn(controller: SessionController, epoch: u64) {
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(TICK).await;
            match controller.apply_tick(epoch) {
                Some(Tick::Running) => {}
                Some(Tick::Expired) => {
                    debug!(epoch, "Session clock expired");
                    controller.finish_if_current(epoch);
                    break;
                }
                // Stale epoch or the session already finished/reset.
                None => break,
            }
        }
    });
}
