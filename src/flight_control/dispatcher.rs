use super::axis_command::AxisCommand;
use crate::driver::DroneDriver;
use crate::{error, event};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// Owns the authoritative command snapshot and streams it to the driver at
/// a fixed cadence. The link expects a steady command stream, so unchanged
/// snapshots are resent on every tick; between ticks only the latest update
/// survives, intermediate commands are dropped.
pub struct CommandDispatcher {
    current: RwLock<AxisCommand>,
    driver: Arc<dyn DroneDriver>,
    interval: Duration,
}

impl CommandDispatcher {
    pub fn new(driver: Arc<dyn DroneDriver>, interval: Duration) -> Self {
        Self {
            current: RwLock::new(AxisCommand::default()),
            driver,
            interval,
        }
    }

    /// Replaces the whole snapshot. Callable from any task.
    pub async fn update_command(&self, cmd: AxisCommand) {
        *self.current.write().await = cmd;
    }

    pub async fn current_command(&self) -> AxisCommand {
        *self.current.read().await
    }

    /// Fixed-rate send loop, alive until the token fires. A slow driver
    /// call delays at most the current tick; missed ticks are never queued.
    pub async fn run(&self, cancel: CancellationToken) {
        let mut tick = tokio::time::interval(self.interval);
        tick.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            tokio::select! {
                () = cancel.cancelled() => break,
                _ = tick.tick() => {
                    let cmd = self.current_command().await;
                    if let Err(e) = self.driver.set_command(cmd).await {
                        error!("Command send failed: {e}");
                    }
                }
            }
        }
        event!("Dispatch loop stopped");
    }
}
