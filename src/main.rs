#![allow(dead_code, clippy::similar_names)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
mod config;
mod driver;
mod flight_control;
mod input;
mod logger;
mod telemetry;

use crate::config::FlightConfig;
use crate::driver::{ConsoleDriver, DroneDriver};
use crate::flight_control::{
    ApproachController, CommandDispatcher, ErrorEstimate, FlightComputer,
};
use crate::telemetry::{NavData, PoseReport, PoseReporter, TelemetryFeed};
use std::sync::Arc;
use tokio::sync::{RwLock, mpsc};
use tokio_util::sync::CancellationToken;

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() {
    let config = FlightConfig::from_env();
    info!(
        "Starting flight-command controller (vel_max {}, dispatch every {:?})",
        config.vel_max, config.dispatch_interval
    );

    let (nav_tx, nav_rx) = mpsc::channel::<NavData>(32);
    let driver: Arc<dyn DroneDriver> = Arc::new(ConsoleDriver::with_nav_loopback(nav_tx));
    let dispatcher = Arc::new(CommandDispatcher::new(
        Arc::clone(&driver),
        config.dispatch_interval,
    ));
    let f_cont = Arc::new(RwLock::new(FlightComputer::new(Arc::clone(&driver))));

    let (feed, rotation_rx) = TelemetryFeed::new(nav_rx, Arc::clone(&f_cont));
    let feed_handle = tokio::spawn(feed.run());

    let (pose_tx, mut pose_rx) = mpsc::channel::<PoseReport>(64);
    tokio::spawn(async move {
        while let Some(report) = pose_rx.recv().await {
            event!("POSE {report:?}");
        }
    });
    // handed to whichever key-event front-end gets attached; the scripted
    // flight below bypasses it
    let _reporter = PoseReporter::new(pose_tx, rotation_rx);

    let cancel = CancellationToken::new();
    let dispatch_handle = {
        let dispatcher_local = Arc::clone(&dispatcher);
        let cancel_local = cancel.clone();
        tokio::spawn(async move { dispatcher_local.run(cancel_local).await })
    };

    let approach = ApproachController::new(&config, Arc::clone(&f_cont), Arc::clone(&dispatcher));
    let (error_x, error_y) = config.initial_error;
    approach.run(ErrorEstimate::new(error_x, error_y)).await;

    cancel.cancel();
    let _ = dispatch_handle.await;
    feed_handle.abort();
    info!("Great flying!");
}
