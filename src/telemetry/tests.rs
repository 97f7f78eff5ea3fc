use super::{NavData, PoseReport, PoseReporter, Rotation, TelemetryFeed};
use crate::driver::{ConsoleDriver, DroneDriver};
use crate::flight_control::{AxisCommand, FlightComputer, FlightMode};
use std::sync::Arc;
use tokio::sync::{RwLock, mpsc, watch};

fn grounded_f_cont() -> Arc<RwLock<FlightComputer>> {
    let driver: Arc<dyn DroneDriver> = Arc::new(ConsoleDriver::new());
    Arc::new(RwLock::new(FlightComputer::new(driver)))
}

#[test]
fn pose_report_lays_out_command_and_rotation() {
    let cmd = AxisCommand::new(0.1, 0.2, 0.0, -0.1);
    let rot = Rotation {
        x: 1.5,
        y: -2.5,
        z: 90.0,
    };
    let report = PoseReport::new(cmd, rot);
    assert_eq!(report.position, [0.2, 0.1, -0.1]);
    assert_eq!(report.orientation, [1.5, -2.5, 90.0, 0.0]);
}

#[tokio::test]
async fn feed_applies_status_and_rotation() {
    let f_cont = grounded_f_cont();
    let (nav_tx, nav_rx) = mpsc::channel(8);
    let (feed, mut rotation_rx) = TelemetryFeed::new(nav_rx, Arc::clone(&f_cont));
    let handle = tokio::spawn(feed.run());

    nav_tx
        .send(NavData {
            status: NavData::STATUS_FLYING,
            rot_x: 1.0,
            rot_y: 2.0,
            rot_z: 3.0,
        })
        .await
        .unwrap();
    drop(nav_tx);
    handle.await.unwrap();

    assert_eq!(f_cont.read().await.mode(), FlightMode::Flying);
    assert_eq!(
        *rotation_rx.borrow_and_update(),
        Rotation {
            x: 1.0,
            y: 2.0,
            z: 3.0
        }
    );
}

#[tokio::test]
async fn unknown_status_leaves_mode_untouched() {
    let f_cont = grounded_f_cont();
    let (nav_tx, nav_rx) = mpsc::channel(8);
    let (feed, _rotation_rx) = TelemetryFeed::new(nav_rx, Arc::clone(&f_cont));
    let handle = tokio::spawn(feed.run());

    nav_tx
        .send(NavData {
            status: 99,
            ..NavData::default()
        })
        .await
        .unwrap();
    drop(nav_tx);
    handle.await.unwrap();

    assert_eq!(f_cont.read().await.mode(), FlightMode::Grounded);
}

#[tokio::test]
async fn full_sink_drops_reports_without_blocking() {
    let (pose_tx, mut pose_rx) = mpsc::channel(1);
    let (_rotation_tx, rotation_rx) = watch::channel(Rotation::default());
    let reporter = PoseReporter::new(pose_tx, rotation_rx);

    let first = AxisCommand::new(0.1, 0.0, 0.0, 0.0);
    reporter.publish_input(first);
    reporter.publish_input(AxisCommand::new(0.2, 0.0, 0.0, 0.0));

    assert_eq!(pose_rx.recv().await.unwrap(), PoseReport::new(first, Rotation::default()));
    // the second report was dropped, not queued
    assert!(pose_rx.try_recv().is_err());
}
