#[cfg(test)]
mod tests;

use crate::flight_control::{AxisCommand, FlightComputer, FlightMode};
use crate::{event, warn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::{RwLock, mpsc, watch};

/// One navdata frame from the drone link: raw status code plus rotation
/// about the three axes. Everything else in the packet is ignored.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct NavData {
    pub status: u8,
    pub rot_x: f64,
    pub rot_y: f64,
    pub rot_z: f64,
}

impl NavData {
    pub const STATUS_EMERGENCY: u8 = 0;
    pub const STATUS_LANDED: u8 = 2;
    pub const STATUS_FLYING: u8 = 3;
    pub const STATUS_TAKING_OFF: u8 = 6;
    pub const STATUS_LANDING: u8 = 8;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Outward record published once per input event: the current command as a
/// position-like triple and the last reported rotation as an orientation
/// quadruple. A logging sink, not part of the control loop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoseReport {
    pub position: [f64; 3],
    pub orientation: [f64; 4],
}

impl PoseReport {
    pub fn new(cmd: AxisCommand, rot: Rotation) -> Self {
        Self {
            position: [cmd.pitch(), cmd.roll(), cmd.vertical_rate()],
            orientation: [rot.x, rot.y, rot.z, 0.0],
        }
    }
}

/// Non-blocking handle to the pose sink. A full sink drops the report with
/// a warning instead of stalling the input task.
#[derive(Clone)]
pub struct PoseReporter {
    sink: mpsc::Sender<PoseReport>,
    rotation: watch::Receiver<Rotation>,
}

impl PoseReporter {
    pub fn new(sink: mpsc::Sender<PoseReport>, rotation: watch::Receiver<Rotation>) -> Self {
        Self { sink, rotation }
    }

    pub fn publish_input(&self, cmd: AxisCommand) {
        let report = PoseReport::new(cmd, *self.rotation.borrow());
        if let Err(e) = self.sink.try_send(report) {
            warn!("Pose report dropped: {e}");
        }
    }
}

/// Applies incoming navdata: the observed mode goes into the flight
/// computer, the latest rotation into a watch channel for the pose
/// reporter. Telemetry closes no control loop here.
pub struct TelemetryFeed {
    rx: mpsc::Receiver<NavData>,
    f_cont: Arc<RwLock<FlightComputer>>,
    rotation_tx: watch::Sender<Rotation>,
}

impl TelemetryFeed {
    pub fn new(
        rx: mpsc::Receiver<NavData>,
        f_cont: Arc<RwLock<FlightComputer>>,
    ) -> (Self, watch::Receiver<Rotation>) {
        let (rotation_tx, rotation_rx) = watch::channel(Rotation::default());
        (
            Self {
                rx,
                f_cont,
                rotation_tx,
            },
            rotation_rx,
        )
    }

    pub async fn run(mut self) {
        while let Some(nav) = self.rx.recv().await {
            self.rotation_tx.send_replace(Rotation {
                x: nav.rot_x,
                y: nav.rot_y,
                z: nav.rot_z,
            });
            if let Some(mode) = FlightMode::from_status(nav.status) {
                self.f_cont.write().await.observe_mode(mode);
            } else {
                event!("Unknown navdata status {}", nav.status);
            }
        }
        event!("Navdata channel closed");
    }
}
