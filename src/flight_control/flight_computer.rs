use super::flight_state::{FlightMode, FlightModeMachine};
use crate::driver::DroneDriver;
use crate::{error, event, info};
use std::sync::Arc;

/// Front door to the drone: gates transition requests through the mode
/// machine and issues the matching driver call exactly once per accepted
/// request. Rejected requests are dropped silently apart from an event log
/// line.
pub struct FlightComputer {
    driver: Arc<dyn DroneDriver>,
    mode_machine: FlightModeMachine,
}

impl FlightComputer {
    pub fn new(driver: Arc<dyn DroneDriver>) -> Self {
        Self {
            driver,
            mode_machine: FlightModeMachine::new(),
        }
    }

    pub fn mode(&self) -> FlightMode { self.mode_machine.current() }

    /// Overrides any mode. The link resets all actuators to zero on its
    /// side.
    pub async fn request_emergency(&mut self) {
        let previous = self.mode();
        self.mode_machine.request_emergency();
        info!("EMERGENCY requested from {previous}");
        if let Err(e) = self.driver.send_emergency().await {
            error!("Emergency send failed: {e}");
        }
    }

    pub async fn request_takeoff(&mut self) {
        let previous = self.mode();
        if self.mode_machine.request_takeoff() {
            info!("Takeoff accepted from {previous}");
            if let Err(e) = self.driver.send_takeoff().await {
                error!("Takeoff send failed: {e}");
            }
        } else {
            event!("Takeoff ignored in mode {previous}");
        }
    }

    pub async fn request_land(&mut self) {
        let previous = self.mode();
        if self.mode_machine.request_land() {
            info!("Land accepted from {previous}");
            if let Err(e) = self.driver.send_land().await {
                error!("Land send failed: {e}");
            }
        } else {
            event!("Land ignored in mode {previous}");
        }
    }

    /// Telemetry-observed mode, e.g. the TakingOff to Flying completion.
    pub fn observe_mode(&mut self, mode: FlightMode) {
        if mode != self.mode() {
            event!("Observed mode change {} -> {mode}", self.mode());
        }
        self.mode_machine.observe(mode);
    }
}
