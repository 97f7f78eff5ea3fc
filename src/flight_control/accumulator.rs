use super::axis_command::AxisCommand;
use super::dispatcher::CommandDispatcher;
use super::flight_computer::FlightComputer;
use crate::event;
use crate::input::keymap::{Axis, ControlKey, KeyEvent};
use crate::telemetry::PoseReporter;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Folds key transitions into running per-axis totals. Totals are kept
/// unclamped internally so stacked same-direction keys unwind correctly;
/// the published snapshot is clamped to the velocity limit. Autorepeat
/// events and duplicate key-downs are discarded here, so every applied
/// increment has exactly one matching decrement.
pub struct CommandAccumulator {
    vel_max: f64,
    roll: f64,
    pitch: f64,
    yaw_rate: f64,
    vertical_rate: f64,
    held: HashSet<ControlKey>,
    f_cont: Arc<RwLock<FlightComputer>>,
    dispatcher: Arc<CommandDispatcher>,
    reporter: Option<PoseReporter>,
}

impl CommandAccumulator {
    pub fn new(
        vel_max: f64,
        f_cont: Arc<RwLock<FlightComputer>>,
        dispatcher: Arc<CommandDispatcher>,
    ) -> Self {
        Self {
            vel_max,
            roll: 0.0,
            pitch: 0.0,
            yaw_rate: 0.0,
            vertical_rate: 0.0,
            held: HashSet::new(),
            f_cont,
            dispatcher,
            reporter: None,
        }
    }

    /// Attaches the outward pose-report sink, published once per accepted
    /// input event.
    #[must_use]
    pub fn with_reporter(mut self, reporter: PoseReporter) -> Self {
        self.reporter = Some(reporter);
        self
    }

    pub async fn handle_event(&mut self, ev: KeyEvent) {
        if ev.autorepeat {
            event!("Autorepeat {} discarded", ev.key);
            return;
        }
        match ev.key.binding() {
            None => self.handle_mode_key(ev).await,
            Some((axis, sign)) => self.handle_axis_key(ev, axis, sign).await,
        }
        self.publish().await;
    }

    /// Mode keys route straight to the flight computer. The request is
    /// applied before this method returns, so a land or emergency is
    /// reflected before any later key event is processed.
    async fn handle_mode_key(&mut self, ev: KeyEvent) {
        if !ev.pressed {
            // releasing a mode key means nothing
            return;
        }
        let mut f_cont = self.f_cont.write().await;
        match ev.key {
            ControlKey::Emergency => f_cont.request_emergency().await,
            ControlKey::Takeoff => f_cont.request_takeoff().await,
            ControlKey::Land => f_cont.request_land().await,
            _ => {}
        }
    }

    async fn handle_axis_key(&mut self, ev: KeyEvent, axis: Axis, sign: f64) {
        if ev.pressed {
            if !self.f_cont.read().await.mode().accepts_axis_input() {
                event!("{} ignored while not airborne", ev.key);
                return;
            }
            // second down without a release: OS repeat that lost its flag
            if !self.held.insert(ev.key) {
                return;
            }
            self.apply(axis, sign * self.vel_max);
        } else {
            // only unwind increments that were actually applied
            if !self.held.remove(&ev.key) {
                return;
            }
            self.apply(axis, -sign * self.vel_max);
        }
    }

    fn apply(&mut self, axis: Axis, delta: f64) {
        match axis {
            Axis::Roll => self.roll += delta,
            Axis::Pitch => self.pitch += delta,
            Axis::Yaw => self.yaw_rate += delta,
            Axis::Vertical => self.vertical_rate += delta,
        }
    }

    async fn publish(&self) {
        let cmd = AxisCommand::new(self.roll, self.pitch, self.yaw_rate, self.vertical_rate)
            .clamped(self.vel_max);
        self.dispatcher.update_command(cmd).await;
        if let Some(reporter) = &self.reporter {
            reporter.publish_input(cmd);
        }
    }
}
