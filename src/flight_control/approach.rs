use super::axis_command::AxisCommand;
use super::dispatcher::CommandDispatcher;
use super::flight_computer::FlightComputer;
use crate::config::FlightConfig;
use crate::{info, log, warn};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::{Instant, sleep};

/// Remaining positional offset of the scripted approach, decayed toward
/// zero by wall-clock time. A large step can overshoot past zero; that is
/// tolerated, not treated as a fault.
#[derive(Debug, Clone, Copy)]
pub struct ErrorEstimate {
    pub error_x: f64,
    pub error_y: f64,
}

impl ErrorEstimate {
    pub fn new(error_x: f64, error_y: f64) -> Self {
        Self { error_x, error_y }
    }

    /// Discrete first-order decay step: `e -= e * dt * rate`. Not a PID
    /// law; the step size depends on real loop latency.
    pub fn decay(&mut self, dt: f64, rate: f64) {
        self.error_x -= self.error_x * dt * rate;
        self.error_y -= self.error_y * dt * rate;
    }
}

/// Scripted emergency-reset, takeoff, converge, land sequence run in place
/// of manual input. Known limitation: the decay law has no stability guard,
/// so with no deadline configured a non-converging run never terminates.
pub struct ApproachController {
    f_cont: Arc<RwLock<FlightComputer>>,
    dispatcher: Arc<CommandDispatcher>,
    vel_max: f64,
    pitch_gain: f64,
    yaw_gain: f64,
    decay_rate: f64,
    convergence_threshold: f64,
    mode_settle: Duration,
    land_settle: Duration,
    loop_interval: Duration,
    deadline: Option<Duration>,
}

impl ApproachController {
    pub fn new(
        config: &FlightConfig,
        f_cont: Arc<RwLock<FlightComputer>>,
        dispatcher: Arc<CommandDispatcher>,
    ) -> Self {
        Self {
            f_cont,
            dispatcher,
            vel_max: config.vel_max,
            pitch_gain: config.pitch_gain,
            yaw_gain: config.yaw_gain,
            decay_rate: config.decay_rate,
            convergence_threshold: config.convergence_threshold,
            mode_settle: config.mode_settle_delay,
            land_settle: config.land_settle_delay,
            loop_interval: config.approach_loop_interval,
            deadline: config.approach_timeout,
        }
    }

    pub async fn run(&self, initial: ErrorEstimate) {
        info!(
            "Approach starting with error ({:.2}, {:.2})",
            initial.error_x, initial.error_y
        );
        self.f_cont.write().await.request_emergency().await;
        sleep(self.mode_settle).await;
        self.f_cont.write().await.request_takeoff().await;
        sleep(self.mode_settle).await;

        let converged = self.converge(initial).await;
        if !converged {
            warn!("Approach abandoned before convergence, forcing land");
        }

        sleep(self.land_settle).await;
        self.f_cont.write().await.request_land().await;
        sleep(self.land_settle).await;
        info!("Approach finished");
    }

    /// Control loop: pitch toward the remaining x-error, yaw toward the
    /// y-error, decay both by elapsed wall-clock time. Returns whether the
    /// error crossed the convergence threshold.
    async fn converge(&self, initial: ErrorEstimate) -> bool {
        let mut error = initial;
        let started = Instant::now();
        let mut last = started;
        while error.error_x >= self.convergence_threshold {
            let cmd = AxisCommand::new(
                0.0,
                error.error_x * self.pitch_gain,
                error.error_y * self.yaw_gain,
                0.0,
            )
            .clamped(self.vel_max);
            self.dispatcher.update_command(cmd).await;
            sleep(self.loop_interval).await;
            let now = Instant::now();
            error.decay((now - last).as_secs_f64(), self.decay_rate);
            last = now;
            if let Some(limit) = self.deadline {
                if started.elapsed() > limit {
                    return false;
                }
            }
        }
        log!(
            "Converged at error ({:.3}, {:.3}) after {:.1}s",
            error.error_x,
            error.error_y,
            started.elapsed().as_secs_f64()
        );
        true
    }
}
