use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Tunables for the command pipeline and the scripted approach maneuver.
/// Defaults match the AR.Drone reference values; every field can be
/// overridden through a `QC_*` environment variable at startup.
#[derive(Debug, Clone)]
pub struct FlightConfig {
    /// Per-axis velocity limit, applied to every published command.
    pub vel_max: f64,
    /// Cadence of the fixed-rate command stream to the driver.
    pub dispatch_interval: Duration,
    /// Proportional gain mapping remaining x-error onto pitch.
    pub pitch_gain: f64,
    /// Proportional gain mapping remaining y-error onto yaw rate.
    pub yaw_gain: f64,
    /// First-order decay rate of the approach error estimate.
    pub decay_rate: f64,
    /// Error magnitude below which the approach counts as converged.
    pub convergence_threshold: f64,
    /// Dwell after issuing emergency/takeoff.
    pub mode_settle_delay: Duration,
    /// Dwell around the final land command.
    pub land_settle_delay: Duration,
    /// Pacing of the approach control loop.
    pub approach_loop_interval: Duration,
    /// Optional wall-clock deadline after which a non-converging approach
    /// is abandoned and a land is forced. `None` lets the loop run
    /// indefinitely, matching the stock behavior.
    pub approach_timeout: Option<Duration>,
    /// Initial positional error estimate of the scripted approach.
    pub initial_error: (f64, f64),
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            vel_max: 0.25,
            dispatch_interval: Duration::from_millis(33),
            pitch_gain: 0.5,
            yaw_gain: 0.05,
            decay_rate: 1.3,
            convergence_threshold: 0.05,
            mode_settle_delay: Duration::from_secs(2),
            land_settle_delay: Duration::from_secs(5),
            approach_loop_interval: Duration::from_millis(50),
            approach_timeout: None,
            initial_error: (0.5, 0.5),
        }
    }
}

impl FlightConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(v) = parse_var("QC_VEL_MAX") {
            config.vel_max = v;
        }
        if let Some(ms) = parse_var("QC_DISPATCH_INTERVAL_MS") {
            config.dispatch_interval = Duration::from_millis(ms);
        }
        if let Some(v) = parse_var("QC_PITCH_GAIN") {
            config.pitch_gain = v;
        }
        if let Some(v) = parse_var("QC_YAW_GAIN") {
            config.yaw_gain = v;
        }
        if let Some(v) = parse_var("QC_DECAY_RATE") {
            config.decay_rate = v;
        }
        if let Some(v) = parse_var("QC_CONVERGENCE_THRESHOLD") {
            config.convergence_threshold = v;
        }
        if let Some(secs) = parse_var("QC_APPROACH_TIMEOUT_S") {
            config.approach_timeout = Some(Duration::from_secs(secs));
        }
        config
    }
}

fn parse_var<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}
