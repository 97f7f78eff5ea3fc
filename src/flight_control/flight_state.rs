use strum_macros::Display;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Display)]
pub enum FlightMode {
    Grounded,
    TakingOff,
    Flying,
    Landing,
    Emergency,
}

impl FlightMode {
    /// Whether operator axis input is meaningful in this mode. Transition
    /// states count: a pilot may already steer while the climb-out or the
    /// descent is still in progress.
    pub fn accepts_axis_input(self) -> bool {
        matches!(
            self,
            FlightMode::TakingOff | FlightMode::Flying | FlightMode::Landing
        )
    }

    /// Maps an AR.Drone navdata status code onto a mode. Unknown codes
    /// return `None` and leave the observed mode untouched.
    pub fn from_status(status: u8) -> Option<Self> {
        match status {
            0 => Some(FlightMode::Emergency),
            2 => Some(FlightMode::Grounded),
            3 | 4 | 7 => Some(FlightMode::Flying),
            6 => Some(FlightMode::TakingOff),
            8 => Some(FlightMode::Landing),
            _ => None,
        }
    }
}

/// Records the latest mode and gates transition requests. No timers live
/// here: completion of a transition (TakingOff to Flying, Landing to
/// Grounded, the post-emergency reset) is reported by telemetry through
/// `observe`, never computed locally.
#[derive(Debug)]
pub struct FlightModeMachine {
    current: FlightMode,
}

impl FlightModeMachine {
    pub fn new() -> Self {
        Self {
            current: FlightMode::Grounded,
        }
    }

    pub fn current(&self) -> FlightMode { self.current }

    /// Always accepted, from any mode.
    pub fn request_emergency(&mut self) -> bool {
        self.current = FlightMode::Emergency;
        true
    }

    /// Accepted only from Grounded or Emergency; anything else is a no-op.
    pub fn request_takeoff(&mut self) -> bool {
        if matches!(self.current, FlightMode::Grounded | FlightMode::Emergency) {
            self.current = FlightMode::TakingOff;
            true
        } else {
            false
        }
    }

    /// Accepted only from Flying; anything else is a no-op.
    pub fn request_land(&mut self) -> bool {
        if self.current == FlightMode::Flying {
            self.current = FlightMode::Landing;
            true
        } else {
            false
        }
    }

    /// Latest externally-observed mode from the telemetry feed.
    pub fn observe(&mut self, mode: FlightMode) {
        self.current = mode;
    }
}
