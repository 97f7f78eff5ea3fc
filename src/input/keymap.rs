use std::collections::HashMap;
use std::sync::LazyLock;
use strum_macros::Display;

/// Logical controller keys, independent of any input toolkit. The eight
/// axis keys carry a static (axis, sign) binding; Takeoff, Land and
/// Emergency are mode keys and never touch the accumulator.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Display)]
pub enum ControlKey {
    PitchForward,
    PitchBackward,
    RollLeft,
    RollRight,
    YawLeft,
    YawRight,
    IncreaseAltitude,
    DecreaseAltitude,
    Takeoff,
    Land,
    Emergency,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Display)]
pub enum Axis {
    Roll,
    Pitch,
    Yaw,
    Vertical,
}

pub static AXIS_BINDING_LOOKUP: LazyLock<HashMap<ControlKey, (Axis, f64)>> = LazyLock::new(|| {
    let bindings = [
        (ControlKey::PitchForward, Axis::Pitch, 1.0),
        (ControlKey::PitchBackward, Axis::Pitch, -1.0),
        (ControlKey::RollLeft, Axis::Roll, 1.0),
        (ControlKey::RollRight, Axis::Roll, -1.0),
        (ControlKey::YawLeft, Axis::Yaw, 1.0),
        (ControlKey::YawRight, Axis::Yaw, -1.0),
        (ControlKey::IncreaseAltitude, Axis::Vertical, 1.0),
        (ControlKey::DecreaseAltitude, Axis::Vertical, -1.0),
    ];

    let mut lookup = HashMap::new();
    for (key, axis, sign) in bindings {
        lookup.insert(key, (axis, sign));
    }
    lookup
});

impl ControlKey {
    /// Default bench keyboard layout. Native key codes are translated here
    /// at the boundary; nothing past this point knows about characters.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'e' => Some(ControlKey::PitchForward),
            'd' => Some(ControlKey::PitchBackward),
            's' => Some(ControlKey::RollLeft),
            'f' => Some(ControlKey::RollRight),
            'w' => Some(ControlKey::YawLeft),
            'r' => Some(ControlKey::YawRight),
            'q' => Some(ControlKey::IncreaseAltitude),
            'a' => Some(ControlKey::DecreaseAltitude),
            'y' => Some(ControlKey::Takeoff),
            'h' => Some(ControlKey::Land),
            ' ' => Some(ControlKey::Emergency),
            _ => None,
        }
    }

    pub fn binding(&self) -> Option<(Axis, f64)> {
        AXIS_BINDING_LOOKUP.get(self).copied()
    }

    pub fn is_axis_key(&self) -> bool {
        AXIS_BINDING_LOOKUP.contains_key(self)
    }
}

/// One key transition from the input layer. `autorepeat` marks OS-generated
/// repeats fired while a key stays held; those never reach the accumulator.
#[derive(Debug, Clone, Copy)]
pub struct KeyEvent {
    pub key: ControlKey,
    pub pressed: bool,
    pub autorepeat: bool,
}

impl KeyEvent {
    pub fn down(key: ControlKey) -> Self {
        Self {
            key,
            pressed: true,
            autorepeat: false,
        }
    }

    pub fn up(key: ControlKey) -> Self {
        Self {
            key,
            pressed: false,
            autorepeat: false,
        }
    }

    pub fn repeat(key: ControlKey) -> Self {
        Self {
            key,
            pressed: true,
            autorepeat: true,
        }
    }
}
