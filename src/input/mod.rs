pub(crate) mod keymap;

pub use keymap::{Axis, ControlKey, KeyEvent};
