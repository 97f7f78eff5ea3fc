mod accumulator;
mod approach;
mod axis_command;
mod dispatcher;
mod flight_computer;
pub(crate) mod flight_state;

pub use accumulator::CommandAccumulator;
pub use approach::{ApproachController, ErrorEstimate};
pub use axis_command::AxisCommand;
pub use dispatcher::CommandDispatcher;
pub use flight_computer::FlightComputer;
pub use flight_state::FlightMode;
