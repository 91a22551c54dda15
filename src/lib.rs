//! # cleaning-robot
//!
//! A line-oriented command interpreter for a simulated two-dimensional cleaning robot.
//!
//! Each program line names one of five verbs (`move`, `turn`, `set`, `start`, `stop`).
//! The [`RobotInterpreter`] validates the line, replaces the current [`RobotState`]
//! and emits a single event (`POS 100,0`, `ANGLE 270`, ...). A malformed line
//! emits a single error line instead and leaves the state untouched, so one bad
//! command never aborts the rest of the program.

pub mod command;
pub mod error;
pub mod format;
pub mod interpreter;
pub mod sink;
pub mod state;

pub use command::*;
pub use error::*;
pub use format::*;
pub use interpreter::*;
pub use sink::*;
pub use state::*;
