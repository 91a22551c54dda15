//! Command vocabulary, argument parsing and output events.

use crate::error::CommandError;
use crate::format::NumberFormat;
use crate::state::{CleaningMode, RobotState};
use glam::DVec2;
use std::fmt;

/// A fully validated command, ready to be applied to a [`RobotState`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Move along the heading by the given distance (`move <distance>`).
    Move(f64),
    /// Rotate by the given number of degrees (`turn <delta>`).
    Turn(f64),
    /// Switch the cleaning mode (`set <mode>`).
    SetMode(CleaningMode),
    /// Start cleaning (`start`).
    Start,
    /// Stop cleaning (`stop`).
    Stop,
}

impl Command {
    /// Computes the next state together with the event describing it.
    pub fn apply(&self, state: &RobotState) -> (RobotState, Event) {
        match *self {
            Command::Move(distance) => {
                let next = state.moved(distance);
                (next, Event::Position(next.position))
            }
            Command::Turn(delta) => {
                let next = state.turned(delta);
                (next, Event::Angle(next.angle))
            }
            Command::SetMode(mode) => (state.with_mode(mode), Event::Mode(mode)),
            Command::Start => {
                let next = state.started();
                (next, Event::Started(next.mode))
            }
            Command::Stop => (state.stopped(), Event::Stopped),
        }
    }
}

/// The kind of value a command argument must parse to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArgKind {
    /// A real number (`f64`).
    Real,
    /// One of the cleaning mode names.
    Mode,
}

/// Dispatch-table entry describing one verb.
#[derive(Clone, Copy)]
pub struct CommandSpec {
    verb: &'static str,
    /// Expected argument kinds. The arity is the length of this slice.
    args: &'static [ArgKind],
    /// Builds the command, or `None` when the parsed values do not fit the verb.
    build: fn(&[Arg]) -> Option<Command>,
}

/// A parsed argument value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Arg {
    Real(f64),
    Mode(CleaningMode),
}

impl CommandSpec {
    /// The standard five-verb vocabulary.
    pub const STANDARD: [CommandSpec; 5] = [
        CommandSpec {
            verb: "move",
            args: &[ArgKind::Real],
            build: |args| match args {
                [Arg::Real(distance)] => Some(Command::Move(*distance)),
                _ => None,
            },
        },
        CommandSpec {
            verb: "turn",
            args: &[ArgKind::Real],
            build: |args| match args {
                [Arg::Real(delta)] => Some(Command::Turn(*delta)),
                _ => None,
            },
        },
        CommandSpec {
            verb: "set",
            args: &[ArgKind::Mode],
            build: |args| match args {
                [Arg::Mode(mode)] => Some(Command::SetMode(*mode)),
                _ => None,
            },
        },
        CommandSpec {
            verb: "start",
            args: &[],
            build: |_| Some(Command::Start),
        },
        CommandSpec {
            verb: "stop",
            args: &[],
            build: |_| Some(Command::Stop),
        },
    ];

    /// Lowercase verb.
    pub fn verb(&self) -> &'static str {
        self.verb
    }

    pub fn args(&self) -> &'static [ArgKind] {
        self.args
    }

    pub fn arity(&self) -> usize {
        self.args.len()
    }

    /// Validates raw argument tokens and builds the command.
    pub fn parse(&self, raw: &[&str]) -> Result<Command, CommandError> {
        if raw.len() != self.arity() {
            return Err(CommandError::ArityMismatch {
                verb: self.verb.to_string(),
                expected: self.arity(),
                actual: raw.len(),
            });
        }

        let args = self
            .args
            .iter()
            .zip(raw)
            .map(|(kind, token)| self.parse_arg(*kind, token))
            .collect::<Result<Vec<_>, _>>()?;

        (self.build)(&args).ok_or_else(|| CommandError::InvalidArgument {
            verb: self.verb.to_string(),
            value: raw.join(" "),
        })
    }

    fn parse_arg(&self, kind: ArgKind, token: &str) -> Result<Arg, CommandError> {
        match kind {
            ArgKind::Real => token
                .parse::<f64>()
                .map(Arg::Real)
                .map_err(|_| CommandError::InvalidArgument {
                    verb: self.verb.to_string(),
                    value: token.to_string(),
                }),
            ArgKind::Mode => token.parse::<CleaningMode>().map(Arg::Mode),
        }
    }
}

/// An observable result of a successfully applied command.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    /// `POS <x>,<y>`
    Position(DVec2),
    /// `ANGLE <angle>`
    Angle(f64),
    /// `STATE <mode>`
    Mode(CleaningMode),
    /// `START WITH <mode>`
    Started(CleaningMode),
    /// `STOP`
    Stopped,
}

impl Event {
    /// Renders the event line using `numbers` for coordinates and angles.
    pub fn render(&self, numbers: &NumberFormat) -> String {
        match self {
            Event::Position(pos) => {
                format!("POS {},{}", numbers.format(pos.x), numbers.format(pos.y))
            }
            Event::Angle(angle) => format!("ANGLE {}", numbers.format(*angle)),
            Event::Mode(mode) => format!("STATE {mode}"),
            Event::Started(mode) => format!("START WITH {mode}"),
            Event::Stopped => "STOP".to_string(),
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&NumberFormat::default()))
    }
}
