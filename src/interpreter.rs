//! Interpreter that applies command lines to a [`RobotState`].
//!
//! The entry point is [`RobotInterpreter`]. Configure it with an
//! [`InterpreterConfig`], then feed it lines one at a time with
//! [`RobotInterpreter::execute`] / [`RobotInterpreter::execute_line`], or hand a
//! whole program and an [`EventSink`] to [`RobotInterpreter::run`].

use crate::command::{CommandSpec, Event};
use crate::error::{CommandError, RobotResult};
use crate::format::NumberFormat;
use crate::sink::EventSink;
use crate::state::RobotState;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Configuration for command interpretation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpreterConfig {
    /// Token placed in front of every error line. Default: `ОШИБКА`.
    pub error_prefix: String,
    /// Rounding rules for `POS` and `ANGLE` events.
    pub number_format: NumberFormat,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            error_prefix: "ОШИБКА".to_string(),
            number_format: NumberFormat::default(),
        }
    }
}

/// Line counts for one [`RobotInterpreter::run`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Input lines read, blank ones included.
    pub lines: usize,
    /// Lines that produced an event.
    pub events: usize,
    /// Lines that produced an error.
    pub errors: usize,
}

/// Interprets command lines against a single current state.
pub struct RobotInterpreter {
    commands: HashMap<&'static str, CommandSpec>,
    state: RobotState,
    config: InterpreterConfig,
}

impl Default for RobotInterpreter {
    fn default() -> Self {
        Self::new(InterpreterConfig::default())
    }
}

impl RobotInterpreter {
    /// Creates an interpreter at the default state with the standard command table.
    pub fn new(config: InterpreterConfig) -> Self {
        let commands = CommandSpec::STANDARD
            .into_iter()
            .map(|spec| (spec.verb(), spec))
            .collect();
        Self {
            commands,
            state: RobotState::default(),
            config,
        }
    }

    /// Replaces the starting state (builder pattern).
    pub fn with_state(mut self, state: RobotState) -> Self {
        self.state = state;
        self
    }

    pub fn state(&self) -> &RobotState {
        &self.state
    }

    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    /// Puts the robot back at the origin with default settings.
    pub fn reset(&mut self) {
        self.state = RobotState::default();
    }

    /// Interprets one line.
    ///
    /// Returns `None` for a blank line. Otherwise the line is tokenized on
    /// whitespace, the lowercased first token is looked up in the command
    /// table and the remaining tokens are validated against its arity and
    /// argument kinds. The held state is replaced only when the whole line is
    /// valid; an `Err` leaves it exactly as it was.
    pub fn execute(&mut self, line: &str) -> Option<Result<Event, CommandError>> {
        let mut tokens = line.split_whitespace();
        let verb = tokens.next()?.to_lowercase();
        let args: Vec<&str> = tokens.collect();

        let result = self
            .commands
            .get(verb.as_str())
            .ok_or_else(|| CommandError::UnknownCommand(verb.clone()))
            .and_then(|spec| spec.parse(&args))
            .map(|command| {
                let (next, event) = command.apply(&self.state);
                self.state = next;
                event
            });

        match &result {
            Ok(event) => debug!(%verb, ?event, state = ?self.state, "command applied"),
            Err(err) => warn!(%verb, %err, "command rejected"),
        }
        Some(result)
    }

    /// Interprets one line and renders the outcome as an output line.
    ///
    /// Events use the configured number format; errors are prefixed with
    /// [`InterpreterConfig::error_prefix`].
    pub fn execute_line(&mut self, line: &str) -> Option<String> {
        self.execute(line).map(|result| match result {
            Ok(event) => event.render(&self.config.number_format),
            Err(err) => self.render_error(&err),
        })
    }

    pub fn render_error(&self, err: &CommandError) -> String {
        format!("{} {}", self.config.error_prefix, err)
    }

    /// Runs every line of `program` in order, emitting one line per non-blank input.
    ///
    /// Rejected commands are reported to `sink` and never stop the run. Only a
    /// failing sink ends it early.
    pub fn run<I, S, K>(&mut self, program: I, mut sink: K) -> RobotResult<RunSummary>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        K: EventSink,
    {
        let mut summary = RunSummary::default();

        for line in program {
            summary.lines += 1;
            let Some(result) = self.execute(line.as_ref()) else {
                continue;
            };
            let rendered = match result {
                Ok(event) => {
                    summary.events += 1;
                    event.render(&self.config.number_format)
                }
                Err(err) => {
                    summary.errors += 1;
                    self.render_error(&err)
                }
            };
            sink.emit(&rendered)?;
        }
        sink.flush()?;

        info!(
            lines = summary.lines,
            events = summary.events,
            errors = summary.errors,
            "program finished"
        );
        Ok(summary)
    }
}

/// Runs `program` on a fresh interpreter with the default configuration.
///
/// Returns the final state.
pub fn run_program<I, S, K>(program: I, sink: K) -> RobotResult<RobotState>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    K: EventSink,
{
    let mut interpreter = RobotInterpreter::default();
    interpreter.run(program, sink)?;
    Ok(*interpreter.state())
}
