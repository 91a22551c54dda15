//! Cleaning robot CLI - run a command program from a file or stdin.
//!
//! Usage:
//!   cleaning-robot [program] [--config file.json] [--dump-state] [-v]
//!
//! Examples:
//!   cleaning-robot route.txt            # Run route.txt
//!   cat route.txt | cleaning-robot      # Read the program from stdin
//!   cleaning-robot --demo -vv           # Run the built-in demo with debug logs

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cleaning_robot::{InterpreterConfig, RobotInterpreter, RobotResult, RobotState, WriterSink};

const DEMO_PROGRAM: [&str; 6] = [
    "move 100",
    "turn -90",
    "set soap",
    "start",
    "move 50",
    "stop",
];

/// Cleaning robot command interpreter
#[derive(Parser, Debug)]
#[command(name = "cleaning-robot")]
#[command(about = "Run cleaning robot command programs")]
struct Args {
    /// Program file with one command per line (reads stdin when omitted)
    program: Option<PathBuf>,

    /// Run the built-in demo program
    #[arg(long, conflicts_with = "program")]
    demo: bool,

    /// JSON file with interpreter settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the final robot state as JSON on stderr
    #[arg(long)]
    dump_state: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> RobotResult<InterpreterConfig> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&text)?)
        }
        None => Ok(InterpreterConfig::default()),
    }
}

fn read_program(args: &Args) -> RobotResult<Vec<String>> {
    if args.demo {
        return Ok(DEMO_PROGRAM.iter().map(|line| line.to_string()).collect());
    }
    let lines: Vec<String> = match &args.program {
        Some(path) => std::fs::read_to_string(path)?
            .lines()
            .map(str::to_string)
            .collect(),
        None => io::stdin().lock().lines().collect::<io::Result<_>>()?,
    };
    Ok(lines)
}

fn state_json(state: &RobotState) -> RobotResult<String> {
    Ok(serde_json::to_string_pretty(state)?)
}

fn run(args: &Args) -> RobotResult<()> {
    let config = load_config(args.config.as_ref())?;
    let program = read_program(args)?;

    let mut interpreter = RobotInterpreter::new(config);
    interpreter.run(&program, WriterSink::stdout())?;

    if args.dump_state {
        eprintln!("{}", state_json(interpreter.state())?);
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
