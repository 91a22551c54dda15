// tests/program_scenarios.rs
use cleaning_robot::{
    CleaningMode, CommandError, Event, InterpreterConfig, MemorySink, NumberFormat,
    RobotInterpreter, RobotState, RunSummary, run_program,
};

fn run(program: &[&str]) -> (RobotInterpreter, Vec<String>) {
    let mut interpreter = RobotInterpreter::default();
    let mut sink = MemorySink::new();
    interpreter.run(program, &mut sink).unwrap();
    (interpreter, sink.into_lines())
}

#[test]
fn test_demo_program() {
    let (interpreter, output) = run(&[
        "move 100", "turn -90", "set soap", "start", "move 50", "stop",
    ]);

    assert_eq!(
        output,
        [
            "POS 100,0",
            "ANGLE 270",
            "STATE soap",
            "START WITH soap",
            "POS 100,-50",
            "STOP",
        ]
    );

    let state = interpreter.state();
    assert_eq!(state.mode, CleaningMode::Soap);
    assert_eq!(state.angle, 270.0);
    assert!(!state.running);
}

#[test]
fn test_invalid_number_keeps_origin() {
    let (interpreter, output) = run(&["move abc"]);
    assert_eq!(output, ["ОШИБКА команда move ожидает число, получено: abc"]);
    assert_eq!(*interpreter.state(), RobotState::default());
}

#[test]
fn test_missing_argument() {
    let mut interpreter = RobotInterpreter::default();
    let result = interpreter.execute("turn");
    assert_eq!(
        result,
        Some(Err(CommandError::ArityMismatch {
            verb: "turn".into(),
            expected: 1,
            actual: 0,
        }))
    );
}

#[test]
fn test_unknown_mode_keeps_water() {
    let (interpreter, output) = run(&["set banana"]);
    assert_eq!(output, ["ОШИБКА неизвестный режим очистки: banana"]);
    assert_eq!(interpreter.state().mode, CleaningMode::Water);
}

#[test]
fn test_unknown_command() {
    let (_, output) = run(&["fly 10"]);
    assert_eq!(output, ["ОШИБКА неизвестная команда: fly"]);
}

#[test]
fn test_blank_lines_are_silent() {
    let mut interpreter = RobotInterpreter::default();
    let mut sink = MemorySink::new();
    let summary = interpreter.run(["", "  ", "start"], &mut sink).unwrap();

    assert_eq!(sink.lines(), ["START WITH water"]);
    assert_eq!(
        summary,
        RunSummary {
            lines: 3,
            events: 1,
            errors: 0,
        }
    );
    assert!(interpreter.state().running);
}

#[test]
fn test_extra_arguments_rejected() {
    let (interpreter, output) = run(&["start now", "move 1 2", "stop please"]);
    assert_eq!(
        output,
        [
            "ОШИБКА команда start ожидает аргументов: 0, получено: 1",
            "ОШИБКА команда move ожидает аргументов: 1, получено: 2",
            "ОШИБКА команда stop ожидает аргументов: 0, получено: 1",
        ]
    );
    assert_eq!(*interpreter.state(), RobotState::default());
}

#[test]
fn test_verbs_and_modes_are_case_insensitive() {
    let (interpreter, output) = run(&["SET Brush", "Start", "  MOVE   2.5  "]);
    assert_eq!(output, ["STATE brush", "START WITH brush", "POS 2.5,0"]);
    assert_eq!(interpreter.state().mode, CleaningMode::Brush);
}

#[test]
fn test_errors_do_not_halt_program() {
    let program = [
        "move 10", "jump", "turn x", "", "turn 90", "set", "set mud", "move 10", "fly",
    ];
    let mut interpreter = RobotInterpreter::default();
    let mut sink = MemorySink::new();
    let summary = interpreter.run(program, &mut sink).unwrap();

    assert_eq!(summary.lines, 9);
    assert_eq!(summary.events, 3);
    assert_eq!(summary.errors, 5);
    assert_eq!(sink.lines().len(), 8);
    assert_eq!(sink.lines()[2], "ОШИБКА команда turn ожидает число, получено: x");
    assert_eq!(sink.lines()[6], "POS 10,10");
    assert!(sink.lines().iter().filter(|l| l.starts_with("ОШИБКА ")).count() == 5);
}

#[test]
fn test_rejected_line_leaves_state_unchanged() {
    let mut interpreter = RobotInterpreter::default();
    interpreter.execute("move 3");
    interpreter.execute("turn 45");
    interpreter.execute("set soap");
    let before = *interpreter.state();

    for bad in ["move", "turn 1 2", "set gravel", "warp 9", "move 1e", "stop 0"] {
        assert!(matches!(interpreter.execute(bad), Some(Err(_))), "{bad}");
        assert_eq!(*interpreter.state(), before, "{bad}");
    }
}

#[test]
fn test_order_matters() {
    let (turn_first, _) = run(&["turn 90", "move 10"]);
    let (move_first, _) = run(&["move 10", "turn 90"]);
    assert_ne!(turn_first.state().position, move_first.state().position);
    assert_eq!(turn_first.state().angle, move_first.state().angle);
}

#[test]
fn test_turn_zero_after_move_changes_nothing() {
    let (moved, _) = run(&["turn 30", "move 7"]);
    let (moved_then_zero, output) = run(&["turn 30", "move 7", "turn 0"]);
    assert_eq!(moved.state(), moved_then_zero.state());
    assert_eq!(output[2], "ANGLE 30");
}

#[test]
fn test_set_is_idempotent() {
    let (once, _) = run(&["set brush"]);
    let (twice, output) = run(&["set brush", "set brush"]);
    assert_eq!(once.state(), twice.state());
    assert_eq!(output, ["STATE brush", "STATE brush"]);
}

#[test]
fn test_repeated_start_stop() {
    let (interpreter, output) = run(&["start", "start", "stop", "stop"]);
    assert_eq!(output, ["START WITH water", "START WITH water", "STOP", "STOP"]);
    assert!(!interpreter.state().running);
}

#[test]
fn test_large_turns_wrap() {
    let (_, output) = run(&["turn 725", "turn -1090", "turn 360"]);
    assert_eq!(output, ["ANGLE 5", "ANGLE 355", "ANGLE 355"]);
}

#[test]
fn test_fractional_output() {
    let (_, output) = run(&["turn 45", "move 10", "turn 0.5", "move -1.5"]);
    assert_eq!(output[0], "ANGLE 45");
    assert_eq!(output[1], "POS 7.07,7.07");
    assert_eq!(output[2], "ANGLE 45.5");
}

#[test]
fn test_custom_config() {
    let config = InterpreterConfig {
        error_prefix: "ERROR".to_string(),
        number_format: NumberFormat {
            precision: 3,
            ..Default::default()
        },
    };
    let mut interpreter = RobotInterpreter::new(config);
    assert_eq!(
        interpreter.execute_line("turn 12.3456").as_deref(),
        Some("ANGLE 12.346")
    );
    assert_eq!(
        interpreter.execute_line("hover").as_deref(),
        Some("ERROR неизвестная команда: hover")
    );
    assert_eq!(interpreter.execute_line("   "), None);
}

#[test]
fn test_config_from_json() {
    let config: InterpreterConfig = serde_json::from_str(r#"{ "error_prefix": "ERR" }"#).unwrap();
    assert_eq!(config.error_prefix, "ERR");
    assert_eq!(config.number_format, NumberFormat::default());
}

#[test]
fn test_reset_and_with_state() {
    let start = RobotState::default().turned(180.0).with_mode(CleaningMode::Soap);
    let mut interpreter = RobotInterpreter::default().with_state(start);
    assert_eq!(
        interpreter.execute("move 4"),
        Some(Ok(Event::Position(start.moved(4.0).position)))
    );
    assert_eq!(
        interpreter.execute_line("start").as_deref(),
        Some("START WITH soap")
    );

    interpreter.reset();
    assert_eq!(*interpreter.state(), RobotState::default());
}

#[test]
fn test_run_program_returns_final_state() {
    let mut sink = MemorySink::new();
    let state = run_program(["turn 90", "move 5", "start"], &mut sink).unwrap();
    assert_eq!(sink.lines(), ["ANGLE 90", "POS 0,5", "START WITH water"]);
    assert!(state.running);
    assert!((state.y() - 5.0).abs() < 1e-9);
}

#[test]
fn test_non_finite_arguments_are_applied() {
    let mut interpreter = RobotInterpreter::default();
    let mut sink = MemorySink::new();
    let summary = interpreter.run(["move nan", "turn inf"], &mut sink).unwrap();

    assert_eq!(sink.lines(), ["POS NaN,NaN", "ANGLE NaN"]);
    assert_eq!(summary.events, 2);
    assert_eq!(summary.errors, 0);
    assert!(interpreter.state().angle.is_nan());
}

#[test]
fn test_overflowing_distance_is_applied() {
    let mut interpreter = RobotInterpreter::default();
    assert_eq!(
        interpreter.execute_line("move 1e400").as_deref(),
        Some("POS inf,NaN")
    );
    assert_eq!(interpreter.state().x(), f64::INFINITY);
}
