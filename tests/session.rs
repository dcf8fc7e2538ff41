use max_spl_lib::spl::errors::SplInputError;
use max_spl_lib::spl::session::{Session, SessionCommand, SessionOutcome};
use max_spl_lib::spl::{MaxPreampInput, MicSensitivity, calculate};
use std::io::Cursor;

fn run(script: &str) -> String {
    let mut session = Session::default();
    let mut out = Vec::new();
    session.run(Cursor::new(script), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn interactive_walkthrough_of_reference_scenarios() {
    let out = run("sens 1\npreamp 0\nsens 200\npreamp 26\nsens 1\npreamp -20\nquit\n");
    let results: Vec<&str> = out
        .lines()
        .filter(|line| line.starts_with("When using"))
        .map(|line| line.rsplit("up to ").next().unwrap())
        .collect();
    assert_eq!(
        results,
        vec![
            // initial render with defaults (15 mV/Pa, 10 dBu)
            "138.3 dB SPL",
            "161.8 dB SPL",
            "151.8 dB SPL",
            "105.8 dB SPL",
            "131.8 dB SPL",
            "177.8 dB SPL",
            "131.8 dB SPL",
        ]
    );
}

#[test]
fn help_and_bad_lines_do_not_change_inputs() {
    let out = run("help\nsens abc\npreamp 99\nfrobnicate\n\nshow\n");
    assert!(out.contains("Commands:"));
    assert!(out.contains("not a whole number"));
    assert!(out.contains("outside the accepted range (-20..=26)"));
    assert!(out.contains("Unknown command 'frobnicate'"));
    assert!(out.trim_end().ends_with("138.3 dB SPL"));
}

#[test]
fn apply_returns_fresh_report_on_every_change() {
    let mut session = Session::default();
    let sens = MicSensitivity::new(50).unwrap();
    match session.apply(SessionCommand::SetSensitivity(sens)) {
        SessionOutcome::Updated(report) => {
            assert_eq!(report, calculate(sens, MaxPreampInput::default()));
        }
        other => panic!("unexpected outcome {:?}", other),
    }
    assert_eq!(session.apply(SessionCommand::Quit), SessionOutcome::Finished);
}

#[test]
fn validation_errors_surface_at_the_boundary() {
    assert_eq!(
        MaxPreampInput::new(-21),
        Err(SplInputError::PreampInputOutOfRange {
            value: -21,
            min: -20,
            max: 26
        })
    );
    assert!(MicSensitivity::parse("").is_err());
}
