use crate::spl::calculator;
use crate::spl::config;
use crate::spl::errors::SessionError;
use crate::spl::types::{MaxPreampInput, MicSensitivity, SplReport};
use std::io::{BufRead, Write};

const HELP_TEXT: &str = "\
Commands:
  sensitivity <n> | sens <n>   set microphone sensitivity in mV/Pa (1..=200)
  input <n> | preamp <n>       set max preamp input in dBu (-20..=26)
  show                         print the current result
  reset                        restore the default inputs
  help | ?                     show this text
  quit | exit                  leave the session";

// --- Session Commands ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    SetSensitivity(MicSensitivity),
    SetMaxInput(MaxPreampInput),
    Show,
    Reset,
    Help,
    Quit,
}

impl SessionCommand {
    /// Parses one line typed at the prompt. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, SessionError> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Ok(None);
        };
        let value = words.next();
        if let Some(extra) = words.next() {
            return Err(SessionError::UnexpectedArgument {
                command: command.to_string(),
                extra: extra.to_string(),
            });
        }

        let require_value = || {
            value.ok_or_else(|| SessionError::MissingValue {
                command: command.to_string(),
            })
        };

        let parsed = match command.to_ascii_lowercase().as_str() {
            "sensitivity" | "sens" => {
                SessionCommand::SetSensitivity(MicSensitivity::parse(require_value()?)?)
            }
            "input" | "preamp" => {
                SessionCommand::SetMaxInput(MaxPreampInput::parse(require_value()?)?)
            }
            "show" => SessionCommand::Show,
            "reset" => SessionCommand::Reset,
            "help" | "?" => SessionCommand::Help,
            "quit" | "exit" => SessionCommand::Quit,
            _ => return Err(SessionError::UnknownCommand(command.to_string())),
        };

        let takes_value = matches!(
            parsed,
            SessionCommand::SetSensitivity(_) | SessionCommand::SetMaxInput(_)
        );
        match value {
            Some(extra) if !takes_value => Err(SessionError::UnexpectedArgument {
                command: command.to_string(),
                extra: extra.to_string(),
            }),
            _ => Ok(Some(parsed)),
        }
    }
}

// --- Rendering ---

/// Full form as shown on start: title, the two inputs and the result sentence.
pub fn render_form(report: &SplReport) -> String {
    format!(
        "{}\n{}\n{} {}\n{} {}\n\n{}\n{}",
        config::TITLE,
        config::INPUT_PROMPT,
        config::MIC_SENSITIVITY_LABEL,
        report.mic_sensitivity,
        config::MAX_PREAMP_INPUT_LABEL,
        report.max_preamp_input,
        config::RESULT_LEAD_IN,
        report.summary(),
    )
}

// --- Session State ---

/// Holds the two current input values and re-evaluates on every change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    sensitivity: MicSensitivity,
    max_input: MaxPreampInput,
}

/// What the caller should do after a command has been applied.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    Updated(SplReport),
    Message(&'static str),
    Finished,
}

impl Session {
    pub fn new(sensitivity: MicSensitivity, max_input: MaxPreampInput) -> Self {
        Session {
            sensitivity,
            max_input,
        }
    }

    pub fn sensitivity(&self) -> MicSensitivity {
        self.sensitivity
    }

    pub fn max_input(&self) -> MaxPreampInput {
        self.max_input
    }

    pub fn report(&self) -> SplReport {
        calculator::calculate(self.sensitivity, self.max_input)
    }

    pub fn apply(&mut self, command: SessionCommand) -> SessionOutcome {
        match command {
            SessionCommand::SetSensitivity(sensitivity) => {
                self.sensitivity = sensitivity;
                SessionOutcome::Updated(self.report())
            }
            SessionCommand::SetMaxInput(max_input) => {
                self.max_input = max_input;
                SessionOutcome::Updated(self.report())
            }
            SessionCommand::Show => SessionOutcome::Updated(self.report()),
            SessionCommand::Reset => {
                *self = Session::default();
                SessionOutcome::Updated(self.report())
            }
            SessionCommand::Help => SessionOutcome::Message(HELP_TEXT),
            SessionCommand::Quit => SessionOutcome::Finished,
        }
    }

    /// Runs the prompt loop until `quit` or end of input.
    ///
    /// Rejected lines are reported on `output` and leave the inputs untouched.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut output: W,
    ) -> Result<(), SessionError> {
        log::info!(
            "Session: starting with {} mV/Pa, {} dBu",
            self.sensitivity,
            self.max_input
        );
        writeln!(output, "{}", render_form(&self.report()))?;
        writeln!(output, "Type 'help' for commands.")?;

        for line in input.lines() {
            let line = line?;
            let command = match SessionCommand::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    log::warn!("Session: rejected input '{}': {}", line.trim(), e);
                    writeln!(output, "error: {}", e)?;
                    continue;
                }
            };

            match self.apply(command) {
                SessionOutcome::Updated(report) => writeln!(output, "{}", report.summary())?,
                SessionOutcome::Message(text) => writeln!(output, "{}", text)?,
                SessionOutcome::Finished => break,
            }
        }

        output.flush()?;
        log::info!("Session: finished");
        Ok(())
    }
}
