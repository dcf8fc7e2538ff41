use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SplInputError {
    #[error("Microphone sensitivity {value} mV/Pa is outside the accepted range ({min}..={max})")]
    SensitivityOutOfRange { value: i64, min: u32, max: u32 },
    #[error("Max preamp input {value} dBu is outside the accepted range ({min}..={max})")]
    PreampInputOutOfRange { value: i64, min: i32, max: i32 },
    #[error("Value '{input}' for {field} is not a whole number")]
    NotAnInteger { field: &'static str, input: String },
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Unknown command '{0}'. Type 'help' for a list of commands.")]
    UnknownCommand(String),
    #[error("Command '{command}' expects a value")]
    MissingValue { command: String },
    #[error("Command '{command}' takes at most one value, got '{extra}'")]
    UnexpectedArgument { command: String, extra: String },
    #[error(transparent)]
    Input(#[from] SplInputError),
    #[error("Session I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to encode report as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_the_bounds() {
        let err = SplInputError::SensitivityOutOfRange {
            value: 0,
            min: 1,
            max: 200,
        };
        assert_eq!(
            err.to_string(),
            "Microphone sensitivity 0 mV/Pa is outside the accepted range (1..=200)"
        );
    }

    #[test]
    fn session_error_wraps_input_error_transparently() {
        let input = SplInputError::PreampInputOutOfRange {
            value: 27,
            min: -20,
            max: 26,
        };
        let expected = input.to_string();
        let err: SessionError = input.into();
        assert_eq!(err.to_string(), expected);
    }
}
