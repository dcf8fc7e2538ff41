use crate::spl::config;
use crate::spl::errors::SplInputError;
use serde::{Deserialize, Serialize};
use std::fmt;

// --- Input Quantities ---

/// Microphone sensitivity in mV/Pa. Always within the configured range.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "i64", into = "u32")]
pub struct MicSensitivity(u32);

impl MicSensitivity {
    pub const MIN: MicSensitivity = MicSensitivity(config::MIC_SENSITIVITY_MIN);
    pub const MAX: MicSensitivity = MicSensitivity(config::MIC_SENSITIVITY_MAX);

    pub fn new(value: i64) -> Result<Self, SplInputError> {
        let min = i64::from(config::MIC_SENSITIVITY_MIN);
        let max = i64::from(config::MIC_SENSITIVITY_MAX);
        if (min..=max).contains(&value) {
            Ok(MicSensitivity(value as u32))
        } else {
            Err(SplInputError::SensitivityOutOfRange {
                value,
                min: config::MIC_SENSITIVITY_MIN,
                max: config::MIC_SENSITIVITY_MAX,
            })
        }
    }

    /// Parses user-typed text, e.g. from a form field or the interactive prompt.
    pub fn parse(input: &str) -> Result<Self, SplInputError> {
        let value = parse_whole_number(input, "microphone sensitivity")?;
        Self::new(value)
    }

    pub const fn mv_per_pa(self) -> u32 {
        self.0
    }
}

impl Default for MicSensitivity {
    fn default() -> Self {
        MicSensitivity(config::MIC_SENSITIVITY_DEFAULT)
    }
}

impl TryFrom<i64> for MicSensitivity {
    type Error = SplInputError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MicSensitivity> for u32 {
    fn from(sensitivity: MicSensitivity) -> u32 {
        sensitivity.0
    }
}

impl fmt::Display for MicSensitivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Maximum preamp input level before clipping, in dBu.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "i64", into = "i32")]
pub struct MaxPreampInput(i32);

impl MaxPreampInput {
    pub const MIN: MaxPreampInput = MaxPreampInput(config::MAX_PREAMP_INPUT_MIN);
    pub const MAX: MaxPreampInput = MaxPreampInput(config::MAX_PREAMP_INPUT_MAX);

    pub fn new(value: i64) -> Result<Self, SplInputError> {
        let min = i64::from(config::MAX_PREAMP_INPUT_MIN);
        let max = i64::from(config::MAX_PREAMP_INPUT_MAX);
        if (min..=max).contains(&value) {
            Ok(MaxPreampInput(value as i32))
        } else {
            Err(SplInputError::PreampInputOutOfRange {
                value,
                min: config::MAX_PREAMP_INPUT_MIN,
                max: config::MAX_PREAMP_INPUT_MAX,
            })
        }
    }

    pub fn parse(input: &str) -> Result<Self, SplInputError> {
        let value = parse_whole_number(input, "max preamp input")?;
        Self::new(value)
    }

    pub const fn dbu(self) -> i32 {
        self.0
    }
}

impl Default for MaxPreampInput {
    fn default() -> Self {
        MaxPreampInput(config::MAX_PREAMP_INPUT_DEFAULT)
    }
}

impl TryFrom<i64> for MaxPreampInput {
    type Error = SplInputError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MaxPreampInput> for i32 {
    fn from(input: MaxPreampInput) -> i32 {
        input.0
    }
}

impl fmt::Display for MaxPreampInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn parse_whole_number(input: &str, field: &'static str) -> Result<i64, SplInputError> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| SplInputError::NotAnInteger {
            field,
            input: input.to_string(),
        })
}

// --- Input Configuration ---

/// Describes one bounded number input so a front end can build its widget.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InputConfig {
    pub label: String,
    pub unit: String,
    pub min: i32,
    pub max: i32,
    pub default: i32,
    pub step: i32,
}

impl InputConfig {
    pub fn mic_sensitivity() -> Self {
        InputConfig {
            label: config::MIC_SENSITIVITY_LABEL.to_string(),
            unit: "mV/Pa".to_string(),
            min: config::MIC_SENSITIVITY_MIN as i32,
            max: config::MIC_SENSITIVITY_MAX as i32,
            default: config::MIC_SENSITIVITY_DEFAULT as i32,
            step: config::INPUT_STEP,
        }
    }

    pub fn max_preamp_input() -> Self {
        InputConfig {
            label: config::MAX_PREAMP_INPUT_LABEL.to_string(),
            unit: "dBu".to_string(),
            min: config::MAX_PREAMP_INPUT_MIN,
            max: config::MAX_PREAMP_INPUT_MAX,
            default: config::MAX_PREAMP_INPUT_DEFAULT,
            step: config::INPUT_STEP,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InputConfigSet {
    pub mic_sensitivity: InputConfig,
    pub max_preamp_input: InputConfig,
}

impl Default for InputConfigSet {
    fn default() -> Self {
        InputConfigSet {
            mic_sensitivity: InputConfig::mic_sensitivity(),
            max_preamp_input: InputConfig::max_preamp_input(),
        }
    }
}

// --- Result ---

/// Outcome of one evaluation of the calculator.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SplReport {
    pub mic_sensitivity: MicSensitivity,
    pub max_preamp_input: MaxPreampInput,
    pub preamp_voltage_rms: f64,
    pub max_spl_db: f64,
}

impl SplReport {
    /// The sentence shown under the inputs.
    pub fn summary(&self) -> String {
        format!(
            "When using a measurement microphone with sensitivity of {} mV/Pa plugged into \
             a preamp with maximum input voltage of {} dBu you can measure peak values up to \
             {:.prec$} dB SPL",
            self.mic_sensitivity,
            self.max_preamp_input,
            self.max_spl_db,
            prec = config::SPL_DISPLAY_DECIMALS,
        )
    }
}
