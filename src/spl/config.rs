// --- Reference Calibration Constants ---
// 1 mW into the professional 600 ohm reference load
pub const REFERENCE_POWER_W: f64 = 0.001;
pub const REFERENCE_LOAD_OHMS: f64 = 600.0;
/// SPL reached by a 1 mV/Pa microphone at the reference voltage.
pub const SPL_REFERENCE_DB: f64 = 154.0;

// --- Microphone Sensitivity Input (mV/Pa) ---
pub const MIC_SENSITIVITY_MIN: u32 = 1;
pub const MIC_SENSITIVITY_MAX: u32 = 200;
pub const MIC_SENSITIVITY_DEFAULT: u32 = 15;
pub const MIC_SENSITIVITY_LABEL: &str = "Microphone sensitivity [mV/Pa] :";

// --- Max Preamp Input (dBu) ---
pub const MAX_PREAMP_INPUT_MIN: i32 = -20;
pub const MAX_PREAMP_INPUT_MAX: i32 = 26;
pub const MAX_PREAMP_INPUT_DEFAULT: i32 = 10;
pub const MAX_PREAMP_INPUT_LABEL: &str = "Maximum input voltage of the preamp [dBu] :";

// Both inputs move in whole units
pub const INPUT_STEP: i32 = 1;

// --- Presentation ---
pub const TITLE: &str = "Maximum SPL you can measure using your gear.";
pub const INPUT_PROMPT: &str = "Please input following data:";
pub const RESULT_LEAD_IN: &str = "And let's see the results now:";
pub const SPL_DISPLAY_DECIMALS: usize = 1;
