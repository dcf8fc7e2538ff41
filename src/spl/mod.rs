pub mod calculator;
pub mod config;
pub mod errors;
pub mod session;
pub mod types;

mod proptests;

pub use calculator::{calculate, compute_max_spl};
pub use types::{MaxPreampInput, MicSensitivity, SplReport};
