use crate::spl::config;
use crate::spl::errors::SessionError;
use crate::spl::session::{Session, render_form};
use crate::spl::types::{InputConfigSet, MaxPreampInput, MicSensitivity, SplReport};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{BufRead, Write};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Maximum SPL you can measure with a measurement microphone and preamp"
)]
pub struct Cli {
    /// Microphone sensitivity in mV/Pa (1..=200).
    #[arg(short, long, default_value_t = i64::from(config::MIC_SENSITIVITY_DEFAULT))]
    pub sensitivity: i64,
    /// Maximum input voltage of the preamp in dBu (-20..=26).
    #[arg(
        short = 'u',
        long,
        allow_negative_numbers = true,
        default_value_t = i64::from(config::MAX_PREAMP_INPUT_DEFAULT)
    )]
    pub max_input: i64,
    /// Output format for the result.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Keep prompting for new values and recompute after each change.
    #[arg(short, long, conflicts_with_all = ["describe_inputs", "format"])]
    pub interactive: bool,
    /// Print the accepted input ranges and defaults as JSON and exit.
    #[arg(long)]
    pub describe_inputs: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn render_report(report: &SplReport, format: OutputFormat) -> Result<String, SessionError> {
    match format {
        OutputFormat::Text => Ok(render_form(report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

/// Executes one invocation against the given streams.
pub fn execute<R: BufRead, W: Write>(cli: &Cli, input: R, mut output: W) -> Result<()> {
    if cli.describe_inputs {
        let description = serde_json::to_string_pretty(&InputConfigSet::default())
            .context("failed to encode input configuration")?;
        writeln!(output, "{}", description)?;
        return Ok(());
    }

    let sensitivity = MicSensitivity::new(cli.sensitivity)?;
    let max_input = MaxPreampInput::new(cli.max_input)?;
    let mut session = Session::new(sensitivity, max_input);

    if cli.interactive {
        session
            .run(input, output)
            .context("interactive session failed")?;
        return Ok(());
    }

    let rendered = render_report(&session.report(), cli.format)?;
    writeln!(output, "{}", rendered)?;
    Ok(())
}
