use crate::spl::config;
use crate::spl::types::{MaxPreampInput, MicSensitivity, SplReport};

/// RMS voltage of 1 mW dissipated in the 600 ohm reference load (0 dBu).
pub fn reference_voltage_rms() -> f64 {
    (config::REFERENCE_POWER_W * config::REFERENCE_LOAD_OHMS).sqrt()
}

/// Converts a level in dBu to volts RMS.
pub fn dbu_to_volts(dbu: f64) -> f64 {
    reference_voltage_rms() * 10f64.powf(dbu / 20.0)
}

/// Highest SPL the microphone/preamp chain can capture before the preamp clips.
///
/// The sensitivity range starts at 1 mV/Pa, so the log argument is always
/// positive and finite.
pub fn compute_max_spl(sensitivity: MicSensitivity, max_input: MaxPreampInput) -> f64 {
    let preamp_voltage_rms = dbu_to_volts(f64::from(max_input.dbu()));
    spl_for_voltage(preamp_voltage_rms, sensitivity)
}

fn spl_for_voltage(preamp_voltage_rms: f64, sensitivity: MicSensitivity) -> f64 {
    config::SPL_REFERENCE_DB
        + 20.0 * (preamp_voltage_rms / f64::from(sensitivity.mv_per_pa())).log10()
}

/// Evaluates the chain and keeps the intermediate voltage for display.
pub fn calculate(sensitivity: MicSensitivity, max_input: MaxPreampInput) -> SplReport {
    let preamp_voltage_rms = dbu_to_volts(f64::from(max_input.dbu()));
    let max_spl_db = spl_for_voltage(preamp_voltage_rms, sensitivity);
    log::debug!(
        "Calculator: {} mV/Pa, {} dBu -> {:.4} V RMS, {:.3} dB SPL",
        sensitivity,
        max_input,
        preamp_voltage_rms,
        max_spl_db
    );
    SplReport {
        mic_sensitivity: sensitivity,
        max_preamp_input: max_input,
        preamp_voltage_rms,
        max_spl_db,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spl(sens: i64, dbu: i64) -> f64 {
        compute_max_spl(
            MicSensitivity::new(sens).unwrap(),
            MaxPreampInput::new(dbu).unwrap(),
        )
    }

    fn rounded(value: f64) -> String {
        format!("{:.1}", value)
    }

    #[test]
    fn reference_voltage_is_0_dbu() {
        assert!((reference_voltage_rms() - 0.774_596_669).abs() < 1e-9);
        assert!((dbu_to_volts(0.0) - reference_voltage_rms()).abs() < 1e-12);
    }

    #[test]
    fn twenty_db_is_a_factor_of_ten() {
        let ratio = dbu_to_volts(20.0) / dbu_to_volts(0.0);
        assert!((ratio - 10.0).abs() < 1e-9);
    }

    #[test]
    fn default_inputs() {
        assert_eq!(rounded(spl(15, 10)), "138.3");
    }

    #[test]
    fn unity_sensitivity_at_0_dbu() {
        assert_eq!(rounded(spl(1, 0)), "151.8");
    }

    #[test]
    fn upper_corner_of_the_domain() {
        let report = calculate(
            MicSensitivity::new(200).unwrap(),
            MaxPreampInput::new(26).unwrap(),
        );
        let expected = reference_voltage_rms() * 10f64.powf(1.3);
        assert!((report.preamp_voltage_rms - expected).abs() < 1e-9);
        assert!((report.preamp_voltage_rms - 15.4552).abs() < 1e-3);
        assert_eq!(rounded(report.max_spl_db), "131.8");
    }

    #[test]
    fn lowest_preamp_input() {
        assert_eq!(rounded(spl(1, -20)), "131.8");
    }

    #[test]
    fn calculate_agrees_with_compute_max_spl() {
        let sens = MicSensitivity::new(33).unwrap();
        let input = MaxPreampInput::new(-7).unwrap();
        assert_eq!(calculate(sens, input).max_spl_db, compute_max_spl(sens, input));
    }

    #[test]
    fn summary_uses_the_display_template() {
        let report = calculate(MicSensitivity::default(), MaxPreampInput::default());
        assert_eq!(
            report.summary(),
            "When using a measurement microphone with sensitivity of 15 mV/Pa plugged into \
             a preamp with maximum input voltage of 10 dBu you can measure peak values up to \
             138.3 dB SPL"
        );
    }

    #[test]
    fn report_serializes_for_front_ends() {
        let report = calculate(MicSensitivity::new(1).unwrap(), MaxPreampInput::new(0).unwrap());
        let json = serde_json::to_value(report).unwrap();
        assert_eq!(json["micSensitivity"], 1);
        assert_eq!(json["maxPreampInput"], 0);
        assert!(json["maxSplDb"].as_f64().unwrap() > 151.0);
    }
}
