//! Threshold evaluation of a single phase.

use pduwatch_types::{CheckResult, Measurement, Section, ThresholdConfig};

/// Check every measurement of `item` against `config`.
///
/// A missing item, or one without measurements, yields no results. Units
/// without a configured pair produce a plain OK result; all others are
/// evaluated against [`Levels`](pduwatch_types::Levels) whose direction is
/// taken from the shape of the pair. Results follow measurement order.
pub fn evaluate(item: &str, config: &ThresholdConfig, section: &Section) -> Vec<CheckResult> {
    section
        .get(item)
        .unwrap_or_default()
        .iter()
        .map(|m| check_measurement(m, config))
        .collect()
}

fn check_measurement(measurement: &Measurement, config: &ThresholdConfig) -> CheckResult {
    match config.levels_for(&measurement.unit) {
        Some(levels) => CheckResult::leveled(measurement, levels),
        None => CheckResult::unleveled(measurement),
    }
}
