//! Results produced by evaluating a phase.

use crate::{Direction, Levels, Measurement, State};

/// A metric data point attached to a result.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metric {
    /// Metric name (the measurement's unit).
    pub name: String,
    pub value: f64,
    /// Upper `(warn, crit)` levels, if the value was checked against them.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub levels: Option<(f64, f64)>,
}

impl Metric {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
            levels: None,
        }
    }

    /// Attach levels. Only upper levels are carried by a metric; lower
    /// levels are dropped.
    pub fn with_levels(mut self, levels: &Levels) -> Self {
        self.levels = match levels.direction {
            Direction::Upper => Some((levels.warn, levels.crit)),
            Direction::Lower => None,
        };
        self
    }
}

/// The outcome of checking one measurement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CheckResult {
    pub state: State,
    /// `"{label}: {value:.2} {unit}"`.
    pub summary: String,
    pub metric: Metric,
    /// Levels the value was evaluated against, `None` for unconfigured units.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub levels: Option<Levels>,
}

impl CheckResult {
    /// Informational OK result for a measurement without thresholds.
    pub fn unleveled(measurement: &Measurement) -> Self {
        Self {
            state: State::Ok,
            summary: measurement.summary(),
            metric: Metric::new(&measurement.unit, measurement.value),
            levels: None,
        }
    }

    /// Result for a measurement evaluated against `levels`.
    pub fn leveled(measurement: &Measurement, levels: Levels) -> Self {
        Self {
            state: levels.state_for(measurement.value),
            summary: measurement.summary(),
            metric: Metric::new(&measurement.unit, measurement.value).with_levels(&levels),
            levels: Some(levels),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unleveled_is_ok_without_levels() {
        let m = Measurement::new(0.1, "kWh", "Total accumulated active energy");
        let r = CheckResult::unleveled(&m);

        assert_eq!(r.state, State::Ok);
        assert_eq!(r.summary, "Total accumulated active energy: 0.10 kWh");
        assert_eq!(r.metric, Metric::new("kWh", 0.1));
        assert!(r.levels.is_none());
    }

    #[test]
    fn leveled_upper_carries_metric_levels() {
        let m = Measurement::new(17.0, "A", "Current");
        let r = CheckResult::leveled(&m, Levels::upper(15.0, 16.0));

        assert_eq!(r.state, State::Crit);
        assert_eq!(r.metric.levels, Some((15.0, 16.0)));
    }

    #[test]
    fn leveled_lower_drops_metric_levels() {
        let m = Measurement::new(215.0, "V", "Voltage");
        let r = CheckResult::leveled(&m, Levels::lower(220.0, 210.0));

        assert_eq!(r.state, State::Warn);
        assert_eq!(r.summary, "Voltage: 215.00 V");
        assert!(r.metric.levels.is_none());
        assert_eq!(r.levels, Some(Levels::lower(220.0, 210.0)));
    }
}
