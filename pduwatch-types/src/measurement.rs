//! Measurements and the per-cycle section.

use crate::UnitSpec;

/// A single scaled, labeled reading.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measurement {
    /// Reading divided by the position's scale.
    pub value: f64,
    /// Unit symbol from the position's [`UnitSpec`].
    pub unit: String,
    /// Label from the position's [`UnitSpec`].
    pub label: String,
}

impl Measurement {
    /// Create a measurement.
    pub fn new(value: f64, unit: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
            label: label.into(),
        }
    }

    /// Build a measurement from a raw reading and the spec of its position.
    pub fn from_raw(raw: f64, spec: &UnitSpec) -> Self {
        Self::new(spec.scale_value(raw), spec.unit, spec.label)
    }

    /// Summary line, e.g. `Voltage: 230.00 V`.
    pub fn summary(&self) -> String {
        format!("{}: {:.2} {}", self.label, self.value, self.unit)
    }
}

/// All measurements of one electrical phase.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Phase {
    /// Phase identifier ("1", "2", ...).
    pub id: String,
    /// Measurements in [`UNIT_SPECS`](crate::UNIT_SPECS) order.
    pub measurements: Vec<Measurement>,
}

impl Phase {
    /// Create a phase.
    pub fn new(id: impl Into<String>, measurements: Vec<Measurement>) -> Self {
        Self {
            id: id.into(),
            measurements,
        }
    }
}

/// The parsed readings of one polling cycle, keyed by phase identifier.
///
/// Phases keep the order in which they were added, so iterating a parsed
/// section yields "1", "2", ..., "10" rather than lexical order. A section is
/// rebuilt from scratch every cycle.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Section {
    phases: Vec<Phase>,
}

impl Section {
    /// Create an empty section.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for constructing sections.
    pub fn builder() -> SectionBuilder {
        SectionBuilder::new()
    }

    /// Check if the section has no phases.
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    /// Number of phases.
    pub fn len(&self) -> usize {
        self.phases.len()
    }

    /// Measurements of a phase, if present.
    pub fn get(&self, item: &str) -> Option<&[Measurement]> {
        self.phases
            .iter()
            .find(|p| p.id == item)
            .map(|p| p.measurements.as_slice())
    }

    /// Phase identifiers in section order.
    pub fn items(&self) -> impl Iterator<Item = &str> {
        self.phases.iter().map(|p| p.id.as_str())
    }

    /// Iterate over all phases.
    pub fn iter(&self) -> impl Iterator<Item = &Phase> {
        self.phases.iter()
    }
}

impl FromIterator<Phase> for Section {
    /// Collect phases; a later phase with an already used id replaces the
    /// earlier one in place.
    fn from_iter<I: IntoIterator<Item = Phase>>(iter: I) -> Self {
        iter.into_iter()
            .fold(SectionBuilder::new(), |b, phase| b.push(phase))
            .build()
    }
}

/// Builder for [`Section`].
#[derive(Debug, Default)]
pub struct SectionBuilder {
    phases: Vec<Phase>,
}

impl SectionBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a phase with its measurements.
    pub fn phase(self, id: impl Into<String>, measurements: Vec<Measurement>) -> Self {
        self.push(Phase::new(id, measurements))
    }

    fn push(mut self, phase: Phase) -> Self {
        match self.phases.iter_mut().find(|p| p.id == phase.id) {
            Some(existing) => *existing = phase,
            None => self.phases.push(phase),
        }
        self
    }

    /// Build the section.
    pub fn build(self) -> Section {
        Section {
            phases: self.phases,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UNIT_SPECS;

    #[test]
    fn measurement_from_raw_uses_position_spec() {
        let m = Measurement::from_raw(100.0, &UNIT_SPECS[0]);
        assert_eq!(m, Measurement::new(0.1, "kWh", "Total accumulated active energy"));
    }

    #[test]
    fn summary_has_two_decimals() {
        let m = Measurement::new(230.0, "V", "Voltage");
        assert_eq!(m.summary(), "Voltage: 230.00 V");

        let m = Measurement::new(0.002, "A", "Current");
        assert_eq!(m.summary(), "Current: 0.00 A");

        let m = Measurement::new(3512.5, "W", "Active power");
        assert_eq!(m.summary(), "Active power: 3512.50 W");
    }

    #[test]
    fn section_keeps_insertion_order() {
        let mut builder = Section::builder();
        for i in 1..=11 {
            builder = builder.phase(i.to_string(), vec![]);
        }
        let section = builder.build();

        let items: Vec<&str> = section.items().collect();
        assert_eq!(
            items,
            ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11"]
        );
    }

    #[test]
    fn section_get_missing_is_none() {
        let section = Section::builder()
            .phase("1", vec![Measurement::new(230.0, "V", "Voltage")])
            .build();

        assert_eq!(section.get("1").map(<[Measurement]>::len), Some(1));
        assert!(section.get("2").is_none());
    }

    #[test]
    fn section_duplicate_phase_replaces() {
        let section = Section::builder()
            .phase("1", vec![Measurement::new(1.0, "W", "Active power")])
            .phase("1", vec![Measurement::new(2.0, "W", "Active power")])
            .build();

        assert_eq!(section.len(), 1);
        assert_eq!(section.get("1").unwrap()[0].value, 2.0);
    }

    #[test]
    fn section_from_iterator() {
        let section: Section = vec![Phase::new("1", vec![]), Phase::new("2", vec![])]
            .into_iter()
            .collect();
        assert_eq!(section.len(), 2);
        assert!(!section.is_empty());
        assert!(Section::new().is_empty());
    }
}
