//! The positional unit table.

/// Unit, scale and label for one raw field position.
///
/// The raw device reading at this position is divided by `scale` to obtain
/// the value in `unit`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitSpec {
    /// Unit symbol, also used as the metric name and threshold key.
    pub unit: &'static str,
    /// Divisor applied to the raw reading.
    pub scale: f64,
    /// Human-readable label used in result summaries.
    pub label: &'static str,
}

impl UnitSpec {
    /// Create a unit spec.
    pub const fn new(unit: &'static str, scale: f64, label: &'static str) -> Self {
        Self { unit, scale, label }
    }

    /// Convert a raw device reading into this unit.
    pub fn scale_value(&self, raw: f64) -> f64 {
        raw / self.scale
    }
}

/// Number of fields a device row carries.
pub const FIELD_COUNT: usize = 5;

/// Fixed field order of every phase row.
///
/// Position `i` of a raw row is always interpreted with `UNIT_SPECS[i]`.
/// The acquisition layer must fetch its columns in exactly this order.
pub const UNIT_SPECS: [UnitSpec; FIELD_COUNT] = [
    UnitSpec::new("kWh", 1000.0, "Total accumulated active energy"),
    UnitSpec::new("W", 1.0, "Active power"),
    UnitSpec::new("A", 1000.0, "Current"),
    UnitSpec::new("V", 1.0, "Voltage"),
    UnitSpec::new("VA", 1.0, "Mean apparent power"),
];

/// Look up the canonical unit symbol, ignoring ASCII case.
///
/// Returns `None` for units that are not part of [`UNIT_SPECS`].
pub fn canonical_unit(unit: &str) -> Option<&'static str> {
    UNIT_SPECS
        .iter()
        .find(|spec| spec.unit.eq_ignore_ascii_case(unit))
        .map(|spec| spec.unit)
}
