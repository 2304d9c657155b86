//! Threshold levels and health states.

use std::collections::BTreeMap;
use std::fmt;

/// Health state of a single result or a whole service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum State {
    #[default]
    Ok,
    Warn,
    Crit,
    Unknown,
}

impl State {
    /// Monitoring-plugin exit code (0 OK, 1 WARN, 2 CRIT, 3 UNKNOWN).
    pub fn code(&self) -> i32 {
        match self {
            State::Ok => 0,
            State::Warn => 1,
            State::Crit => 2,
            State::Unknown => 3,
        }
    }

    /// Returns a short symbol for display.
    pub fn symbol(&self) -> &'static str {
        match self {
            State::Ok => "OK",
            State::Warn => "WARN",
            State::Crit => "CRIT",
            State::Unknown => "UNKNOWN",
        }
    }

    /// Severity rank: CRIT outranks UNKNOWN, which outranks WARN.
    fn rank(&self) -> u8 {
        match self {
            State::Ok => 0,
            State::Warn => 1,
            State::Unknown => 2,
            State::Crit => 3,
        }
    }

    /// The more severe of two states.
    pub fn worst(self, other: State) -> State {
        if other.rank() > self.rank() {
            other
        } else {
            self
        }
    }

    /// The most severe state of a sequence, OK when empty.
    pub fn worst_of<I: IntoIterator<Item = State>>(states: I) -> State {
        states.into_iter().fold(State::Ok, State::worst)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Which side of a threshold pair is the safe one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Alert when the value rises to or above the thresholds.
    Upper,
    /// Alert when the value falls below the thresholds.
    Lower,
}

impl Direction {
    /// Whether `value` has crossed `threshold` in this direction.
    fn crossed(&self, value: f64, threshold: f64) -> bool {
        match self {
            Direction::Upper => value >= threshold,
            Direction::Lower => value < threshold,
        }
    }
}

/// A `(warn, crit)` pair together with its direction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Levels {
    pub direction: Direction,
    pub warn: f64,
    pub crit: f64,
}

impl Levels {
    /// Upper levels: WARN at `warn`, CRIT at `crit`.
    pub const fn upper(warn: f64, crit: f64) -> Self {
        Self {
            direction: Direction::Upper,
            warn,
            crit,
        }
    }

    /// Lower levels: WARN below `warn`, CRIT below `crit`.
    pub const fn lower(warn: f64, crit: f64) -> Self {
        Self {
            direction: Direction::Lower,
            warn,
            crit,
        }
    }

    /// Derive the direction from the shape of the pair.
    ///
    /// `warn > crit` can only make sense as a lower bound; anything else,
    /// including `warn == crit`, is an upper bound.
    pub fn from_pair(warn: f64, crit: f64) -> Self {
        if warn > crit {
            Self::lower(warn, crit)
        } else {
            Self::upper(warn, crit)
        }
    }

    /// Evaluate a value against these levels.
    pub fn state_for(&self, value: f64) -> State {
        if self.direction.crossed(value, self.crit) {
            State::Crit
        } else if self.direction.crossed(value, self.warn) {
            State::Warn
        } else {
            State::Ok
        }
    }
}

/// An operator-configured `(warn, crit)` pair, in configuration order.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "(f64, f64)", into = "(f64, f64)"))]
pub struct ThresholdPair {
    pub warn: f64,
    pub crit: f64,
}

impl ThresholdPair {
    pub const fn new(warn: f64, crit: f64) -> Self {
        Self { warn, crit }
    }

    /// Levels with the direction implied by this pair.
    pub fn levels(&self) -> Levels {
        Levels::from_pair(self.warn, self.crit)
    }
}

impl From<(f64, f64)> for ThresholdPair {
    fn from((warn, crit): (f64, f64)) -> Self {
        Self::new(warn, crit)
    }
}

impl From<ThresholdPair> for (f64, f64) {
    fn from(pair: ThresholdPair) -> Self {
        (pair.warn, pair.crit)
    }
}

/// Threshold pairs keyed by unit symbol.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ThresholdConfig {
    pairs: BTreeMap<String, ThresholdPair>,
}

impl ThresholdConfig {
    /// A configuration without any thresholds.
    pub fn empty() -> Self {
        Self {
            pairs: BTreeMap::new(),
        }
    }

    /// Set the pair for a unit, replacing any previous one.
    pub fn with(mut self, unit: impl Into<String>, warn: f64, crit: f64) -> Self {
        self.insert(unit, ThresholdPair::new(warn, crit));
        self
    }

    pub fn insert(&mut self, unit: impl Into<String>, pair: ThresholdPair) {
        self.pairs.insert(unit.into(), pair);
    }

    /// The configured pair for a unit.
    pub fn get(&self, unit: &str) -> Option<ThresholdPair> {
        self.pairs.get(unit).copied()
    }

    /// The levels for a unit, with their direction already decided.
    pub fn levels_for(&self, unit: &str) -> Option<Levels> {
        self.get(unit).map(|pair| pair.levels())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over `(unit, pair)` entries in unit order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ThresholdPair)> {
        self.pairs.iter().map(|(unit, pair)| (unit.as_str(), *pair))
    }
}

impl Default for ThresholdConfig {
    /// `V = (220, 210)`, `A = (15, 16)`, `W = (3500, 3600)`.
    fn default() -> Self {
        Self::empty()
            .with("V", 220.0, 210.0)
            .with("A", 15.0, 16.0)
            .with("W", 3500.0, 3600.0)
    }
}

impl<U: Into<String>> FromIterator<(U, ThresholdPair)> for ThresholdConfig {
    fn from_iter<I: IntoIterator<Item = (U, ThresholdPair)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().map(|(u, p)| (u.into(), p)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Direction rule
    // ========================================================================

    #[test]
    fn warn_above_crit_is_lower_bound() {
        assert_eq!(Levels::from_pair(220.0, 210.0).direction, Direction::Lower);
    }

    #[test]
    fn warn_below_crit_is_upper_bound() {
        assert_eq!(Levels::from_pair(15.0, 16.0).direction, Direction::Upper);
    }

    #[test]
    fn equal_pair_is_upper_bound() {
        let levels = Levels::from_pair(10.0, 10.0);
        assert_eq!(levels.direction, Direction::Upper);
        assert_eq!(levels.state_for(9.9), State::Ok);
        assert_eq!(levels.state_for(10.0), State::Crit);
    }

    // ========================================================================
    // Range evaluation
    // ========================================================================

    #[test]
    fn lower_levels_states() {
        let levels = Levels::lower(220.0, 210.0);
        assert_eq!(levels.state_for(230.0), State::Ok);
        assert_eq!(levels.state_for(220.0), State::Ok);
        assert_eq!(levels.state_for(215.0), State::Warn);
        assert_eq!(levels.state_for(210.0), State::Warn);
        assert_eq!(levels.state_for(205.0), State::Crit);
    }

    #[test]
    fn upper_levels_states() {
        let levels = Levels::upper(15.0, 16.0);
        assert_eq!(levels.state_for(14.0), State::Ok);
        assert_eq!(levels.state_for(15.0), State::Warn);
        assert_eq!(levels.state_for(15.5), State::Warn);
        assert_eq!(levels.state_for(16.0), State::Crit);
        assert_eq!(levels.state_for(17.0), State::Crit);
    }

    #[test]
    fn negative_values_against_upper_levels() {
        let levels = Levels::upper(3500.0, 3600.0);
        assert_eq!(levels.state_for(-5.0), State::Ok);
    }

    // ========================================================================
    // State
    // ========================================================================

    #[test]
    fn state_codes() {
        assert_eq!(State::Ok.code(), 0);
        assert_eq!(State::Warn.code(), 1);
        assert_eq!(State::Crit.code(), 2);
        assert_eq!(State::Unknown.code(), 3);
    }

    #[test]
    fn worst_prefers_crit_over_unknown() {
        assert_eq!(State::Unknown.worst(State::Crit), State::Crit);
        assert_eq!(State::Crit.worst(State::Unknown), State::Crit);
        assert_eq!(State::Warn.worst(State::Unknown), State::Unknown);
        assert_eq!(State::Ok.worst(State::Warn), State::Warn);
    }

    #[test]
    fn worst_of_empty_is_ok() {
        assert_eq!(State::worst_of([]), State::Ok);
        assert_eq!(
            State::worst_of([State::Ok, State::Warn, State::Ok]),
            State::Warn
        );
    }

    #[test]
    fn state_display() {
        assert_eq!(State::Warn.to_string(), "WARN");
    }

    // ========================================================================
    // ThresholdConfig
    // ========================================================================

    #[test]
    fn default_config_pairs() {
        let config = ThresholdConfig::default();
        assert_eq!(config.len(), 3);
        assert_eq!(config.get("V"), Some(ThresholdPair::new(220.0, 210.0)));
        assert_eq!(config.get("A"), Some(ThresholdPair::new(15.0, 16.0)));
        assert_eq!(config.get("W"), Some(ThresholdPair::new(3500.0, 3600.0)));
        assert!(config.get("kWh").is_none());
    }

    #[test]
    fn levels_for_decides_direction() {
        let config = ThresholdConfig::default();
        assert_eq!(config.levels_for("V"), Some(Levels::lower(220.0, 210.0)));
        assert_eq!(config.levels_for("W"), Some(Levels::upper(3500.0, 3600.0)));
        assert_eq!(config.levels_for("VA"), None);
    }

    #[test]
    fn with_replaces_pair() {
        let config = ThresholdConfig::default().with("V", 230.0, 200.0);
        assert_eq!(config.get("V"), Some(ThresholdPair::new(230.0, 200.0)));
        assert_eq!(config.len(), 3);
    }

    #[test]
    fn config_from_iterator() {
        let config: ThresholdConfig = [("VA", ThresholdPair::new(4000.0, 4500.0))]
            .into_iter()
            .collect();
        assert_eq!(config.len(), 1);
        assert!(ThresholdConfig::empty().is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_deserializes_from_pairs() {
        let config: ThresholdConfig =
            serde_json::from_str(r#"{ "V": [230, 200], "A": [10.5, 12] }"#).unwrap();
        assert_eq!(config.get("V"), Some(ThresholdPair::new(230.0, 200.0)));
        assert_eq!(config.get("A"), Some(ThresholdPair::new(10.5, 12.0)));

        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"A":[10.5,12.0],"V":[230.0,200.0]}"#);
    }
}
