//! Row parsing: raw phase rows into a [`Section`].

use pduwatch_types::{Measurement, Phase, Section, UNIT_SPECS};
use thiserror::Error;

/// A raw field that is not a number.
///
/// Parsing is all-or-nothing: one bad field aborts the whole cycle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("phase {phase}, field {position} ({unit}): not a number: {raw:?}")]
pub struct ParseError {
    /// Phase identifier of the offending row.
    pub phase: String,
    /// 1-based field position within the row.
    pub position: usize,
    /// Unit expected at that position.
    pub unit: &'static str,
    pub raw: String,
}

/// Parse one cycle's rows.
///
/// Row `i` (1-based) becomes phase `"i"`. Fields are paired with
/// [`UNIT_SPECS`] by position; a short row yields fewer measurements and
/// extra fields are ignored.
pub fn parse(rows: &[Vec<String>]) -> Result<Section, ParseError> {
    rows.iter()
        .enumerate()
        .map(|(idx, row)| parse_row((idx + 1).to_string(), row))
        .collect()
}

fn parse_row(phase: String, fields: &[String]) -> Result<Phase, ParseError> {
    let measurements = fields
        .iter()
        .zip(UNIT_SPECS.iter())
        .enumerate()
        .map(|(i, (raw, spec))| {
            parse_number(raw)
                .map(|value| Measurement::from_raw(value, spec))
                .ok_or_else(|| ParseError {
                    phase: phase.clone(),
                    position: i + 1,
                    unit: spec.unit,
                    raw: raw.clone(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Phase::new(phase, measurements))
}

/// Parse a decimal field. Single `_` separators between digits are allowed.
fn parse_number(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if !raw.contains('_') {
        return raw.parse().ok();
    }

    let bytes = raw.as_bytes();
    let separators_ok = bytes
        .iter()
        .enumerate()
        .filter(|(_, b)| **b == b'_')
        .all(|(i, _)| {
            i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit)
        });
    if !separators_ok {
        return None;
    }
    raw.replace('_', "").parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|r| r.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_parse_full_row() {
        let section = parse(&rows(&[&["100", "50", "2", "230", "60"]])).unwrap();
        let phase = section.get("1").unwrap();

        assert_eq!(
            phase,
            [
                Measurement::new(0.1, "kWh", "Total accumulated active energy"),
                Measurement::new(50.0, "W", "Active power"),
                Measurement::new(0.002, "A", "Current"),
                Measurement::new(230.0, "V", "Voltage"),
                Measurement::new(60.0, "VA", "Mean apparent power"),
            ]
        );
    }

    #[test]
    fn test_parse_assigns_sequential_phase_ids() {
        let section = parse(&rows(&[
            &["1", "2", "3", "4", "5"],
            &["6", "7", "8", "9", "10"],
            &["11", "12", "13", "14", "15"],
        ]))
        .unwrap();

        let items: Vec<&str> = section.items().collect();
        assert_eq!(items, ["1", "2", "3"]);
        assert_eq!(section.get("2").unwrap()[1].value, 7.0);
    }

    #[test]
    fn test_parse_short_row_yields_fewer_measurements() {
        let section = parse(&rows(&[&["100", "50"], &[]])).unwrap();

        assert_eq!(section.len(), 2);
        assert_eq!(section.get("1").unwrap().len(), 2);
        assert!(section.get("2").unwrap().is_empty());
    }

    #[test]
    fn test_parse_long_row_ignores_extra_fields() {
        let section = parse(&rows(&[&["1", "2", "3", "4", "5", "6", "garbage"]])).unwrap();
        assert_eq!(section.get("1").unwrap().len(), 5);
    }

    #[test]
    fn test_parse_measurement_count_is_min_of_row_and_table() {
        let input = rows(&[&["1"], &["1", "2", "3"], &["1", "2", "3", "4", "5", "6", "7"]]);
        let section = parse(&input).unwrap();

        assert_eq!(section.len(), input.len());
        for (phase, row) in section.iter().zip(&input) {
            assert_eq!(phase.measurements.len(), row.len().min(5));
        }
    }

    #[test]
    fn test_parse_accepts_surrounding_whitespace_and_decimals() {
        let section = parse(&rows(&[&[" 1500 ", "12.5", "-3"]])).unwrap();
        let phase = section.get("1").unwrap();

        assert_eq!(phase[0].value, 1.5);
        assert_eq!(phase[1].value, 12.5);
        assert_eq!(phase[2].value, -0.003);
    }

    #[test]
    fn test_parse_accepts_digit_separators() {
        let section = parse(&rows(&[&["1_523_400", "1_000.5", " 2_0 "]])).unwrap();
        let phase = section.get("1").unwrap();

        assert_eq!(phase[0].value, 1523.4);
        assert_eq!(phase[1].value, 1000.5);
        assert_eq!(phase[2].value, 0.02);
    }

    #[test]
    fn test_parse_rejects_misplaced_separators() {
        for raw in ["_100", "100_", "1__000", "1_.5", "_"] {
            let err = parse(&rows(&[&[raw]])).unwrap_err();
            assert_eq!(err.raw, raw);
        }
    }

    #[test]
    fn test_parse_invalid_field_aborts_cycle() {
        let err = parse(&rows(&[
            &["100", "50", "2", "230", "60"],
            &["100", "50", "n/a", "230", "60"],
        ]))
        .unwrap_err();

        assert_eq!(
            err,
            ParseError {
                phase: "2".to_string(),
                position: 3,
                unit: "A",
                raw: "n/a".to_string(),
            }
        );
        assert!(err.to_string().contains("phase 2, field 3 (A)"));
    }

    #[test]
    fn test_parse_empty_field_is_an_error() {
        assert!(parse(&rows(&[&["100", ""]])).is_err());
    }

    #[test]
    fn test_parse_error_beyond_table_width_is_ignored() {
        // The sixth field is never paired, so it is never parsed
        assert!(parse(&rows(&[&["1", "2", "3", "4", "5", "x"]])).is_ok());
    }

    #[test]
    fn test_parse_empty_table() {
        let empty: Vec<Vec<String>> = vec![];
        assert!(parse(&empty).unwrap().is_empty());
    }

    #[test]
    fn test_parse_is_idempotent() {
        let input = rows(&[&["100", "50", "2", "230", "60"], &["7", "8"]]);
        assert_eq!(parse(&input).unwrap(), parse(&input).unwrap());
    }
}
