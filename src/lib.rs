//! # pduwatch
//!
//! Per-phase health checks for Gude power distribution units.
//!
//! An external SNMP poller walks the PDU's meter table and hands over one
//! row of raw strings per electrical phase. pduwatch turns those rows into
//! scaled measurements, discovers one service per phase and evaluates each
//! measurement against operator-configured `(warn, crit)` pairs.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │  ┌─────────┐    ┌──────────┐    ┌──────────┐    ┌──────────┐   │
//! │  │ source  │───▶│ adapters │───▶│   data   │───▶│  report  │   │
//! │  │ (input) │    │ (detect) │    │ (checks) │    │ (output) │   │
//! │  └─────────┘    └──────────┘    └──────────┘    └──────────┘   │
//! │       ▲                               ▲                        │
//! │  FileSource | ChannelSource       config (levels)              │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`source`]**: Row-table sources ([`DataSource`] trait) for files and channels
//! - **[`data`]**: Row parsing, phase discovery and threshold evaluation
//! - **[`config`]**: Layered settings (defaults, file, environment)
//! - **[`report`]**: Service reports, plugin-style text and JSON export
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Check the table last written by the poller
//! pduwatch --file rows.json
//!
//! # Custom levels, re-check whenever the file changes
//! pduwatch --file rows.json --config pduwatch.toml --watch
//! ```
//!
//! ### As a library
//!
//! ```
//! use pduwatch::{check_cycle, Settings, State};
//! use pduwatch_types::RowTable;
//!
//! let table: RowTable = [["100", "50", "2", "215", "60"]].into_iter().collect();
//! let table = table.with_sys_object_id(".1.3.6.1.4.1.28507.26");
//!
//! let report = check_cycle(&table, &Settings::default()).unwrap();
//! assert_eq!(report.services[0].service_name, "Phase 1");
//! assert_eq!(report.state(), State::Warn);
//! ```
//!
//! ### Using the check functions directly
//!
//! ```
//! use pduwatch::data::{discover, evaluate, parse};
//! use pduwatch_types::{State, ThresholdConfig};
//!
//! let rows = vec![vec!["100".to_string(), "50".into(), "17000".into()]];
//! let section = parse(&rows).unwrap();
//!
//! for item in discover(&section) {
//!     let results = evaluate(&item, &ThresholdConfig::default(), &section);
//!     assert_eq!(results[2].state, State::Crit);
//! }
//! ```

pub mod config;
pub mod data;
pub mod report;
pub mod source;

// Re-export main types for convenience
pub use config::Settings;
pub use data::{discover, evaluate, parse, ParseError};
pub use pduwatch_types::{CheckResult, Measurement, Section, State, ThresholdConfig};
pub use report::{check_cycle, CycleReport, ServiceReport};
pub use source::{ChannelSource, DataSource, FileSource};
