//! # pduwatch-types
//!
//! Core types for power-distribution-unit (PDU) phase telemetry. This crate
//! defines the positional unit table that ties raw device fields to
//! electrical quantities, the parsed per-phase [`Section`], and the
//! threshold types used to turn a measurement into a health [`State`].
//!
//! ## Design Goals
//!
//! - **Zero required dependencies**: Core types work without any serialization framework
//! - **Optional serialization**: Enable the `serde` feature for JSON row tables and exports
//! - **Positional contract**: The [`UNIT_SPECS`] table is an explicit, indexed constant
//! - **Direction from shape**: A `(warn, crit)` pair decides on its own whether it is an
//!   upper or a lower bound (see [`Levels`])
//!
//! ## Example
//!
//! ```rust
//! use pduwatch_types::{Levels, State, ThresholdConfig};
//!
//! let config = ThresholdConfig::default();
//!
//! // V = (220, 210): warn > crit, so this is a lower bound
//! let volts = config.levels_for("V").unwrap();
//! assert_eq!(volts.state_for(230.0), State::Ok);
//! assert_eq!(volts.state_for(215.0), State::Warn);
//! assert_eq!(volts.state_for(205.0), State::Crit);
//!
//! // A = (15, 16): warn <= crit, so this is an upper bound
//! assert_eq!(Levels::from_pair(15.0, 16.0).state_for(17.0), State::Crit);
//! ```

mod check;
mod levels;
mod measurement;
mod table;
mod unit;

pub use check::*;
pub use levels::*;
pub use measurement::*;
pub use table::*;
pub use unit::*;
