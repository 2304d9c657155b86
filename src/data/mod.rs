//! Parsing, discovery and threshold evaluation of PDU phase readings.
//!
//! Every function in this module is a pure function of its inputs; nothing
//! is carried over from one polling cycle to the next.
//!
//! ## Submodules
//!
//! - [`parse`]: Raw row tables into a [`Section`](pduwatch_types::Section)
//! - [`discovery`]: One monitorable item per phase
//! - [`evaluate`]: Per-measurement health results for one item
//!
//! ## Data Flow
//!
//! ```text
//! RowTable.rows (raw strings)
//!        │
//!        ▼
//! parse() ──▶ Section ──┬──▶ discover() ──▶ ["1", "2", ...]
//!                       │
//!                       └──▶ evaluate(item, config, section) ──▶ Vec<CheckResult>
//! ```

pub mod discovery;
pub mod evaluate;
pub mod parse;

pub use discovery::{discover, service_name, SERVICE_NAME};
pub use evaluate::evaluate;
pub use parse::{parse, ParseError};
