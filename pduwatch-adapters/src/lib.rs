//! # pduwatch-adapters
//!
//! Descriptions of the PDU hardware pduwatch understands: how each device
//! variant is recognised and which table columns the poller has to fetch so
//! that every row lines up with [`UNIT_SPECS`](pduwatch_types::UNIT_SPECS).
//!
//! The SNMP transport itself lives outside this workspace. A poller uses
//! [`DeviceVariant::fetch`] to know what to walk, then hands the resulting
//! [`RowTable`] back together with the device's sysObjectID.
//!
//! ## Supported Devices
//!
//! - **Gude Expert Power Control 8301** (`.1.3.6.1.4.1.28507.26`)
//! - **Gude Expert Power Control 8310** (`.1.3.6.1.4.1.28507.27`)
//! - **Gude Expert Power Control 8801** (`.1.3.6.1.4.1.28507.41`)
//!
//! ## Quick Start
//!
//! ```rust
//! use pduwatch_adapters::{accept, DeviceVariant};
//! use pduwatch_adapters::RowTable;
//!
//! let table: RowTable = [["100", "50", "2", "230", "60"]].into_iter().collect();
//! let table = table.with_sys_object_id(".1.3.6.1.4.1.28507.27");
//!
//! let variant = accept(&table).unwrap();
//! assert_eq!(variant, DeviceVariant::Gude8310);
//! assert_eq!(
//!     variant.fetch().oids()[0],
//!     ".1.3.6.1.4.1.28507.27.1.5.1.2.1.3"
//! );
//! ```

pub mod error;
pub mod gude;

pub use error::AdapterError;
pub use gude::{accept, detect, Column, DeviceVariant, FetchTree, Field, SYS_OBJECT_ID_OID};

// Re-export types for convenience
pub use pduwatch_types::{RowTable, UnitSpec, UNIT_SPECS};
