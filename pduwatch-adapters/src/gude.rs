//! Gude Expert Power Control devices.
//!
//! All supported models publish per-phase energy meter tables under their
//! own enterprise subtree. The column layout is identical across models;
//! only the subtree differs.
//!
//! ## Columns Fetched
//!
//! | column | device field  | position in a row       |
//! |--------|---------------|-------------------------|
//! | `3`    | Consumption   | 1: energy (kWh)         |
//! | `4`    | Power         | 2: active power (W)     |
//! | `5`    | Current       | 3: current (A)          |
//! | `6`    | Voltage       | 4: voltage (V)          |
//! | `10`   | Track power   | 5: apparent power (VA)  |

use std::fmt;

use pduwatch_types::{RowTable, UnitSpec, UNIT_SPECS};

use crate::AdapterError;

/// OID of the standard MIB-II `sysObjectID.0` scalar.
pub const SYS_OBJECT_ID_OID: &str = ".1.3.6.1.2.1.1.2.0";

/// A supported PDU model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceVariant {
    Gude8301,
    Gude8310,
    Gude8801,
}

impl DeviceVariant {
    /// Every supported model.
    pub const ALL: [DeviceVariant; 3] = [
        DeviceVariant::Gude8301,
        DeviceVariant::Gude8310,
        DeviceVariant::Gude8801,
    ];

    /// The sysObjectID a device of this model reports.
    pub fn signature(&self) -> &'static str {
        match self {
            DeviceVariant::Gude8301 => ".1.3.6.1.4.1.28507.26",
            DeviceVariant::Gude8310 => ".1.3.6.1.4.1.28507.27",
            DeviceVariant::Gude8801 => ".1.3.6.1.4.1.28507.41",
        }
    }

    /// Section name of this model's raw table.
    pub fn name(&self) -> &'static str {
        match self {
            DeviceVariant::Gude8301 => "pdu_gude_8301",
            DeviceVariant::Gude8310 => "pdu_gude_8310",
            DeviceVariant::Gude8801 => "pdu_gude_8801",
        }
    }

    /// The table the poller has to walk for this model.
    pub fn fetch(&self) -> FetchTree {
        FetchTree {
            base: format!("{}.1.5.1.2.1", self.signature()),
            columns: &COLUMNS,
        }
    }

    /// Parse a model from its short name ("8301") or section name.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|v| v.name() == name || v.name().ends_with(&format!("_{name}")))
    }
}

impl fmt::Display for DeviceVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A measured quantity as named by the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Consumption,
    Power,
    Current,
    Voltage,
    TrackPower,
}

impl Field {
    /// Index into [`UNIT_SPECS`] this field is interpreted with.
    pub fn position(&self) -> usize {
        match self {
            Field::Consumption => 0,
            Field::Power => 1,
            Field::Current => 2,
            Field::Voltage => 3,
            Field::TrackPower => 4,
        }
    }

    pub fn unit_spec(&self) -> &'static UnitSpec {
        &UNIT_SPECS[self.position()]
    }
}

/// One fetched column of the meter table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// OID suffix below the table entry.
    pub suffix: &'static str,
    pub field: Field,
}

const COLUMNS: [Column; 5] = [
    Column {
        suffix: "3",
        field: Field::Consumption,
    },
    Column {
        suffix: "4",
        field: Field::Power,
    },
    Column {
        suffix: "5",
        field: Field::Current,
    },
    Column {
        suffix: "6",
        field: Field::Voltage,
    },
    Column {
        suffix: "10",
        field: Field::TrackPower,
    },
];

/// Base OID of a table and the columns fetched from it, in row order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTree {
    pub base: String,
    pub columns: &'static [Column],
}

impl FetchTree {
    /// Full column OIDs in fetch order.
    pub fn oids(&self) -> Vec<String> {
        self.columns
            .iter()
            .map(|c| format!("{}.{}", self.base, c.suffix))
            .collect()
    }
}

/// Identify the device model from its sysObjectID.
///
/// Matching is exact, apart from tolerating surrounding whitespace and a
/// missing leading dot.
pub fn detect(sys_object_id: &str) -> Result<DeviceVariant, AdapterError> {
    let oid = sys_object_id.trim();
    let oid = oid.strip_prefix('.').unwrap_or(oid);

    DeviceVariant::ALL
        .into_iter()
        .find(|v| &v.signature()[1..] == oid)
        .ok_or_else(|| AdapterError::UnknownDevice(sys_object_id.to_string()))
}

/// Identify the device model a row table was read from.
pub fn accept(table: &RowTable) -> Result<DeviceVariant, AdapterError> {
    let oid = table
        .sys_object_id
        .as_deref()
        .ok_or(AdapterError::MissingSignature)?;
    detect(oid)
}
