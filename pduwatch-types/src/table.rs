//! Raw row tables as delivered by the poller.

/// One polling cycle's raw rows, one row per phase.
///
/// Every row carries the raw string fields in
/// [`UNIT_SPECS`](crate::UNIT_SPECS) order. `sys_object_id` is the device
/// signature reported alongside the rows, used to pick the device variant.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowTable {
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub sys_object_id: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rows: Vec<Vec<String>>,
}

impl RowTable {
    /// Create a table without a device signature.
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self {
            sys_object_id: None,
            rows,
        }
    }

    /// Attach the device signature.
    pub fn with_sys_object_id(mut self, oid: impl Into<String>) -> Self {
        self.sys_object_id = Some(oid.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

impl<R, S> FromIterator<R> for RowTable
where
    R: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        )
    }
}
