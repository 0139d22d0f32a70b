//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Table status (桌台状态)
///
/// `Occupied` is normally derived from the active group count;
/// `Cleaning` and `Reserved` are manual overrides set by staff.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TableStatus {
    #[default]
    Available,
    Occupied,
    Reserved,
    Cleaning,
}

/// Dining table entity (桌台)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    pub id: String,
    /// Display number shown on the floor plan
    pub number: String,
    pub capacity: i32,
    pub status: TableStatus,
    /// Section label, e.g. "Terrace" / "Main Hall"
    pub section: Option<String>,
    /// Stable ordering code printed on the table's QR sticker
    pub qr_token: String,
    /// Count of groups currently seated here (status != paid)
    pub active_group_count: i32,
}

/// Create table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableCreate {
    pub number: String,
    pub capacity: Option<i32>,
    pub section: Option<String>,
}

/// Set table status payload (manual override)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableStatusUpdate {
    pub status: TableStatus,
}
