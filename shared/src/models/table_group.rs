//! Table Group Model
//!
//! One seated party at a table. A table may host several concurrent
//! groups (split seating), each running its own tickets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Group status (桌组状态)
///
/// Advisory progression; `Paid` is terminal for "active groups" queries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum GroupStatus {
    #[default]
    Active,
    Ordering,
    Dining,
    Billing,
    Paid,
}

impl GroupStatus {
    /// Whether this group still counts towards the table's occupancy
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Paid)
    }
}

/// Table group entity (桌组)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableGroup {
    pub id: String,
    pub table_id: String,
    /// Display name, unique per table among active groups ("Group A")
    pub name: String,
    pub status: GroupStatus,
    /// Linked customer identity, if captured
    pub customer_id: Option<String>,
    pub notes: Option<String>,
    /// Staff member who seated the party
    pub staff: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create group payload
///
/// `name` is optional; the store auto-assigns the first free letter
/// label for the table when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableGroupCreate {
    pub table_id: String,
    pub name: Option<String>,
    pub customer_id: Option<String>,
    pub notes: Option<String>,
    pub staff: Option<String>,
}

/// Update group payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableGroupUpdate {
    pub name: Option<String>,
    pub status: Option<GroupStatus>,
    pub customer_id: Option<String>,
    pub notes: Option<String>,
    pub staff: Option<String>,
}
