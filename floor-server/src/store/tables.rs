//! Table setup and status operations
//!
//! Tables are created at setup time and never deleted at runtime.
//! `occupied` is derived from the active group count (see `groups`);
//! `set_table_status` is the manual override path for cleaning,
//! reservations and stuck-state recovery.

use shared::models::{Table, TableCreate, TableStatus};

use super::{FloorStore, StoreResult};

/// Default seating capacity when the setup payload omits one
const DEFAULT_CAPACITY: i32 = 4;

impl FloorStore {
    /// Create a table (setup flow)
    pub fn create_table(&self, payload: TableCreate) -> Table {
        let table = Table {
            id: Self::next_id(),
            number: payload.number,
            capacity: payload.capacity.unwrap_or(DEFAULT_CAPACITY),
            status: TableStatus::Available,
            section: payload.section,
            qr_token: Self::next_id(),
            active_group_count: 0,
        };
        let mut inner = self.write();
        inner.tables.push(table.clone());
        tracing::info!(table_id = %table.id, number = %table.number, "Table created");
        table
    }

    /// All tables, in setup order
    pub fn list_tables(&self) -> Vec<Table> {
        self.read().tables.clone()
    }

    pub fn get_table(&self, id: &str) -> StoreResult<Table> {
        self.read()
            .tables
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| super::StoreError::TableNotFound(id.to_string()))
    }

    /// Manual status override
    ///
    /// Competes with the derived occupancy status on purpose: staff must
    /// be able to force `available` (or `cleaning`) even while groups
    /// are still recorded, to recover from stuck states.
    pub fn set_table_status(&self, id: &str, status: TableStatus) -> StoreResult<Table> {
        let mut inner = self.write();
        let table = inner.table_mut(id)?;
        table.status = status;
        tracing::info!(table_id = %id, status = ?status, "Table status overridden");
        Ok(table.clone())
    }
}
