//! Table group lifecycle
//!
//! A group is one seated party; creating one marks the table occupied,
//! deleting one cascades to the group's orders and releases the table
//! once no active group remains.

use chrono::Utc;
use shared::models::{
    GroupStatus, TableGroup, TableGroupCreate, TableGroupUpdate, TableStatus,
};

use super::{Collections, FloorStore, StoreError, StoreResult};

/// Preferred short labels, in assignment order
const GROUP_LETTERS: [char; 8] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'];

/// Pick the first unused letter label among the table's active groups,
/// falling back to a numbered label once A-H are taken
fn next_group_name(inner: &Collections, table_id: &str) -> String {
    let active: Vec<&str> = inner
        .groups
        .iter()
        .filter(|g| g.table_id == table_id && g.status.is_active())
        .map(|g| g.name.as_str())
        .collect();

    GROUP_LETTERS
        .iter()
        .map(|letter| format!("Group {}", letter))
        .find(|candidate| !active.contains(&candidate.as_str()))
        .unwrap_or_else(|| format!("Group {}", active.len() + 1))
}

fn name_taken(inner: &Collections, table_id: &str, name: &str, exclude_id: Option<&str>) -> bool {
    inner.groups.iter().any(|g| {
        g.table_id == table_id
            && g.status.is_active()
            && g.name == name
            && Some(g.id.as_str()) != exclude_id
    })
}

impl FloorStore {
    /// Seat a new party at a table
    ///
    /// Increments the table's active group count and forces its status
    /// to `occupied`.
    pub fn create_group(&self, payload: TableGroupCreate) -> StoreResult<TableGroup> {
        let mut inner = self.write();

        // Table must exist before anything is appended
        inner.table_mut(&payload.table_id)?;

        let name = match payload.name {
            Some(name) => {
                if name_taken(&inner, &payload.table_id, &name, None) {
                    return Err(StoreError::DuplicateGroupName(name));
                }
                name
            }
            None => next_group_name(&inner, &payload.table_id),
        };

        let now = Utc::now();
        let group = TableGroup {
            id: Self::next_id(),
            table_id: payload.table_id.clone(),
            name,
            status: GroupStatus::Active,
            customer_id: payload.customer_id,
            notes: payload.notes,
            staff: payload.staff,
            created_at: now,
            updated_at: now,
        };
        inner.groups.push(group.clone());

        let table = inner.table_mut(&payload.table_id)?;
        table.active_group_count += 1;
        table.status = TableStatus::Occupied;

        tracing::info!(
            group_id = %group.id,
            table_id = %group.table_id,
            name = %group.name,
            "Group seated"
        );
        Ok(group)
    }

    /// Merge field updates into a group and refresh its timestamp
    ///
    /// Purely informational in this subsystem; group status changes do
    /// not drive order state.
    pub fn update_group(&self, id: &str, payload: TableGroupUpdate) -> StoreResult<TableGroup> {
        let mut inner = self.write();

        if let Some(name) = &payload.name {
            let table_id = inner.group_mut(id)?.table_id.clone();
            if name_taken(&inner, &table_id, name, Some(id)) {
                return Err(StoreError::DuplicateGroupName(name.clone()));
            }
        }

        let group = inner.group_mut(id)?;
        if let Some(name) = payload.name {
            group.name = name;
        }
        if let Some(status) = payload.status {
            group.status = status;
        }
        if let Some(customer_id) = payload.customer_id {
            group.customer_id = Some(customer_id);
        }
        if let Some(notes) = payload.notes {
            group.notes = Some(notes);
        }
        if let Some(staff) = payload.staff {
            group.staff = Some(staff);
        }
        group.updated_at = Utc::now();
        Ok(group.clone())
    }

    /// Delete a group and cascade
    ///
    /// Removes every order referencing the group, decrements the owning
    /// table's active count (floored at zero) and restores `available`
    /// when this was the table's last group. Hard delete: refused while
    /// a paid order is still attached, so closed tickets go through
    /// archival instead of vanishing with an abandoned group.
    pub fn delete_group(&self, id: &str) -> StoreResult<()> {
        let mut inner = self.write();

        let group = inner
            .groups
            .iter()
            .find(|g| g.id == id)
            .ok_or_else(|| StoreError::GroupNotFound(id.to_string()))?;
        let table_id = group.table_id.clone();

        let has_paid_order = inner.orders.iter().any(|o| {
            o.group_id.as_deref() == Some(id) && o.status == shared::models::OrderStatus::Paid
        });
        if has_paid_order {
            return Err(StoreError::GroupHasPaidOrders(id.to_string()));
        }

        let orders_before = inner.orders.len();
        inner.orders.retain(|o| o.group_id.as_deref() != Some(id));
        let removed_orders = orders_before - inner.orders.len();

        inner.groups.retain(|g| g.id != id);

        let table = inner.table_mut(&table_id)?;
        if table.active_group_count <= 1 {
            table.status = TableStatus::Available;
        }
        table.active_group_count = (table.active_group_count - 1).max(0);

        tracing::info!(
            group_id = %id,
            table_id = %table_id,
            removed_orders,
            "Group deleted with cascade"
        );
        Ok(())
    }

    pub fn get_group(&self, id: &str) -> StoreResult<TableGroup> {
        self.read()
            .groups
            .iter()
            .find(|g| g.id == id)
            .cloned()
            .ok_or_else(|| StoreError::GroupNotFound(id.to_string()))
    }

    /// Groups still counting towards the table's occupancy (not paid)
    pub fn active_groups_by_table(&self, table_id: &str) -> Vec<TableGroup> {
        self.read()
            .groups
            .iter()
            .filter(|g| g.table_id == table_id && g.status.is_active())
            .cloned()
            .collect()
    }
}
