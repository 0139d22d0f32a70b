//! In-memory domain store
//!
//! `FloorStore` owns the four entity collections (tables, table groups,
//! orders, customers) behind one `RwLock`. Every mutator runs to
//! completion under the write lock, so cross-collection cascades
//! (group delete -> table update + order removal) are observed
//! atomically by all readers. No finer-grained locking by design:
//! the expected scale is dozens of concurrent orders per outlet and
//! every operation is a short in-memory scan.
//!
//! # Modules
//!
//! - [`tables`] - table setup and manual status overrides
//! - [`groups`] - table group lifecycle and cascades
//! - [`orders`] - order/item lifecycle, totals, KOT dispatch
//! - [`customers`] - customer directory and search

pub mod error;

mod customers;
mod groups;
mod orders;
mod tables;

pub use error::{StoreError, StoreResult};

use parking_lot::RwLock;
use shared::models::{ChargeRates, Customer, Order, Table, TableGroup};

/// Owned entity collections, guarded as a unit
#[derive(Debug, Default)]
pub(crate) struct Collections {
    pub tables: Vec<Table>,
    pub groups: Vec<TableGroup>,
    pub orders: Vec<Order>,
    pub customers: Vec<Customer>,
}

impl Collections {
    pub fn table_mut(&mut self, id: &str) -> StoreResult<&mut Table> {
        self.tables
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| StoreError::TableNotFound(id.to_string()))
    }

    pub fn group_mut(&mut self, id: &str) -> StoreResult<&mut TableGroup> {
        self.groups
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| StoreError::GroupNotFound(id.to_string()))
    }

    pub fn order_mut(&mut self, id: &str) -> StoreResult<&mut Order> {
        self.orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| StoreError::OrderNotFound(id.to_string()))
    }

    pub fn customer_mut(&mut self, id: &str) -> StoreResult<&mut Customer> {
        self.customers
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| StoreError::CustomerNotFound(id.to_string()))
    }
}

/// Single-writer domain store for the floor subsystem
#[derive(Debug)]
pub struct FloorStore {
    inner: RwLock<Collections>,
    rates: ChargeRates,
}

impl FloorStore {
    /// Create an empty store with the restaurant's charge rates
    pub fn new(rates: ChargeRates) -> Self {
        Self {
            inner: RwLock::new(Collections::default()),
            rates,
        }
    }

    /// Restaurant-wide tax/service rates used by totals recomputation
    pub fn rates(&self) -> &ChargeRates {
        &self.rates
    }

    pub(crate) fn read(&self) -> parking_lot::RwLockReadGuard<'_, Collections> {
        self.inner.read()
    }

    pub(crate) fn write(&self) -> parking_lot::RwLockWriteGuard<'_, Collections> {
        self.inner.write()
    }

    /// Generate a new entity identifier
    pub(crate) fn next_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests;
