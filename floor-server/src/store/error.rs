//! Store errors
//!
//! Every mutator reports failures as typed results so the API layer can
//! render a precise message; unknown ids are surfaced as NotFound
//! variants rather than falling through to silent no-ops.

use shared::ApiError;
use thiserror::Error;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Table not found: {0}")]
    TableNotFound(String),

    #[error("Group not found: {0}")]
    GroupNotFound(String),

    #[error("Order not found: {0}")]
    OrderNotFound(String),

    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    #[error("Invalid discount: {0}")]
    InvalidDiscount(String),

    #[error("Invalid item: {0}")]
    InvalidItem(String),

    #[error("Duplicate group name: {0}")]
    DuplicateGroupName(String),

    #[error("Group has paid orders: {0}")]
    GroupHasPaidOrders(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::TableNotFound(id) => ApiError::not_found(format!("Table {}", id)),
            StoreError::GroupNotFound(id) => ApiError::not_found(format!("Group {}", id)),
            StoreError::OrderNotFound(id) => ApiError::not_found(format!("Order {}", id)),
            StoreError::ItemNotFound(id) => ApiError::not_found(format!("Order item {}", id)),
            StoreError::CustomerNotFound(id) => ApiError::not_found(format!("Customer {}", id)),
            StoreError::InvalidDiscount(msg) => ApiError::validation(msg),
            StoreError::InvalidItem(msg) => ApiError::validation(msg),
            StoreError::DuplicateGroupName(name) => {
                ApiError::conflict(format!("Group name {}", name))
            }
            StoreError::GroupHasPaidOrders(id) => ApiError::business_rule(format!(
                "Group {} still has paid orders attached; archive them before deleting",
                id
            )),
        }
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
