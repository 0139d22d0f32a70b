//! Order Model
//!
//! One ticket of items tied to a table and, optionally, a table group.
//! Monetary fields are `Decimal` and are kept unrounded; displays round
//! to 2dp at presentation time.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order status (订单状态)
///
/// Transitions are not enforced by the store; staff may jump states to
/// correct mistakes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Preparing,
    Ready,
    Served,
    Paid,
}

/// Order type (就餐方式)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    #[default]
    DineIn,
    Takeaway,
}

/// Discount type - flat currency amount or percentage of subtotal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DiscountType {
    #[default]
    Percentage,
    Flat,
}

/// Line item status (菜品状态)
///
/// Monotonic in the listed order by convention; out-of-order writes are
/// accepted as staff overrides.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderItemStatus {
    #[default]
    Ordered,
    SentToKitchen,
    Preparing,
    Ready,
    Served,
}

/// Order line item
///
/// `menu_item_id`/`name`/`description`/`price` are a snapshot taken when
/// the item is added; later menu catalog edits do not touch placed
/// orders. `price` is immutable once set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: String,
    /// Menu catalog reference (denormalized copy, not a live link)
    pub menu_item_id: String,
    pub name: String,
    pub description: Option<String>,
    /// Unit price snapshot at add-time
    pub price: Decimal,
    pub quantity: i32,
    pub status: OrderItemStatus,
    pub notes: Option<String>,
    pub kitchen_notes: Option<String>,
    pub served_at: Option<DateTime<Utc>>,
    /// Staff member handling this line
    pub staff: Option<String>,
}

/// Order entity (订单)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub table_id: String,
    pub group_id: Option<String>,
    pub status: OrderStatus,
    pub order_type: OrderType,
    pub items: Vec<OrderItem>,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub service_charge: Decimal,
    /// Discount input (flat amount or percentage, per `discount_type`)
    pub discount: Decimal,
    pub discount_type: DiscountType,
    pub discount_reason: Option<String>,
    pub total: Decimal,
    pub notes: Option<String>,
    /// Kitchen Order Ticket dispatched
    pub kot_sent: bool,
    pub kot_sent_at: Option<DateTime<Utc>>,
    pub staff: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// New line item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemCreate {
    pub menu_item_id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub quantity: i32,
    pub notes: Option<String>,
    pub kitchen_notes: Option<String>,
    pub staff: Option<String>,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub table_id: String,
    pub group_id: Option<String>,
    #[serde(default)]
    pub order_type: OrderType,
    pub items: Vec<OrderItemCreate>,
    #[serde(default)]
    pub discount: Decimal,
    #[serde(default)]
    pub discount_type: DiscountType,
    pub discount_reason: Option<String>,
    pub notes: Option<String>,
    pub staff: Option<String>,
}

/// Update order payload
///
/// Deliberately cannot carry items or totals fields: item changes go
/// through the add/remove item operations and discount changes through
/// `apply_discount`, both of which recompute totals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub status: Option<OrderStatus>,
    pub order_type: Option<OrderType>,
    pub group_id: Option<String>,
    pub notes: Option<String>,
    pub staff: Option<String>,
}

/// Apply discount payload (recomputes totals)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDiscount {
    pub discount: Decimal,
    pub discount_type: DiscountType,
    pub reason: Option<String>,
}

/// Set line item status payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemStatusUpdate {
    pub status: OrderItemStatus,
}
