//! Order and line item lifecycle
//!
//! Totals fields on an order are only ever written here, immediately
//! after an item or discount mutation, so they always equal a fresh
//! `money::calculate_totals` call over the current item list. Plain
//! field updates (`update_order`) cannot touch items or totals.

use chrono::Utc;
use shared::models::{
    ChargeRates, Order, OrderCreate, OrderDiscount, OrderItem, OrderItemCreate, OrderItemStatus,
    OrderItemStatusUpdate, OrderStatus, OrderUpdate,
};

use super::{FloorStore, StoreError, StoreResult};
use crate::money;

/// Recompute the derived totals from the order's items and discount
fn apply_totals(order: &mut Order, rates: &ChargeRates) {
    let totals = money::calculate_totals(&order.items, order.discount, order.discount_type, rates);
    order.subtotal = totals.subtotal;
    order.tax = totals.tax;
    order.service_charge = totals.service_charge;
    order.total = totals.total;
}

fn build_item(id: String, payload: OrderItemCreate) -> OrderItem {
    OrderItem {
        id,
        menu_item_id: payload.menu_item_id,
        name: payload.name,
        description: payload.description,
        price: payload.price,
        quantity: payload.quantity,
        status: OrderItemStatus::Ordered,
        notes: payload.notes,
        kitchen_notes: payload.kitchen_notes,
        served_at: None,
        staff: payload.staff,
    }
}

impl FloorStore {
    /// Open a new ticket with an initial item set
    ///
    /// Totals are computed at creation; a zero-item order is valid and
    /// carries all-zero totals.
    pub fn create_order(&self, payload: OrderCreate) -> StoreResult<Order> {
        money::validate_discount(payload.discount, payload.discount_type)?;
        for item in &payload.items {
            money::validate_item(item)?;
        }

        let mut inner = self.write();
        inner.table_mut(&payload.table_id)?;
        if let Some(group_id) = &payload.group_id {
            inner.group_mut(group_id)?;
        }

        let now = Utc::now();
        let items: Vec<OrderItem> = payload
            .items
            .into_iter()
            .map(|item| build_item(Self::next_id(), item))
            .collect();

        let mut order = Order {
            id: Self::next_id(),
            table_id: payload.table_id,
            group_id: payload.group_id,
            status: OrderStatus::Pending,
            order_type: payload.order_type,
            items,
            subtotal: Default::default(),
            tax: Default::default(),
            service_charge: Default::default(),
            discount: payload.discount,
            discount_type: payload.discount_type,
            discount_reason: payload.discount_reason,
            total: Default::default(),
            notes: payload.notes,
            kot_sent: false,
            kot_sent_at: None,
            staff: payload.staff,
            created_at: now,
            updated_at: now,
        };
        apply_totals(&mut order, &self.rates);

        inner.orders.push(order.clone());
        tracing::info!(
            order_id = %order.id,
            table_id = %order.table_id,
            items = order.items.len(),
            "Order created"
        );
        Ok(order)
    }

    /// Merge field updates into an order and refresh its timestamp
    ///
    /// Any status value may be set: transition adjacency is not
    /// enforced, so staff can jump states to correct mistakes.
    pub fn update_order(&self, id: &str, payload: OrderUpdate) -> StoreResult<Order> {
        let mut inner = self.write();

        if let Some(group_id) = &payload.group_id {
            inner.group_mut(group_id)?;
        }

        let order = inner.order_mut(id)?;
        if let Some(status) = payload.status {
            order.status = status;
        }
        if let Some(order_type) = payload.order_type {
            order.order_type = order_type;
        }
        if let Some(group_id) = payload.group_id {
            order.group_id = Some(group_id);
        }
        if let Some(notes) = payload.notes {
            order.notes = Some(notes);
        }
        if let Some(staff) = payload.staff {
            order.staff = Some(staff);
        }
        order.updated_at = Utc::now();
        Ok(order.clone())
    }

    /// Change the order's discount policy and recompute totals
    pub fn apply_discount(&self, id: &str, payload: OrderDiscount) -> StoreResult<Order> {
        money::validate_discount(payload.discount, payload.discount_type)?;

        let mut inner = self.write();
        let rates = self.rates;
        let order = inner.order_mut(id)?;
        order.discount = payload.discount;
        order.discount_type = payload.discount_type;
        order.discount_reason = payload.reason;
        apply_totals(order, &rates);
        order.updated_at = Utc::now();
        Ok(order.clone())
    }

    /// Append a line item and recompute totals with the stored discount
    pub fn add_item(&self, order_id: &str, payload: OrderItemCreate) -> StoreResult<Order> {
        money::validate_item(&payload)?;

        let mut inner = self.write();
        let rates = self.rates;
        let order = inner.order_mut(order_id)?;
        order.items.push(build_item(Self::next_id(), payload));
        apply_totals(order, &rates);
        order.updated_at = Utc::now();
        Ok(order.clone())
    }

    /// Remove a line item and recompute totals
    pub fn remove_item(&self, order_id: &str, item_id: &str) -> StoreResult<Order> {
        let mut inner = self.write();
        let rates = self.rates;
        let order = inner.order_mut(order_id)?;

        if !order.items.iter().any(|i| i.id == item_id) {
            return Err(StoreError::ItemNotFound(item_id.to_string()));
        }
        order.items.retain(|i| i.id != item_id);
        apply_totals(order, &rates);
        order.updated_at = Utc::now();
        Ok(order.clone())
    }

    /// Set a line item's preparation status
    ///
    /// `served` stamps the item's served time. Totals are untouched:
    /// quantity and price do not change here.
    pub fn update_item_status(
        &self,
        order_id: &str,
        item_id: &str,
        payload: OrderItemStatusUpdate,
    ) -> StoreResult<Order> {
        let mut inner = self.write();
        let order = inner.order_mut(order_id)?;

        let item = order
            .items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or_else(|| StoreError::ItemNotFound(item_id.to_string()))?;
        item.status = payload.status;
        if payload.status == OrderItemStatus::Served {
            item.served_at = Some(Utc::now());
        }
        order.updated_at = Utc::now();
        Ok(order.clone())
    }

    /// Dispatch the Kitchen Order Ticket
    ///
    /// Flips every item still `ordered` to `sent_to_kitchen` and stamps
    /// the sent flag/time. Idempotent: items already past `ordered` are
    /// never touched, so a second call changes nothing.
    pub fn send_kot(&self, order_id: &str) -> StoreResult<Order> {
        let mut inner = self.write();
        let order = inner.order_mut(order_id)?;

        let now = Utc::now();
        let mut dispatched = 0;
        for item in order
            .items
            .iter_mut()
            .filter(|i| i.status == OrderItemStatus::Ordered)
        {
            item.status = OrderItemStatus::SentToKitchen;
            dispatched += 1;
        }
        order.kot_sent = true;
        order.kot_sent_at = Some(now);
        order.updated_at = now;

        tracing::info!(order_id = %order_id, dispatched, "KOT dispatched");
        Ok(order.clone())
    }

    pub fn get_order(&self, id: &str) -> StoreResult<Order> {
        self.read()
            .orders
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .ok_or_else(|| StoreError::OrderNotFound(id.to_string()))
    }

    /// All orders, in creation order
    pub fn list_orders(&self) -> Vec<Order> {
        self.read().orders.clone()
    }

    pub fn orders_by_group(&self, group_id: &str) -> Vec<Order> {
        self.read()
            .orders
            .iter()
            .filter(|o| o.group_id.as_deref() == Some(group_id))
            .cloned()
            .collect()
    }

    pub fn orders_by_table(&self, table_id: &str) -> Vec<Order> {
        self.read()
            .orders
            .iter()
            .filter(|o| o.table_id == table_id)
            .cloned()
            .collect()
    }
}
