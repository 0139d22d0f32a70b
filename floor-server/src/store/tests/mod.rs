use super::*;
use rust_decimal::Decimal;
use shared::models::{
    ChargeRates, Order, OrderCreate, OrderItemCreate, Table, TableCreate, TableGroup,
    TableGroupCreate,
};

mod test_customers;
mod test_groups;
mod test_orders;

fn create_test_store() -> FloorStore {
    FloorStore::new(ChargeRates {
        tax_rate_percent: Decimal::new(85, 1),       // 8.5%
        service_charge_percent: Decimal::new(10, 0), // 10%
    })
}

fn setup_table(store: &FloorStore, number: &str) -> Table {
    store.create_table(TableCreate {
        number: number.to_string(),
        capacity: Some(4),
        section: Some("Main Hall".to_string()),
    })
}

fn seat_group(store: &FloorStore, table_id: &str) -> TableGroup {
    store
        .create_group(TableGroupCreate {
            table_id: table_id.to_string(),
            ..Default::default()
        })
        .unwrap()
}

fn item_payload(name: &str, price: Decimal, quantity: i32) -> OrderItemCreate {
    OrderItemCreate {
        menu_item_id: format!("menu-{}", name),
        name: name.to_string(),
        description: None,
        price,
        quantity,
        notes: None,
        kitchen_notes: None,
        staff: None,
    }
}

fn open_order(
    store: &FloorStore,
    table_id: &str,
    group_id: Option<&str>,
    items: Vec<OrderItemCreate>,
) -> Order {
    store
        .create_order(OrderCreate {
            table_id: table_id.to_string(),
            group_id: group_id.map(str::to_string),
            order_type: Default::default(),
            items,
            discount: Decimal::ZERO,
            discount_type: Default::default(),
            discount_reason: None,
            notes: None,
            staff: None,
        })
        .unwrap()
}
