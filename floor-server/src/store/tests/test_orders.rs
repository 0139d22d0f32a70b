use super::*;
use crate::money;
use shared::models::{
    DiscountType, OrderDiscount, OrderItemStatus, OrderItemStatusUpdate, OrderStatus, OrderUpdate,
};

#[test]
fn test_create_order_computes_totals() {
    let store = create_test_store();
    let table = setup_table(&store, "T1");
    let group = seat_group(&store, &table.id);

    let order = open_order(
        &store,
        &table.id,
        Some(&group.id),
        vec![
            item_payload("Pasta", Decimal::new(1899, 2), 2),
            item_payload("Salad", Decimal::new(1250, 2), 1),
        ],
    );

    assert_eq!(order.status, OrderStatus::Pending);
    assert!(!order.kot_sent);
    assert_eq!(order.subtotal, Decimal::new(5048, 2));
    assert_eq!(order.tax, Decimal::new(42908, 4));
    assert_eq!(order.service_charge, Decimal::new(5048, 3));
    assert_eq!(order.total, Decimal::new(598188, 4));
    assert!(order.items.iter().all(|i| i.status == OrderItemStatus::Ordered));
}

#[test]
fn test_create_zero_item_order() {
    let store = create_test_store();
    let table = setup_table(&store, "T1");

    let order = open_order(&store, &table.id, None, vec![]);
    assert_eq!(order.subtotal, Decimal::ZERO);
    assert_eq!(order.total, Decimal::ZERO);
}

#[test]
fn test_create_order_unknown_group_is_not_found() {
    let store = create_test_store();
    let table = setup_table(&store, "T1");

    let err = store
        .create_order(OrderCreate {
            table_id: table.id.clone(),
            group_id: Some("missing".to_string()),
            order_type: Default::default(),
            items: vec![],
            discount: Decimal::ZERO,
            discount_type: Default::default(),
            discount_reason: None,
            notes: None,
            staff: None,
        })
        .unwrap_err();
    assert!(matches!(err, StoreError::GroupNotFound(_)));
}

#[test]
fn test_create_order_rejects_invalid_discount() {
    let store = create_test_store();
    let table = setup_table(&store, "T1");

    let err = store
        .create_order(OrderCreate {
            table_id: table.id.clone(),
            group_id: None,
            order_type: Default::default(),
            items: vec![],
            discount: Decimal::new(150, 0),
            discount_type: DiscountType::Percentage,
            discount_reason: None,
            notes: None,
            staff: None,
        })
        .unwrap_err();
    assert!(matches!(err, StoreError::InvalidDiscount(_)));
}

#[test]
fn test_add_and_remove_item_recompute_totals() {
    let store = create_test_store();
    let table = setup_table(&store, "T1");
    let order = open_order(
        &store,
        &table.id,
        None,
        vec![item_payload("Pasta", Decimal::new(1899, 2), 2)],
    );

    let order = store
        .add_item(&order.id, item_payload("Salad", Decimal::new(1250, 2), 1))
        .unwrap();
    assert_eq!(order.subtotal, Decimal::new(5048, 2));

    // Totals always match a fresh calculator run over the item list
    let fresh = money::calculate_totals(
        &order.items,
        order.discount,
        order.discount_type,
        store.rates(),
    );
    assert_eq!(order.subtotal, fresh.subtotal);
    assert_eq!(order.tax, fresh.tax);
    assert_eq!(order.service_charge, fresh.service_charge);
    assert_eq!(order.total, fresh.total);

    let salad_id = order.items[1].id.clone();
    let order = store.remove_item(&order.id, &salad_id).unwrap();
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.subtotal, Decimal::new(3798, 2));

    let fresh = money::calculate_totals(
        &order.items,
        order.discount,
        order.discount_type,
        store.rates(),
    );
    assert_eq!(order.tax, fresh.tax);
    assert_eq!(order.total, fresh.total);
}

#[test]
fn test_remove_unknown_item_is_not_found() {
    let store = create_test_store();
    let table = setup_table(&store, "T1");
    let order = open_order(&store, &table.id, None, vec![]);

    let err = store.remove_item(&order.id, "missing").unwrap_err();
    assert!(matches!(err, StoreError::ItemNotFound(_)));
}

#[test]
fn test_add_item_rejects_zero_quantity() {
    let store = create_test_store();
    let table = setup_table(&store, "T1");
    let order = open_order(&store, &table.id, None, vec![]);

    let err = store
        .add_item(&order.id, item_payload("Soup", Decimal::new(550, 2), 0))
        .unwrap_err();
    assert!(matches!(err, StoreError::InvalidItem(_)));
}

#[test]
fn test_update_order_does_not_touch_totals() {
    let store = create_test_store();
    let table = setup_table(&store, "T1");
    let order = open_order(
        &store,
        &table.id,
        None,
        vec![item_payload("Pasta", Decimal::new(1899, 2), 1)],
    );

    let updated = store
        .update_order(&order.id, OrderUpdate {
            status: Some(OrderStatus::Served),
            notes: Some("no parmesan".to_string()),
            ..Default::default()
        })
        .unwrap();

    // Any status jump is accepted; totals stay exactly as computed
    assert_eq!(updated.status, OrderStatus::Served);
    assert_eq!(updated.subtotal, order.subtotal);
    assert_eq!(updated.total, order.total);
    assert!(updated.updated_at >= order.updated_at);
}

#[test]
fn test_apply_discount_recomputes() {
    let store = create_test_store();
    let table = setup_table(&store, "T1");
    let order = open_order(
        &store,
        &table.id,
        None,
        vec![item_payload("Steak", Decimal::new(100, 0), 1)],
    );

    let order = store
        .apply_discount(&order.id, OrderDiscount {
            discount: Decimal::new(25, 0),
            discount_type: DiscountType::Percentage,
            reason: Some("regular".to_string()),
        })
        .unwrap();

    assert_eq!(order.tax, Decimal::new(6375, 3)); // 75 * 8.5%
    assert_eq!(order.service_charge, Decimal::new(75, 1));
    assert_eq!(order.total, Decimal::new(88875, 3));
    assert_eq!(order.discount_reason.as_deref(), Some("regular"));
}

#[test]
fn test_apply_discount_rejects_negative() {
    let store = create_test_store();
    let table = setup_table(&store, "T1");
    let order = open_order(&store, &table.id, None, vec![]);

    let err = store
        .apply_discount(&order.id, OrderDiscount {
            discount: Decimal::new(-5, 0),
            discount_type: DiscountType::Flat,
            reason: None,
        })
        .unwrap_err();
    assert!(matches!(err, StoreError::InvalidDiscount(_)));
}

#[test]
fn test_discount_kept_through_item_changes() {
    let store = create_test_store();
    let table = setup_table(&store, "T1");
    let order = open_order(&store, &table.id, None, vec![]);
    store
        .apply_discount(&order.id, OrderDiscount {
            discount: Decimal::new(10, 0),
            discount_type: DiscountType::Flat,
            reason: None,
        })
        .unwrap();

    // add_item recomputes with the order's stored discount policy
    let order = store
        .add_item(&order.id, item_payload("Steak", Decimal::new(40, 0), 1))
        .unwrap();
    assert_eq!(order.subtotal, Decimal::new(40, 0));
    assert_eq!(order.tax, Decimal::new(255, 2)); // (40 - 10) * 8.5%
    assert_eq!(order.service_charge, Decimal::new(3, 0));
}

#[test]
fn test_update_item_status_stamps_served_at() {
    let store = create_test_store();
    let table = setup_table(&store, "T1");
    let order = open_order(
        &store,
        &table.id,
        None,
        vec![item_payload("Soup", Decimal::new(550, 2), 1)],
    );
    let item_id = order.items[0].id.clone();

    let order = store
        .update_item_status(&order.id, &item_id, OrderItemStatusUpdate {
            status: OrderItemStatus::Served,
        })
        .unwrap();

    let item = &order.items[0];
    assert_eq!(item.status, OrderItemStatus::Served);
    assert!(item.served_at.is_some());
    // Totals untouched by a status change
    assert_eq!(order.subtotal, Decimal::new(550, 2));
}

#[test]
fn test_send_kot_dispatches_only_ordered_items() {
    let store = create_test_store();
    let table = setup_table(&store, "T1");
    let order = open_order(
        &store,
        &table.id,
        None,
        vec![
            item_payload("Soup", Decimal::new(550, 2), 1),
            item_payload("Steak", Decimal::new(2850, 2), 1),
        ],
    );
    let steak_id = order.items[1].id.clone();
    store
        .update_item_status(&order.id, &steak_id, OrderItemStatusUpdate {
            status: OrderItemStatus::Preparing,
        })
        .unwrap();

    let order = store.send_kot(&order.id).unwrap();
    assert!(order.kot_sent);
    assert!(order.kot_sent_at.is_some());
    assert_eq!(order.items[0].status, OrderItemStatus::SentToKitchen);
    // Items already past `ordered` are never touched
    assert_eq!(order.items[1].status, OrderItemStatus::Preparing);
}

#[test]
fn test_send_kot_is_idempotent() {
    let store = create_test_store();
    let table = setup_table(&store, "T1");
    let order = open_order(
        &store,
        &table.id,
        None,
        vec![item_payload("Soup", Decimal::new(550, 2), 1)],
    );

    let first = store.send_kot(&order.id).unwrap();
    let statuses: Vec<_> = first.items.iter().map(|i| i.status).collect();

    let second = store.send_kot(&order.id).unwrap();
    let statuses_again: Vec<_> = second.items.iter().map(|i| i.status).collect();
    assert_eq!(statuses, statuses_again);
}

#[test]
fn test_queries_by_group_and_table() {
    let store = create_test_store();
    let table = setup_table(&store, "T1");
    let other = setup_table(&store, "T2");
    let group = seat_group(&store, &table.id);

    open_order(&store, &table.id, Some(&group.id), vec![]);
    open_order(&store, &table.id, None, vec![]);
    open_order(&store, &other.id, None, vec![]);

    assert_eq!(store.orders_by_group(&group.id).len(), 1);
    assert_eq!(store.orders_by_table(&table.id).len(), 2);
    assert_eq!(store.list_orders().len(), 3);
}
