use super::*;
use shared::models::{GroupStatus, OrderStatus, OrderUpdate, TableGroupUpdate, TableStatus};

#[test]
fn test_create_group_occupies_table() {
    let store = create_test_store();
    let table = setup_table(&store, "T1");

    let group = seat_group(&store, &table.id);
    assert_eq!(group.status, GroupStatus::Active);
    assert_eq!(group.name, "Group A");

    let table = store.get_table(&table.id).unwrap();
    assert_eq!(table.status, TableStatus::Occupied);
    assert_eq!(table.active_group_count, 1);
}

#[test]
fn test_create_group_unknown_table_is_not_found() {
    let store = create_test_store();
    let err = store
        .create_group(TableGroupCreate {
            table_id: "missing".to_string(),
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(err, StoreError::TableNotFound(_)));
}

#[test]
fn test_auto_names_advance_through_letters() {
    let store = create_test_store();
    let table = setup_table(&store, "T1");

    let names: Vec<String> = (0..8).map(|_| seat_group(&store, &table.id).name).collect();
    assert_eq!(names[0], "Group A");
    assert_eq!(names[7], "Group H");

    // Letters exhausted: fall back to a numbered label
    let ninth = seat_group(&store, &table.id);
    assert_eq!(ninth.name, "Group 9");
}

#[test]
fn test_auto_name_reuses_freed_letter() {
    let store = create_test_store();
    let table = setup_table(&store, "T1");

    let a = seat_group(&store, &table.id);
    let _b = seat_group(&store, &table.id);
    store.delete_group(&a.id).unwrap();

    // "Group A" is free again among active groups
    let next = seat_group(&store, &table.id);
    assert_eq!(next.name, "Group A");
}

#[test]
fn test_paid_group_frees_its_letter() {
    let store = create_test_store();
    let table = setup_table(&store, "T1");

    let a = seat_group(&store, &table.id);
    store
        .update_group(&a.id, TableGroupUpdate {
            status: Some(GroupStatus::Paid),
            ..Default::default()
        })
        .unwrap();

    // Paid groups are terminal for active-group queries
    assert!(store.active_groups_by_table(&table.id).is_empty());
    let next = seat_group(&store, &table.id);
    assert_eq!(next.name, "Group A");
}

#[test]
fn test_explicit_duplicate_name_rejected() {
    let store = create_test_store();
    let table = setup_table(&store, "T1");

    store
        .create_group(TableGroupCreate {
            table_id: table.id.clone(),
            name: Some("Birthday".to_string()),
            ..Default::default()
        })
        .unwrap();

    let err = store
        .create_group(TableGroupCreate {
            table_id: table.id.clone(),
            name: Some("Birthday".to_string()),
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(err, StoreError::DuplicateGroupName(_)));
}

#[test]
fn test_update_group_touches_timestamp() {
    let store = create_test_store();
    let table = setup_table(&store, "T1");
    let group = seat_group(&store, &table.id);

    let updated = store
        .update_group(&group.id, TableGroupUpdate {
            status: Some(GroupStatus::Dining),
            notes: Some("window seat".to_string()),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(updated.status, GroupStatus::Dining);
    assert_eq!(updated.notes.as_deref(), Some("window seat"));
    assert!(updated.updated_at >= group.updated_at);
}

#[test]
fn test_delete_group_cascades_orders_and_frees_table() {
    let store = create_test_store();
    let table = setup_table(&store, "T1");
    let group = seat_group(&store, &table.id);
    let order = open_order(
        &store,
        &table.id,
        Some(&group.id),
        vec![item_payload("Soup", Decimal::new(550, 2), 1)],
    );

    store.delete_group(&group.id).unwrap();

    assert!(store.orders_by_group(&group.id).is_empty());
    assert!(matches!(
        store.get_order(&order.id).unwrap_err(),
        StoreError::OrderNotFound(_)
    ));
    let table = store.get_table(&table.id).unwrap();
    assert_eq!(table.active_group_count, 0);
    assert_eq!(table.status, TableStatus::Available);
}

#[test]
fn test_delete_group_keeps_table_occupied_while_others_remain() {
    let store = create_test_store();
    let table = setup_table(&store, "T1");
    let a = seat_group(&store, &table.id);
    let _b = seat_group(&store, &table.id);

    store.delete_group(&a.id).unwrap();

    let table = store.get_table(&table.id).unwrap();
    assert_eq!(table.active_group_count, 1);
    assert_eq!(table.status, TableStatus::Occupied);
}

#[test]
fn test_delete_group_refused_with_paid_order() {
    let store = create_test_store();
    let table = setup_table(&store, "T1");
    let group = seat_group(&store, &table.id);
    let order = open_order(
        &store,
        &table.id,
        Some(&group.id),
        vec![item_payload("Steak", Decimal::new(2850, 2), 1)],
    );
    store
        .update_order(&order.id, OrderUpdate {
            status: Some(OrderStatus::Paid),
            ..Default::default()
        })
        .unwrap();

    let err = store.delete_group(&group.id).unwrap_err();
    assert!(matches!(err, StoreError::GroupHasPaidOrders(_)));

    // Nothing was removed
    assert_eq!(store.orders_by_group(&group.id).len(), 1);
    assert_eq!(store.get_table(&table.id).unwrap().active_group_count, 1);
}

#[test]
fn test_group_count_invariant_over_create_delete_sequence() {
    let store = create_test_store();
    let table = setup_table(&store, "T1");

    let g1 = seat_group(&store, &table.id);
    let g2 = seat_group(&store, &table.id);
    let _g3 = seat_group(&store, &table.id);
    store.delete_group(&g1.id).unwrap();
    store.delete_group(&g2.id).unwrap();

    let table = store.get_table(&table.id).unwrap();
    let active = store.active_groups_by_table(&table.id).len() as i32;
    assert_eq!(table.active_group_count, active);
    assert_eq!(active, 1);
}
