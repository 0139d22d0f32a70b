use super::*;
use shared::models::{CustomerCreate, CustomerUpdate};

fn capture(store: &FloorStore, name: &str, phone: Option<&str>, email: Option<&str>) -> String {
    store
        .create_customer(CustomerCreate {
            name: name.to_string(),
            phone: phone.map(str::to_string),
            email: email.map(str::to_string),
            company: None,
            tags: vec![],
        })
        .id
}

#[test]
fn test_create_and_update_customer() {
    let store = create_test_store();
    let id = capture(&store, "Maria Lopez", Some("600123456"), None);

    let customer = store
        .update_customer(&id, CustomerUpdate {
            email: Some("maria@example.com".to_string()),
            tags: Some(vec!["vip".to_string()]),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(customer.name, "Maria Lopez");
    assert_eq!(customer.email.as_deref(), Some("maria@example.com"));
    assert_eq!(customer.tags, vec!["vip".to_string()]);
    assert_eq!(customer.visit_count, 0);
}

#[test]
fn test_update_unknown_customer_is_not_found() {
    let store = create_test_store();
    let err = store
        .update_customer("missing", CustomerUpdate::default())
        .unwrap_err();
    assert!(matches!(err, StoreError::CustomerNotFound(_)));
}

#[test]
fn test_record_visit_bumps_counter() {
    let store = create_test_store();
    let id = capture(&store, "Maria Lopez", None, None);

    store.record_visit(&id).unwrap();
    let customer = store.record_visit(&id).unwrap();

    assert_eq!(customer.visit_count, 2);
    assert!(customer.last_visit_at.is_some());
}

#[test]
fn test_search_matches_name_case_insensitive() {
    let store = create_test_store();
    capture(&store, "Maria Lopez", None, None);
    capture(&store, "John Doe", None, None);

    let hits = store.search_customers("maria");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Maria Lopez");
}

#[test]
fn test_search_matches_email_and_phone() {
    let store = create_test_store();
    capture(&store, "Maria Lopez", Some("600123456"), Some("Maria@Example.com"));
    capture(&store, "John Doe", Some("911555000"), None);

    // Email matches case-insensitively
    assert_eq!(store.search_customers("EXAMPLE.COM").len(), 1);
    // Phone is a raw substring match
    assert_eq!(store.search_customers("0123").len(), 1);
    assert!(store.search_customers("999").is_empty());
}
