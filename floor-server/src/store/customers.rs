//! Customer directory
//!
//! Loose identities for repeat-visit recognition. Search is plain
//! substring matching; no ranking or fuzziness at this scale.

use chrono::Utc;
use shared::models::{Customer, CustomerCreate, CustomerUpdate};

use super::{FloorStore, StoreError, StoreResult};

impl FloorStore {
    pub fn create_customer(&self, payload: CustomerCreate) -> Customer {
        let customer = Customer {
            id: Self::next_id(),
            name: payload.name,
            phone: payload.phone,
            email: payload.email,
            company: payload.company,
            tags: payload.tags,
            visit_count: 0,
            last_visit_at: None,
            created_at: Utc::now(),
        };
        self.write().customers.push(customer.clone());
        tracing::info!(customer_id = %customer.id, "Customer captured");
        customer
    }

    pub fn update_customer(&self, id: &str, payload: CustomerUpdate) -> StoreResult<Customer> {
        let mut inner = self.write();
        let customer = inner.customer_mut(id)?;
        if let Some(name) = payload.name {
            customer.name = name;
        }
        if let Some(phone) = payload.phone {
            customer.phone = Some(phone);
        }
        if let Some(email) = payload.email {
            customer.email = Some(email);
        }
        if let Some(company) = payload.company {
            customer.company = Some(company);
        }
        if let Some(tags) = payload.tags {
            customer.tags = tags;
        }
        Ok(customer.clone())
    }

    pub fn get_customer(&self, id: &str) -> StoreResult<Customer> {
        self.read()
            .customers
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| StoreError::CustomerNotFound(id.to_string()))
    }

    /// Mark a repeat visit: bump the counter and stamp the time
    pub fn record_visit(&self, id: &str) -> StoreResult<Customer> {
        let mut inner = self.write();
        let customer = inner.customer_mut(id)?;
        customer.visit_count += 1;
        customer.last_visit_at = Some(Utc::now());
        Ok(customer.clone())
    }

    /// Substring search over name, phone and email
    ///
    /// Name and email match case-insensitively; phone is a raw
    /// substring match (digits and formatting as stored).
    pub fn search_customers(&self, query: &str) -> Vec<Customer> {
        let needle = query.to_lowercase();
        self.read()
            .customers
            .iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&needle)
                    || c.phone.as_deref().is_some_and(|p| p.contains(query))
                    || c.email
                        .as_deref()
                        .is_some_and(|e| e.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect()
    }
}
