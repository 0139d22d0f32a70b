//! Money calculation utilities using rust_decimal for precision
//!
//! All totals are derived with `Decimal` arithmetic and stored
//! unrounded; repeated recomputation as items change must not compound
//! rounding error. Only `round_display` rounds, and only at the
//! presentation boundary.

use rust_decimal::prelude::*;
use shared::models::{ChargeRates, DiscountType, OrderItem, OrderItemCreate};

use crate::store::StoreError;

/// Rounding for display values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed unit price per item
const MAX_PRICE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);
/// Maximum allowed quantity per line item
const MAX_QUANTITY: i32 = 9999;

/// Derived totals for one order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderTotals {
    pub subtotal: Decimal,
    /// Effective discount taken off the subtotal (after flooring)
    pub discount_amount: Decimal,
    pub tax: Decimal,
    pub service_charge: Decimal,
    pub total: Decimal,
}

/// Round a monetary value for display (2dp, midpoint away from zero)
pub fn round_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Validate a discount input before it enters the totals path
///
/// Negative amounts are rejected for both types; percentage discounts
/// must lie in [0, 100].
pub fn validate_discount(discount: Decimal, discount_type: DiscountType) -> Result<(), StoreError> {
    if discount < Decimal::ZERO {
        return Err(StoreError::InvalidDiscount(format!(
            "discount must be non-negative, got {}",
            discount
        )));
    }
    if discount_type == DiscountType::Percentage && discount > Decimal::ONE_HUNDRED {
        return Err(StoreError::InvalidDiscount(format!(
            "percentage discount must be between 0 and 100, got {}",
            discount
        )));
    }
    Ok(())
}

/// Validate a new line item before it is added to an order
pub fn validate_item(item: &OrderItemCreate) -> Result<(), StoreError> {
    if item.price < Decimal::ZERO {
        return Err(StoreError::InvalidItem(format!(
            "price must be non-negative, got {}",
            item.price
        )));
    }
    if item.price > MAX_PRICE {
        return Err(StoreError::InvalidItem(format!(
            "price exceeds maximum allowed ({}), got {}",
            MAX_PRICE, item.price
        )));
    }
    if item.quantity <= 0 {
        return Err(StoreError::InvalidItem(format!(
            "quantity must be positive, got {}",
            item.quantity
        )));
    }
    if item.quantity > MAX_QUANTITY {
        return Err(StoreError::InvalidItem(format!(
            "quantity exceeds maximum allowed ({}), got {}",
            MAX_QUANTITY, item.quantity
        )));
    }
    if item.name.trim().is_empty() {
        return Err(StoreError::InvalidItem("item name must not be empty".to_string()));
    }
    Ok(())
}

/// Calculate order totals from the item list and discount policy
///
/// Pure function; the discount inputs are assumed pre-validated via
/// `validate_discount`.
///
/// 1. subtotal = Σ(price × quantity), zero for an empty order
/// 2. discount: flat amount, or percentage of subtotal
/// 3. discounted base = max(0, subtotal - discount)
/// 4. tax and service charge apply to the discounted base
/// 5. total = base + tax + service charge
pub fn calculate_totals(
    items: &[OrderItem],
    discount: Decimal,
    discount_type: DiscountType,
    rates: &ChargeRates,
) -> OrderTotals {
    let subtotal: Decimal = items
        .iter()
        .map(|item| item.price * Decimal::from(item.quantity))
        .sum();

    let requested_discount = match discount_type {
        DiscountType::Flat => discount,
        DiscountType::Percentage => subtotal * discount / Decimal::ONE_HUNDRED,
    };

    // Discount can never drive the base negative
    let discounted_base = (subtotal - requested_discount).max(Decimal::ZERO);
    let discount_amount = subtotal - discounted_base;

    let tax = discounted_base * rates.tax_rate_percent / Decimal::ONE_HUNDRED;
    let service_charge = discounted_base * rates.service_charge_percent / Decimal::ONE_HUNDRED;
    let total = discounted_base + tax + service_charge;

    OrderTotals {
        subtotal,
        discount_amount,
        tax,
        service_charge,
        total,
    }
}
