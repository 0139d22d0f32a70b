//! Restaurant-wide charge settings
//!
//! Supplied by the settings provider (config in this deployment) and
//! consumed by the totals calculator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Tax and service charge rates, in percent
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChargeRates {
    /// e.g. 8.5 for 8.5% tax on the discounted base
    pub tax_rate_percent: Decimal,
    /// e.g. 10 for a 10% service charge on the discounted base
    pub service_charge_percent: Decimal,
}

impl Default for ChargeRates {
    fn default() -> Self {
        Self {
            tax_rate_percent: Decimal::ZERO,
            service_charge_percent: Decimal::ZERO,
        }
    }
}
