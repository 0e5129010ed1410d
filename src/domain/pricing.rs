use serde::{Deserialize, Serialize};

use crate::domain::errors::PricingError;

// Commission and delivery policy applied to every checkout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub commission_rate: i64,
    pub delivery_fee: i64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            commission_rate: 0,
            delivery_fee: 100,
        }
    }
}

impl PricingConfig {
    pub fn validate(&self) -> Result<(), PricingError> {
        non_negative("commission_rate", self.commission_rate)?;
        non_negative("delivery_fee", self.delivery_fee)?;
        Ok(())
    }
}

// Total charged at checkout: base price plus commission plus delivery fee.
// Negative inputs are rejected instead of producing a negative total.
pub fn compute_total(
    base_price: i64,
    commission_rate: i64,
    delivery_fee: i64,
) -> Result<i64, PricingError> {
    non_negative("base_price", base_price)?;
    non_negative("commission_rate", commission_rate)?;
    non_negative("delivery_fee", delivery_fee)?;

    base_price
        .checked_add(commission_rate)
        .and_then(|sum| sum.checked_add(delivery_fee))
        .ok_or(PricingError::Overflow)
}

fn non_negative(field: &'static str, value: i64) -> Result<(), PricingError> {
    if value < 0 {
        return Err(PricingError::NegativeInput { field, value });
    }
    Ok(())
}

// One checkout computation. The total is always derived, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CheckoutQuote {
    base_price: i64,
    commission_rate: i64,
    delivery_fee: i64,
}

impl CheckoutQuote {
    pub fn new(base_price: i64, pricing: &PricingConfig) -> Result<Self, PricingError> {
        // Validate once up front so total() cannot fail afterwards.
        compute_total(base_price, pricing.commission_rate, pricing.delivery_fee)?;
        Ok(Self {
            base_price,
            commission_rate: pricing.commission_rate,
            delivery_fee: pricing.delivery_fee,
        })
    }

    pub fn base_price(&self) -> i64 {
        self.base_price
    }

    pub fn commission_rate(&self) -> i64 {
        self.commission_rate
    }

    pub fn delivery_fee(&self) -> i64 {
        self.delivery_fee
    }

    pub fn total(&self) -> i64 {
        self.base_price + self.commission_rate + self.delivery_fee
    }
}
