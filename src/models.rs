// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::{Deserialize, Serialize};

/// Validated inputs for one EMI calculation. Invariants are enforced by
/// `normalize::parse_parameters`: principal and term strictly positive,
/// rate non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanParameters {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub term_years: f64,
}

/// Catalog entry for a class of loan (personal, home, car, ...). Supplies
/// the default rate and the input bounds for that class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanTypeProfile {
    pub name: String,
    pub default_rate: f64,
    pub max_amount: f64,
    pub max_tenure: f64,
}

impl LoanTypeProfile {
    /// Rate used to prefill the rate field when the user picks this type.
    /// The parse step still re-validates downstream.
    pub fn prefill_rate(&self) -> f64 {
        self.default_rate
    }

    /// Cap a slider-style value at the profile maximum. Amounts typed as
    /// free text are never clamped and may exceed `max_amount`.
    pub fn clamp_amount(&self, value: f64) -> f64 {
        value.min(self.max_amount)
    }
}

/// Display metadata only. Currency never enters the arithmetic; the engine
/// works on dimensionless amounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyLabel {
    pub code: String,
    pub symbol: String,
    pub name: String,
}

/// Aggregate totals for a loan, fully determined by `LoanParameters`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationResult {
    pub periodic_payment: f64,
    pub total_interest: f64,
    pub total_payment: f64,
}

impl AmortizationResult {
    pub fn is_finite(&self) -> bool {
        self.periodic_payment.is_finite()
            && self.total_interest.is_finite()
            && self.total_payment.is_finite()
    }
}
