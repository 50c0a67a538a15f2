// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::InvalidInput;
use crate::models::{AmortizationResult, LoanParameters};

/// Reducing-balance amortization over monthly periods.
///
/// `EMI = P * r * (1+r)^n / ((1+r)^n - 1)` with `r` the monthly fractional
/// rate and `n = term_years * 12`. A fractional tenure yields a fractional
/// `n`, substituted directly into the formula rather than rounded.
///
/// Pure and synchronous: no I/O, no shared state, constant time. Callers
/// re-invoke it on every input change instead of caching.
pub fn compute(params: &LoanParameters) -> Result<AmortizationResult, InvalidInput> {
    let p = params.principal;
    let n = params.term_years * 12.0;
    if !n.is_finite() || n <= 0.0 {
        return Err(InvalidInput::NotPositive("tenure"));
    }
    let r = params.annual_rate_percent / 12.0 / 100.0;

    let result = if r == 0.0 {
        // Interest-free loan. The general formula is 0/0 here, so the
        // degenerate case gets its own branch.
        AmortizationResult {
            periodic_payment: p / n,
            total_interest: 0.0,
            total_payment: p,
        }
    } else {
        let growth = (1.0 + r).powf(n);
        let payment = p * r * growth / (growth - 1.0);
        let total = payment * n;
        AmortizationResult {
            periodic_payment: payment,
            total_interest: total - p,
            total_payment: total,
        }
    };

    // Overflow to infinity (and the NaN it breeds) is reported as invalid
    // input, never displayed.
    if !result.is_finite() {
        return Err(InvalidInput::NotFinite);
    }
    Ok(result)
}
