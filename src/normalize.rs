// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::InvalidInput;
use crate::models::LoanParameters;
use once_cell::sync::Lazy;
use regex::Regex;

static NON_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9]").unwrap());

/// Strip every character that is not an ASCII digit. Idempotent, so
/// grouping separators inserted by a display layer round-trip losslessly
/// back to the bare digit string. Loan amounts are whole units; signs and
/// decimal points are not interpreted here.
pub fn normalize_principal_text(raw: &str) -> String {
    NON_DIGIT.replace_all(raw, "").into_owned()
}

fn parse_finite(text: &str) -> Result<f64, InvalidInput> {
    let v = text
        .trim()
        .parse::<f64>()
        .map_err(|_| InvalidInput::NotANumber(text.to_string()))?;
    // "inf" and "NaN" parse successfully but are not usable amounts.
    if !v.is_finite() {
        return Err(InvalidInput::NotANumber(text.to_string()));
    }
    Ok(v)
}

/// Parse the three input fields into validated `LoanParameters`.
///
/// Principal and tenure must be strictly positive; a rate of exactly zero
/// is accepted as a valid interest-free loan. A plain truthiness check
/// would get that wrong in both directions.
pub fn parse_parameters(
    principal_text: &str,
    rate_percent_text: &str,
    term_years_text: &str,
) -> Result<LoanParameters, InvalidInput> {
    let principal = parse_finite(principal_text)?;
    let annual_rate_percent = parse_finite(rate_percent_text)?;
    let term_years = parse_finite(term_years_text)?;

    if principal <= 0.0 {
        return Err(InvalidInput::NotPositive("loan amount"));
    }
    if annual_rate_percent < 0.0 {
        return Err(InvalidInput::NegativeRate);
    }
    if term_years <= 0.0 {
        return Err(InvalidInput::NotPositive("tenure"));
    }

    Ok(LoanParameters {
        principal,
        annual_rate_percent,
        term_years,
    })
}
