// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use loanclip::engine::compute;
use loanclip::error::InvalidInput;
use loanclip::models::LoanParameters;

fn params(principal: f64, rate: f64, years: f64) -> LoanParameters {
    LoanParameters {
        principal,
        annual_rate_percent: rate,
        term_years: years,
    }
}

#[test]
fn two_year_personal_loan() {
    // P=500000 at 10.5% over 24 months: r=0.00875
    let r = compute(&params(500_000.0, 10.5, 2.0)).unwrap();
    assert!((r.periodic_payment - 23_188.02).abs() < 0.01);
    assert!((r.total_payment - 556_512.50).abs() < 0.01);
    assert!((r.total_interest - 56_512.50).abs() < 0.01);
}

#[test]
fn zero_rate_is_straight_division() {
    let r = compute(&params(1_000_000.0, 0.0, 5.0)).unwrap();
    assert_eq!(r.periodic_payment, 1_000_000.0 / 60.0);
    assert_eq!(r.total_interest, 0.0);
    assert_eq!(r.total_payment, 1_000_000.0);
}

#[test]
fn zero_rate_with_fractional_tenure() {
    // 2.5 years -> 30 periods, fractional tenures substitute directly
    let r = compute(&params(90_000.0, 0.0, 2.5)).unwrap();
    assert_eq!(r.periodic_payment, 3_000.0);
    assert_eq!(r.total_payment, 90_000.0);
}

#[test]
fn personal_loan_at_profile_cap_is_finite() {
    // Personal-loan default: 2,000,000 at 12.5% over 5 years
    let r = compute(&params(2_000_000.0, 12.5, 5.0)).unwrap();
    assert!(r.is_finite());
    assert!(r.total_payment > 2_000_000.0);
    assert!(r.total_interest > 0.0);
}

#[test]
fn totals_are_consistent_with_payment() {
    for rate in [0.5, 7.25, 12.0, 18.0] {
        let p = params(750_000.0, rate, 3.5);
        let n = p.term_years * 12.0;
        let r = compute(&p).unwrap();
        let rel = (r.total_payment - r.periodic_payment * n).abs() / r.total_payment;
        assert!(rel < 1e-9, "rate {}: rel error {}", rate, rel);
        let rel = (r.total_interest - (r.total_payment - p.principal)).abs() / r.total_payment;
        assert!(rel < 1e-9, "rate {}: rel error {}", rate, rel);
    }
}

#[test]
fn payment_grows_with_rate() {
    let mut last_payment = 0.0;
    let mut last_interest = -1.0;
    for rate in [0.0, 4.0, 8.0, 12.0, 16.0] {
        let r = compute(&params(600_000.0, rate, 4.0)).unwrap();
        assert!(
            r.periodic_payment > last_payment,
            "payment not increasing at rate {}",
            rate
        );
        assert!(
            r.total_interest > last_interest,
            "interest not increasing at rate {}",
            rate
        );
        last_payment = r.periodic_payment;
        last_interest = r.total_interest;
    }
}

#[test]
fn non_positive_tenure_is_rejected() {
    // The normalizer should never let these through; the engine still
    // refuses to divide by a non-positive period count.
    let err = compute(&params(1_000.0, 5.0, 0.0)).unwrap_err();
    assert_eq!(err, InvalidInput::NotPositive("tenure"));
    let err = compute(&params(1_000.0, 5.0, -1.0)).unwrap_err();
    assert_eq!(err, InvalidInput::NotPositive("tenure"));
}

#[test]
fn overflow_is_reported_not_displayed() {
    // (1+r)^n overflows to infinity, which must surface as an error
    let err = compute(&params(1e308, 100.0, 1e6)).unwrap_err();
    assert_eq!(err, InvalidInput::NotFinite);
}
