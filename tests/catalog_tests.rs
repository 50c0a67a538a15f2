// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use loanclip::catalog::{write_builtin, LoanCatalog};
use tempfile::tempdir;

#[test]
fn builtin_catalog_matches_documented_defaults() {
    let cat = LoanCatalog::builtin();
    assert_eq!(cat.types.len(), 3);

    let personal = cat.profile("personal").unwrap();
    assert_eq!(personal.default_rate, 12.5);
    assert_eq!(personal.max_amount, 2_000_000.0);
    assert_eq!(personal.max_tenure, 5.0);

    let home = cat.profile("home").unwrap();
    assert_eq!(home.default_rate, 8.5);
    assert_eq!(home.max_amount, 10_000_000.0);
    assert_eq!(home.max_tenure, 30.0);

    let car = cat.profile("car").unwrap();
    assert_eq!(car.default_rate, 9.5);
    assert_eq!(car.max_amount, 3_000_000.0);
    assert_eq!(car.max_tenure, 7.0);

    assert_eq!(cat.currencies.len(), 4);
    let inr = cat.currency("INR").unwrap();
    assert_eq!(inr.symbol, "₹");
    assert_eq!(inr.name, "Indian Rupee");
}

#[test]
fn currency_lookup_is_case_insensitive() {
    let cat = LoanCatalog::builtin();
    assert_eq!(cat.currency("usd").unwrap().symbol, "$");
    assert!(cat.currency("XYZ").is_err());
}

#[test]
fn unknown_profile_is_an_error() {
    let cat = LoanCatalog::builtin();
    let err = cat.profile("boat").unwrap_err();
    assert!(err.to_string().contains("boat"));
}

#[test]
fn catalog_file_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    write_builtin(&path).unwrap();

    let loaded = LoanCatalog::from_path(&path).unwrap();
    assert_eq!(loaded.profile("home").unwrap().default_rate, 8.5);
    assert_eq!(loaded.currencies.len(), 4);
}

#[test]
fn user_catalog_can_extend_the_builtin_types() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(
        &path,
        r#"{
            "types": {
                "education": {
                    "name": "Education Loan",
                    "default_rate": 10.0,
                    "max_amount": 4000000.0,
                    "max_tenure": 15.0
                }
            },
            "currencies": [
                { "code": "INR", "symbol": "₹", "name": "Indian Rupee" }
            ]
        }"#,
    )
    .unwrap();

    let loaded = LoanCatalog::from_path(&path).unwrap();
    let edu = loaded.profile("education").unwrap();
    assert_eq!(edu.prefill_rate(), 10.0);
    assert_eq!(edu.clamp_amount(5_000_000.0), 4_000_000.0);
}

#[test]
fn malformed_catalog_is_a_contextual_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = LoanCatalog::from_path(&path).unwrap_err();
    assert!(err.to_string().contains("catalog"));
}
