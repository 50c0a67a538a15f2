// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// The single failure kind the calculation core reports. Every case is
/// recoverable by the caller re-prompting for input; the core never panics
/// on malformed text and never lets NaN/Infinity reach a caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("'{0}' is not a valid number")]
    NotANumber(String),
    #[error("{0} must be greater than zero")]
    NotPositive(&'static str),
    #[error("interest rate cannot be negative")]
    NegativeRate,
    #[error("calculation did not produce finite amounts")]
    NotFinite,
}
