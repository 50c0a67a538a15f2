// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod engine;
pub mod error;
pub mod models;
pub mod normalize;
pub mod utils;
