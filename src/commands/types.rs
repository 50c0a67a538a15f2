// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::catalog::LoanCatalog;
use crate::utils::{group_digits, maybe_print_json, pretty_table};

pub fn handle(catalog: &LoanCatalog, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    if maybe_print_json(json_flag, &catalog.types)? {
        return Ok(());
    }

    let rows = catalog
        .types
        .iter()
        .map(|(key, p)| {
            vec![
                key.clone(),
                p.name.clone(),
                format!("{}%", p.default_rate),
                group_digits(&format!("{:.0}", p.max_amount)),
                format!("{} yrs", p.max_tenure),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Key", "Name", "Default rate", "Max amount", "Max tenure"],
            rows
        )
    );
    Ok(())
}
