// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::catalog::LoanCatalog;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(catalog: &LoanCatalog, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    if maybe_print_json(json_flag, &catalog.currencies)? {
        return Ok(());
    }

    let rows = catalog
        .currencies
        .iter()
        .map(|c| vec![c.code.clone(), c.symbol.clone(), c.name.clone()])
        .collect();
    println!("{}", pretty_table(&["Code", "Symbol", "Name"], rows));
    Ok(())
}
