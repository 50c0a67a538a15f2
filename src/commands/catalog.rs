// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::catalog;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("path", _)) => {
            println!("{}", catalog::catalog_path()?.display());
        }
        Some(("init", _)) => {
            let path = catalog::catalog_path()?;
            catalog::write_builtin(&path)?;
            println!("Catalog written to {}", path.display());
        }
        _ => {}
    }
    Ok(())
}
