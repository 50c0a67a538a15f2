// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use loanclip::{catalog, cli, commands};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let cat = catalog::load_or_builtin()?;

    match matches.subcommand() {
        Some(("calc", sub)) => commands::calc::handle(&cat, sub)?,
        Some(("types", sub)) => commands::types::handle(&cat, sub)?,
        Some(("currencies", sub)) => commands::currencies::handle(&cat, sub)?,
        Some(("catalog", sub)) => commands::catalog::handle(sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
