// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command};

fn json_flag() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print as pretty JSON")
}

pub fn build_cli() -> Command {
    Command::new("loanclip")
        .version(clap::crate_version!())
        .about("Loan EMI calculator with loan-type profiles and currency labels")
        .subcommand(
            Command::new("calc")
                .about("Compute the monthly installment and aggregate totals")
                .arg(
                    Arg::new("principal")
                        .long("principal")
                        .short('p')
                        .required(true)
                        .help("Loan amount; grouping separators are ignored"),
                )
                .arg(
                    Arg::new("rate")
                        .long("rate")
                        .short('r')
                        .help("Annual interest rate in percent; defaults from --type"),
                )
                .arg(
                    Arg::new("tenure")
                        .long("tenure")
                        .short('t')
                        .required(true)
                        .help("Tenure in years; fractions allowed"),
                )
                .arg(
                    Arg::new("type")
                        .long("type")
                        .help("Loan-type profile key (personal|home|car with the built-in catalog)"),
                )
                .arg(
                    Arg::new("currency")
                        .long("currency")
                        .default_value("INR")
                        .help("Currency label for display"),
                )
                .arg(
                    Arg::new("out")
                        .long("out")
                        .value_name("FILE")
                        .help("Write the result to FILE instead of stdout"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("csv")
                        .help("File format for --out (csv|json)"),
                )
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("types")
                .about("List loan-type profiles")
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("currencies")
                .about("List currency labels")
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("catalog")
                .about("Manage the loan-type/currency catalog file")
                .subcommand(Command::new("path").about("Print the catalog file location"))
                .subcommand(
                    Command::new("init").about("Write the built-in catalog out for editing"),
                ),
        )
}
