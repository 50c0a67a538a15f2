// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{anyhow, Result};
use serde_json::json;

use crate::catalog::LoanCatalog;
use crate::engine;
use crate::models::{AmortizationResult, LoanParameters};
use crate::normalize;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

pub fn handle(catalog: &LoanCatalog, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");

    let principal_text =
        normalize::normalize_principal_text(m.get_one::<String>("principal").unwrap());
    let profile = match m.get_one::<String>("type") {
        Some(key) => Some(catalog.profile(key)?),
        None => None,
    };
    // Prefill the rate from the loan-type profile when none was typed,
    // exactly like the rate field in an interactive form.
    let rate_text = match m.get_one::<String>("rate") {
        Some(r) => r.clone(),
        None => profile
            .map(|p| p.prefill_rate().to_string())
            .ok_or_else(|| anyhow!("Provide --rate, or --type to use the profile default"))?,
    };
    let tenure_text = m.get_one::<String>("tenure").unwrap();

    let params = normalize::parse_parameters(&principal_text, &rate_text, tenure_text)?;
    let result = engine::compute(&params)?;
    let ccy = catalog.currency(m.get_one::<String>("currency").unwrap())?;

    if let Some(out) = m.get_one::<String>("out") {
        let fmt = m.get_one::<String>("format").unwrap().to_lowercase();
        write_out(out, &fmt, &params, &result, &ccy.code)?;
        return Ok(());
    }

    if !maybe_print_json(json_flag, &report(&params, &result, &ccy.code))? {
        let rows = vec![
            vec!["Loan amount".to_string(), fmt_money(params.principal, ccy)],
            vec![
                "Interest rate".to_string(),
                format!("{}% p.a.", params.annual_rate_percent),
            ],
            vec!["Tenure".to_string(), format!("{} years", params.term_years)],
            vec![
                "Monthly EMI".to_string(),
                fmt_money(result.periodic_payment, ccy),
            ],
            vec![
                "Total interest".to_string(),
                fmt_money(result.total_interest, ccy),
            ],
            vec![
                "Total payment".to_string(),
                fmt_money(result.total_payment, ccy),
            ],
        ];
        println!("{}", pretty_table(&["Field", "Value"], rows));
    }
    Ok(())
}

fn report(params: &LoanParameters, result: &AmortizationResult, ccy_code: &str) -> serde_json::Value {
    json!({
        "principal": params.principal,
        "annual_rate_percent": params.annual_rate_percent,
        "term_years": params.term_years,
        "currency": ccy_code,
        "monthly_payment": result.periodic_payment,
        "total_interest": result.total_interest,
        "total_payment": result.total_payment,
    })
}

fn write_out(
    out: &str,
    fmt: &str,
    params: &LoanParameters,
    result: &AmortizationResult,
    ccy_code: &str,
) -> Result<()> {
    match fmt {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "principal",
                "annual_rate_percent",
                "term_years",
                "currency",
                "monthly_payment",
                "total_interest",
                "total_payment",
            ])?;
            wtr.write_record([
                params.principal.to_string(),
                params.annual_rate_percent.to_string(),
                params.term_years.to_string(),
                ccy_code.to_string(),
                format!("{:.2}", result.periodic_payment),
                format!("{:.2}", result.total_interest),
                format!("{:.2}", result.total_payment),
            ])?;
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(
                out,
                serde_json::to_string_pretty(&report(params, result, ccy_code))?,
            )?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
            return Ok(());
        }
    }
    println!("Saved result to {}", out);
    Ok(())
}
