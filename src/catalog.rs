// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::{CurrencyLabel, LoanTypeProfile};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Loanclip", "loanclip"));

/// Loan-type profiles and currency labels. Configuration data, not logic:
/// the calculation core reads catalogs that are handed to it, so new loan
/// types can be added by editing the JSON file without touching code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanCatalog {
    pub types: BTreeMap<String, LoanTypeProfile>,
    pub currencies: Vec<CurrencyLabel>,
}

impl LoanCatalog {
    /// Catalog shipped with the binary, used when no catalog file exists.
    pub fn builtin() -> Self {
        let mut types = BTreeMap::new();
        types.insert(
            "personal".to_string(),
            LoanTypeProfile {
                name: "Personal Loan".to_string(),
                default_rate: 12.5,
                max_amount: 2_000_000.0,
                max_tenure: 5.0,
            },
        );
        types.insert(
            "home".to_string(),
            LoanTypeProfile {
                name: "Home Loan".to_string(),
                default_rate: 8.5,
                max_amount: 10_000_000.0,
                max_tenure: 30.0,
            },
        );
        types.insert(
            "car".to_string(),
            LoanTypeProfile {
                name: "Car Loan".to_string(),
                default_rate: 9.5,
                max_amount: 3_000_000.0,
                max_tenure: 7.0,
            },
        );
        let currencies = vec![
            CurrencyLabel {
                code: "INR".to_string(),
                symbol: "₹".to_string(),
                name: "Indian Rupee".to_string(),
            },
            CurrencyLabel {
                code: "USD".to_string(),
                symbol: "$".to_string(),
                name: "US Dollar".to_string(),
            },
            CurrencyLabel {
                code: "EUR".to_string(),
                symbol: "€".to_string(),
                name: "Euro".to_string(),
            },
            CurrencyLabel {
                code: "GBP".to_string(),
                symbol: "£".to_string(),
                name: "British Pound".to_string(),
            },
        ];
        Self { types, currencies }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Read catalog at {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Invalid catalog JSON at {}", path.display()))
    }

    pub fn profile(&self, key: &str) -> Result<&LoanTypeProfile> {
        self.types
            .get(key)
            .with_context(|| format!("Loan type '{}' not found in catalog", key))
    }

    pub fn currency(&self, code: &str) -> Result<&CurrencyLabel> {
        let code = code.to_uppercase();
        self.currencies
            .iter()
            .find(|c| c.code == code)
            .with_context(|| format!("Currency '{}' not found in catalog", code))
    }
}

pub fn catalog_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific config dir")?;
    let config_dir = proj.config_dir();
    fs::create_dir_all(config_dir).context("Failed to create config dir")?;
    Ok(config_dir.join("catalog.json"))
}

/// User catalog if one has been written, built-in tables otherwise.
pub fn load_or_builtin() -> Result<LoanCatalog> {
    let path = catalog_path()?;
    if path.exists() {
        LoanCatalog::from_path(&path)
    } else {
        Ok(LoanCatalog::builtin())
    }
}

/// Materialize the built-in catalog as JSON so users can edit it.
pub fn write_builtin(path: &Path) -> Result<()> {
    let body = serde_json::to_string_pretty(&LoanCatalog::builtin())?;
    fs::write(path, body).with_context(|| format!("Write catalog to {}", path.display()))?;
    Ok(())
}
