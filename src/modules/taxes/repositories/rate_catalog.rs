use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::core::{AppError, Result};
use crate::modules::taxes::models::TaxRateSpec;

/// Read-only source of tax rates keyed by classification code
pub trait RateCatalog: Send + Sync {
    /// Rate for a code, or `None` if the code is not in the catalog
    fn lookup_rate(&self, classification_code: &str) -> Option<TaxRateSpec>;

    /// All rates, ordered by code
    fn list_rates(&self) -> Vec<TaxRateSpec>;
}

/// Catalog file layout
#[derive(Debug, Deserialize)]
struct CatalogFile {
    rates: Vec<TaxRateSpec>,
}

const BUILTIN_CATALOG: &str = include_str!("../../../../data/hsn_rates.yaml");

/// Rate catalog held in memory, loaded once at start-up
#[derive(Debug, Clone, Default)]
pub struct InMemoryRateCatalog {
    rates: HashMap<String, TaxRateSpec>,
}

impl InMemoryRateCatalog {
    /// Build from a list of rates; a repeated code is a configuration error
    pub fn from_rates(rates: Vec<TaxRateSpec>) -> Result<Self> {
        let mut by_code = HashMap::with_capacity(rates.len());

        for rate in rates {
            if rate.code.trim().is_empty() {
                return Err(AppError::Configuration(
                    "Rate catalog entry has an empty code".to_string(),
                ));
            }

            if !rate.is_rate_in_range() {
                return Err(AppError::Configuration(format!(
                    "Rate catalog entry {} has GST rate {} outside 0-100",
                    rate.code, rate.gst_rate
                )));
            }

            if !rate.is_consistent() {
                tracing::warn!(
                    code = %rate.code,
                    gst_rate = %rate.gst_rate,
                    cgst_rate = %rate.cgst_rate,
                    sgst_rate = %rate.sgst_rate,
                    igst_rate = %rate.igst_rate,
                    "Stored component rates disagree with combined rate; combined rate will be used"
                );
            }

            if let Some(previous) = by_code.insert(rate.code.clone(), rate) {
                return Err(AppError::Configuration(format!(
                    "Duplicate rate catalog code: {}",
                    previous.code
                )));
            }
        }

        Ok(Self { rates: by_code })
    }

    /// Parse a YAML catalog document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let file: CatalogFile = serde_yaml::from_str(yaml)?;
        Self::from_rates(file.rates)
    }

    /// Load a YAML catalog from disk
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|e| {
            AppError::Configuration(format!(
                "Failed to read rate catalog {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml_str(&yaml)
    }

    /// The catalog shipped with the service
    pub fn builtin() -> Result<Self> {
        Self::from_yaml_str(BUILTIN_CATALOG)
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl RateCatalog for InMemoryRateCatalog {
    fn lookup_rate(&self, classification_code: &str) -> Option<TaxRateSpec> {
        self.rates.get(classification_code).cloned()
    }

    fn list_rates(&self) -> Vec<TaxRateSpec> {
        let mut rates: Vec<TaxRateSpec> = self.rates.values().cloned().collect();
        rates.sort_by(|a, b| a.code.cmp(&b.code));
        rates
    }
}
