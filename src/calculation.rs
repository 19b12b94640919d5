//! Calculation request sent to the optimization backend
//!
//! Built from the wizard's answers: the chosen models, the selected symbols
//! and the current scoring weights.

use crate::error::{Error, Result};
use crate::models::ModelId;
use crate::weights::{WeightKey, WeightsMap, DEFAULT_WEIGHT};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub models: Vec<ModelId>,
    pub symbols: Vec<String>,
    pub risk_weight: f64,
    pub esg_weight: f64,
}

impl CalculationRequest {
    pub fn from_selection<S: AsRef<str>>(
        models: &[ModelId],
        symbols: &[S],
        weights: &WeightsMap,
    ) -> Result<Self> {
        let mut unique_models = Vec::with_capacity(models.len());
        for model in models {
            if !unique_models.contains(model) {
                unique_models.push(*model);
            }
        }

        let mut unique_symbols: Vec<String> = Vec::with_capacity(symbols.len());
        for symbol in symbols {
            let symbol = symbol.as_ref().trim().to_uppercase();
            if !symbol.is_empty() && !unique_symbols.contains(&symbol) {
                unique_symbols.push(symbol);
            }
        }

        if unique_models.is_empty() {
            return Err(Error::EmptySelection("no model selected"));
        }
        if unique_symbols.is_empty() {
            return Err(Error::EmptySelection("no symbol selected"));
        }

        Ok(Self {
            models: unique_models,
            symbols: unique_symbols,
            risk_weight: weight_or_default(weights, &WeightKey::risk()),
            esg_weight: weight_or_default(weights, &WeightKey::esg()),
        })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

fn weight_or_default(weights: &WeightsMap, key: &WeightKey) -> f64 {
    weights.get(key).unwrap_or_else(|| {
        tracing::debug!(%key, default = DEFAULT_WEIGHT, "weight not set, using backend default");
        DEFAULT_WEIGHT
    })
}
