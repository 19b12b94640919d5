//! Unit tests for calculation requests

use super::super::calculation::*;
use super::super::error::Error;
use super::super::models::{ModelId, DEFAULT_MODELS};
use super::super::weights::{WeightKey, WeightsMap, DEFAULT_WEIGHT};
use serde_json::json;

#[test]
fn test_request_from_weights() {
    let weights = WeightsMap::from_pairs([(WeightKey::RISK, 0.3), (WeightKey::ESG, 0.6)]);
    let request = CalculationRequest::from_selection(&DEFAULT_MODELS, &["AAPL", "MSFT"], &weights)
        .unwrap();

    assert_eq!(request.models, vec![ModelId::Osqp, ModelId::Qio]);
    assert_eq!(request.symbols, vec!["AAPL", "MSFT"]);
    assert_eq!(request.risk_weight, 0.3);
    assert_eq!(request.esg_weight, 0.6);
}

#[test]
fn test_missing_weights_use_backend_default() {
    let request =
        CalculationRequest::from_selection(&[ModelId::Osqp], &["AAPL"], &WeightsMap::new())
            .unwrap();
    assert_eq!(request.risk_weight, DEFAULT_WEIGHT);
    assert_eq!(request.esg_weight, DEFAULT_WEIGHT);
}

#[test]
fn test_dedup_and_normalize() {
    let request = CalculationRequest::from_selection(
        &[ModelId::Qio, ModelId::Osqp, ModelId::Qio],
        &[" aapl", "AAPL", "", "tsla "],
        &WeightsMap::new(),
    )
    .unwrap();

    assert_eq!(request.models, vec![ModelId::Qio, ModelId::Osqp]);
    assert_eq!(request.symbols, vec!["AAPL", "TSLA"]);
}

#[test]
fn test_empty_models_rejected() {
    let err = CalculationRequest::from_selection(&[], &["AAPL"], &WeightsMap::new()).unwrap_err();
    assert!(matches!(err, Error::EmptySelection(_)));
}

#[test]
fn test_blank_symbols_rejected() {
    let err = CalculationRequest::from_selection(&DEFAULT_MODELS, &["  "], &WeightsMap::new())
        .unwrap_err();
    assert!(matches!(err, Error::EmptySelection("no symbol selected")));
}

#[test]
fn test_json_payload() {
    let weights = WeightsMap::from_pairs([(WeightKey::RISK, 0.5), (WeightKey::ESG, 0.25)]);
    let request =
        CalculationRequest::from_selection(&DEFAULT_MODELS, &["AAPL"], &weights).unwrap();

    let value: serde_json::Value = serde_json::from_str(&request.to_json().unwrap()).unwrap();
    assert_eq!(
        value,
        json!({
            "models": ["osqp", "qio"],
            "symbols": ["AAPL"],
            "risk_weight": 0.5,
            "esg_weight": 0.25
        })
    );
}
