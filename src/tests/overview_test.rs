//! Tests for the overview step layout
//!
//! Tests cover:
//! - Section headings and order
//! - Default model selection
//! - Pass-through of the weights snapshot and updater
//! - Layout stability across weight changes
//! - Missing weights

use super::super::overview::*;
use super::super::weights::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn counting_updater() -> (WeightUpdater, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let updater = WeightUpdater::new(move |_, _| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    (updater, calls)
}

fn weights(risk: f64, esg: f64) -> WeightsMap {
    WeightsMap::from_pairs([(WeightKey::RISK, risk), (WeightKey::ESG, esg)])
}

// ============================================================================
// STRUCTURE TESTS
// ============================================================================

#[test]
fn test_headings_in_fixed_order() {
    let layout = overview_layout(&weights(0.3, 0.5), &WeightUpdater::noop());
    assert_eq!(
        layout.headings(),
        vec!["Selected Symbols:", "Answers:", "Models:"]
    );
}

#[test]
fn test_answers_section_has_text_and_slider_row() {
    let layout = overview_layout(&weights(0.3, 0.5), &WeightUpdater::noop());
    let answers = &layout.sections[1];

    assert_eq!(answers.description, Some(ANSWERS_TEXT));
    match &answers.body {
        SectionBody::Row(nodes) => {
            assert_eq!(nodes.len(), 2);
            assert!(nodes.iter().all(|n| matches!(n, WidgetNode::WeightSlider(_))));
        }
        SectionBody::Widget(_) => panic!("sliders should share one container"),
    }
}

#[test]
fn test_symbol_section_holds_symbol_collection() {
    let layout = overview_layout(&weights(0.3, 0.5), &WeightUpdater::noop());
    assert!(matches!(
        layout.sections[0].body,
        SectionBody::Widget(WidgetNode::SymbolCollection)
    ));
    assert!(layout.sections[0].description.is_none());
}

#[test]
fn test_sliders_bound_to_risk_then_esg() {
    let layout = overview_layout(&weights(0.3, 0.5), &WeightUpdater::noop());
    let keys: Vec<&str> = layout
        .weight_sliders()
        .iter()
        .map(|p| p.key_weight.as_str())
        .collect();
    assert_eq!(keys, vec!["risk_weight", "esg_weight"]);
}

#[test]
fn test_widget_order() {
    let layout = overview_layout(&weights(0.3, 0.5), &WeightUpdater::noop());
    let kinds: Vec<&str> = layout.widgets().map(WidgetNode::kind).collect();
    assert_eq!(
        kinds,
        vec!["symbol-collection", "weight-slider", "weight-slider", "model-selection"]
    );
}

// ============================================================================
// PROPS TESTS
// ============================================================================

#[test]
fn test_default_models_fixed() {
    for w in [weights(0.0, 0.0), weights(0.9, 0.1), WeightsMap::new()] {
        let layout = overview_layout(&w, &WeightUpdater::noop());
        let models = layout.model_selection().expect("model selection present");
        assert_eq!(models.default_model_ids(), vec!["osqp", "qio"]);
    }
}

#[test]
fn test_sliders_receive_same_handles() {
    let w = weights(0.3, 0.5);
    let (updater, _) = counting_updater();
    let layout = overview_layout(&w, &updater);

    for props in layout.weight_sliders() {
        assert!(props.weights.ptr_eq(&w));
        assert!(props.set_weights.ptr_eq(&updater));
    }
}

#[test]
fn test_layout_never_calls_updater() {
    let (updater, calls) = counting_updater();
    let layout = overview_layout(&weights(0.3, 0.5), &updater);
    let _ = layout.outline();
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_slider_request_goes_through_updater() {
    let (updater, calls) = counting_updater();
    let layout = overview_layout(&weights(0.3, 0.5), &updater);

    layout.weight_sliders()[0].request(0.4);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

// ============================================================================
// RE-RENDER TESTS
// ============================================================================

#[test]
fn test_outline_unchanged_when_weights_change() {
    let updater = WeightUpdater::noop();
    let before = overview_layout(&weights(0.3, 0.5), &updater);
    let after = overview_layout(&weights(0.7, 0.5), &updater);

    assert_eq!(before.outline(), after.outline());
    assert_eq!(before.weight_sliders()[0].current_value(), Some(0.3));
    assert_eq!(after.weight_sliders()[0].current_value(), Some(0.7));
}

#[test]
fn test_empty_weights_build_layout() {
    let layout = overview_layout(&WeightsMap::new(), &WeightUpdater::noop());

    assert_eq!(layout.headings().len(), 3);
    assert!(layout
        .weight_sliders()
        .iter()
        .all(|p| p.current_value().is_none()));
}

#[test]
fn test_outline_content() {
    let layout = overview_layout(&weights(0.3, 0.5), &WeightUpdater::noop());
    let outline = layout.outline();

    assert_eq!(outline[0], "heading Selected Symbols:");
    assert_eq!(outline[1], "symbol-collection");
    assert!(outline.contains(&"row".to_string()));
    assert!(outline.contains(&"  weight-slider [risk_weight]".to_string()));
    assert_eq!(
        outline.last().map(String::as_str),
        Some("model-selection [\"osqp\", \"qio\"]")
    );
}
