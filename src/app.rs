//! Preview window for the overview step
//!
//! Stands in for the wizard's parent: it owns the weights, hands the
//! overview step a snapshot plus an updater, and re-renders when the
//! snapshot changes.

use crate::calculation::CalculationRequest;
use crate::components::PreviewHost;
use crate::models::DEFAULT_MODELS;
use crate::overview::{overview_layout, render_overview};
use crate::settings::Settings;
use crate::theme::Theme;
use crate::weights::{WeightUpdater, WeightsMap};
use gpui::*;
use parking_lot::RwLock;
use std::sync::Arc;

/// Single-writer store for the current weights snapshot
#[derive(Clone, Default)]
pub struct WeightStore(Arc<RwLock<WeightsMap>>);

impl WeightStore {
    pub fn new(initial: WeightsMap) -> Self {
        Self(Arc::new(RwLock::new(initial)))
    }

    pub fn snapshot(&self) -> WeightsMap {
        self.0.read().clone()
    }

    /// Updater that replaces the stored snapshot with one carrying the
    /// requested value.
    pub fn updater(&self) -> WeightUpdater {
        let store = self.0.clone();
        WeightUpdater::new(move |key, value| {
            let mut current = store.write();
            *current = current.with(key.clone(), value);
        })
    }
}

pub struct PreviewApp {
    store: WeightStore,
    set_weights: WeightUpdater,
    symbols: Vec<String>,
    host: PreviewHost,
    theme: Theme,
    /// Snapshot the last request was logged for
    last_logged: Option<WeightsMap>,
}

impl PreviewApp {
    pub fn new(settings: &Settings) -> Self {
        let store = WeightStore::new(settings.weights.clone());
        let set_weights = store.updater();

        Self {
            store,
            set_weights,
            symbols: settings.symbols.clone(),
            host: PreviewHost::new(settings.symbols.clone(), settings.weight_range),
            theme: Theme::from_mode(&settings.theme.mode),
            last_logged: None,
        }
    }

    fn log_request(&mut self, weights: &WeightsMap) {
        if self.last_logged.as_ref().is_some_and(|w| w.ptr_eq(weights)) {
            return;
        }
        self.last_logged = Some(weights.clone());

        match CalculationRequest::from_selection(&DEFAULT_MODELS, &self.symbols, weights)
            .and_then(|request| request.to_json())
        {
            Ok(json) => tracing::debug!(request = %json, "calculation request"),
            Err(e) => tracing::warn!(error = %e, "calculation request not ready"),
        }
    }
}

impl Render for PreviewApp {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let weights = self.store.snapshot();
        self.log_request(&weights);

        let layout = overview_layout(&weights, &self.set_weights);
        let theme = &self.theme;

        div()
            .size_full()
            .bg(theme.background)
            .text_color(theme.text)
            .font_family("Inter")
            .child(render_overview(&layout, theme, &self.host))
    }
}
