//! Preview widgets for the overview step
//!
//! Minimal stand-ins for the wizard's real symbol, slider and model widgets,
//! enough to drive the overview panel in a window.

use super::weight_stepper::WeightStepper;
use crate::models::ModelId;
use crate::overview::{ModelSelectionProps, WeightSliderProps, WidgetHost};
use crate::settings::WeightRange;
use crate::theme::Theme;
use gpui::*;

pub struct PreviewHost {
    symbols: Vec<String>,
    range: WeightRange,
}

impl PreviewHost {
    pub fn new(symbols: Vec<String>, range: WeightRange) -> Self {
        Self { symbols, range }
    }
}

fn chip(label: String, active: bool, theme: &Theme) -> Div {
    div()
        .px(px(12.0))
        .py(px(6.0))
        .rounded(px(6.0))
        .border_1()
        .border_color(if active { theme.accent } else { theme.border })
        .bg(if active { theme.accent_subtle } else { theme.card_bg })
        .text_size(px(12.0))
        .font_weight(if active { FontWeight::SEMIBOLD } else { FontWeight::NORMAL })
        .text_color(if active { theme.accent } else { theme.text_muted })
        .child(label)
}

impl WidgetHost for PreviewHost {
    fn symbol_collection(&self, theme: &Theme) -> AnyElement {
        if self.symbols.is_empty() {
            return div()
                .text_size(px(12.0))
                .text_color(theme.text_dimmed)
                .child("No symbols selected")
                .into_any_element();
        }

        div()
            .flex()
            .flex_row()
            .flex_wrap()
            .gap(px(8.0))
            .children(
                self.symbols
                    .iter()
                    .map(|s| chip(s.clone(), true, theme))
                    .collect::<Vec<_>>(),
            )
            .into_any_element()
    }

    fn weight_slider(&self, props: &WeightSliderProps, theme: &Theme) -> AnyElement {
        WeightStepper::new(props.clone(), self.range)
            .build(theme)
            .into_any_element()
    }

    fn model_selection(&self, props: &ModelSelectionProps, theme: &Theme) -> AnyElement {
        div()
            .flex()
            .flex_row()
            .flex_wrap()
            .gap(px(8.0))
            .children(
                ModelId::ALL
                    .iter()
                    .map(|m| chip(m.label().to_string(), props.default_models.contains(m), theme))
                    .collect::<Vec<_>>(),
            )
            .into_any_element()
    }
}
