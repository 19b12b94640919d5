//! Stepper stand-in for the weight slider
//!
//! Shows one weight with -/+ buttons. Each click asks the parent for a new
//! value through the slider's updater; the displayed value only changes
//! once the parent hands down a new snapshot.

use crate::overview::WeightSliderProps;
use crate::settings::WeightRange;
use crate::theme::Theme;
use crate::weights::WeightKey;
use gpui::prelude::*;
use gpui::*;

/// Human label for a weight key
pub fn weight_label(key: &WeightKey) -> String {
    match key.as_str() {
        WeightKey::RISK => "Risk".to_string(),
        WeightKey::ESG => "ESG".to_string(),
        other => other.replace('_', " "),
    }
}

pub struct WeightStepper {
    props: WeightSliderProps,
    range: WeightRange,
    precision: usize,
}

impl WeightStepper {
    pub fn new(props: WeightSliderProps, range: WeightRange) -> Self {
        Self {
            props,
            range,
            precision: 2,
        }
    }

    /// Value one step up or down, clamped to the range. An unset weight
    /// steps from the range minimum.
    pub fn stepped(&self, up: bool) -> f64 {
        let current = self.props.current_value().unwrap_or(self.range.min);
        let delta = if up { self.range.step } else { -self.range.step };
        self.range.clamp(current + delta)
    }

    pub fn can_decrement(&self) -> bool {
        self.props.current_value().is_some_and(|v| v > self.range.min)
    }

    pub fn can_increment(&self) -> bool {
        self.props.current_value().map_or(true, |v| v < self.range.max)
    }

    pub fn display_value(&self) -> String {
        self.props
            .current_value()
            .map(|v| format!("{:.prec$}", v, prec = self.precision))
            .unwrap_or_else(|| "not set".to_string())
    }

    fn step_button(&self, up: bool, enabled: bool, theme: &Theme) -> Stateful<Div> {
        let target = self.stepped(up);
        let props = self.props.clone();
        let id = SharedString::from(format!(
            "weight-{}-{}",
            self.props.key_weight,
            if up { "inc" } else { "dec" }
        ));
        let hover_bg = theme.hover_bg;

        div()
            .id(id)
            .w(px(36.0))
            .h_full()
            .flex()
            .items_center()
            .justify_center()
            .text_size(px(16.0))
            .text_color(if enabled { theme.text_secondary } else { theme.text_dimmed })
            .when(enabled, |el| {
                el.cursor_pointer()
                    .hover(move |s| s.bg(hover_bg))
                    .on_click(move |_, window, _| {
                        tracing::debug!(key = %props.key_weight, value = target, "weight change requested");
                        props.request(target);
                        window.refresh();
                    })
            })
            .child(if up { "+" } else { "-" })
    }

    pub fn build(self, theme: &Theme) -> impl IntoElement {
        let has_value = self.props.current_value().is_some();
        let range_text = format!(
            "{:.prec$} - {:.prec$}",
            self.range.min,
            self.range.max,
            prec = self.precision
        );

        div()
            .flex()
            .flex_col()
            .gap(px(6.0))
            .w(px(220.0))
            .child(
                div()
                    .text_size(px(12.0))
                    .font_weight(FontWeight::MEDIUM)
                    .text_color(theme.text_secondary)
                    .child(weight_label(&self.props.key_weight)),
            )
            .child(
                div()
                    .h(px(40.0))
                    .rounded(px(6.0))
                    .bg(theme.card_bg_elevated)
                    .border_1()
                    .border_color(theme.border)
                    .flex()
                    .items_center()
                    .child(
                        self.step_button(false, self.can_decrement(), theme)
                            .border_r_1()
                            .border_color(theme.border_subtle),
                    )
                    .child(
                        div()
                            .flex_grow()
                            .px(px(12.0))
                            .text_size(px(13.0))
                            .font_weight(FontWeight::MEDIUM)
                            .text_color(if has_value { theme.text } else { theme.text_dimmed })
                            .text_align(gpui::TextAlign::Center)
                            .child(self.display_value()),
                    )
                    .child(
                        self.step_button(true, self.can_increment(), theme)
                            .border_l_1()
                            .border_color(theme.border_subtle),
                    ),
            )
            .child(
                div()
                    .text_size(px(10.0))
                    .text_color(theme.text_dimmed)
                    .child(range_text),
            )
    }
}
