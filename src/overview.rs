//! Overview step of the portfolio wizard
//!
//! Shows the selected symbols, the two scoring-weight sliders and the model
//! selection. The step owns no state: [`overview_layout`] turns the current
//! weights snapshot and the updater into an [`OverviewLayout`], and
//! [`render_overview`] draws that layout, handing each child widget to a
//! [`WidgetHost`].

use crate::models::{ModelId, DEFAULT_MODELS};
use crate::theme::Theme;
use crate::weights::{WeightKey, WeightUpdater, WeightsMap};
use gpui::prelude::*;
use gpui::*;

pub const SYMBOLS_HEADING: &str = "Selected Symbols:";
pub const ANSWERS_HEADING: &str = "Answers:";
pub const MODELS_HEADING: &str = "Models:";

pub const ANSWERS_TEXT: &str = "Set how strongly portfolio risk and ESG rating count \
     when the selected models score a portfolio.";

// ============================================================================
// LAYOUT
// ============================================================================

/// Props handed to a weight slider
#[derive(Debug, Clone)]
pub struct WeightSliderProps {
    pub key_weight: WeightKey,
    pub weights: WeightsMap,
    pub set_weights: WeightUpdater,
}

impl WeightSliderProps {
    /// `None` when the parent has no entry for this slider's key.
    pub fn current_value(&self) -> Option<f64> {
        self.weights.get(&self.key_weight)
    }

    pub fn request(&self, value: f64) {
        self.set_weights.request(&self.key_weight, value);
    }
}

/// Props handed to the model-selection widget
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSelectionProps {
    pub default_models: Vec<ModelId>,
}

impl ModelSelectionProps {
    pub fn default_model_ids(&self) -> Vec<&'static str> {
        self.default_models.iter().map(ModelId::as_str).collect()
    }
}

/// A child widget of the overview step
#[derive(Debug, Clone)]
pub enum WidgetNode {
    /// Manages its own symbol source; takes no props.
    SymbolCollection,
    WeightSlider(WeightSliderProps),
    ModelSelection(ModelSelectionProps),
}

impl WidgetNode {
    pub fn kind(&self) -> &'static str {
        match self {
            WidgetNode::SymbolCollection => "symbol-collection",
            WidgetNode::WeightSlider(_) => "weight-slider",
            WidgetNode::ModelSelection(_) => "model-selection",
        }
    }
}

#[derive(Debug, Clone)]
pub enum SectionBody {
    Widget(WidgetNode),
    /// Widgets laid out side by side in one container
    Row(Vec<WidgetNode>),
}

#[derive(Debug, Clone)]
pub struct Section {
    pub heading: &'static str,
    pub description: Option<&'static str>,
    pub body: SectionBody,
}

impl Section {
    pub fn widgets(&self) -> &[WidgetNode] {
        match &self.body {
            SectionBody::Widget(node) => std::slice::from_ref(node),
            SectionBody::Row(nodes) => nodes,
        }
    }
}

/// Declarative description of the overview step
#[derive(Debug, Clone)]
pub struct OverviewLayout {
    pub sections: Vec<Section>,
}

impl OverviewLayout {
    #[allow(dead_code)]
    pub fn headings(&self) -> Vec<&'static str> {
        self.sections.iter().map(|s| s.heading).collect()
    }

    #[allow(dead_code)]
    pub fn widgets(&self) -> impl Iterator<Item = &WidgetNode> {
        self.sections.iter().flat_map(Section::widgets)
    }

    #[allow(dead_code)]
    pub fn weight_sliders(&self) -> Vec<&WeightSliderProps> {
        self.widgets()
            .filter_map(|w| match w {
                WidgetNode::WeightSlider(props) => Some(props),
                _ => None,
            })
            .collect()
    }

    #[allow(dead_code)]
    pub fn model_selection(&self) -> Option<&ModelSelectionProps> {
        self.widgets().find_map(|w| match w {
            WidgetNode::ModelSelection(props) => Some(props),
            _ => None,
        })
    }

    /// Structure of the layout with all weight values left out.
    pub fn outline(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for section in &self.sections {
            lines.push(format!("heading {}", section.heading));
            if let Some(text) = section.description {
                lines.push(format!("text {}", text));
            }
            let indent = match &section.body {
                SectionBody::Widget(_) => "",
                SectionBody::Row(_) => {
                    lines.push("row".to_string());
                    "  "
                }
            };
            for node in section.widgets() {
                let detail = match node {
                    WidgetNode::SymbolCollection => String::new(),
                    WidgetNode::WeightSlider(props) => format!(" [{}]", props.key_weight),
                    WidgetNode::ModelSelection(props) => {
                        format!(" {:?}", props.default_model_ids())
                    }
                };
                lines.push(format!("{}{}{}", indent, node.kind(), detail));
            }
        }
        lines
    }
}

/// Build the overview step from the parent's weights and updater.
///
/// Both handles are passed to the sliders as-is; `set_weights` is never
/// called here.
pub fn overview_layout(weights: &WeightsMap, set_weights: &WeightUpdater) -> OverviewLayout {
    let slider = |key: WeightKey| {
        WidgetNode::WeightSlider(WeightSliderProps {
            key_weight: key,
            weights: weights.clone(),
            set_weights: set_weights.clone(),
        })
    };

    OverviewLayout {
        sections: vec![
            Section {
                heading: SYMBOLS_HEADING,
                description: None,
                body: SectionBody::Widget(WidgetNode::SymbolCollection),
            },
            Section {
                heading: ANSWERS_HEADING,
                description: Some(ANSWERS_TEXT),
                body: SectionBody::Row(vec![slider(WeightKey::risk()), slider(WeightKey::esg())]),
            },
            Section {
                heading: MODELS_HEADING,
                description: None,
                body: SectionBody::Widget(WidgetNode::ModelSelection(ModelSelectionProps {
                    default_models: DEFAULT_MODELS.to_vec(),
                })),
            },
        ],
    }
}

// ============================================================================
// RENDERING
// ============================================================================

/// Renders the child widgets the overview step composes
pub trait WidgetHost {
    fn symbol_collection(&self, theme: &Theme) -> AnyElement;
    fn weight_slider(&self, props: &WeightSliderProps, theme: &Theme) -> AnyElement;
    fn model_selection(&self, props: &ModelSelectionProps, theme: &Theme) -> AnyElement;
}

/// Render the overview layout as a vertical stack of sections
pub fn render_overview(layout: &OverviewLayout, theme: &Theme, host: &impl WidgetHost) -> Div {
    div()
        .flex()
        .flex_col()
        .gap(px(28.0))
        .p(px(24.0))
        .children(
            layout
                .sections
                .iter()
                .map(|section| render_section(section, theme, host))
                .collect::<Vec<_>>(),
        )
}

fn render_section(section: &Section, theme: &Theme, host: &impl WidgetHost) -> Div {
    let body = match &section.body {
        SectionBody::Widget(node) => render_node(node, theme, host),
        SectionBody::Row(nodes) => div()
            .flex()
            .flex_row()
            .gap(px(16.0))
            .children(
                nodes
                    .iter()
                    .map(|node| render_node(node, theme, host))
                    .collect::<Vec<_>>(),
            )
            .into_any_element(),
    };

    div()
        .flex()
        .flex_col()
        .gap(px(10.0))
        .child(
            div()
                .text_size(px(16.0))
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(theme.text)
                .child(section.heading),
        )
        .when_some(section.description, |el, text| {
            el.child(
                div()
                    .text_size(px(12.0))
                    .text_color(theme.text_muted)
                    .child(text),
            )
        })
        .child(body)
}

fn render_node(node: &WidgetNode, theme: &Theme, host: &impl WidgetHost) -> AnyElement {
    match node {
        WidgetNode::SymbolCollection => host.symbol_collection(theme),
        WidgetNode::WeightSlider(props) => host.weight_slider(props, theme),
        WidgetNode::ModelSelection(props) => host.model_selection(props, theme),
    }
}
