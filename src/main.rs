//! qupo GUI - overview step of the portfolio-construction wizard
//!
//! Opens a GPUI window showing the selected symbols, the risk and ESG
//! weight controls and the model selection.

mod app;
mod calculation;
mod components;
mod error;
mod logging;
mod models;
mod overview;
mod settings;
mod theme;
mod weights;

#[cfg(test)]
mod tests;

use app::PreviewApp;
use gpui::*;
use settings::Settings;

fn main() {
    let loaded = Settings::load();
    let filter = loaded
        .as_ref()
        .map(|s| s.logging.filter.clone())
        .unwrap_or_else(|_| "info".to_string());
    logging::init(&filter);

    let settings = loaded.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "falling back to default settings");
        Settings::default()
    });
    tracing::info!(
        symbols = settings.symbols.len(),
        theme = %settings.theme.mode,
        "starting overview preview"
    );
    for model in models::DEFAULT_MODELS {
        let solver = model.solver_config();
        tracing::debug!(
            %model,
            provider = model.provider().as_str(),
            algorithm = %solver.algorithm,
            "default model"
        );
    }

    Application::new().run(move |cx: &mut App| {
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds {
                origin: Point::default(),
                size: Size {
                    width: px(900.0),
                    height: px(640.0),
                },
            })),
            titlebar: Some(TitlebarOptions {
                title: Some("qupo - Overview".into()),
                appears_transparent: false,
                ..Default::default()
            }),
            ..Default::default()
        };

        if let Err(e) = cx.open_window(window_options, |_window, cx| {
            cx.new(|_cx| PreviewApp::new(&settings))
        }) {
            tracing::error!(error = %e, "failed to open window");
            cx.quit();
        }
    });
}
