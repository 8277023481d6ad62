//! Price Dashboard - Retail Product Price List Viewer

use eframe::egui;
use price_dashboard::config::{consts, DashboardConfig};
use price_dashboard::gui::DashboardApp;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> anyhow::Result<()> {
    let env = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,price_dashboard=debug"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let config = DashboardConfig::load(Path::new(consts::CONFIG_FILE))?;
    info!("dataset: {}", config.dataset_path.display());

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([900.0, 600.0])
            .with_title(&config.window_title),
        ..Default::default()
    };

    let title = config.window_title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(|cc| Ok(Box::new(DashboardApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
