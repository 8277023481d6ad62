//! Price Dashboard Main Application
//! Single scrolling page: header, KPIs, filter bar, price table, download, FAQ.

use crate::config::DashboardConfig;
use crate::data::{CsvExporter, Pipeline, Snapshot};
use crate::gui::content;
use crate::gui::filter_panel::{FilterPanel, FilterPanelAction};
use crate::gui::price_table::PriceTable;
use crate::gui::table_model::TableModel;
use egui::{Color32, RichText, ScrollArea};
use tracing::{debug, error, info};

/// Main application window.
pub struct DashboardApp {
    config: DashboardConfig,
    pipeline: Pipeline,
    filter_panel: FilterPanel,
    snapshot: Option<Snapshot>,
    model: TableModel,
    /// Pipeline failure shown in place of the page.
    error: Option<String>,
}

impl DashboardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: DashboardConfig) -> Self {
        let mut app = Self {
            pipeline: Pipeline::new(config.dataset_path.clone()),
            config,
            filter_panel: FilterPanel::new(),
            snapshot: None,
            model: TableModel::default(),
            error: None,
        };
        app.refresh();
        app
    }

    /// Re-run the pipeline and rebuild the filtered view.
    fn refresh(&mut self) {
        let snapshot = match self.pipeline.run() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                let message = format!("{:#}", anyhow::Error::from(e));
                error!("pipeline failed: {}", message);
                self.snapshot = None;
                self.model = TableModel::default();
                self.error = Some(message);
                return;
            }
        };
        self.error = None;

        let columns = snapshot
            .table
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        self.filter_panel.update_columns(columns);

        match self
            .filter_panel
            .explorer
            .apply(&snapshot.table)
            .map_err(anyhow::Error::from)
            .and_then(|view| TableModel::from_frame(&view).map_err(anyhow::Error::from))
        {
            Ok(model) => {
                debug!("view has {} of {} rows", model.nrows(), snapshot.table.height());
                self.filter_panel.set_status(format!(
                    "{} de {} filas",
                    model.nrows(),
                    snapshot.table.height()
                ));
                self.model = model;
            }
            Err(e) => {
                error!("filter failed: {:#}", e);
                self.filter_panel.set_status(format!("Error: {e}"));
            }
        }
        self.snapshot = Some(snapshot);
    }

    /// Handle the download button
    fn handle_download(&mut self) {
        let Some(snapshot) = &self.snapshot else {
            return;
        };

        let bytes = match self.pipeline.export(snapshot) {
            Ok(bytes) => bytes,
            Err(e) => {
                error!("export failed: {}", e);
                self.filter_panel.set_status(format!("Error: {e}"));
                return;
            }
        };

        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV", &["csv"])
            .set_file_name(&self.config.export_file_name)
            .save_file()
        else {
            return; // User cancelled
        };

        match CsvExporter::save(&bytes, &path) {
            Ok(()) => {
                info!("downloaded table to {}", path.display());
                self.filter_panel
                    .set_status(format!("Guardado en {}", path.display()));
            }
            Err(e) => {
                error!("{}", e);
                self.filter_panel.set_status(format!("Error: {e}"));
            }
        }
    }

    fn show_error(&mut self, ui: &mut egui::Ui, message: &str) {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(
                RichText::new("⚠ No se pudo cargar la lista de precios")
                    .size(22.0)
                    .color(Color32::from_rgb(220, 53, 69)),
            );
            ui.add_space(10.0);
            ui.label(RichText::new(message).monospace());
            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("Archivo: {}", self.pipeline.dataset().display()))
                    .color(Color32::GRAY),
            );
            ui.add_space(15.0);
            if ui.button("🔄 Reintentar").clicked() {
                self.pipeline.reload();
                self.refresh();
            }
        });
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(message) = self.error.clone() {
                self.show_error(ui, &message);
                return;
            }

            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    content::header(ui);

                    if let Some(snapshot) = &self.snapshot {
                        content::metric_tiles(ui, &snapshot.summary);
                    }

                    match self.filter_panel.show(ui) {
                        FilterPanelAction::Changed => self.refresh(),
                        FilterPanelAction::Reload => {
                            self.pipeline.reload();
                            self.refresh();
                        }
                        FilterPanelAction::None => {}
                    }
                    ui.add_space(6.0);

                    let sort = self.filter_panel.explorer.sort.clone();
                    if let Some(column) = PriceTable::show(ui, &self.model, sort.as_ref()) {
                        self.filter_panel.explorer.toggle_sort(&column);
                        self.refresh();
                    }

                    content::disclaimer(ui);
                    ui.add_space(8.0);
                    let ready = self.snapshot.is_some();
                    if ui
                        .add_enabled(ready, egui::Button::new(RichText::new("⬇ Descargar CSV").size(14.0)))
                        .clicked()
                    {
                        self.handle_download();
                    }

                    content::faq(ui);
                });
        });
    }
}
