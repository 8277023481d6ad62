//! Filter Panel Widget
//! Search box, per-column filters and the reload button above the price table.

use crate::config::consts::ROW_INDEX;
use crate::data::{ColumnFilter, Explorer};
use egui::{Color32, ComboBox, RichText};

/// Filter bar state: the explorer plus the columns it can filter on.
#[derive(Default)]
pub struct FilterPanel {
    pub explorer: Explorer,
    pub columns: Vec<String>,
    pub status: String,
}

impl FilterPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update filterable columns after a run
    pub fn update_columns(&mut self, columns: Vec<String>) {
        self.explorer
            .filters
            .retain(|f| columns.contains(&f.column));
        if let Some(key) = &self.explorer.sort {
            if !columns.contains(&key.column) {
                self.explorer.sort = None;
            }
        }
        self.columns = columns;
    }

    /// Drop the search text and every column filter row.
    pub fn clear_filters(&mut self) -> FilterPanelAction {
        let had_rows = !self.explorer.filters.is_empty();
        let was_active = self.explorer.is_active();
        self.explorer.clear();
        if was_active || had_rows {
            FilterPanelAction::Changed
        } else {
            FilterPanelAction::None
        }
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    /// Draw the filter bar
    pub fn show(&mut self, ui: &mut egui::Ui) -> FilterPanelAction {
        let mut action = FilterPanelAction::None;

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("🔍 Buscar").strong());
                    let search = egui::TextEdit::singleline(&mut self.explorer.search)
                        .hint_text("Texto en cualquier columna")
                        .desired_width(260.0);
                    if ui.add(search).changed() {
                        action = FilterPanelAction::Changed;
                    }

                    if ui.button("➕ Filtro por columna").clicked() {
                        self.explorer.filters.push(ColumnFilter {
                            column: self
                                .columns
                                .iter()
                                .find(|c| c.as_str() != ROW_INDEX)
                                .cloned()
                                .unwrap_or_default(),
                            needle: String::new(),
                        });
                    }

                    if ui.button("✖ Limpiar").clicked() {
                        action = self.clear_filters();
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("🔄 Recargar").clicked() {
                            action = FilterPanelAction::Reload;
                        }
                        ui.label(RichText::new(&self.status).size(11.0).color(Color32::GRAY));
                    });
                });

                let mut remove = None;
                for (i, filter) in self.explorer.filters.iter_mut().enumerate() {
                    ui.horizontal(|ui| {
                        ComboBox::from_id_salt(("filter_col", i))
                            .width(220.0)
                            .selected_text(&filter.column)
                            .show_ui(ui, |ui| {
                                for col in self.columns.iter().filter(|c| c.as_str() != ROW_INDEX) {
                                    if ui.selectable_label(filter.column == *col, col).clicked() {
                                        filter.column = col.clone();
                                        action = FilterPanelAction::Changed;
                                    }
                                }
                            });

                        ui.label("contiene");
                        if ui.text_edit_singleline(&mut filter.needle).changed() {
                            action = FilterPanelAction::Changed;
                        }
                        if ui.small_button("✖").clicked() {
                            remove = Some(i);
                        }
                    });
                }
                if let Some(i) = remove {
                    self.explorer.filters.remove(i);
                    action = FilterPanelAction::Changed;
                }
            });

        action
    }
}

/// Actions triggered by the filter bar
#[derive(Debug, Clone, PartialEq)]
pub enum FilterPanelAction {
    None,
    Changed,
    Reload,
}
