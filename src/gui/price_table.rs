//! Price Table Widget
//! Scrollable, sortable grid over the filtered view using egui_extras.

use crate::data::SortKey;
use crate::gui::table_model::{link_target, CellKind, TableModel};
use egui::{Align, Layout, RichText};
use egui_extras::{Column, TableBuilder};

const ROW_HEIGHT: f32 = 20.0;
const HEADER_HEIGHT: f32 = 26.0;
const TABLE_HEIGHT: f32 = 420.0;

pub struct PriceTable;

impl PriceTable {
    /// Draw the grid. Returns the header that was clicked, if any.
    pub fn show(ui: &mut egui::Ui, model: &TableModel, sort: Option<&SortKey>) -> Option<String> {
        if model.ncols() == 0 {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return None;
        }

        let mut clicked = None;
        let mut table = TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .max_scroll_height(TABLE_HEIGHT)
            .min_scrolled_height(TABLE_HEIGHT.min(ROW_HEIGHT * (model.nrows() + 1) as f32))
            .cell_layout(Layout::left_to_right(Align::Center));

        for kind in &model.kinds {
            let column = match kind {
                CellKind::Index => Column::initial(50.0).at_least(30.0),
                CellKind::Currency => Column::initial(110.0).at_least(60.0),
                CellKind::Link => Column::initial(200.0).at_least(60.0).clip(true),
                CellKind::Text => Column::initial(150.0).at_least(40.0).clip(true),
            };
            table = table.column(column);
        }

        table
            .header(HEADER_HEIGHT, |mut header| {
                for name in &model.headers {
                    header.col(|ui| {
                        let arrow = match sort {
                            Some(key) if key.column == *name && key.descending => " ⏷",
                            Some(key) if key.column == *name => " ⏶",
                            _ => "",
                        };
                        let label = egui::Label::new(RichText::new(format!("{name}{arrow}")).strong())
                            .sense(egui::Sense::click())
                            .selectable(false);
                        if ui.add(label).on_hover_text("Ordenar").clicked() {
                            clicked = Some(name.clone());
                        }
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, model.nrows(), |mut row| {
                    let r = row.index();
                    for (c, kind) in model.kinds.iter().enumerate() {
                        let value = model.cell(r, c);
                        row.col(|ui| Self::draw_cell(ui, *kind, value));
                    }
                });
            });

        clicked
    }

    fn draw_cell(ui: &mut egui::Ui, kind: CellKind, value: &str) {
        match kind {
            CellKind::Link => match link_target(value) {
                Some(url) => {
                    ui.hyperlink_to(value, url);
                }
                None => {
                    ui.label(value);
                }
            },
            CellKind::Currency | CellKind::Index => {
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(RichText::new(value).monospace());
                });
            }
            CellKind::Text => {
                ui.label(value);
            }
        }
    }
}
