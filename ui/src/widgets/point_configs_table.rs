use egui::{ScrollArea, Ui};
use points_admin_business::render::POINT_CONFIGS_HEADERS;
use points_admin_business::{AdminPanel, ListKind, Rendered};

use super::table::{bordered, data_cell, failure_placeholder, header_cell, list_toolbar};

/// Configured point values per file.
pub fn point_configs_table(panel: &mut AdminPanel, ui: &mut Ui) {
    list_toolbar(panel, ListKind::PointConfigs, "积分配置列表", ui);

    bordered(ui, |ui| match panel.point_configs_view() {
        Rendered::Failed(message) => failure_placeholder(ui, &message),
        Rendered::Rows(rows) => {
            ScrollArea::horizontal()
                .id_salt("point_configs_scroll")
                .show(ui, |ui| {
                    egui::Grid::new("point_configs_table")
                        .num_columns(POINT_CONFIGS_HEADERS.len())
                        .striped(true)
                        .spacing([16.0, 0.0])
                        .min_col_width(60.0)
                        .show(ui, |ui| {
                            for header in POINT_CONFIGS_HEADERS {
                                header_cell(ui, |ui| {
                                    ui.strong(header);
                                });
                            }
                            ui.end_row();

                            for row in &rows {
                                for cell in row.cells() {
                                    data_cell(ui, |ui| {
                                        ui.label(cell);
                                    });
                                }
                                ui.end_row();
                            }
                        });
                });
        }
    });
}
