//! Users list with a per-row grant action.

use chrono::TimeZone;
use egui::{ScrollArea, Ui};
use points_admin_business::render::{GRANT_ACTION_LABEL, USERS_HEADERS};
use points_admin_business::{AdminPanel, ListKind, Rendered};
use std::fmt::Display;
use ustr::Ustr;

use super::table::{bordered, data_cell, failure_placeholder, header_cell, list_toolbar};

pub fn users_table<Tz>(panel: &mut AdminPanel, tz: &Tz, ui: &mut Ui)
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    list_toolbar(panel, ListKind::Users, "用户列表", ui);

    // Collected while drawing, applied once the table borrow ends.
    let mut grant_target: Option<Ustr> = None;

    bordered(ui, |ui| match panel.users_view(tz) {
        Rendered::Failed(message) => failure_placeholder(ui, &message),
        Rendered::Rows(rows) => {
            ScrollArea::horizontal().id_salt("users_scroll").show(ui, |ui| {
                egui::Grid::new("users_table")
                    .num_columns(USERS_HEADERS.len())
                    .striped(true)
                    .spacing([16.0, 0.0])
                    .min_col_width(60.0)
                    .show(ui, |ui| {
                        for header in USERS_HEADERS {
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
                            data_cell(ui, |ui| {
                                if ui.button(GRANT_ACTION_LABEL).clicked() {
                                    grant_target = Some(Ustr::from(&row.username));
                                }
                            });
                            ui.end_row();
                        }
                    });
            });
        }
    });

    if let Some(username) = grant_target {
        panel.fill_grant_form(username);
    }
}
