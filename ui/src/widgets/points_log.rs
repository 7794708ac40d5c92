//! Points transaction log, newest first as the backend returns it.

use chrono::TimeZone;
use egui::{Frame, Margin, RichText, Stroke, Ui};
use points_admin_business::{AdminPanel, ListKind, LogItem, Rendered};
use std::fmt::Display;

use super::table::{bordered, failure_placeholder, list_toolbar};
use crate::utils::colors::{TABLE_BORDER_COLOR, tone_color};

pub fn points_log<Tz>(panel: &mut AdminPanel, tz: &Tz, ui: &mut Ui)
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    list_toolbar(panel, ListKind::PointsLog, "积分记录", ui);

    bordered(ui, |ui| match panel.points_log_view(tz) {
        Rendered::Failed(message) => failure_placeholder(ui, &message),
        Rendered::Rows(items) => {
            for item in &items {
                log_item(ui, item);
            }
        }
    });
}

fn log_item(ui: &mut Ui, item: &LogItem) {
    Frame::NONE
        .stroke(Stroke::new(0.5, TABLE_BORDER_COLOR))
        .inner_margin(Margin::symmetric(8, 6))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(format!("{} - {}", item.user_id, item.summary));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(&item.amount)
                            .strong()
                            .color(tone_color(item.tone)),
                    );
                });
            });
            ui.label(RichText::new(&item.created_at).small().weak());
        });
}
