//! Typora-like table pieces shared by the list widgets.

use egui::{Frame, InnerResponse, Margin, RichText, Stroke, Ui};
use points_admin_business::{AdminPanel, ListKind};

use crate::utils::colors::{COLOR_RED, HEADER_BG_COLOR, TABLE_BORDER_COLOR};

/// Header cell with background.
pub fn header_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .fill(HEADER_BG_COLOR)
        .inner_margin(Margin::symmetric(8, 8))
        .show(ui, add_contents)
}

/// Data cell with padding.
pub fn data_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .inner_margin(Margin::symmetric(8, 6))
        .show(ui, add_contents)
}

/// Bordered container around a list body.
pub fn bordered<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
        .inner_margin(Margin::ZERO)
        .show(ui, add_contents)
}

/// Title row of a list: heading, refresh button and a spinner while loading.
pub fn list_toolbar(panel: &mut AdminPanel, kind: ListKind, title: &str, ui: &mut Ui) {
    let refresh = ui
        .horizontal(|ui| {
            ui.strong(title);
            let clicked = ui.button("刷新").clicked();
            if panel.is_loading(kind) {
                ui.spinner();
            }
            clicked
        })
        .inner;

    if refresh {
        panel.refresh(kind);
    }
}

/// The single placeholder shown when a list failed to load.
pub fn failure_placeholder(ui: &mut Ui, message: &str) {
    data_cell(ui, |ui| {
        ui.label(RichText::new(message).color(COLOR_RED));
    });
}
