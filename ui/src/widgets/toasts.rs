use egui::{Align2, Area, Frame, Id, Margin, Order, RichText};
use points_admin_business::NotificationCenter;

use crate::utils::colors::notification_color;

/// Stack every visible toast in the top right corner, oldest on top.
pub fn toasts(notifications: &NotificationCenter, ctx: &egui::Context) {
    if notifications.visible().is_empty() {
        return;
    }

    Area::new(Id::new("toasts"))
        .order(Order::Foreground)
        .anchor(Align2::RIGHT_TOP, [-16.0, 16.0])
        .interactable(false)
        .show(ctx, |ui| {
            for toast in notifications.visible() {
                Frame::NONE
                    .fill(notification_color(toast.kind))
                    .corner_radius(4)
                    .inner_margin(Margin::symmetric(12, 8))
                    .show(ui, |ui| {
                        ui.label(RichText::new(&toast.message).color(egui::Color32::WHITE));
                    });
                ui.add_space(6.0);
            }
        });
}
