//! Shared color constants for the UI.

use egui::Color32;
use points_admin_business::{NotificationKind, Tone};

/// Forest green for credits and successful operations.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

/// Red for debits, failures and load errors.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Border color for the list tables (subtle gray).
pub const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

/// Header background color for the list tables (light gray).
pub const HEADER_BG_COLOR: Color32 = Color32::from_rgb(245, 245, 245);

pub fn tone_color(tone: Tone) -> Color32 {
    match tone {
        Tone::Success => COLOR_GREEN,
        Tone::Failure => COLOR_RED,
    }
}

pub fn notification_color(kind: NotificationKind) -> Color32 {
    match kind {
        NotificationKind::Success => COLOR_GREEN,
        NotificationKind::Error => COLOR_RED,
    }
}
