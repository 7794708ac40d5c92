use std::sync::Arc;

use chrono::{Local, Utc};

use crate::{state::State, widgets};

pub struct PointsAdminApp {
    pub state: State,
    loaded: bool,
}

impl PointsAdminApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self {
            state,
            loaded: false,
        }
    }

    // Page load: hook repaints to this context and fetch every list once.
    fn load(&mut self, ctx: &egui::Context) {
        let repaint_ctx = ctx.clone();
        self.state
            .panel
            .set_repaint(Arc::new(move || repaint_ctx.request_repaint()));
        self.state.panel.load_all();
        self.loaded = true;
    }
}

impl eframe::App for PointsAdminApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.loaded {
            self.load(ctx);
        }

        let now = Utc::now();
        self.state.panel.sync(now);

        let panel = &mut self.state.panel;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.heading("积分管理");
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.horizontal_top(|ui| {
                    widgets::points_config_form(panel, ui);
                    ui.separator();
                    widgets::grant_points_form(panel, ui);
                });

                ui.separator();
                widgets::users_table(panel, &Local, ui);

                ui.separator();
                widgets::point_configs_table(panel, ui);

                ui.separator();
                widgets::points_log(panel, &Local, ui);
            });
        });

        widgets::toasts(panel.notifications(), ctx);

        // Background deliveries repaint on their own; toasts only need a frame
        // when they expire.
        if let Some(expiry) = panel.notifications().next_expiry() {
            let wait = (expiry - now).to_std().unwrap_or_default();
            ctx.request_repaint_after(wait);
        }
    }
}
