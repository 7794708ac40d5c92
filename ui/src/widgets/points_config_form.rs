use egui::{TextEdit, Ui};
use points_admin_business::{AdminPanel, FormKind};

/// Form binding a file path to a point value.
pub fn points_config_form(panel: &mut AdminPanel, ui: &mut Ui) {
    let submitting = panel.forms.is_submitting(FormKind::PointsConfig);
    let form = &mut panel.forms.points_config;

    let submit = ui
        .vertical(|ui| {
            ui.strong("积分配置");
            egui::Grid::new("points_config_form")
                .num_columns(2)
                .spacing([8.0, 6.0])
                .show(ui, |ui| {
                    let label = ui.label("文件路径");
                    ui.add(TextEdit::singleline(&mut form.file_url).hint_text("例如 /img/cover.png"))
                        .labelled_by(label.id);
                    ui.end_row();

                    let label = ui.label("积分");
                    ui.add(TextEdit::singleline(&mut form.points))
                        .labelled_by(label.id);
                    ui.end_row();

                    let label = ui.label("描述");
                    ui.add(TextEdit::singleline(&mut form.description))
                        .labelled_by(label.id);
                    ui.end_row();
                });

            ui.horizontal(|ui| {
                let clicked = ui.button("保存配置").clicked();
                if submitting {
                    ui.spinner();
                }
                clicked
            })
            .inner
        })
        .inner;

    if submit {
        panel.submit_points_config();
    }
}
