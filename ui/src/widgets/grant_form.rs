use egui::{TextEdit, Ui};
use points_admin_business::{AdminPanel, FormKind};

/// Form crediting or debiting a user's points.
///
/// The users table pre-fills the username; the points field then takes focus.
pub fn grant_points_form(panel: &mut AdminPanel, ui: &mut Ui) {
    let submitting = panel.forms.is_submitting(FormKind::PointsGrant);
    let form = &mut panel.forms.grant;

    let submit = ui
        .vertical(|ui| {
            ui.strong("用户积分操作");
            egui::Grid::new("grant_points_form")
                .num_columns(2)
                .spacing([8.0, 6.0])
                .show(ui, |ui| {
                    let label = ui.label("用户名");
                    ui.add(TextEdit::singleline(&mut form.username))
                        .labelled_by(label.id);
                    ui.end_row();

                    let label = ui.label("积分变动");
                    let points = ui
                        .add(TextEdit::singleline(&mut form.points).hint_text("正数增加，负数扣除"))
                        .labelled_by(label.id);
                    if form.take_focus_request() {
                        points.request_focus();
                    }
                    ui.end_row();

                    let label = ui.label("备注");
                    ui.add(TextEdit::singleline(&mut form.description))
                        .labelled_by(label.id);
                    ui.end_row();
                });

            ui.horizontal(|ui| {
                let clicked = ui.button("提交").clicked();
                if submitting {
                    ui.spinner();
                }
                clicked
            })
            .inner
        })
        .inner;

    if submit {
        panel.submit_points_grant();
    }
}
