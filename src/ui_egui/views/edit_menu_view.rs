use crate::models::menu::MenuField;
use crate::models::weekday::Weekday;
use crate::ui_egui::dashboard::{DashboardState, PendingRequest};
use crate::ui_egui::theme::DashboardTheme;

use super::status_line;

const FIELD_WIDTH: f32 = 320.0;

pub struct EditMenuView;

impl EditMenuView {
    /// Render the weekday selector and menu form. Requests triggered by the
    /// user are pushed onto `requests` for the caller to dispatch.
    pub fn show(
        ui: &mut egui::Ui,
        dashboard: &mut DashboardState,
        theme: &DashboardTheme,
        requests: &mut Vec<PendingRequest>,
    ) {
        ui.heading("Edit Menu");
        ui.add_space(8.0);

        let mut selected = dashboard.weekday();
        ui.horizontal(|ui| {
            ui.label("Weekday:");
            egui::ComboBox::from_id_source("weekday_select")
                .selected_text(selected.as_str())
                .show_ui(ui, |ui| {
                    for day in Weekday::all() {
                        ui.selectable_value(&mut selected, day, day.as_str());
                    }
                });
        });
        requests.extend(dashboard.select_weekday(selected));

        ui.add_space(8.0);

        // Widget state is scoped to the weekday so edits never carry over
        let weekday = dashboard.weekday();
        let mut submit = false;
        ui.push_id(("menu_form", weekday), |ui| {
            egui::Grid::new("menu_form_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    for field in MenuField::all() {
                        ui.label(format!("{}:", field.label()));
                        let response = ui.add(
                            egui::TextEdit::singleline(dashboard.draft_field_mut(field))
                                .id_source(field)
                                .desired_width(FIELD_WIDTH),
                        );
                        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                            submit = true;
                        }
                        ui.end_row();
                    }
                });

            ui.add_space(8.0);
            let save = ui.add_enabled(dashboard.can_submit(), egui::Button::new("Save Menu"));
            if save.clicked() {
                submit = true;
            }
        });

        if submit {
            requests.extend(dashboard.submit_menu());
        }

        ui.add_space(8.0);
        status_line(ui, dashboard.status(), theme);
    }
}
