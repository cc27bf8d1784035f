use super::MealAdminApp;
use crate::ui_egui::dashboard::PendingRequest;
use chrono::Local;
use egui::Context;

impl MealAdminApp {
    pub(super) fn render_menu_bar(&mut self, ctx: &Context, requests: &mut Vec<PendingRequest>) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                self.render_file_menu(ui, ctx);
                self.render_view_menu(ui, requests);
                self.render_help_menu(ui, requests);
            });
        });
    }

    fn render_file_menu(&mut self, ui: &mut egui::Ui, ctx: &Context) {
        ui.menu_button("File", |ui| {
            if ui.button("⚙ Settings...").clicked() {
                self.settings_dialog.open(&self.settings);
                ui.close_menu();
            }

            ui.separator();

            if ui.button("Exit").clicked() {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                ui.close_menu();
            }
        });
    }

    fn render_view_menu(&mut self, ui: &mut egui::Ui, requests: &mut Vec<PendingRequest>) {
        ui.menu_button("View", |ui| {
            if ui.button("🍽 Meal Counts").clicked() {
                requests.push(self.dashboard.refresh_meal_counts());
                ui.close_menu();
            }
            if ui.button("📝 Edit Menu").clicked() {
                requests.extend(self.dashboard.show_edit_menu());
                ui.close_menu();
            }
            if ui.button("📅 Edit Tomorrow's Menu").clicked() {
                let today = Local::now().date_naive();
                requests.extend(self.dashboard.edit_tomorrows_menu(today));
                ui.close_menu();
            }

            ui.separator();

            if ui.button("🔄 Refresh    F5").clicked() {
                requests.push(self.dashboard.refresh_active_view());
                ui.close_menu();
            }
        });
    }

    fn render_help_menu(&mut self, ui: &mut egui::Ui, requests: &mut Vec<PendingRequest>) {
        ui.menu_button("Help", |ui| {
            if ui.button("🔌 Test Backend Connection").clicked() {
                requests.push(self.dashboard.check_connection());
                ui.close_menu();
            }

            ui.separator();
            ui.label(format!("Meal Admin v{}", env!("CARGO_PKG_VERSION")));
        });
    }
}
