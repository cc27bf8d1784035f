mod lifecycle;
mod menu;
mod shortcuts;
mod status_bar;

use crate::models::settings::Settings;
use crate::services::settings::SettingsService;
use crate::ui_egui::dashboard::{ActiveView, ApiWorker, DashboardState, PendingRequest};
use crate::ui_egui::settings_dialog::SettingsDialogState;
use crate::ui_egui::theme::DashboardTheme;
use crate::ui_egui::views::{EditMenuView, MealCountsView};

pub struct MealAdminApp {
    /// Effective settings, including environment overrides
    settings: Settings,
    settings_service: SettingsService,
    /// View-controller state for both panels
    dashboard: DashboardState,
    /// Runs API requests off the UI thread
    worker: ApiWorker,
    /// Currently applied theme colors
    theme: DashboardTheme,
    settings_dialog: SettingsDialogState,
}

impl eframe::App for MealAdminApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_update(ctx);
    }
}

impl MealAdminApp {
    fn render_main_panel(&mut self, ctx: &egui::Context, requests: &mut Vec<PendingRequest>) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("🔄 Refresh Meal Counts").clicked() {
                    requests.push(self.dashboard.refresh_meal_counts());
                }

                let editing = self.dashboard.active_view() == ActiveView::EditMenu;
                if ui
                    .add(egui::Button::new("📝 Edit Menu").selected(editing))
                    .clicked()
                {
                    requests.extend(self.dashboard.show_edit_menu());
                }
            });

            ui.separator();
            ui.add_space(4.0);

            match self.dashboard.active_view() {
                ActiveView::MealCounts => MealCountsView::show(ui, &self.dashboard, &self.theme),
                ActiveView::EditMenu => {
                    EditMenuView::show(ui, &mut self.dashboard, &self.theme, requests)
                }
            }
        });
    }
}
