//! Status bar showing the API endpoint, the active panel and request activity.

use super::MealAdminApp;
use egui::RichText;

impl MealAdminApp {
    /// Render the status bar at the bottom of the window
    pub(super) fn render_status_bar(&mut self, ctx: &egui::Context) {
        let secondary = self.theme.text_secondary;

        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(24.0)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        RichText::new(format!("API: {}", self.settings.normalized_base_url()))
                            .small()
                            .color(secondary),
                    );
                    ui.separator();
                    ui.label(RichText::new(self.dashboard.active_view().label()).small());

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let activity = match self.dashboard.in_flight() {
                            0 => "Idle".to_string(),
                            1 => "1 request in flight".to_string(),
                            n => format!("{} requests in flight", n),
                        };
                        ui.label(RichText::new(activity).small().color(secondary));
                    });
                });
            });
    }
}
