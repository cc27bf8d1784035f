use super::MealAdminApp;
use crate::ui_egui::dashboard::{ActiveView, PendingRequest};

impl MealAdminApp {
    /// F5 refreshes the active panel; Ctrl+S (Cmd+S on macOS) saves the menu.
    pub(super) fn handle_keyboard_shortcuts(
        &mut self,
        ctx: &egui::Context,
        requests: &mut Vec<PendingRequest>,
    ) {
        // Don't steal keys from the settings window
        if self.settings_dialog.is_open {
            return;
        }

        let (refresh, save) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::F5),
                i.modifiers.command && i.key_pressed(egui::Key::S),
            )
        });

        if refresh {
            requests.push(self.dashboard.refresh_active_view());
        }

        if save && self.dashboard.active_view() == ActiveView::EditMenu {
            requests.extend(self.dashboard.submit_menu());
        }
    }
}
