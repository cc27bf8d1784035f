use super::MealAdminApp;
use crate::models::settings::Settings;
use crate::services::api::HttpMealApi;
use crate::services::settings::SettingsService;
use crate::ui_egui::dashboard::{ApiWorker, DashboardState, PendingRequest, SharedApi};
use crate::ui_egui::settings_dialog::{render_settings_dialog, SettingsDialogAction, SettingsDialogState};
use crate::ui_egui::theme::DashboardTheme;
use std::sync::Arc;
use std::time::Duration;

/// How often to re-check the worker channel while requests are outstanding.
const POLL_INTERVAL: Duration = Duration::from_millis(200);

impl MealAdminApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings_service: SettingsService,
        settings: Settings,
        api: SharedApi,
    ) -> Self {
        let theme = DashboardTheme::for_preference(settings.theme);
        theme.apply_to_context(&cc.egui_ctx);

        let mut app = Self {
            settings,
            settings_service,
            dashboard: DashboardState::new(),
            worker: ApiWorker::new(api),
            theme,
            settings_dialog: SettingsDialogState::new(),
        };

        let initial = app.dashboard.start();
        app.dispatch_all(initial, &cc.egui_ctx);
        app
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context) {
        self.poll_worker(ctx);

        let mut requests: Vec<PendingRequest> = Vec::new();

        self.handle_keyboard_shortcuts(ctx, &mut requests);
        self.render_menu_bar(ctx, &mut requests);

        // Status bar before CentralPanel so it takes bottom space
        self.render_status_bar(ctx);
        self.render_main_panel(ctx, &mut requests);

        self.handle_settings_dialog(ctx);

        self.dispatch_all(requests, ctx);
    }

    fn dispatch_all(&self, requests: Vec<PendingRequest>, ctx: &egui::Context) {
        for pending in requests {
            self.worker.dispatch(pending, Some(ctx.clone()));
        }
    }

    /// Apply finished requests and launch any follow-ups they produce.
    fn poll_worker(&mut self, ctx: &egui::Context) {
        let mut follow_ups = Vec::new();
        for (ticket, response) in self.worker.drain() {
            follow_ups.extend(self.dashboard.apply(ticket, response));
        }
        self.dispatch_all(follow_ups, ctx);

        if self.dashboard.in_flight() > 0 {
            ctx.request_repaint_after(POLL_INTERVAL);
        }
    }

    fn handle_settings_dialog(&mut self, ctx: &egui::Context) {
        match render_settings_dialog(ctx, &mut self.settings_dialog) {
            SettingsDialogAction::None => {}
            SettingsDialogAction::Cancel => self.settings_dialog.close(),
            SettingsDialogAction::Save(settings) => {
                if let Err(err) = self.apply_settings(settings, ctx) {
                    log::error!("Failed to apply settings: {:#}", err);
                    self.settings_dialog.set_error(format!("{:#}", err));
                } else {
                    self.settings_dialog.close();
                }
            }
        }
    }

    fn apply_settings(&mut self, settings: Settings, ctx: &egui::Context) -> anyhow::Result<()> {
        let api = HttpMealApi::new(&settings)?;
        self.settings_service.save(&settings)?;

        log::info!("Switching meal API to {}", api.base_url());
        self.worker.set_api(Arc::new(api));

        // What's on screen came from the previous backend
        if !settings.same_backend(&self.settings) {
            let refresh = self.dashboard.refresh_active_view();
            self.dispatch_all(vec![refresh], ctx);
        }

        if settings.theme != self.settings.theme {
            self.theme = DashboardTheme::for_preference(settings.theme);
            self.theme.apply_to_context(ctx);
        }

        self.settings = settings;
        Ok(())
    }
}
