// Meal Admin Dashboard
// Main entry point

use anyhow::{anyhow, Context, Result};
use meal_admin::services::api::HttpMealApi;
use meal_admin::services::settings::{apply_env_overrides, SettingsService};
use meal_admin::ui_egui::MealAdminApp;
use std::sync::Arc;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Meal Admin Dashboard");

    let settings_service = SettingsService::for_current_user();
    let settings = apply_env_overrides(settings_service.load_or_default());

    let api = HttpMealApi::new(&settings).context("Failed to initialize meal API client")?;
    log::info!("Using meal API at {}", api.base_url());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Admin Dashboard")
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Meal Admin",
        options,
        Box::new(move |cc| {
            Ok(Box::new(MealAdminApp::new(
                cc,
                settings_service,
                settings,
                Arc::new(api),
            )))
        }),
    )
    .map_err(|e| anyhow!("Dashboard exited with an error: {}", e))
}
