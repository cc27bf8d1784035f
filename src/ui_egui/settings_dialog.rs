use crate::models::settings::{Settings, ThemePreference};
use egui::{Color32, RichText};

const LABEL_WIDTH: f32 = 150.0;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Editable copy of the settings while the dialog is open.
pub struct SettingsDialogState {
    pub is_open: bool,
    api_base_url: String,
    timeout_enabled: bool,
    timeout_secs: u64,
    theme: ThemePreference,
    error_message: Option<String>,
}

impl Default for SettingsDialogState {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsDialogState {
    pub fn new() -> Self {
        Self {
            is_open: false,
            api_base_url: String::new(),
            timeout_enabled: false,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            theme: ThemePreference::System,
            error_message: None,
        }
    }

    pub fn open(&mut self, settings: &Settings) {
        self.is_open = true;
        self.api_base_url = settings.api_base_url.clone();
        self.timeout_enabled = settings.request_timeout_secs.is_some();
        self.timeout_secs = settings.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        self.theme = settings.theme;
        self.error_message = None;
    }

    pub fn close(&mut self) {
        self.is_open = false;
        self.error_message = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    /// Settings as currently entered, validated.
    pub fn to_settings(&self) -> Result<Settings, String> {
        let settings = Settings {
            api_base_url: self.api_base_url.trim().to_string(),
            request_timeout_secs: self.timeout_enabled.then_some(self.timeout_secs),
            theme: self.theme,
        };
        settings.validate()?;
        Ok(settings)
    }
}

pub enum SettingsDialogAction {
    None,
    Save(Settings),
    Cancel,
}

/// Render the settings dialog
pub fn render_settings_dialog(
    ctx: &egui::Context,
    state: &mut SettingsDialogState,
) -> SettingsDialogAction {
    if !state.is_open {
        return SettingsDialogAction::None;
    }

    let mut action = SettingsDialogAction::None;
    let mut dialog_open = true;

    egui::Window::new("Settings")
        .open(&mut dialog_open)
        .collapsible(false)
        .resizable(false)
        .default_width(460.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            if let Some(ref error) = state.error_message {
                ui.colored_label(Color32::RED, RichText::new(error).strong());
                ui.add_space(8.0);
            }

            ui.heading("Connection");
            ui.add_space(4.0);

            labeled_row(ui, "API base URL:", |ui| {
                ui.add(egui::TextEdit::singleline(&mut state.api_base_url).desired_width(260.0));
            });

            labeled_row(ui, "Request timeout:", |ui| {
                ui.checkbox(&mut state.timeout_enabled, "");
                ui.add_enabled(
                    state.timeout_enabled,
                    egui::DragValue::new(&mut state.timeout_secs)
                        .range(1..=600)
                        .speed(1)
                        .suffix(" s"),
                );
                if !state.timeout_enabled {
                    ui.label("(none)");
                }
            });

            ui.add_space(8.0);
            ui.heading("Appearance");
            ui.add_space(4.0);

            labeled_row(ui, "Theme:", |ui| {
                egui::ComboBox::from_id_source("theme_combo")
                    .selected_text(state.theme.label())
                    .show_ui(ui, |ui| {
                        for preference in ThemePreference::all() {
                            ui.selectable_value(&mut state.theme, preference, preference.label());
                        }
                    });
            });

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    match state.to_settings() {
                        Ok(settings) => action = SettingsDialogAction::Save(settings),
                        Err(err) => state.error_message = Some(err),
                    }
                }
                if ui.button("Cancel").clicked() {
                    action = SettingsDialogAction::Cancel;
                }
            });
        });

    if !dialog_open {
        action = SettingsDialogAction::Cancel;
    }

    action
}

fn labeled_row(ui: &mut egui::Ui, label: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    ui.horizontal(|ui| {
        ui.allocate_ui_with_layout(
            egui::Vec2::new(LABEL_WIDTH, 20.0),
            egui::Layout::right_to_left(egui::Align::Center),
            |ui| {
                ui.label(label);
            },
        );
        add_contents(ui);
    });
}
