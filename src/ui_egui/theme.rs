//! Theme module for the egui dashboard
//!
//! Defines the DashboardTheme structure and resolves the configured
//! preference (light, dark or follow the system) into concrete colors.

use egui::Color32;

use crate::models::settings::ThemePreference;
use crate::ui_egui::dashboard::StatusKind;

/// Colors used by the dashboard panels
#[derive(Debug, Clone)]
pub struct DashboardTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Window and panel background
    pub app_background: Color32,

    /// Background of table header rows
    pub header_background: Color32,

    /// Primary text color (headings, values)
    pub text_primary: Color32,

    /// Secondary text color (hints, status bar)
    pub text_secondary: Color32,
}

impl DashboardTheme {
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            header_background: Color32::from_rgb(225, 232, 245),
            text_primary: Color32::from_rgb(40, 40, 40),
            text_secondary: Color32::from_rgb(100, 100, 100),
        }
    }

    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            header_background: Color32::from_rgb(50, 60, 80),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(170, 170, 170),
        }
    }

    /// Resolve a preference, asking the OS when it is `System`.
    pub fn for_preference(preference: ThemePreference) -> Self {
        match preference {
            ThemePreference::Light => Self::light(),
            ThemePreference::Dark => Self::dark(),
            ThemePreference::System => match dark_light::detect() {
                dark_light::Mode::Dark => Self::dark(),
                dark_light::Mode::Light | dark_light::Mode::Default => Self::light(),
            },
        }
    }

    /// Text color for a status message of the given kind
    pub fn status_color(&self, kind: StatusKind) -> Color32 {
        if self.is_dark {
            match kind {
                StatusKind::Success => Color32::from_rgb(100, 220, 120),
                StatusKind::Info => Color32::from_rgb(100, 180, 255),
                StatusKind::Error => Color32::from_rgb(255, 120, 120),
            }
        } else {
            match kind {
                StatusKind::Success => Color32::from_rgb(30, 120, 50),
                StatusKind::Info => Color32::from_rgb(30, 80, 150),
                StatusKind::Error => Color32::from_rgb(180, 40, 40),
            }
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;
        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}
