use egui::RichText;
use std::hash::Hash;

use crate::models::meal_count::student_rows;
use crate::ui_egui::dashboard::StatusMessage;
use crate::ui_egui::theme::DashboardTheme;

pub mod edit_menu_view;
pub mod meal_counts_view;

pub use edit_menu_view::EditMenuView;
pub use meal_counts_view::MealCountsView;

const TABLE_MIN_COL_WIDTH: f32 = 120.0;

/// Two-column Type/Count table.
pub(crate) fn count_table<'a>(
    ui: &mut egui::Ui,
    id_source: impl Hash,
    rows: impl IntoIterator<Item = (&'a str, u32)>,
    theme: &DashboardTheme,
) {
    egui::Grid::new(id_source)
        .num_columns(2)
        .striped(true)
        .min_col_width(TABLE_MIN_COL_WIDTH)
        .show(ui, |ui| {
            header_cell(ui, "Type", theme);
            header_cell(ui, "Count", theme);
            ui.end_row();

            for (label, count) in rows {
                ui.label(label);
                ui.label(count.to_string());
                ui.end_row();
            }
        });
}

/// Single-column Name table. An empty list shows one "None" row.
pub(crate) fn name_table(
    ui: &mut egui::Ui,
    id_source: impl Hash,
    students: &[String],
    theme: &DashboardTheme,
) {
    egui::Grid::new(id_source)
        .num_columns(1)
        .striped(true)
        .min_col_width(TABLE_MIN_COL_WIDTH)
        .show(ui, |ui| {
            header_cell(ui, "Name", theme);
            ui.end_row();

            for name in student_rows(students) {
                ui.label(name);
                ui.end_row();
            }
        });
}

fn header_cell(ui: &mut egui::Ui, text: &str, theme: &DashboardTheme) {
    ui.label(
        RichText::new(text)
            .strong()
            .background_color(theme.header_background),
    );
}

pub(crate) fn status_line(ui: &mut egui::Ui, status: Option<&StatusMessage>, theme: &DashboardTheme) {
    if let Some(status) = status.filter(|status| !status.text.is_empty()) {
        ui.add_space(6.0);
        ui.colored_label(theme.status_color(status.kind), &status.text);
    }
}
