use egui::RichText;

use crate::models::meal_count::{date_label, MealCounts};
use crate::ui_egui::dashboard::DashboardState;
use crate::ui_egui::theme::DashboardTheme;

use super::{count_table, name_table, status_line};

pub struct MealCountsView;

impl MealCountsView {
    pub fn show(ui: &mut egui::Ui, dashboard: &DashboardState, theme: &DashboardTheme) {
        ui.heading(format!(
            "Tomorrow's Meal Counts ({})",
            date_label(dashboard.meal_counts())
        ));
        ui.add_space(8.0);

        match dashboard.meal_counts() {
            Some(counts) => {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.columns(2, |columns| {
                            Self::render_meal_types(&mut columns[0], counts, theme);
                            Self::render_caffeine(&mut columns[1], counts, theme);
                        });
                        status_line(ui, dashboard.status(), theme);
                    });
            }
            None => {
                ui.label("No meal counts data available.");
                status_line(ui, dashboard.status(), theme);
            }
        }
    }

    fn render_meal_types(ui: &mut egui::Ui, counts: &MealCounts, theme: &DashboardTheme) {
        ui.label(RichText::new("Meal Type Counts").strong().size(16.0));
        count_table(
            ui,
            "meal_type_counts",
            [("Veg", counts.veg), ("Non-Veg", counts.non_veg)],
            theme,
        );

        ui.add_space(8.0);
        ui.label(RichText::new("Veg Students:").strong());
        name_table(ui, "veg_students", &counts.veg_students, theme);

        ui.add_space(8.0);
        ui.label(RichText::new("Non-Veg Students:").strong());
        name_table(ui, "non_veg_students", &counts.non_veg_students, theme);
    }

    fn render_caffeine(ui: &mut egui::Ui, counts: &MealCounts, theme: &DashboardTheme) {
        ui.label(RichText::new("Caffeine Choices Counts").strong().size(16.0));
        count_table(
            ui,
            "caffeine_counts",
            counts.caffeine.iter().map(|(label, count)| (label, *count)),
            theme,
        );

        // One name table per preference, in the order the server listed them
        for (label, students) in counts.caffeine_students.iter() {
            ui.add_space(8.0);
            ui.label(RichText::new(format!("{} Students:", label)).strong());
            name_table(ui, ("caffeine_students", label), students, theme);
        }
    }
}
