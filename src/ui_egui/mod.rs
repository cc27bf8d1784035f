mod app;
pub mod dashboard;
pub mod settings_dialog;
pub mod theme;
pub mod views;

pub use app::MealAdminApp;
