// Module exports for models

pub mod meal_count;
pub mod menu;
pub mod settings;
pub mod weekday;
