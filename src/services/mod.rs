// Service module exports

pub mod api;
pub mod settings;
