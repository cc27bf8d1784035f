//! Client side of the meal API.
//!
//! [`MealApi`] is the seam between the dashboard and the network: the app runs
//! it on worker threads through [`HttpMealApi`], tests substitute a mock.
//! Status/content-type/body interpretation lives in [`response`] so it can be
//! exercised without a server.

pub mod client;
pub mod response;

use serde::Deserialize;
use thiserror::Error;

use crate::models::meal_count::MealCounts;
use crate::models::menu::{MenuLookup, MenuSubmission};
use crate::models::weekday::Weekday;

pub use client::HttpMealApi;

/// Request failures, by where they happened.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("HTTP error! status: {status}{}", body_suffix(.body))]
    Http { status: u16, body: String },

    #[error("received non-JSON response (content type: {0})")]
    UnexpectedContentType(String),

    #[error("network error: {0}")]
    Transport(String),

    #[error("invalid response body: {0}")]
    Decode(String),
}

fn body_suffix(body: &str) -> String {
    if body.is_empty() {
        String::new()
    } else {
        format!(", body: {}", body)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Body of `GET /test-db`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConnectionStatus {
    pub status: String,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ConnectionStatus {
    pub fn is_connected(&self) -> bool {
        self.status == "connected"
    }
}

/// Operations the dashboard needs from the backend.
#[cfg_attr(test, mockall::automock)]
pub trait MealApi {
    /// `GET /mealcount/tomorrow`. `Ok(None)` means the server sent an empty body.
    fn meal_counts_tomorrow(&self) -> Result<Option<MealCounts>, ApiError>;

    /// `GET /menu/{weekday}`
    fn menu(&self, weekday: Weekday) -> Result<MenuLookup, ApiError>;

    /// `POST /menu`, returning the server's confirmation message.
    fn save_menu(&self, submission: &MenuSubmission) -> Result<String, ApiError>;

    /// `GET /test-db`
    fn check_connection(&self) -> Result<ConnectionStatus, ApiError>;
}
