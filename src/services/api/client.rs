use anyhow::{Context, Result};
use reqwest::blocking::{Client, Response};
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

use crate::models::meal_count::MealCounts;
use crate::models::menu::{MenuLookup, MenuSubmission};
use crate::models::settings::Settings;
use crate::models::weekday::Weekday;

use super::response::{self, RawResponse};
use super::{ApiError, ConnectionStatus, MealApi};

/// Blocking HTTP implementation of [`MealApi`]. Calls block the calling
/// thread, so the UI only invokes it from worker threads.
pub struct HttpMealApi {
    client: Client,
    base_url: String,
}

impl HttpMealApi {
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Client::builder()
            .timeout(settings.request_timeout_secs.map(Duration::from_secs))
            .build()
            .context("Failed to build meal API HTTP client")?;

        Ok(Self {
            client,
            base_url: settings.normalized_base_url(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get(&self, path: &str) -> Result<RawResponse, ApiError> {
        let url = self.endpoint(path);
        log::debug!("GET {}", url);
        let response = self.client.get(&url).send()?;
        read_response(response)
    }
}

fn read_response(response: Response) -> Result<RawResponse, ApiError> {
    let status = response.status().as_u16();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let body = response.text()?;

    log::debug!(
        "Response status={} content_type={:?} bytes={}",
        status,
        content_type,
        body.len()
    );

    Ok(RawResponse {
        status,
        content_type,
        body,
    })
}

impl MealApi for HttpMealApi {
    fn meal_counts_tomorrow(&self) -> Result<Option<MealCounts>, ApiError> {
        let raw = self.get("/mealcount/tomorrow")?;
        response::meal_counts(&raw)
    }

    fn menu(&self, weekday: Weekday) -> Result<MenuLookup, ApiError> {
        let raw = self.get(&format!("/menu/{}", weekday))?;
        response::menu(&raw)
    }

    fn save_menu(&self, submission: &MenuSubmission) -> Result<String, ApiError> {
        let url = self.endpoint("/menu");
        log::debug!("POST {} weekday={}", url, submission.weekday);
        let response = self.client.post(&url).json(submission).send()?;
        let raw = read_response(response)?;
        response::save_menu(&raw)
    }

    fn check_connection(&self) -> Result<ConnectionStatus, ApiError> {
        let raw = self.get("/test-db")?;
        response::connection(&raw)
    }
}
