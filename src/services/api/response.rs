// Interpretation of raw HTTP responses from the meal API

use crate::models::meal_count::MealCounts;
use crate::models::menu::{MenuDraft, MenuLookup, MenuResponse, SaveMenuResponse};

use super::{ApiError, ConnectionStatus};

const STATUS_NOT_FOUND: u16 = 404;

/// Status line, content type and body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, content_type: Option<&str>, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: content_type.map(str::to_string),
            body: body.into(),
        }
    }

    /// Shorthand for an `application/json` response.
    pub fn json(status: u16, body: impl Into<String>) -> Self {
        Self::new(status, Some("application/json"), body)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .map(|value| value.to_ascii_lowercase().contains("application/json"))
            .unwrap_or(false)
    }

    fn http_error(&self) -> ApiError {
        ApiError::Http {
            status: self.status,
            body: self.body.trim().to_string(),
        }
    }
}

/// `GET /mealcount/tomorrow`: anything but a JSON 2xx is an error.
pub fn meal_counts(raw: &RawResponse) -> Result<Option<MealCounts>, ApiError> {
    if !raw.is_success() {
        return Err(raw.http_error());
    }

    if !raw.is_json() {
        log::error!("Non-JSON response for meal counts: {}", raw.body);
        return Err(ApiError::UnexpectedContentType(
            raw.content_type.clone().unwrap_or_else(|| "none".to_string()),
        ));
    }

    if raw.body.trim().is_empty() {
        return Ok(None);
    }

    Ok(serde_json::from_str::<Option<MealCounts>>(&raw.body)?)
}

/// `GET /menu/{weekday}`: 404 means no menu has been stored yet.
pub fn menu(raw: &RawResponse) -> Result<MenuLookup, ApiError> {
    if raw.status == STATUS_NOT_FOUND {
        return Ok(MenuLookup::Missing);
    }

    if !raw.is_success() {
        return Err(raw.http_error());
    }

    let response: MenuResponse = serde_json::from_str(&raw.body)?;
    Ok(MenuLookup::Found(MenuDraft::from(response)))
}

/// `POST /menu`
pub fn save_menu(raw: &RawResponse) -> Result<String, ApiError> {
    if !raw.is_success() {
        return Err(raw.http_error());
    }

    let response: SaveMenuResponse = serde_json::from_str(&raw.body)?;
    Ok(response.message)
}

/// `GET /test-db`
pub fn connection(raw: &RawResponse) -> Result<ConnectionStatus, ApiError> {
    if !raw.is_success() {
        return Err(raw.http_error());
    }

    Ok(serde_json::from_str(&raw.body)?)
}
