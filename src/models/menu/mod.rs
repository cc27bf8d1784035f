// Menu model
// The editable draft for one weekday and the request/response shapes of the menu endpoints

use serde::{Deserialize, Serialize};

use crate::models::weekday::Weekday;

/// One of the four meals a daily menu is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuField {
    Breakfast,
    Lunch,
    Snacks,
    Dinner,
}

impl MenuField {
    pub fn all() -> [MenuField; 4] {
        [Self::Breakfast, Self::Lunch, Self::Snacks, Self::Dinner]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Snacks => "Snacks",
            Self::Dinner => "Dinner",
        }
    }
}

/// In-progress form state for the currently selected weekday.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuDraft {
    pub breakfast: String,
    pub lunch: String,
    pub snacks: String,
    pub dinner: String,
}

impl MenuDraft {
    pub fn field_mut(&mut self, field: MenuField) -> &mut String {
        match field {
            MenuField::Breakfast => &mut self.breakfast,
            MenuField::Lunch => &mut self.lunch,
            MenuField::Snacks => &mut self.snacks,
            MenuField::Dinner => &mut self.dinner,
        }
    }

    pub fn set(&mut self, field: MenuField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }
}

/// Body returned by `GET /menu/{weekday}`. Columns are nullable server-side.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuResponse {
    #[serde(default)]
    pub weekday: Option<String>,
    #[serde(default)]
    pub breakfast: Option<String>,
    #[serde(default)]
    pub lunch: Option<String>,
    #[serde(default)]
    pub snacks: Option<String>,
    #[serde(default)]
    pub dinner: Option<String>,
}

impl From<MenuResponse> for MenuDraft {
    fn from(response: MenuResponse) -> Self {
        Self {
            breakfast: response.breakfast.unwrap_or_default(),
            lunch: response.lunch.unwrap_or_default(),
            snacks: response.snacks.unwrap_or_default(),
            dinner: response.dinner.unwrap_or_default(),
        }
    }
}

/// Outcome of a menu lookup. A missing menu is an expected state, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuLookup {
    Found(MenuDraft),
    Missing,
}

/// Body sent to `POST /menu`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuSubmission {
    pub breakfast: String,
    pub lunch: String,
    pub snacks: String,
    pub dinner: String,
    pub weekday: Weekday,
}

impl MenuSubmission {
    pub fn new(draft: &MenuDraft, weekday: Weekday) -> Self {
        Self {
            breakfast: draft.breakfast.clone(),
            lunch: draft.lunch.clone(),
            snacks: draft.snacks.clone(),
            dinner: draft.dinner.clone(),
            weekday,
        }
    }
}

/// Body returned by `POST /menu`.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveMenuResponse {
    pub message: String,
}
