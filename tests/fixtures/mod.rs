// Test fixtures - reusable test data
// Provides consistent API payloads and a scripted backend for integration tests

#![allow(dead_code)]

use meal_admin::models::meal_count::MealCounts;
use meal_admin::models::menu::{MenuDraft, MenuLookup, MenuSubmission};
use meal_admin::models::weekday::Weekday;
use meal_admin::services::api::{ApiError, ConnectionStatus, MealApi};
use std::collections::HashMap;
use std::sync::Mutex;

/// Sample response bodies as the backend sends them
pub mod payloads {
    /// Tomorrow's counts with two caffeine preferences, in server order
    pub fn meal_counts() -> &'static str {
        r#"{
            "date": "2026-10-20",
            "veg": 3,
            "non_veg": 1,
            "veg_students": ["Asha", "Ben", "Chen"],
            "non_veg_students": ["Dev"],
            "caffeine": {"Tea": 2, "Coffee": 1},
            "caffeine_students": {"Tea": ["Asha", "Dev"], "Coffee": ["Ben"]}
        }"#
    }

    /// Monday's menu as returned by `GET /menu/Monday`
    pub fn monday_menu() -> &'static str {
        r#"{
            "weekday": "Monday",
            "breakfast": "Idli",
            "lunch": "Rice & Dal",
            "snacks": null,
            "dinner": "Chapati"
        }"#
    }
}

/// Draft matching [`payloads::monday_menu`]
pub fn monday_draft() -> MenuDraft {
    MenuDraft {
        breakfast: "Idli".to_string(),
        lunch: "Rice & Dal".to_string(),
        snacks: String::new(),
        dinner: "Chapati".to_string(),
    }
}

/// Calls made against [`FakeMealApi`], in arrival order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    MealCounts,
    Menu(Weekday),
    SaveMenu(MenuSubmission),
    CheckConnection,
}

/// In-memory backend: stores saved menus, answers 404 for days without one.
pub struct FakeMealApi {
    counts: Option<MealCounts>,
    menus: Mutex<HashMap<Weekday, MenuDraft>>,
    calls: Mutex<Vec<Call>>,
}

impl FakeMealApi {
    pub fn new(counts: Option<MealCounts>) -> Self {
        Self {
            counts,
            menus: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_menu(self, weekday: Weekday, draft: MenuDraft) -> Self {
        self.menus.lock().unwrap().insert(weekday, draft);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn stored_menu(&self, weekday: Weekday) -> Option<MenuDraft> {
        self.menus.lock().unwrap().get(&weekday).cloned()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

impl MealApi for FakeMealApi {
    fn meal_counts_tomorrow(&self) -> Result<Option<MealCounts>, ApiError> {
        self.record(Call::MealCounts);
        Ok(self.counts.clone())
    }

    fn menu(&self, weekday: Weekday) -> Result<MenuLookup, ApiError> {
        self.record(Call::Menu(weekday));
        Ok(match self.menus.lock().unwrap().get(&weekday) {
            Some(draft) => MenuLookup::Found(draft.clone()),
            None => MenuLookup::Missing,
        })
    }

    fn save_menu(&self, submission: &MenuSubmission) -> Result<String, ApiError> {
        self.record(Call::SaveMenu(submission.clone()));
        let draft = MenuDraft {
            breakfast: submission.breakfast.clone(),
            lunch: submission.lunch.clone(),
            snacks: submission.snacks.clone(),
            dinner: submission.dinner.clone(),
        };
        self.menus
            .lock()
            .unwrap()
            .insert(submission.weekday, draft);
        Ok(format!("Menu for {} saved successfully", submission.weekday))
    }

    fn check_connection(&self) -> Result<ConnectionStatus, ApiError> {
        self.record(Call::CheckConnection);
        Ok(ConnectionStatus {
            status: "connected".to_string(),
            time: Some("2026-10-19T09:30:00".to_string()),
            error: None,
        })
    }
}

/// Backend that is never reachable
pub struct UnreachableMealApi;

impl MealApi for UnreachableMealApi {
    fn meal_counts_tomorrow(&self) -> Result<Option<MealCounts>, ApiError> {
        Err(ApiError::Transport("connection refused".to_string()))
    }

    fn menu(&self, _weekday: Weekday) -> Result<MenuLookup, ApiError> {
        Err(ApiError::Transport("connection refused".to_string()))
    }

    fn save_menu(&self, _submission: &MenuSubmission) -> Result<String, ApiError> {
        Err(ApiError::Transport("connection refused".to_string()))
    }

    fn check_connection(&self) -> Result<ConnectionStatus, ApiError> {
        Err(ApiError::Transport("connection refused".to_string()))
    }
}
