//! Requests the dashboard asks the worker to run, and their outcomes.
//!
//! Every request is issued with a [`RequestTicket`]. A result is only applied
//! when its ticket is still the newest for that resource, so a slow response
//! can never overwrite the result of a request issued after it.

use std::collections::HashMap;

use crate::models::meal_count::MealCounts;
use crate::models::menu::{MenuLookup, MenuSubmission};
use crate::models::weekday::Weekday;
use crate::services::api::{ApiError, ConnectionStatus, MealApi};

/// Resource a request reads or writes. Newer tickets supersede older ones per key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKey {
    MealCounts,
    Menu,
    SaveMenu,
    Connection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    pub key: RequestKey,
    pub seq: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    LoadMealCounts,
    LoadMenu(Weekday),
    SaveMenu(MenuSubmission),
    CheckConnection,
}

impl ApiRequest {
    pub fn key(&self) -> RequestKey {
        match self {
            Self::LoadMealCounts => RequestKey::MealCounts,
            Self::LoadMenu(_) => RequestKey::Menu,
            Self::SaveMenu(_) => RequestKey::SaveMenu,
            Self::CheckConnection => RequestKey::Connection,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::LoadMealCounts => "GET /mealcount/tomorrow".to_string(),
            Self::LoadMenu(weekday) => format!("GET /menu/{}", weekday),
            Self::SaveMenu(submission) => format!("POST /menu ({})", submission.weekday),
            Self::CheckConnection => "GET /test-db".to_string(),
        }
    }
}

/// A request paired with the ticket its result must be applied with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub ticket: RequestTicket,
    pub request: ApiRequest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse {
    MealCounts(Result<Option<MealCounts>, ApiError>),
    Menu {
        weekday: Weekday,
        result: Result<MenuLookup, ApiError>,
    },
    MenuSaved {
        weekday: Weekday,
        result: Result<String, ApiError>,
    },
    Connection(Result<ConnectionStatus, ApiError>),
}

/// Run a request to completion against `api`. Blocks the calling thread.
pub fn execute(api: &dyn MealApi, request: &ApiRequest) -> ApiResponse {
    match request {
        ApiRequest::LoadMealCounts => ApiResponse::MealCounts(api.meal_counts_tomorrow()),
        ApiRequest::LoadMenu(weekday) => ApiResponse::Menu {
            weekday: *weekday,
            result: api.menu(*weekday),
        },
        ApiRequest::SaveMenu(submission) => ApiResponse::MenuSaved {
            weekday: submission.weekday,
            result: api.save_menu(submission),
        },
        ApiRequest::CheckConnection => ApiResponse::Connection(api.check_connection()),
    }
}

/// Hands out tickets and remembers the newest one per key.
#[derive(Debug, Default)]
pub struct RequestTracker {
    next_seq: u64,
    latest: HashMap<RequestKey, u64>,
    in_flight: usize,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self, request: ApiRequest) -> PendingRequest {
        self.next_seq += 1;
        let ticket = RequestTicket {
            key: request.key(),
            seq: self.next_seq,
        };
        self.latest.insert(ticket.key, ticket.seq);
        self.in_flight += 1;

        log::debug!("Issued request #{}: {}", ticket.seq, request.describe());
        PendingRequest { ticket, request }
    }

    /// Mark a ticket finished. Returns whether it is still the newest for its key.
    pub fn complete(&mut self, ticket: RequestTicket) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.latest.get(&ticket.key) == Some(&ticket.seq)
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }
}
