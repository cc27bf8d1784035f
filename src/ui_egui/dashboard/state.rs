use chrono::NaiveDate;

use crate::models::meal_count::MealCounts;
use crate::models::menu::{MenuDraft, MenuField, MenuLookup, MenuSubmission};
use crate::models::weekday::Weekday;
use crate::services::api::{ApiError, ConnectionStatus};

use super::requests::{ApiRequest, ApiResponse, PendingRequest, RequestTicket, RequestTracker};

pub const EMPTY_MEAL_COUNTS_MESSAGE: &str = "Received empty or invalid data for meal counts.";
pub const MENU_NETWORK_ERROR_MESSAGE: &str = "Error fetching menu: Network or server issue.";
pub const SUBMIT_ERROR_MESSAGE: &str = "Error submitting menu.";

/// Which panel is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    MealCounts,
    EditMenu,
}

impl ActiveView {
    pub fn label(&self) -> &'static str {
        match self {
            Self::MealCounts => "Meal Counts",
            Self::EditMenu => "Edit Menu",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// User-facing outcome of the most recent operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Info,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Error,
        }
    }
}

/// All dashboard UI state.
///
/// Operations that need the network return the [`PendingRequest`]s to run;
/// the caller executes them and feeds each outcome back through
/// [`DashboardState::apply`]. Nothing here blocks or performs I/O.
#[derive(Debug, Default)]
pub struct DashboardState {
    active_view: ActiveView,
    weekday: Weekday,
    draft: MenuDraft,
    /// Weekday whose server state `draft` was last loaded from.
    draft_weekday: Option<Weekday>,
    meal_counts: Option<MealCounts>,
    status: Option<StatusMessage>,
    /// Menu reload issued after a successful save; its response keeps the
    /// save confirmation instead of clearing it.
    reload_after_save: Option<RequestTicket>,
    requests: RequestTracker,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_view(&self) -> ActiveView {
        self.active_view
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    pub fn draft(&self) -> &MenuDraft {
        &self.draft
    }

    pub fn meal_counts(&self) -> Option<&MealCounts> {
        self.meal_counts.as_ref()
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn in_flight(&self) -> usize {
        self.requests.in_flight()
    }

    /// Requests for the initial view.
    pub fn start(&mut self) -> Vec<PendingRequest> {
        match self.active_view {
            ActiveView::MealCounts => vec![self.load_meal_counts()],
            ActiveView::EditMenu => vec![self.load_menu()],
        }
    }

    /// Switch to the meal counts panel and always fetch a fresh snapshot.
    pub fn refresh_meal_counts(&mut self) -> PendingRequest {
        self.active_view = ActiveView::MealCounts;
        self.load_meal_counts()
    }

    /// Switch to the menu editor. Loads the selected weekday when the view changes.
    pub fn show_edit_menu(&mut self) -> Option<PendingRequest> {
        if self.active_view == ActiveView::EditMenu {
            return None;
        }
        self.active_view = ActiveView::EditMenu;
        Some(self.load_menu())
    }

    /// Reload whatever the active panel shows.
    pub fn refresh_active_view(&mut self) -> PendingRequest {
        match self.active_view {
            ActiveView::MealCounts => self.load_meal_counts(),
            ActiveView::EditMenu => self.load_menu(),
        }
    }

    /// Change the weekday. In the menu editor this immediately issues a load for it.
    pub fn select_weekday(&mut self, weekday: Weekday) -> Option<PendingRequest> {
        if weekday == self.weekday {
            return None;
        }
        self.weekday = weekday;

        match self.active_view {
            ActiveView::EditMenu => {
                self.status = None;
                Some(self.load_menu())
            }
            ActiveView::MealCounts => None,
        }
    }

    /// Open the editor on the menu for the day after `today`.
    pub fn edit_tomorrows_menu(&mut self, today: NaiveDate) -> Option<PendingRequest> {
        let tomorrow = Weekday::tomorrow_from(today);
        if self.active_view == ActiveView::EditMenu {
            return self.select_weekday(tomorrow);
        }
        self.weekday = tomorrow;
        self.show_edit_menu()
    }

    pub fn update_draft_field(&mut self, field: MenuField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Direct binding for text inputs; same effect as [`Self::update_draft_field`].
    pub fn draft_field_mut(&mut self, field: MenuField) -> &mut String {
        self.draft.field_mut(field)
    }

    /// Whether the draft holds data for the selected weekday, so a submit cannot
    /// send one day's meals under another day's name.
    pub fn can_submit(&self) -> bool {
        self.active_view == ActiveView::EditMenu && self.draft_weekday == Some(self.weekday)
    }

    pub fn submit_menu(&mut self) -> Option<PendingRequest> {
        if !self.can_submit() {
            log::debug!(
                "Ignoring submit: menu for {} has not been loaded yet",
                self.weekday
            );
            return None;
        }

        self.status = None;
        let submission = MenuSubmission::new(&self.draft, self.weekday);
        Some(self.requests.issue(ApiRequest::SaveMenu(submission)))
    }

    pub fn check_connection(&mut self) -> PendingRequest {
        self.requests.issue(ApiRequest::CheckConnection)
    }

    /// Apply a finished request. Returns follow-up requests to run.
    pub fn apply(&mut self, ticket: RequestTicket, response: ApiResponse) -> Vec<PendingRequest> {
        if !self.requests.complete(ticket) {
            log::debug!("Discarding superseded response #{} ({:?})", ticket.seq, ticket.key);
            return Vec::new();
        }

        match response {
            ApiResponse::MealCounts(result) => {
                self.apply_meal_counts(result);
                Vec::new()
            }
            ApiResponse::Menu { weekday, result } => {
                self.apply_menu(ticket, weekday, result);
                Vec::new()
            }
            ApiResponse::MenuSaved { weekday, result } => self.apply_menu_saved(weekday, result),
            ApiResponse::Connection(result) => {
                self.apply_connection(result);
                Vec::new()
            }
        }
    }

    fn load_meal_counts(&mut self) -> PendingRequest {
        self.requests.issue(ApiRequest::LoadMealCounts)
    }

    fn load_menu(&mut self) -> PendingRequest {
        self.requests.issue(ApiRequest::LoadMenu(self.weekday))
    }

    fn apply_meal_counts(&mut self, result: Result<Option<MealCounts>, ApiError>) {
        if self.active_view != ActiveView::MealCounts {
            log::debug!("Discarding meal counts response: view changed");
            return;
        }

        match result {
            Ok(Some(counts)) => {
                log::debug!("Received meal counts data: {:?}", counts);
                self.meal_counts = Some(counts);
            }
            Ok(None) => {
                log::warn!("Meal counts response was empty");
                self.status = Some(StatusMessage::info(EMPTY_MEAL_COUNTS_MESSAGE));
            }
            Err(err) => {
                log::warn!("Error fetching meal counts: {}", err);
                self.status = Some(StatusMessage::error(format!(
                    "Error fetching meal counts: {}",
                    err
                )));
            }
        }
    }

    fn apply_menu(
        &mut self,
        ticket: RequestTicket,
        weekday: Weekday,
        result: Result<MenuLookup, ApiError>,
    ) {
        let is_reload_after_save = self.reload_after_save.take() == Some(ticket);

        if self.active_view != ActiveView::EditMenu || weekday != self.weekday {
            log::debug!("Discarding menu response for {}: selection changed", weekday);
            return;
        }

        match result {
            Ok(MenuLookup::Found(draft)) => {
                log::info!("Loaded menu for {}", weekday);
                self.draft = draft;
                self.draft_weekday = Some(weekday);
                if !is_reload_after_save {
                    self.status = None;
                }
            }
            Ok(MenuLookup::Missing) => {
                log::info!("No menu stored for {}", weekday);
                self.draft = MenuDraft::default();
                self.draft_weekday = Some(weekday);
                self.status = Some(StatusMessage::info(format!(
                    "No menu found for {}. You can create one.",
                    weekday
                )));
            }
            Err(ApiError::Http { status, body }) => {
                log::warn!("Error fetching menu for {}: HTTP {} {}", weekday, status, body);
                self.status = Some(StatusMessage::error(format!(
                    "Error fetching menu (HTTP {}).",
                    status
                )));
            }
            Err(err) => {
                log::warn!("Error fetching menu for {}: {}", weekday, err);
                self.status = Some(StatusMessage::error(MENU_NETWORK_ERROR_MESSAGE));
            }
        }
    }

    fn apply_menu_saved(
        &mut self,
        weekday: Weekday,
        result: Result<String, ApiError>,
    ) -> Vec<PendingRequest> {
        match result {
            Ok(message) => {
                log::info!("Saved menu for {}: {}", weekday, message);
                self.status = Some(StatusMessage::success(message));

                // Reload so the form shows what the server actually stored
                if self.active_view == ActiveView::EditMenu && weekday == self.weekday {
                    let reload = self.load_menu();
                    self.reload_after_save = Some(reload.ticket);
                    vec![reload]
                } else {
                    Vec::new()
                }
            }
            Err(err) => {
                log::error!("Error submitting menu for {}: {}", weekday, err);
                self.status = Some(StatusMessage::error(SUBMIT_ERROR_MESSAGE));
                Vec::new()
            }
        }
    }

    fn apply_connection(&mut self, result: Result<ConnectionStatus, ApiError>) {
        self.status = Some(match result {
            Ok(status) if status.is_connected() => StatusMessage::success(format!(
                "Backend connected (server time {})",
                status.time.as_deref().unwrap_or("unknown")
            )),
            Ok(status) => {
                let reason = status.error.unwrap_or_else(|| status.status.clone());
                log::warn!("Backend database unavailable: {}", reason);
                StatusMessage::error(format!("Backend database unavailable: {}", reason))
            }
            Err(err) => {
                log::warn!("Connection check failed: {}", err);
                StatusMessage::error(format!("Error checking backend connection: {}", err))
            }
        });
    }
}
