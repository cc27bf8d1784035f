//! Dashboard view-controller: UI state, the requests it issues, and the
//! worker that runs them off the UI thread.

mod requests;
mod state;
mod worker;

#[cfg(test)]
mod tests;

pub use requests::{
    execute, ApiRequest, ApiResponse, PendingRequest, RequestKey, RequestTicket, RequestTracker,
};
pub use state::{
    ActiveView, DashboardState, StatusKind, StatusMessage, EMPTY_MEAL_COUNTS_MESSAGE,
    MENU_NETWORK_ERROR_MESSAGE, SUBMIT_ERROR_MESSAGE,
};
pub use worker::{ApiWorker, Completion, SharedApi};
