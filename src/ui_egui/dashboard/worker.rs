//! Background execution of dashboard requests.
//!
//! Each request runs on its own thread so a slow or hung call only delays its
//! own result. Results come back over a channel that the UI polls once per frame.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::services::api::MealApi;

use super::requests::{execute, ApiResponse, PendingRequest, RequestTicket};

pub type SharedApi = Arc<dyn MealApi + Send + Sync>;

pub type Completion = (RequestTicket, ApiResponse);

pub struct ApiWorker {
    api: SharedApi,
    tx: Sender<Completion>,
    rx: Receiver<Completion>,
}

impl ApiWorker {
    pub fn new(api: SharedApi) -> Self {
        let (tx, rx) = mpsc::channel();
        Self { api, tx, rx }
    }

    /// Replace the API used for future requests. Requests already running
    /// finish against the previous one.
    pub fn set_api(&mut self, api: SharedApi) {
        self.api = api;
    }

    /// Run `pending` on a worker thread. When `repaint` is given, the UI is
    /// woken as soon as the result is queued.
    pub fn dispatch(&self, pending: PendingRequest, repaint: Option<egui::Context>) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();

        thread::spawn(move || {
            let response = execute(api.as_ref(), &pending.request);
            log::debug!(
                "Request #{} finished: {}",
                pending.ticket.seq,
                pending.request.describe()
            );

            if tx.send((pending.ticket, response)).is_err() {
                log::debug!("Dashboard closed before request #{} finished", pending.ticket.seq);
                return;
            }

            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });
    }

    /// Results that have arrived since the last call, without blocking.
    pub fn drain(&self) -> Vec<Completion> {
        self.rx.try_iter().collect()
    }

    /// Block until the next result arrives or `timeout` elapses.
    pub fn wait(&self, timeout: Duration) -> Option<Completion> {
        match self.rx.recv_timeout(timeout) {
            Ok(completion) => Some(completion),
            Err(RecvTimeoutError::Timeout) => None,
            // Unreachable while `self.tx` is alive
            Err(RecvTimeoutError::Disconnected) => None,
        }
    }
}
