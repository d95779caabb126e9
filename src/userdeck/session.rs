//! Event loop for interactive use. One task owns the controller; fetches run on
//! spawned tasks and report back through a channel, so input keeps flowing while
//! a request is outstanding.

use super::{
    controller::{Controller, Ticket, Trigger},
    fetcher::{FetchError, UserSource},
    model::UserRecord,
    view::View,
};
use std::sync::Arc;
use tokio::{
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
    task::JoinHandle,
};
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Reload,
    Input(String),
    Quit,
}

type Outcome = (Ticket, Result<Vec<UserRecord>, FetchError>);

pub struct Session<S: UserSource, V: View> {
    source: Arc<S>,
    controller: Controller<V>,
    in_flight: Option<JoinHandle<()>>,
    outcomes_tx: UnboundedSender<Outcome>,
    outcomes_rx: UnboundedReceiver<Outcome>,
}

impl<S: UserSource, V: View> Session<S, V> {
    pub fn new(source: Arc<S>, view: V) -> Self {
        let (outcomes_tx, outcomes_rx) = mpsc::unbounded_channel();
        Self {
            source,
            controller: Controller::new(view),
            in_flight: None,
            outcomes_tx,
            outcomes_rx,
        }
    }

    /// Loads once, then handles `events` until `Quit` or until the sender side is
    /// dropped. Returns the controller in its final state.
    pub async fn run(mut self, mut events: mpsc::Receiver<Event>) -> Controller<V> {
        self.start(Trigger::Startup);

        loop {
            tokio::select! {
                event = events.recv() => match event {
                    Some(Event::Reload) => self.start(Trigger::Reload),
                    Some(Event::Input(text)) => self.controller.on_input(&text),
                    Some(Event::Quit) | None => break,
                },
                Some((ticket, result)) = self.outcomes_rx.recv() => {
                    self.controller.finish_load(ticket, result);
                }
            }
        }

        self.abort_in_flight();
        self.controller
    }

    fn start(&mut self, trigger: Trigger) {
        // Cancel-on-supersede: the older request can no longer affect the view.
        self.abort_in_flight();

        let ticket = self.controller.begin_load(trigger);
        let source = Arc::clone(&self.source);
        let tx = self.outcomes_tx.clone();

        self.in_flight = Some(tokio::spawn(async move {
            let result = source.fetch_users().await;
            // The receiver only goes away when the session ends.
            let _ = tx.send((ticket, result));
        }));
    }

    fn abort_in_flight(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            if !handle.is_finished() {
                debug!("aborting superseded fetch");
            }
            handle.abort();
        }
    }
}
