//! State machine coordinating fetch, render and filter.
//!
//! ```text
//! Idle -> Loading -> Loaded
//!            ^   \-> Failed
//!            |          |
//!            +- reload -+
//! ```
//!
//! The controller owns the cache of the last successful fetch and the view. It does
//! not perform I/O itself: a load is split into [`Controller::begin_load`], which
//! hands out a [`Ticket`], and [`Controller::finish_load`], which applies the outcome
//! only if the ticket is still current.

use super::{
    fetcher::{FetchError, UserSource},
    filter::filter,
    model::UserRecord,
    render::{render, Content},
    view::View,
};
use tracing::{debug, error, info};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Why a load was started.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    Startup,
    Reload,
}

/// Identifies one load; superseded tickets are ignored by [`Controller::finish_load`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

pub struct Controller<V: View> {
    view: V,
    state: State,
    cache: Vec<UserRecord>,
    generation: u64,
}

impl<V: View> Controller<V> {
    pub fn new(view: V) -> Self {
        Self {
            view,
            state: State::Idle,
            cache: Vec::new(),
            generation: 0,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Records from the last successful fetch.
    pub fn cache(&self) -> &[UserRecord] {
        &self.cache
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// Enters `Loading`: shows the loading indicator, hides any error and clears the
    /// cards. A reload also clears the search text.
    pub fn begin_load(&mut self, trigger: Trigger) -> Ticket {
        self.generation += 1;
        debug!(?trigger, generation = self.generation, from = ?self.state, "loading users");

        self.state = State::Loading;
        self.view.show_loading();
        self.view.hide_error();
        self.view.replace_content(Content::Cleared);
        if trigger == Trigger::Reload {
            self.view.clear_input();
        }

        Ticket(self.generation)
    }

    /// Applies the outcome of a load. Returns `false` if `ticket` was superseded and
    /// the outcome was discarded.
    pub fn finish_load(
        &mut self,
        ticket: Ticket,
        result: Result<Vec<UserRecord>, FetchError>,
    ) -> bool {
        if ticket.0 != self.generation || self.state != State::Loading {
            debug!(ticket = ticket.0, current = self.generation, "discarding stale load");
            return false;
        }

        match result {
            Ok(users) => {
                info!(count = users.len(), "users loaded");
                self.cache = users;
                self.state = State::Loaded;
                self.view.replace_content(render(&self.cache));
                self.view.hide_loading();
            }
            Err(err) => {
                error!(kind = ?err.kind(), "Error fetching user data: {err}");
                self.state = State::Failed;
                self.view.hide_loading();
                self.view.show_error(&err.to_string());
            }
        }

        true
    }

    /// Runs a whole load against `source`.
    pub async fn load<S: UserSource>(&mut self, source: &S, trigger: Trigger) -> State {
        let ticket = self.begin_load(trigger);
        let result = source.fetch_users().await;
        self.finish_load(ticket, result);
        self.state
    }

    /// Handles a change of the search text. Only a loaded controller re-renders; in
    /// any other state the text is only stored. A successful load always shows the
    /// full cache, so stored text takes effect on the next change.
    pub fn on_input(&mut self, text: &str) {
        self.view.set_input_text(text);
        if self.state == State::Loaded {
            self.refresh();
        }
    }

    fn refresh(&mut self) {
        let term = self.view.input_text();
        let visible = filter(&term, &self.cache);
        debug!(term = %term, shown = visible.len(), total = self.cache.len(), "rendering users");
        self.view.replace_content(render(visible));
    }
}
