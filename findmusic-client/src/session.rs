use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::debug;

use crate::client::QueryClient;
use crate::error::SearchError;
use crate::render::render;
use crate::status::{error_line, ok_line, SEARCHING};
use crate::view::ResultsView;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank theme: nothing was sent and the view is untouched.
    Ignored,
    Rendered,
    /// The error was written to the status region.
    Failed(SearchError),
    /// A newer submission started while this one was in flight; its result was dropped.
    Superseded,
}

/// Drives one view: begin → await proxy → render or report.
///
/// Submissions may overlap. Each one takes a ticket when it starts and may only
/// write its result if its ticket is still the latest, so the view always ends
/// up showing the most recently started search.
pub struct SearchSession<V> {
    client: QueryClient,
    view: Arc<Mutex<V>>,
    latest: AtomicU64,
}

impl<V: ResultsView> SearchSession<V> {
    pub fn new(client: QueryClient, view: Arc<Mutex<V>>) -> Self {
        Self {
            client,
            view,
            latest: AtomicU64::new(0),
        }
    }

    pub fn view(&self) -> &Arc<Mutex<V>> {
        &self.view
    }

    pub async fn submit(&self, theme: &str) -> SubmitOutcome {
        if theme.trim().is_empty() {
            return SubmitOutcome::Ignored;
        }

        let ticket = {
            let mut view = self.lock_view();
            let ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
            view.show_status(SEARCHING);
            view.clear_results();
            ticket
        };
        debug!(target: "findmusic_client", ticket, "search started");

        let result = self.client.submit(theme).await;

        let mut view = self.lock_view();
        if self.latest.load(Ordering::SeqCst) != ticket {
            debug!(target: "findmusic_client", ticket, "stale response dropped");
            return SubmitOutcome::Superseded;
        }
        match result {
            Ok(response) => {
                view.show_status(&ok_line(&response));
                view.show_main(&render(&response.results_main));
                view.show_secondary(&render(&response.results_secondary));
                debug!(target: "findmusic_client", ticket, "search rendered");
                SubmitOutcome::Rendered
            }
            Err(SearchError::Validation) => SubmitOutcome::Ignored,
            Err(err) => {
                view.show_status(&error_line(&err));
                debug!(target: "findmusic_client", ticket, error = %err, "search failed");
                SubmitOutcome::Failed(err)
            }
        }
    }

    // A panic inside a view must not wedge later searches.
    fn lock_view(&self) -> MutexGuard<'_, V> {
        self.view.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
