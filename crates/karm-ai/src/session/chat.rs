//! The submit lifecycle: the only state-changing entry point.

use karm_common::new_correlation_id;
use tracing::{debug, warn};

use crate::{HistoryMessage, Turn};

use super::manager::SessionOrchestrator;
use super::types::{BusyGuard, CONNECTION_FALLBACK};

impl SessionOrchestrator {
    /// Submit a user utterance.
    ///
    /// Silently ignored when the trimmed text is empty or another request
    /// is in flight. The busy check lives here, not in any UI
    /// affordance, so every entry point into the session respects it.
    /// Failures never propagate: they become a fallback assistant turn
    /// and the session stays usable.
    pub async fn submit(&self, text: &str) {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return;
        }

        let Some(_busy) = BusyGuard::acquire(&self.busy) else {
            debug!(session = %self.id, "submit rejected: request already in flight");
            return;
        };

        // Commit the user turn. The history view is taken first so the
        // utterance in flight is never part of it.
        let history: Vec<HistoryMessage> = {
            let mut log = self.log.lock().unwrap();
            let history = log.history().collect();
            log.append(Turn::user(trimmed));
            history
        };
        self.publish();

        let correlation = new_correlation_id();
        debug!(session = %self.id, %correlation, "sending chat request");

        let reply = match self.client.invoke(&self.policy, &history, trimmed).await {
            Ok(text) => text,
            Err(e) => {
                warn!(session = %self.id, %correlation, error = %e, "chat request failed");
                CONNECTION_FALLBACK.to_string()
            }
        };

        {
            let mut log = self.log.lock().unwrap();
            log.append(Turn::assistant(reply));
        }

        // Release the busy flag before the settled snapshot goes out.
        drop(_busy);
        self.publish();
    }
}
