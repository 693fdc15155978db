//! Orchestrator struct and snapshot publishing.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use karm_common::SessionId;
use tokio::sync::watch;
use tracing::debug;

use crate::log::MessageLog;
use crate::{ChatModel, PolicyConfig};

use super::types::SessionSnapshot;

/// Owns the session (turn log + busy flag) and runs the submit
/// lifecycle. The model client is an injected dependency so tests can
/// substitute a fake.
pub struct SessionOrchestrator {
    /// Turn log. The lock is held only for synchronous appends and
    /// reads, never across an await point.
    pub(super) log: Mutex<MessageLog>,
    /// Whether a remote invocation is currently outstanding.
    pub(super) busy: AtomicBool,
    pub(super) policy: PolicyConfig,
    pub(super) client: Arc<dyn ChatModel>,
    pub(super) id: SessionId,
    snapshot_tx: watch::Sender<SessionSnapshot>,
}

impl SessionOrchestrator {
    pub fn new(policy: PolicyConfig, client: Arc<dyn ChatModel>) -> Self {
        let (snapshot_tx, _) = watch::channel(SessionSnapshot::default());
        let id = SessionId::new();
        debug!(session = %id, model = %policy.model(), "session created");
        Self {
            log: Mutex::new(MessageLog::new()),
            busy: AtomicBool::new(false),
            policy,
            client,
            id,
            snapshot_tx,
        }
    }

    /// Current immutable view of the session.
    pub fn snapshot(&self) -> SessionSnapshot {
        let log = self.log.lock().unwrap();
        SessionSnapshot {
            turns: log.turns().to_vec(),
            busy: self.busy.load(Ordering::Acquire),
        }
    }

    /// Watch receiver fed a fresh snapshot after every transition.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshot_tx.subscribe()
    }

    pub fn busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub(super) fn publish(&self) {
        self.snapshot_tx.send_replace(self.snapshot());
    }
}
