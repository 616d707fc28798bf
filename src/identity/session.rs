use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::domain::Session;

/// Single-slot holder for the client's current session.
///
/// The lock only guards the slot itself; callers never hold it across a login or a provider
/// call, so concurrent logins may race and the last committed session wins.
#[derive(Debug, Default)]
pub struct SessionCache {
    slot: Mutex<Option<Arc<Session>>>,
}

impl SessionCache {
    pub fn new() -> Self { Self::default() }

    pub fn get(&self) -> Option<Arc<Session>> {
        self.slot.lock().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.slot.lock().is_none()
    }

    pub fn store(&self, session: Session) -> Arc<Session> {
        let session = Arc::new(session);
        let previous = self.slot.lock().replace(session.clone());
        debug!(
            target: "cxsdk::identity",
            sid = %session.session_id,
            replaced = previous.is_some(),
            "session.store"
        );
        session
    }

    /// Clear the slot only if it still holds `stale`. Returns whether it was cleared.
    /// A session committed by someone else in the meantime is left in place.
    pub fn invalidate(&self, stale: &Arc<Session>) -> bool {
        let mut slot = self.slot.lock();
        let matches = slot.as_ref().map(|cur| Arc::ptr_eq(cur, stale)).unwrap_or(false);
        if matches {
            *slot = None;
        }
        debug!(target: "cxsdk::identity", sid = %stale.session_id, cleared = matches, "session.invalidate");
        matches
    }

    pub fn clear(&self) {
        if self.slot.lock().take().is_some() {
            debug!(target: "cxsdk::identity", "session.clear");
        }
    }
}
