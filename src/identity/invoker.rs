use std::sync::Arc;

use tracing::{debug, warn};

use super::login::LoginStrategySelector;
use crate::domain::Session;
use crate::error::SdkResult;

/// First execution plus one retry after re-login.
pub const MAX_ATTEMPTS: u32 = 2;

/// Runs session-bound actions, re-authenticating once if the server reports the session
/// as no longer authorized.
pub struct AuthorizedActionInvoker {
    login: Arc<LoginStrategySelector>,
}

impl AuthorizedActionInvoker {
    pub fn new(login: Arc<LoginStrategySelector>) -> Self { Self { login } }

    pub fn selector(&self) -> &Arc<LoginStrategySelector> { &self.login }

    /// Execute `action` with a valid session.
    ///
    /// A login failure is returned as-is. `NotAuthorized` from the action triggers exactly one
    /// re-login and one more execution; whatever that second execution returns is final. Any
    /// other error is returned immediately.
    pub fn invoke<T, F>(&self, mut action: F) -> SdkResult<T>
    where
        F: FnMut(&Session) -> SdkResult<T>,
    {
        let mut session = self.login.ensure_session()?;
        let mut attempt = 1;
        loop {
            match action(session.as_ref()) {
                Ok(value) => return Ok(value),
                Err(err) if err.is_not_authorized() && attempt < MAX_ATTEMPTS => {
                    warn!(
                        target: "cxsdk::identity",
                        sid = %session.session_id,
                        attempt,
                        error = %err,
                        "session rejected; logging in again"
                    );
                    session = self.refresh(&session)?;
                    attempt += 1;
                }
                Err(err) => {
                    debug!(target: "cxsdk::identity", attempt, error = %err, "authorized action failed");
                    return Err(err);
                }
            }
        }
    }

    fn refresh(&self, stale: &Arc<Session>) -> SdkResult<Arc<Session>> {
        self.login.refresh(stale)
    }
}

#[cfg(test)]
#[path = "invoker_tests.rs"]
mod invoker_tests;
