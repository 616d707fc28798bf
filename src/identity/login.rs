use std::sync::Arc;

use tracing::{debug, warn};

use super::session::SessionCache;
use crate::config::{ClientSettings, LoginType};
use crate::domain::Session;
use crate::error::{SdkError, SdkResult};
use crate::providers::{CredentialsValidator, LoginService};

/// Picks the login flow for the configured `LoginType` and commits the result to the cache.
pub struct LoginStrategySelector {
    login_type: LoginType,
    username: String,
    password: String,
    use_kerberos: bool,
    service: Arc<dyn LoginService>,
    validator: Arc<dyn CredentialsValidator>,
    cache: Arc<SessionCache>,
}

impl LoginStrategySelector {
    pub fn new(
        settings: &ClientSettings,
        service: Arc<dyn LoginService>,
        validator: Arc<dyn CredentialsValidator>,
        cache: Arc<SessionCache>,
    ) -> Self {
        Self {
            login_type: settings.login_type,
            username: settings.username.clone(),
            password: settings.password.clone(),
            use_kerberos: settings.use_kerberos,
            service,
            validator,
            cache,
        }
    }

    pub fn cache(&self) -> &Arc<SessionCache> { &self.cache }

    /// Return the cached session, or log in and cache the new one.
    pub fn ensure_session(&self) -> SdkResult<Arc<Session>> {
        if let Some(session) = self.cache.get() {
            return Ok(session);
        }
        let session = self.login()?;
        Ok(self.cache.store(session))
    }

    /// Drop `stale` from the cache (if still current) and log in again.
    pub fn refresh(&self, stale: &Arc<Session>) -> SdkResult<Arc<Session>> {
        self.cache.invalidate(stale);
        self.ensure_session()
    }

    fn login(&self) -> SdkResult<Session> {
        debug!(target: "cxsdk::identity", login_type = %self.login_type, "auth.login begin");
        let result = match self.login_type {
            LoginType::Credentials if self.use_kerberos => self.service.login(),
            LoginType::Credentials => self
                .validator
                .validate(&self.username, &self.password)
                .and_then(|()| self.service.login()),
            LoginType::Sso => self.service.sso_login(),
            LoginType::Saml => self.service.saml_login(),
        };
        match result {
            Ok(session) => {
                debug!(target: "cxsdk::identity", login_type = %self.login_type, sid = %session.session_id, "auth.login ok");
                Ok(session)
            }
            Err(err) => {
                warn!(target: "cxsdk::identity", login_type = %self.login_type, error = %err, "auth.login failed");
                Err(match err {
                    SdkError::Authentication(_) => err,
                    other => SdkError::Authentication(other.to_string()),
                })
            }
        }
    }
}
