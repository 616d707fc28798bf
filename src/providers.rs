//! Capabilities the client consumes. Implementations own the transport; the client only
//! needs them to return typed results and to report an expired session as
//! `SdkError::NotAuthorized`.

use std::sync::Arc;

use crate::domain::{EngineConfiguration, Preset, Session, Team};
use crate::error::{SdkError, SdkResult};

/// One method per supported login flow. Which one runs is decided by the configured
/// `LoginType`, never by the service.
pub trait LoginService: Send + Sync {
    fn login(&self) -> SdkResult<Session>;
    fn sso_login(&self) -> SdkResult<Session>;
    fn saml_login(&self) -> SdkResult<Session>;
}

pub trait ConfigurationProvider: Send + Sync {
    fn get_engine_configurations(&self, session: &Session) -> SdkResult<Vec<EngineConfiguration>>;
}

pub trait PresetProvider: Send + Sync {
    fn get_presets(&self, session: &Session) -> SdkResult<Vec<Preset>>;
}

pub trait TeamProvider: Send + Sync {
    fn get_teams(&self, session: &Session) -> SdkResult<Vec<Team>>;
}

pub trait ProjectProvider: Send + Sync {
    /// `Ok(false)` means the server rejected the name; errors are reserved for failures.
    fn is_valid_project_name(&self, session: &Session, project_name: &str, team_id: &str) -> SdkResult<bool>;
}

/// Pre-login check of configured credentials for the username/password flow.
pub trait CredentialsValidator: Send + Sync {
    fn validate(&self, username: &str, password: &str) -> SdkResult<()>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NonEmptyCredentialsValidator;

impl CredentialsValidator for NonEmptyCredentialsValidator {
    fn validate(&self, username: &str, password: &str) -> SdkResult<()> {
        if username.is_empty() || password.is_empty() {
            return Err(SdkError::authentication("username and password are required for credentials login"));
        }
        Ok(())
    }
}

/// The set of collaborators a client is wired with.
#[derive(Clone)]
pub struct Providers {
    pub login: Arc<dyn LoginService>,
    pub configurations: Arc<dyn ConfigurationProvider>,
    pub presets: Arc<dyn PresetProvider>,
    pub teams: Arc<dyn TeamProvider>,
    pub projects: Arc<dyn ProjectProvider>,
    pub credentials_validator: Arc<dyn CredentialsValidator>,
}

impl Providers {
    pub fn new(
        login: Arc<dyn LoginService>,
        configurations: Arc<dyn ConfigurationProvider>,
        presets: Arc<dyn PresetProvider>,
        teams: Arc<dyn TeamProvider>,
        projects: Arc<dyn ProjectProvider>,
    ) -> Self {
        Self {
            login,
            configurations,
            presets,
            teams,
            projects,
            credentials_validator: Arc::new(NonEmptyCredentialsValidator),
        }
    }

    pub fn with_credentials_validator(mut self, validator: Arc<dyn CredentialsValidator>) -> Self {
        self.credentials_validator = validator;
        self
    }
}
