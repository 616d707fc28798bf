//! Public facade. Every operation is a single provider call routed through the
//! `AuthorizedActionInvoker`, with results mapped into DTOs and failures into `CxClientError`.

mod dtos;

pub use dtos::{EngineConfigurationDto, PresetDto, SessionDto, TeamDto};

use std::sync::Arc;

use tracing::{debug, info};

use crate::config::{ClientSettings, SdkConfiguration};
use crate::error::{ClientResult, ConfigError, CxClientError, SdkError};
use crate::identity::{AuthorizedActionInvoker, LoginStrategySelector, SessionCache};
use crate::providers::Providers;

#[derive(Clone)]
pub struct CxClient {
    settings: Arc<ClientSettings>,
    providers: Providers,
    invoker: Arc<AuthorizedActionInvoker>,
}

impl CxClient {
    /// Validate `configuration` and build a client with an empty session cache.
    /// Fails before any provider is touched if the server URL or login type is missing.
    pub fn create_new_instance(configuration: &SdkConfiguration, providers: Providers) -> Result<Self, ConfigError> {
        let settings = Arc::new(configuration.validate()?);
        let cache = Arc::new(SessionCache::new());
        let selector = LoginStrategySelector::new(
            &settings,
            providers.login.clone(),
            providers.credentials_validator.clone(),
            cache,
        );
        let invoker = Arc::new(AuthorizedActionInvoker::new(Arc::new(selector)));
        info!(
            target: "cxsdk::client",
            server_url = %settings.server_url,
            login_type = %settings.login_type,
            origin = %settings.origin_name,
            "client created"
        );
        Ok(Self { settings, providers, invoker })
    }

    pub fn settings(&self) -> &ClientSettings { &self.settings }

    pub fn is_logged_in(&self) -> bool {
        !self.invoker.selector().cache().is_empty()
    }

    /// Forget the cached session; the next operation logs in again.
    pub fn logout(&self) {
        self.invoker.selector().cache().clear();
        debug!(target: "cxsdk::client", "logout");
    }

    /// Return the current session, logging in with the configured flow if there is none.
    pub fn login(&self) -> ClientResult<SessionDto> {
        self.invoker
            .invoke(|session| Ok(SessionDto::from(session)))
            .map_err(|e| translate("login failed", e))
    }

    pub fn get_engine_configurations(&self) -> ClientResult<Vec<EngineConfigurationDto>> {
        let provider = &self.providers.configurations;
        let configs = self
            .invoker
            .invoke(|session| provider.get_engine_configurations(session))
            .map_err(|e| translate("failed to get engine configurations", e))?;
        Ok(configs.into_iter().map(EngineConfigurationDto::from).collect())
    }

    pub fn get_presets(&self) -> ClientResult<Vec<PresetDto>> {
        let provider = &self.providers.presets;
        let presets = self
            .invoker
            .invoke(|session| provider.get_presets(session))
            .map_err(|e| translate("failed to get presets", e))?;
        Ok(presets.into_iter().map(PresetDto::from).collect())
    }

    pub fn get_teams(&self) -> ClientResult<Vec<TeamDto>> {
        let provider = &self.providers.teams;
        let teams = self
            .invoker
            .invoke(|session| provider.get_teams(session))
            .map_err(|e| translate("failed to get teams", e))?;
        Ok(teams.into_iter().map(TeamDto::from).collect())
    }

    /// Succeeds only if the server accepts `project_name` for `team_id`. A rejected name
    /// and a failed call surface as the same error type.
    pub fn validate_project_name(&self, project_name: &str, team_id: &str) -> ClientResult<()> {
        let provider = &self.providers.projects;
        let valid = self
            .invoker
            .invoke(|session| provider.is_valid_project_name(session, project_name, team_id))
            .map_err(|e| translate("failed to validate project name", e))?;
        if !valid {
            let cause = SdkError::InvalidProjectName { name: project_name.to_string(), team_id: team_id.to_string() };
            return Err(CxClientError::new(cause.to_string(), cause));
        }
        Ok(())
    }
}

fn translate(context: &str, err: SdkError) -> CxClientError {
    debug!(target: "cxsdk::client", code = err.code_str(), error = %err, "{}", context);
    CxClientError::new(format!("{}: {}", context, err), err)
}
