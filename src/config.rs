//! Client configuration: the raw, optional-everywhere `SdkConfiguration` callers fill in, and
//! the validated `ClientSettings` a client is built from.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::error::ConfigError;

pub const ENV_SERVER_URL: &str = "CX_SERVER_URL";
pub const ENV_LOGIN_TYPE: &str = "CX_LOGIN_TYPE";
pub const ENV_ORIGIN: &str = "CX_ORIGIN";
pub const ENV_USERNAME: &str = "CX_USERNAME";
pub const ENV_PASSWORD: &str = "CX_PASSWORD";
pub const ENV_USE_KERBEROS: &str = "CX_USE_KERBEROS";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum LoginType {
    Credentials,
    Sso,
    Saml,
}

impl LoginType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoginType::Credentials => "credentials",
            LoginType::Sso => "sso",
            LoginType::Saml => "saml",
        }
    }
}

impl fmt::Display for LoginType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoginType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "credentials" => Ok(LoginType::Credentials),
            "sso" => Ok(LoginType::Sso),
            "saml" => Ok(LoginType::Saml),
            _ => Err(ConfigError::InvalidLoginType(s.to_string())),
        }
    }
}

impl TryFrom<String> for LoginType {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Configuration as supplied by the caller. Nothing is checked until
/// [`SdkConfiguration::validate`] runs at client construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SdkConfiguration {
    #[serde(default)]
    pub server_url: Option<String>,
    #[serde(default)]
    pub login_type: Option<LoginType>,
    #[serde(default)]
    pub origin_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub use_kerberos: bool,
}

impl SdkConfiguration {
    pub fn new(server_url: impl Into<String>, login_type: LoginType) -> Self {
        Self { server_url: Some(server_url.into()), login_type: Some(login_type), ..Default::default() }
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin_name = Some(origin.into());
        self
    }

    pub fn with_credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    pub fn with_kerberos(mut self, enabled: bool) -> Self {
        self.use_kerberos = enabled;
        self
    }

    /// Read configuration from `CX_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let login_type = match lookup(ENV_LOGIN_TYPE).filter(|s| !s.trim().is_empty()) {
            Some(raw) => Some(raw.parse::<LoginType>()?),
            None => None,
        };
        let use_kerberos = lookup(ENV_USE_KERBEROS)
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
            .unwrap_or(false);
        let cfg = Self {
            server_url: lookup(ENV_SERVER_URL),
            login_type,
            origin_name: lookup(ENV_ORIGIN),
            username: lookup(ENV_USERNAME),
            password: lookup(ENV_PASSWORD),
            use_kerberos,
        };
        debug!(target: "cxsdk::config", server_url=?cfg.server_url, login_type=?cfg.login_type, "configuration read from environment");
        Ok(cfg)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let mut value: serde_json::Value = serde_json::from_str(&text)?;
        // Login type goes through FromStr so file and env accept the same spellings
        // and report the same error.
        let login_type = match value.get_mut("login_type").map(serde_json::Value::take) {
            Some(serde_json::Value::String(raw)) if raw.trim().is_empty() => None,
            Some(serde_json::Value::String(raw)) => Some(raw.parse::<LoginType>()?),
            Some(serde_json::Value::Null) | None => None,
            Some(other) => return Err(ConfigError::InvalidLoginType(other.to_string())),
        };
        let mut cfg: SdkConfiguration = serde_json::from_value(value)?;
        cfg.login_type = login_type;
        debug!(target: "cxsdk::config", path=%path.as_ref().display(), "configuration read from file");
        Ok(cfg)
    }

    /// Check the required fields. Missing server URL or login type is an error; no
    /// default login type is ever assumed.
    pub fn validate(&self) -> Result<ClientSettings, ConfigError> {
        let raw_url = match self.server_url.as_deref().map(str::trim) {
            Some(u) if !u.is_empty() => u,
            _ => return Err(ConfigError::MissingServerUrl),
        };
        let server_url = Url::parse(raw_url).map_err(|e| ConfigError::InvalidServerUrl {
            url: raw_url.to_string(),
            reason: e.to_string(),
        })?;
        let login_type = self.login_type.ok_or(ConfigError::MissingLoginType)?;
        Ok(ClientSettings {
            server_url,
            login_type,
            origin_name: self.origin_name.clone().unwrap_or_default(),
            username: self.username.clone().unwrap_or_default(),
            password: self.password.clone().unwrap_or_default(),
            use_kerberos: self.use_kerberos,
        })
    }
}

/// Validated, immutable configuration held by a client.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub server_url: Url,
    pub login_type: LoginType,
    pub origin_name: String,
    pub username: String,
    pub password: String,
    pub use_kerberos: bool,
}

impl fmt::Debug for ClientSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientSettings")
            .field("server_url", &self.server_url.as_str())
            .field("login_type", &self.login_type)
            .field("origin_name", &self.origin_name)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("use_kerberos", &self.use_kerberos)
            .finish()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
