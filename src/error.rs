//! Error model for the SDK.
//! `SdkError` is what providers and the identity core speak; the invoker only ever looks at
//! `is_not_authorized()`. `CxClientError` is the single type callers of the facade handle, and
//! `ConfigError` is reserved for client construction.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SdkError {
    /// Login failed, or the configured credentials were rejected before login.
    #[error("authentication failed: {0}")]
    Authentication(String),
    /// The server no longer accepts the session the call was made with.
    #[error("not authorized: {0}")]
    NotAuthorized(String),
    #[error("invalid project name '{name}' for team '{team_id}'")]
    InvalidProjectName { name: String, team_id: String },
    #[error("{0}")]
    Other(String),
}

impl SdkError {
    pub fn authentication<S: Into<String>>(msg: S) -> Self { SdkError::Authentication(msg.into()) }
    pub fn not_authorized<S: Into<String>>(msg: S) -> Self { SdkError::NotAuthorized(msg.into()) }
    pub fn other<S: Into<String>>(msg: S) -> Self { SdkError::Other(msg.into()) }

    pub fn is_not_authorized(&self) -> bool {
        matches!(self, SdkError::NotAuthorized(_))
    }

    /// Stable snake_case code surfaced through `CxClientError::code`.
    pub fn code_str(&self) -> &'static str {
        match self {
            SdkError::Authentication(_) => "authentication_failed",
            SdkError::NotAuthorized(_) => "not_authorized",
            SdkError::InvalidProjectName { .. } => "operation_rejected",
            SdkError::Other(_) => "provider_error",
        }
    }
}

impl From<anyhow::Error> for SdkError {
    fn from(err: anyhow::Error) -> Self {
        // Provider internals that bubble up through anyhow are treated as generic failures;
        // a provider that means "session expired" must say so with NotAuthorized.
        SdkError::Other(format!("{err:#}"))
    }
}

pub type SdkResult<T> = Result<T, SdkError>;

/// Raised while validating configuration, before any provider is called.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("server URL is required")]
    MissingServerUrl,
    #[error("invalid server URL '{url}': {reason}")]
    InvalidServerUrl { url: String, reason: String },
    #[error("login type is required")]
    MissingLoginType,
    #[error("unknown login type '{0}' (expected credentials, sso or saml)")]
    InvalidLoginType(String),
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The one error type returned by `CxClient` operations.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CxClientError {
    message: String,
    #[source]
    cause: SdkError,
}

impl CxClientError {
    pub fn new<S: Into<String>>(message: S, cause: SdkError) -> Self {
        CxClientError { message: message.into(), cause }
    }

    pub fn message(&self) -> &str { &self.message }

    pub fn code(&self) -> &'static str { self.cause.code_str() }

    pub fn cause(&self) -> &SdkError { &self.cause }
}

impl From<SdkError> for CxClientError {
    fn from(err: SdkError) -> Self {
        CxClientError { message: err.to_string(), cause: err }
    }
}

pub type ClientResult<T> = Result<T, CxClientError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn only_not_authorized_is_recoverable() {
        assert!(SdkError::not_authorized("expired").is_not_authorized());
        assert!(!SdkError::authentication("bad password").is_not_authorized());
        assert!(!SdkError::other("boom").is_not_authorized());
        let invalid = SdkError::InvalidProjectName { name: "p".into(), team_id: "1".into() };
        assert!(!invalid.is_not_authorized());
    }

    #[test]
    fn client_error_keeps_code_and_source() {
        let err = CxClientError::from(SdkError::authentication("bad password"));
        assert_eq!(err.code(), "authentication_failed");
        assert_eq!(err.message(), "authentication failed: bad password");
        let src = err.source().expect("source");
        assert_eq!(src.to_string(), "authentication failed: bad password");

        let err = CxClientError::new("rejected", SdkError::other("x"));
        assert_eq!(err.code(), "provider_error");
        assert_eq!(err.to_string(), "rejected");
    }

    #[test]
    fn anyhow_maps_to_other() {
        let err: SdkError = anyhow::anyhow!("socket closed").context("fetching presets").into();
        match err {
            SdkError::Other(msg) => {
                assert!(msg.contains("fetching presets"));
                assert!(msg.contains("socket closed"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
