pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod identity;
pub mod logging;
pub mod providers;

pub use client::{CxClient, EngineConfigurationDto, PresetDto, SessionDto, TeamDto};
pub use config::{ClientSettings, LoginType, SdkConfiguration};
pub use domain::{EngineConfiguration, Preset, Session, Team};
pub use error::{ClientResult, ConfigError, CxClientError, SdkError, SdkResult};
pub use providers::{
    ConfigurationProvider, CredentialsValidator, LoginService, NonEmptyCredentialsValidator, PresetProvider,
    ProjectProvider, Providers, TeamProvider,
};
