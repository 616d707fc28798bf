use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::{EngineConfiguration, Preset, Session, Team};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionDto {
    pub session_id: String,
    pub cookies: HashMap<String, String>,
    pub is_scanner: bool,
    pub is_allowed_to_change_not_exploitable: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EngineConfigurationDto {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PresetDto {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamDto {
    pub id: String,
    pub name: String,
}

impl From<&Session> for SessionDto {
    fn from(s: &Session) -> Self {
        SessionDto {
            session_id: s.session_id.clone(),
            cookies: s.cookies.clone(),
            is_scanner: s.is_scanner,
            is_allowed_to_change_not_exploitable: s.is_allowed_to_change_not_exploitable,
        }
    }
}

impl From<EngineConfiguration> for EngineConfigurationDto {
    fn from(c: EngineConfiguration) -> Self { EngineConfigurationDto { id: c.id, name: c.name } }
}

impl From<Preset> for PresetDto {
    fn from(p: Preset) -> Self { PresetDto { id: p.id, name: p.name } }
}

impl From<Team> for TeamDto {
    fn from(t: Team) -> Self { TeamDto { id: t.id, name: t.name } }
}
