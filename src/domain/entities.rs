use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EngineConfiguration {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Preset {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Team {
    pub id: String,
    pub name: String,
}

impl EngineConfiguration {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self { Self { id: id.into(), name: name.into() } }
}

impl Preset {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self { Self { id: id.into(), name: name.into() } }
}

impl Team {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self { Self { id: id.into(), name: name.into() } }
}
