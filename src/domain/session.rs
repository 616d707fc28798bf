use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// An authenticated identity as returned by one of the login flows.
/// Treated as immutable once obtained; a new login produces a new value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub session_id: String,
    #[serde(default)]
    pub cookies: HashMap<String, String>,
    #[serde(default)]
    pub is_scanner: bool,
    #[serde(default)]
    pub is_allowed_to_change_not_exploitable: bool,
}

impl Session {
    pub fn new(
        session_id: impl Into<String>,
        cookies: HashMap<String, String>,
        is_scanner: bool,
        is_allowed_to_change_not_exploitable: bool,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            cookies,
            is_scanner,
            is_allowed_to_change_not_exploitable,
        }
    }
}

