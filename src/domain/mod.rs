//! Values exchanged with providers. No behavior lives here.

mod entities;
mod session;

pub use entities::{EngineConfiguration, Preset, Team};
pub use session::Session;
