//! Mission provider boundary.

use thiserror::Error;

use tankbattle_core::grid::GridError;

/// Why a provider payload could not become a mission.
#[derive(Debug, Error)]
pub enum MissionError {
    #[error("mission provider failed: {0}")]
    Provider(String),
    #[error("mission payload is not valid JSON")]
    Parse(#[from] serde_json::Error),
    #[error("mission grid is invalid")]
    Grid(#[from] GridError),
    #[error("mission has no enemies")]
    EmptyQuota,
}

/// External source of mission content.
///
/// Called once per mission, before the simulation starts. Returns the raw
/// JSON payload; validation happens in [`crate::parse_mission`].
pub trait MissionProvider {
    fn generate_mission(&mut self, level: u32) -> Result<String, MissionError>;
}

/// A provider with no content source. Every level gets the fallback mission.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineProvider;

impl MissionProvider for OfflineProvider {
    fn generate_mission(&mut self, _level: u32) -> Result<String, MissionError> {
        Err(MissionError::Provider("no mission generator configured".into()))
    }
}

/// Serves the same payload for every level.
#[derive(Debug, Clone)]
pub struct StaticProvider {
    payload: String,
}

impl StaticProvider {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }
}

impl MissionProvider for StaticProvider {
    fn generate_mission(&mut self, _level: u32) -> Result<String, MissionError> {
        Ok(self.payload.clone())
    }
}
