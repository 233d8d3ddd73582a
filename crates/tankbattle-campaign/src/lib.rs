//! Campaign layer: mission content and the level-to-level session flow.
//!
//! Missions come from a [`MissionProvider`] as raw JSON. Loading parses and
//! sanitises the payload and falls back to a fixed mission whenever anything
//! about it is wrong, so a mission is always available.

pub mod fallback;
pub mod payload;
pub mod provider;
pub mod session;

use tracing::{info, warn};

use tankbattle_core::mission::Mission;

pub use fallback::fallback_mission;
pub use payload::{parse_mission, MissionPayload};
pub use provider::{MissionError, MissionProvider, OfflineProvider, StaticProvider};
pub use session::{CampaignSession, SessionPhase};

/// Fetch, parse and sanitise the mission for `level`.
///
/// Never fails: any provider or content error is logged and replaced by
/// [`fallback_mission`].
pub fn load_mission(provider: &mut impl MissionProvider, level: u32) -> Mission {
    let loaded = provider
        .generate_mission(level)
        .and_then(|raw| parse_mission(&raw, level));

    match loaded {
        Ok(mission) => {
            info!(level, name = %mission.name, enemies = mission.enemy_count, "mission loaded");
            mission
        }
        Err(error) => {
            warn!(level, %error, "mission unavailable, using fallback");
            fallback_mission(level)
        }
    }
}
