//! Campaign session: the screen flow around individual missions.
//!
//! ```text
//! Start --start--> Loading(1) --load--> Playing --outcome--> GameOver | Victory
//! Victory --next_mission--> Loading(level + 1)
//! GameOver --retry--> Loading(1)
//! any --abort--> Start
//! ```

use serde::{Deserialize, Serialize};
use tracing::info;

use tankbattle_core::events::GameEvent;
use tankbattle_core::mission::Mission;
use tankbattle_core::state::GameStateSnapshot;

use crate::provider::MissionProvider;

/// Where the player is in the campaign.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase")]
pub enum SessionPhase {
    #[default]
    Start,
    /// Waiting on the provider for this level's mission.
    Loading { level: u32 },
    Playing { level: u32 },
    GameOver { level: u32, score: u32 },
    Victory { level: u32, score: u32 },
}

/// Drives missions one after another for a single player.
pub struct CampaignSession<P> {
    provider: P,
    phase: SessionPhase,
    level: u32,
    score: u32,
    mission: Option<Mission>,
}

impl<P: MissionProvider> CampaignSession<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            phase: SessionPhase::Start,
            level: 1,
            score: 0,
            mission: None,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Score carried by the most recent mission outcome.
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// The mission currently loaded, if any.
    pub fn mission(&self) -> Option<&Mission> {
        self.mission.as_ref()
    }

    /// Begin a campaign at level 1. Only valid from `Start`.
    pub fn start(&mut self) -> bool {
        if self.phase != SessionPhase::Start {
            return false;
        }
        self.begin_loading(1);
        true
    }

    /// Load the next level after a win.
    pub fn next_mission(&mut self) -> bool {
        let SessionPhase::Victory { level, .. } = self.phase else {
            return false;
        };
        self.begin_loading(level.saturating_add(1));
        true
    }

    /// Start over from level 1 after a loss.
    pub fn retry(&mut self) -> bool {
        if !matches!(self.phase, SessionPhase::GameOver { .. }) {
            return false;
        }
        self.score = 0;
        self.begin_loading(1);
        true
    }

    /// Abandon the campaign (abort mid-mission or quit from a result screen).
    pub fn abort(&mut self) {
        info!(level = self.level, "campaign aborted");
        self.phase = SessionPhase::Start;
        self.level = 1;
        self.score = 0;
        self.mission = None;
    }

    /// Resolve a pending load through the provider and enter `Playing`.
    ///
    /// Returns the mission to hand to the simulation, or `None` when nothing
    /// is loading.
    pub fn load_pending(&mut self) -> Option<&Mission> {
        let SessionPhase::Loading { level } = self.phase else {
            return None;
        };
        let mission = crate::load_mission(&mut self.provider, level);
        self.phase = SessionPhase::Playing { level };
        self.mission = Some(mission);
        self.mission.as_ref()
    }

    /// Feed a tick's snapshot to the session. A terminal outcome moves the
    /// session to its result phase exactly once; later snapshots are ignored.
    pub fn observe(&mut self, snapshot: &GameStateSnapshot) -> Option<SessionPhase> {
        let SessionPhase::Playing { level } = self.phase else {
            return None;
        };
        let (next, score) = match *snapshot.outcome()? {
            GameEvent::GameOver { score } => (SessionPhase::GameOver { level, score }, score),
            GameEvent::Victory { score } => (SessionPhase::Victory { level, score }, score),
            _ => return None,
        };
        self.score = score;
        info!(?next, "mission finished");
        self.phase = next;
        Some(next)
    }

    fn begin_loading(&mut self, level: u32) {
        self.level = level;
        self.mission = None;
        self.phase = SessionPhase::Loading { level };
    }
}
