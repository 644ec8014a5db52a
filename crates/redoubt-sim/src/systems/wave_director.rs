//! Wave direction — schedules raider spawns and inter-wave breaks.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use redoubt_core::components::Raider;
use redoubt_core::constants::*;
use redoubt_core::enums::{GamePhase, Outcome};
use redoubt_core::types::Viewport;

use crate::highscore::HighScoreStore;
use crate::session::ScoreState;
use crate::world_setup;

/// A deferred wave start, armed during the inter-wave break.
///
/// Carries the session epoch captured at scheduling time; a session reset
/// bumps the epoch, so a stale schedule expires without effect.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingWaveStart {
    pub remaining_secs: f64,
    pub epoch: u64,
}

/// Spawn-director state for the current session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WaveState {
    pub wave: u32,
    /// Raiders this wave will spawn in total.
    pub quota: u32,
    /// Raiders spawned so far this wave.
    pub spawned: u32,
    /// Seconds accumulated toward the next spawn.
    pub spawn_timer: f64,
    pub active: bool,
    pub pending: Option<PendingWaveStart>,
}

impl WaveState {
    /// Raiders to spawn in the given wave.
    pub fn quota_for(wave: u32) -> u32 {
        let quota = (WAVE_QUOTA_BASE + wave as f64 * WAVE_QUOTA_PER_WAVE).floor() as u32;
        quota.clamp(WAVE_QUOTA_MIN, WAVE_QUOTA_CAP)
    }

    /// Seconds between spawns in the given wave.
    pub fn cadence_for(wave: u32) -> f64 {
        (SPAWN_CADENCE_BASE - wave as f64 * SPAWN_CADENCE_STEP).max(SPAWN_CADENCE_FLOOR)
    }

    /// Advance to the next wave and arm its spawn schedule.
    pub fn start_wave(&mut self) {
        self.wave += 1;
        self.quota = Self::quota_for(self.wave);
        self.spawned = 0;
        self.spawn_timer = 0.0;
        self.active = true;
    }
}

/// Run the spawn director for one frame.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    waves: &mut WaveState,
    score: &mut ScoreState,
    store: &mut dyn HighScoreStore,
    phase: &mut GamePhase,
    outcome: &mut Option<Outcome>,
    session_epoch: u64,
    view: &Viewport,
    dt: f64,
) {
    // advance any deferred wave start; a stale epoch means a reset happened
    // after it was armed, and the schedule is discarded unfired
    if let Some(mut pending) = waves.pending.take() {
        pending.remaining_secs -= dt;
        if pending.remaining_secs > 0.0 {
            waves.pending = Some(pending);
        } else if pending.epoch == session_epoch {
            waves.start_wave();
        }
    }

    if !waves.active {
        return;
    }

    waves.spawn_timer += dt;
    if waves.spawn_timer > WaveState::cadence_for(waves.wave) && waves.spawned < waves.quota {
        waves.spawn_timer = 0.0;
        world_setup::spawn_raider(world, rng, waves.wave, view);
        waves.spawned += 1;
    }

    if waves.spawned >= waves.quota && raider_count(world) == 0 {
        waves.active = false;
        if waves.wave >= WAVE_MAX {
            *phase = GamePhase::GameOver;
            *outcome = Some(Outcome::Victory);
            score.sync_high_score(store);
        } else {
            waves.pending = Some(PendingWaveStart {
                remaining_secs: WAVE_BREAK_SECS,
                epoch: session_epoch,
            });
        }
    }
}

fn raider_count(world: &World) -> usize {
    let mut query = world.query::<&Raider>();
    query.iter().count()
}
