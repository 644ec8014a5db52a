//! Game state snapshot — the complete visible state handed to the render
//! collaborator each frame.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::AudioEvent;
use crate::types::{Position, SimTime, Velocity};

/// Complete game state produced after each frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    /// Set once the session reaches game over.
    pub outcome: Option<Outcome>,
    pub wave: WaveView,
    pub score: u32,
    pub high_score: u32,
    pub keep: KeepView,
    pub player: PlayerView,
    pub weapon: WeaponView,
    pub bolts: Vec<BoltView>,
    pub raiders: Vec<RaiderView>,
    pub pickups: Vec<PickupView>,
    pub particles: Vec<ParticleView>,
    pub audio_events: Vec<AudioEvent>,
}

/// Spawn-director status for the HUD.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WaveView {
    pub number: u32,
    pub active: bool,
    pub quota: u32,
    pub spawned: u32,
}

/// The keep wall and its health.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct KeepView {
    /// Top-center anchor of the wall.
    pub position: Position,
    pub width: f64,
    pub height: f64,
    pub health: f64,
}

/// The player emplacement.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub velocity: Velocity,
    pub radius: f64,
    /// Current aim point, for drawing the crossbow's facing.
    pub aim: Position,
}

/// The current loadout for the HUD.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WeaponView {
    pub name: WeaponName,
    pub damage: f64,
    pub cooldown_secs: f64,
    pub spread: u32,
}

/// A bolt in flight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BoltView {
    pub position: Position,
    /// For drawing the bolt's orientation.
    pub velocity: Velocity,
    pub radius: f64,
}

/// A raider and its health bar.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RaiderView {
    pub position: Position,
    pub archetype: RaiderArchetype,
    pub health: f64,
    pub max_health: f64,
    pub radius: f64,
}

/// A pickup on the ground.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PickupView {
    pub position: Position,
    pub kind: PickupKind,
    pub radius: f64,
    pub life_secs: f64,
}

/// A cosmetic particle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ParticleView {
    pub position: Position,
    pub tint: ParticleTint,
    pub radius: f64,
    /// Remaining life fraction in [0, 1]; renderers fade on it.
    pub alpha: f64,
}
