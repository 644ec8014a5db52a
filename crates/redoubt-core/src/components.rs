//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::{ParticleTint, PickupKind, RaiderArchetype};

/// Marks the player's crossbow emplacement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerUnit;

/// Marks a raider marching on the gate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Raider;

/// Marks a bolt in flight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bolt;

/// Marks a dropped pickup waiting to be collected.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pickup;

/// Marks a cosmetic particle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Particle;

/// Circular collision footprint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Collider {
    pub radius: f64,
}

/// The defended keep. Singleton.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Keep {
    /// Current health, kept within [0, KEEP_MAX_HEALTH].
    pub health: f64,
}

/// Raider combat profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaiderProfile {
    pub archetype: RaiderArchetype,
    pub max_health: f64,
    pub health: f64,
}

/// Bolt payload and remaining flight time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoltState {
    /// Damage dealt on the bolt's single allowed hit.
    pub damage: f64,
    pub life_secs: f64,
}

/// Pickup kind and remaining time on the ground.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickupState {
    pub kind: PickupKind,
    pub life_secs: f64,
}

/// Particle appearance and remaining lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleState {
    pub tint: ParticleTint,
    pub radius: f64,
    pub life_secs: f64,
    pub max_life_secs: f64,
}
