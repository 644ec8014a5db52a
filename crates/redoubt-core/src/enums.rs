//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Menu,
    Playing,
    Paused,
    GameOver,
}

/// How a finished run ended. Display-only distinction; both freeze the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Final wave cleared.
    Victory,
    /// Keep health exhausted.
    Defeat,
}

/// Raider archetype category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RaiderArchetype {
    /// Baseline infantry: weak, unhurried.
    Footman,
    /// Armored and slow; soaks several bolts.
    Knight,
    /// Fast and fragile; closes the distance quickly.
    Skirmisher,
}

/// Power-up kinds dropped by slain raiders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PickupKind {
    /// Shortens the weapon cooldown.
    RapidFire,
    /// Adds one bolt to each volley.
    Spread,
    /// Raises damage per bolt.
    Damage,
    /// Restores keep health.
    Heal,
}

/// Display tag for the current weapon, set by the last weapon pickup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeaponName {
    #[default]
    Basic,
    Rapid,
    Spread,
    Strong,
}

/// Cosmetic particle tint, one per burst cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleTint {
    /// Gate breach.
    Ember,
    /// Bolt impact.
    Spark,
    /// Raider death.
    Blood,
    /// Pickup collected by click.
    Glint,
}
