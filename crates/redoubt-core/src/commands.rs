//! Player commands sent from the input collaborator to the simulation.
//!
//! Commands are queued and processed at the next frame boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Session control ---
    /// Begin a run from the menu or the game-over screen.
    StartGame,
    /// Return to the menu, wiping the session.
    ResetGame,
    /// Freeze the simulation.
    Pause,
    /// Unfreeze the simulation.
    Resume,

    // --- Held input ---
    /// Left movement key state changed.
    MoveLeft { held: bool },
    /// Right movement key state changed.
    MoveRight { held: bool },
    /// Fire intent (pointer button) state changed.
    FireHeld { held: bool },
    /// Pointer moved; the aim point follows it.
    AimAt { x: f64, y: f64 },
    /// Window lost focus; all held input is released.
    FocusLost,

    // --- Discrete triggers ---
    /// Primary click at a point. Starts the game outside of play; collects
    /// a pickup under the pointer while playing.
    ClickAt { x: f64, y: f64 },
}
