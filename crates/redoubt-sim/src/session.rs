//! Engine-owned session state that is not entity data.

use redoubt_core::constants::*;
use redoubt_core::enums::WeaponName;
use redoubt_core::types::{Position, Viewport};

use crate::highscore::HighScoreStore;

/// The player's current weapon loadout. Mutated only by pickup collection.
#[derive(Debug, Clone, PartialEq)]
pub struct WeaponLoadout {
    pub name: WeaponName,
    pub damage: f64,
    pub cooldown_secs: f64,
    pub spread: u32,
    /// Elapsed-seconds timestamp of the last volley.
    pub last_shot_secs: f64,
}

impl Default for WeaponLoadout {
    fn default() -> Self {
        Self {
            name: WeaponName::Basic,
            damage: WEAPON_BASE_DAMAGE,
            cooldown_secs: WEAPON_BASE_COOLDOWN,
            spread: WEAPON_BASE_SPREAD,
            // allow an immediate first shot
            last_shot_secs: f64::NEG_INFINITY,
        }
    }
}

/// Running score with write-through high-score tracking.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreState {
    pub score: u32,
    pub high_score: u32,
}

impl ScoreState {
    /// Add points and push any new high score to the store immediately.
    pub fn award(&mut self, points: u32, store: &mut dyn HighScoreStore) {
        self.score += points;
        self.sync_high_score(store);
    }

    /// Persist the current score as the high score if it beats the stored
    /// one. A lower score never overwrites.
    pub fn sync_high_score(&mut self, store: &mut dyn HighScoreStore) {
        if self.score > self.high_score {
            self.high_score = self.score;
            store.put(self.high_score);
        }
    }
}

/// Continuous input state, updated by player commands and read each frame.
#[derive(Debug, Clone)]
pub struct InputState {
    pub move_left: bool,
    pub move_right: bool,
    pub firing: bool,
    pub aim: Position,
}

impl InputState {
    pub fn new(view: &Viewport) -> Self {
        Self {
            move_left: false,
            move_right: false,
            firing: false,
            aim: Position::new(view.width / 2.0, view.height / 2.0),
        }
    }

    /// Release everything held; used on focus loss and session resets.
    pub fn clear_held(&mut self) {
        self.move_left = false;
        self.move_right = false;
        self.firing = false;
    }
}
