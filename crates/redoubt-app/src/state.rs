//! Shared state between the shell and the game loop thread.

use std::sync::{Arc, Mutex};

use redoubt_core::commands::PlayerCommand;
use redoubt_core::state::GameStateSnapshot;

/// Commands sent from the shell to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot slot, shared with the game loop thread for synchronous
/// polling. `None` until the first frame lands.
pub type SharedSnapshot = Arc<Mutex<Option<GameStateSnapshot>>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_snapshot_starts_empty() {
        let shared: SharedSnapshot = Arc::new(Mutex::new(None));
        assert!(shared.lock().unwrap().is_none());
    }
}
