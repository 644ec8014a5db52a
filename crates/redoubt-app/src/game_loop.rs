//! Game loop thread — drives the engine once per display frame.
//!
//! The engine is created inside the thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel. Each iteration computes a
//! capped wall-clock delta, ticks the engine, and fans the snapshot out to
//! the render and audio collaborators.

use std::sync::mpsc;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use redoubt_core::constants::{FRAME_DT_CAP, FRAME_RATE};
use redoubt_core::state::GameStateSnapshot;
use redoubt_sim::engine::{SimConfig, SimulationEngine};
use redoubt_sim::highscore::HighScoreStore;

use crate::collaborators::{AudioSink, RenderSink};
use crate::state::{GameLoopCommand, SharedSnapshot};

/// Nominal duration of one frame.
const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / FRAME_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the input frontend to use.
pub fn spawn_game_loop(
    config: SimConfig,
    highscores: Box<dyn HighScoreStore>,
    render: Box<dyn RenderSink>,
    audio: Box<dyn AudioSink>,
    latest_snapshot: SharedSnapshot,
) -> mpsc::Sender<GameLoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("redoubt-game-loop".into())
        .spawn(move || {
            run_game_loop(config, highscores, render, audio, cmd_rx, &latest_snapshot);
        })
        .expect("Failed to spawn game loop thread");

    cmd_tx
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    highscores: Box<dyn HighScoreStore>,
    mut render: Box<dyn RenderSink>,
    mut audio: Box<dyn AudioSink>,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let mut engine = SimulationEngine::new(config, highscores);
    let mut last_frame = Instant::now();
    let mut next_frame_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one frame with a capped wall-clock delta
        let now = Instant::now();
        let dt = (now - last_frame).as_secs_f64().min(FRAME_DT_CAP);
        last_frame = now;
        let snapshot = engine.tick(dt);

        // 3. Hand off to the presentation collaborators
        for event in &snapshot.audio_events {
            audio.play(event);
        }
        render.present(&snapshot);

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until the next frame boundary
        next_frame_time += FRAME_DURATION;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > FRAME_DURATION * 2 {
            // Too far behind — reset to avoid catch-up spiral
            next_frame_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use redoubt_core::commands::PlayerCommand;
    use redoubt_core::enums::GamePhase;
    use redoubt_sim::highscore::MemoryHighScores;
    use std::sync::Arc;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Player(PlayerCommand::StartGame))
            .unwrap();
        tx.send(GameLoopCommand::Player(PlayerCommand::Pause))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::Player(PlayerCommand::StartGame)
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::Player(PlayerCommand::Pause)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_frame_duration_constant() {
        // 60 Hz = 16.666ms per frame
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(FRAME_DURATION.as_nanos(), expected_nanos as u128);
    }

    /// The loop thread starts a run, produces snapshots, and shuts down.
    #[test]
    fn test_loop_produces_snapshots_and_shuts_down() {
        let latest: SharedSnapshot = Arc::new(Mutex::new(None));
        let tx = spawn_game_loop(
            SimConfig::default(),
            Box::new(MemoryHighScores::new()),
            Box::new(crate::collaborators::NullRender),
            Box::new(crate::collaborators::NullAudio),
            Arc::clone(&latest),
        );

        tx.send(GameLoopCommand::Player(PlayerCommand::StartGame))
            .unwrap();

        // wait for the loop to publish a playing snapshot
        let mut playing = false;
        for _ in 0..200 {
            std::thread::sleep(Duration::from_millis(5));
            if let Ok(guard) = latest.lock() {
                if let Some(snapshot) = guard.as_ref() {
                    if snapshot.phase == GamePhase::Playing {
                        playing = true;
                        break;
                    }
                }
            }
        }
        assert!(playing, "loop never reached the Playing phase");

        tx.send(GameLoopCommand::Shutdown).unwrap();
    }
}
