use std::sync::{Arc, Mutex};
use std::time::Duration;

use redoubt_app::collaborators::{LogAudio, LogRender};
use redoubt_app::game_loop;
use redoubt_app::highscore::FileHighScores;
use redoubt_app::state::{GameLoopCommand, SharedSnapshot};
use redoubt_core::commands::PlayerCommand;
use redoubt_core::enums::GamePhase;
use redoubt_sim::engine::SimConfig;

fn main() {
    env_logger::init();

    let highscores = FileHighScores::open("redoubt_highscore.json".into());
    let latest: SharedSnapshot = Arc::new(Mutex::new(None));

    let cmd_tx = game_loop::spawn_game_loop(
        SimConfig::default(),
        Box::new(highscores),
        Box::new(LogRender::default()),
        Box::new(LogAudio),
        Arc::clone(&latest),
    );

    // Headless demo: start a run and watch until the keep falls. A real
    // frontend would feed pointer/key commands down the same channel.
    let _ = cmd_tx.send(GameLoopCommand::Player(PlayerCommand::StartGame));
    loop {
        std::thread::sleep(Duration::from_millis(250));
        let game_over = latest
            .lock()
            .ok()
            .and_then(|guard| guard.as_ref().map(|s| s.phase))
            == Some(GamePhase::GameOver);
        if game_over {
            break;
        }
    }

    if let Ok(guard) = latest.lock() {
        if let Some(snapshot) = guard.as_ref() {
            log::info!(
                "run over after wave {}: score {} (high {})",
                snapshot.wave.number,
                snapshot.score,
                snapshot.high_score
            );
        }
    }

    let _ = cmd_tx.send(GameLoopCommand::Shutdown);
}
