//! Presentation collaborators: render and audio sinks.
//!
//! The simulation never touches a screen or a sound device; the loop hands
//! each snapshot and audio event to these traits. Sink failures stay inside
//! the implementation — the loop never sees them.

use redoubt_core::enums::GamePhase;
use redoubt_core::events::AudioEvent;
use redoubt_core::state::GameStateSnapshot;

/// Receives a read-only snapshot once per frame.
pub trait RenderSink: Send {
    fn present(&mut self, snapshot: &GameStateSnapshot);
}

/// Receives discrete audio events as they occur. Fire-and-forget.
pub trait AudioSink: Send {
    fn play(&mut self, event: &AudioEvent);
}

/// Discards everything. For headless runs and tests.
#[derive(Debug, Default)]
pub struct NullRender;

impl RenderSink for NullRender {
    fn present(&mut self, _snapshot: &GameStateSnapshot) {}
}

/// Discards everything. For headless runs and tests.
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _event: &AudioEvent) {}
}

/// Logs phase, wave, and score transitions. The demo binary's display.
#[derive(Debug, Default)]
pub struct LogRender {
    last_phase: Option<GamePhase>,
    last_wave: u32,
    last_score: u32,
}

impl RenderSink for LogRender {
    fn present(&mut self, snapshot: &GameStateSnapshot) {
        if self.last_phase != Some(snapshot.phase) {
            log::info!("phase: {:?}", snapshot.phase);
            self.last_phase = Some(snapshot.phase);
        }
        if snapshot.wave.number != self.last_wave {
            log::info!(
                "wave {} begins ({} raiders)",
                snapshot.wave.number,
                snapshot.wave.quota
            );
            self.last_wave = snapshot.wave.number;
        }
        if snapshot.score != self.last_score {
            log::info!(
                "score {} (high {}) — keep at {:.0}",
                snapshot.score,
                snapshot.high_score,
                snapshot.keep.health
            );
            self.last_score = snapshot.score;
        }
    }
}

/// Logs audio events at debug level.
#[derive(Debug, Default)]
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn play(&mut self, event: &AudioEvent) {
        log::debug!("audio: {event:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_sinks_accept_everything() {
        let mut render = NullRender;
        let mut audio = NullAudio;
        render.present(&GameStateSnapshot::default());
        audio.play(&AudioEvent::Fire);
    }

    #[test]
    fn test_log_render_tracks_transitions() {
        let mut render = LogRender::default();
        let snapshot = GameStateSnapshot::default();
        render.present(&snapshot);
        assert_eq!(render.last_phase, Some(GamePhase::Menu));

        let snapshot = GameStateSnapshot {
            score: 5,
            ..Default::default()
        };
        render.present(&snapshot);
        assert_eq!(render.last_score, 5);
    }
}
