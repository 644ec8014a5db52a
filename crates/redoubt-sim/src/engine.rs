//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use redoubt_core::commands::PlayerCommand;
use redoubt_core::constants::{VIEW_HEIGHT, VIEW_WIDTH};
use redoubt_core::enums::{GamePhase, Outcome};
use redoubt_core::events::AudioEvent;
use redoubt_core::state::GameStateSnapshot;
use redoubt_core::types::{Position, SimTime, Viewport};

use crate::highscore::HighScoreStore;
use crate::session::{InputState, ScoreState, WeaponLoadout};
use crate::systems;
use crate::systems::wave_director::WaveState;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Viewport the simulation plays in.
    pub view: Viewport,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            view: Viewport {
                width: VIEW_WIDTH,
                height: VIEW_HEIGHT,
            },
        }
    }
}

/// The simulation engine. Owns the ECS world and all session state.
pub struct SimulationEngine {
    world: World,
    view: Viewport,
    time: SimTime,
    phase: GamePhase,
    outcome: Option<Outcome>,
    input: InputState,
    weapon: WeaponLoadout,
    waves: WaveState,
    score: ScoreState,
    highscores: Box<dyn HighScoreStore>,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    audio_events: Vec<AudioEvent>,
    /// Bumped on every session reset; pending deferred work captured under
    /// an older epoch is discarded when it comes due.
    epoch: u64,
}

impl SimulationEngine {
    /// Create a new engine. Reads the stored high score once, here.
    pub fn new(config: SimConfig, highscores: Box<dyn HighScoreStore>) -> Self {
        let high_score = highscores.get();
        let mut engine = Self {
            world: World::new(),
            view: config.view,
            time: SimTime::default(),
            phase: GamePhase::Menu,
            outcome: None,
            input: InputState::new(&config.view),
            weapon: WeaponLoadout::default(),
            waves: WaveState::default(),
            score: ScoreState {
                score: 0,
                high_score,
            },
            highscores,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            audio_events: Vec::new(),
            epoch: 0,
        };
        world_setup::setup_session(&mut engine.world, &engine.view);
        engine
    }

    /// Queue a player command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one frame of `dt` seconds and return the
    /// resulting snapshot. The frame driver owns the dt cap.
    pub fn tick(&mut self, dt: f64) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Playing {
            self.run_systems(dt);
            self.time.advance(dt);
        }

        let audio_events = std::mem::take(&mut self.audio_events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.outcome,
            &self.waves,
            &self.weapon,
            &self.score,
            &self.input,
            audio_events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the viewport the simulation plays in.
    pub fn view(&self) -> Viewport {
        self.view
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                if matches!(self.phase, GamePhase::Menu | GamePhase::GameOver) {
                    self.start_game();
                }
            }
            PlayerCommand::ResetGame => {
                self.clear_session();
                self.phase = GamePhase::Menu;
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Playing {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Playing;
                }
            }
            PlayerCommand::MoveLeft { held } => self.input.move_left = held,
            PlayerCommand::MoveRight { held } => self.input.move_right = held,
            PlayerCommand::FireHeld { held } => self.input.firing = held,
            PlayerCommand::AimAt { x, y } => self.input.aim = Position::new(x, y),
            PlayerCommand::FocusLost => self.input.clear_held(),
            PlayerCommand::ClickAt { x, y } => match self.phase {
                GamePhase::Menu | GamePhase::GameOver => self.start_game(),
                GamePhase::Playing => {
                    systems::collision::collect_pickup_at(
                        &mut self.world,
                        &mut self.rng,
                        &mut self.weapon,
                        Position::new(x, y),
                        &mut self.audio_events,
                    );
                }
                GamePhase::Paused => {}
            },
        }
    }

    /// Start (or restart) a run: fresh session, wave 1, Start sound.
    fn start_game(&mut self) {
        self.clear_session();
        self.phase = GamePhase::Playing;
        self.waves.start_wave();
        self.audio_events.push(AudioEvent::Start);
    }

    /// Wipe the session back to defaults: empty pools, fresh keep and
    /// player, base weapon, zero score. The high score survives, as does
    /// any pending deferred wave start — the epoch bump makes it inert.
    fn clear_session(&mut self) {
        let stale_pending = self.waves.pending.take();

        self.world.clear();
        world_setup::setup_session(&mut self.world, &self.view);
        self.weapon = WeaponLoadout::default();
        self.waves = WaveState::default();
        self.waves.pending = stale_pending;
        self.score.score = 0;
        self.outcome = None;
        self.time = SimTime::default();
        self.input.clear_held();
        self.epoch += 1;
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64) {
        // 1. Player motion
        systems::player::run(&mut self.world, &self.input, dt, &self.view);
        // 2. Firing
        systems::firing::run(
            &mut self.world,
            &self.input,
            &mut self.weapon,
            &self.time,
            &mut self.audio_events,
        );
        // 3. Kinematic integration
        systems::movement::run(&mut self.world, dt);
        // 4. Lifetime expiry
        systems::cleanup::run(&mut self.world, dt, &mut self.despawn_buffer);
        // 5. Wave direction (spawns, breaks, victory)
        systems::wave_director::run(
            &mut self.world,
            &mut self.rng,
            &mut self.waves,
            &mut self.score,
            &mut *self.highscores,
            &mut self.phase,
            &mut self.outcome,
            self.epoch,
            &self.view,
            dt,
        );
        // 6. Collision resolution (breaches, strikes, pickups)
        systems::collision::run(
            &mut self.world,
            &mut self.rng,
            &mut self.weapon,
            &mut self.score,
            &mut *self.highscores,
            &mut self.phase,
            &mut self.outcome,
            &mut self.audio_events,
            &self.view,
        );
    }

    // --- Test access ---

    /// Get a mutable reference to the wave state (for scenario setup).
    #[cfg(test)]
    pub fn waves_mut(&mut self) -> &mut WaveState {
        &mut self.waves
    }

    /// Force the keep to a specific health value.
    #[cfg(test)]
    pub fn set_keep_health(&mut self, health: f64) {
        use redoubt_core::components::Keep;
        for (_entity, keep) in self.world.query_mut::<&mut Keep>() {
            keep.health = health;
        }
    }

    /// Spawn a raider of a known archetype at a known position.
    #[cfg(test)]
    pub fn spawn_raider_at(
        &mut self,
        position: Position,
        archetype: redoubt_core::enums::RaiderArchetype,
    ) -> hecs::Entity {
        world_setup::spawn_raider_at(&mut self.world, position, archetype, &self.view)
    }

    /// Spawn a bolt at a known position and heading.
    #[cfg(test)]
    pub fn spawn_bolt_at(&mut self, position: Position, angle: f64, damage: f64) -> hecs::Entity {
        world_setup::spawn_bolt(&mut self.world, position, 0.0, angle, damage)
    }

    /// Spawn a pickup of a known kind.
    #[cfg(test)]
    pub fn spawn_pickup_at(
        &mut self,
        position: Position,
        kind: redoubt_core::enums::PickupKind,
    ) -> hecs::Entity {
        world_setup::spawn_pickup_of(&mut self.world, position, kind)
    }

    /// Remove every raider without awarding score (simulates a cleared
    /// field for wave-completion tests).
    #[cfg(test)]
    pub fn despawn_all_raiders(&mut self) {
        use redoubt_core::components::Raider;
        let raiders: Vec<hecs::Entity> = {
            let mut query = self.world.query::<&Raider>();
            query.iter().map(|(entity, _)| entity).collect()
        };
        for entity in raiders {
            let _ = self.world.despawn(entity);
        }
    }
}
