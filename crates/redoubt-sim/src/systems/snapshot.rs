//! Snapshot system: queries the world and builds a complete
//! GameStateSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use redoubt_core::components::*;
use redoubt_core::constants::{KEEP_HEIGHT, KEEP_WIDTH};
use redoubt_core::enums::{GamePhase, Outcome};
use redoubt_core::events::AudioEvent;
use redoubt_core::state::*;
use redoubt_core::types::{Position, SimTime, Velocity};

use crate::session::{InputState, ScoreState, WeaponLoadout};
use crate::systems::wave_director::WaveState;

/// Build a complete GameStateSnapshot from the current world state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    outcome: Option<Outcome>,
    waves: &WaveState,
    weapon: &WeaponLoadout,
    score: &ScoreState,
    input: &InputState,
    audio_events: Vec<AudioEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        outcome,
        wave: WaveView {
            number: waves.wave,
            active: waves.active,
            quota: waves.quota,
            spawned: waves.spawned,
        },
        score: score.score,
        high_score: score.high_score,
        keep: build_keep(world),
        player: build_player(world, input),
        weapon: WeaponView {
            name: weapon.name,
            damage: weapon.damage,
            cooldown_secs: weapon.cooldown_secs,
            spread: weapon.spread,
        },
        bolts: build_bolts(world),
        raiders: build_raiders(world),
        pickups: build_pickups(world),
        particles: build_particles(world),
        audio_events,
    }
}

fn build_keep(world: &World) -> KeepView {
    world
        .query::<(&Keep, &Position)>()
        .iter()
        .next()
        .map(|(_, (keep, pos))| KeepView {
            position: *pos,
            width: KEEP_WIDTH,
            height: KEEP_HEIGHT,
            health: keep.health,
        })
        .unwrap_or_default()
}

fn build_player(world: &World, input: &InputState) -> PlayerView {
    world
        .query::<(&PlayerUnit, &Position, &Velocity, &Collider)>()
        .iter()
        .next()
        .map(|(_, (_, pos, vel, collider))| PlayerView {
            position: *pos,
            velocity: *vel,
            radius: collider.radius,
            aim: input.aim,
        })
        .unwrap_or_default()
}

fn build_bolts(world: &World) -> Vec<BoltView> {
    let mut rows: Vec<(u32, BoltView)> = world
        .query::<(&Bolt, &Position, &Velocity, &Collider)>()
        .iter()
        .map(|(entity, (_tag, pos, vel, collider))| {
            (
                entity.id(),
                BoltView {
                    position: *pos,
                    velocity: *vel,
                    radius: collider.radius,
                },
            )
        })
        .collect();
    rows.sort_by_key(|(id, _)| *id);
    rows.into_iter().map(|(_, view)| view).collect()
}

fn build_raiders(world: &World) -> Vec<RaiderView> {
    let mut rows: Vec<(u32, RaiderView)> = world
        .query::<(&Raider, &Position, &Collider, &RaiderProfile)>()
        .iter()
        .map(|(entity, (_tag, pos, collider, profile))| {
            (
                entity.id(),
                RaiderView {
                    position: *pos,
                    archetype: profile.archetype,
                    health: profile.health,
                    max_health: profile.max_health,
                    radius: collider.radius,
                },
            )
        })
        .collect();
    rows.sort_by_key(|(id, _)| *id);
    rows.into_iter().map(|(_, view)| view).collect()
}

fn build_pickups(world: &World) -> Vec<PickupView> {
    let mut rows: Vec<(u32, PickupView)> = world
        .query::<(&Pickup, &Position, &Collider, &PickupState)>()
        .iter()
        .map(|(entity, (_tag, pos, collider, state))| {
            (
                entity.id(),
                PickupView {
                    position: *pos,
                    kind: state.kind,
                    radius: collider.radius,
                    life_secs: state.life_secs,
                },
            )
        })
        .collect();
    rows.sort_by_key(|(id, _)| *id);
    rows.into_iter().map(|(_, view)| view).collect()
}

fn build_particles(world: &World) -> Vec<ParticleView> {
    let mut rows: Vec<(u32, ParticleView)> = world
        .query::<(&Particle, &Position, &ParticleState)>()
        .iter()
        .map(|(entity, (_tag, pos, state))| {
            (
                entity.id(),
                ParticleView {
                    position: *pos,
                    tint: state.tint,
                    radius: state.radius,
                    alpha: (state.life_secs / state.max_life_secs).clamp(0.0, 1.0),
                },
            )
        })
        .collect();
    rows.sort_by_key(|(id, _)| *id);
    rows.into_iter().map(|(_, view)| view).collect()
}
