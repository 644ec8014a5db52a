//! Collision resolution: gate breaches, bolt strikes, pickup collection.
//!
//! Queries collect candidates into buffers first, then mutations and
//! despawns run against the world, so iteration never observes removal.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use redoubt_core::components::*;
use redoubt_core::constants::*;
use redoubt_core::enums::{GamePhase, Outcome, ParticleTint, PickupKind};
use redoubt_core::events::AudioEvent;
use redoubt_core::types::{Position, Viewport};

use crate::highscore::HighScoreStore;
use crate::session::{ScoreState, WeaponLoadout};
use crate::systems::pickups;
use crate::world_setup;

/// Resolve all proximity interactions for one frame.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    weapon: &mut WeaponLoadout,
    score: &mut ScoreState,
    store: &mut dyn HighScoreStore,
    phase: &mut GamePhase,
    outcome: &mut Option<Outcome>,
    audio_events: &mut Vec<AudioEvent>,
    view: &Viewport,
) {
    resolve_gate_breaches(world, rng, score, store, phase, outcome, audio_events, view);
    resolve_bolt_strikes(world, rng, score, store, audio_events);
    resolve_pickup_collection(world, weapon, audio_events);
}

/// Raiders that reach the gate damage the keep and are consumed.
#[allow(clippy::too_many_arguments)]
fn resolve_gate_breaches(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    score: &mut ScoreState,
    store: &mut dyn HighScoreStore,
    phase: &mut GamePhase,
    outcome: &mut Option<Outcome>,
    audio_events: &mut Vec<AudioEvent>,
    view: &Viewport,
) {
    let gate = view.gate_center();

    let mut breaches: Vec<(Entity, Position)> = Vec::new();
    {
        let mut query = world.query::<(&Raider, &Position, &Collider)>();
        for (entity, (_raider, pos, collider)) in query.iter() {
            if pos.distance_to(&gate) < collider.radius + GATE_CONTACT_PAD {
                breaches.push((entity, *pos));
            }
        }
    }

    for (entity, pos) in breaches {
        let _ = world.despawn(entity);
        world_setup::spawn_particle_burst(world, rng, pos, ParticleTint::Ember, BREACH_BURST);
        audio_events.push(AudioEvent::Hit);

        let mut keep_destroyed = false;
        for (_entity, keep) in world.query_mut::<&mut Keep>() {
            keep.health = (keep.health - BREACH_DAMAGE).max(0.0);
            keep_destroyed = keep.health <= 0.0;
        }

        if keep_destroyed && *phase == GamePhase::Playing {
            *phase = GamePhase::GameOver;
            *outcome = Some(Outcome::Defeat);
            score.sync_high_score(store);
        }
    }
}

/// Bolt-versus-raider hits. Each bolt is single-use, and each raider takes
/// at most one hit per frame (first matching bolt wins).
fn resolve_bolt_strikes(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    score: &mut ScoreState,
    store: &mut dyn HighScoreStore,
    audio_events: &mut Vec<AudioEvent>,
) {
    let bolts: Vec<(Entity, Position, f64, f64)> = {
        let mut query = world.query::<(&Bolt, &Position, &Collider, &BoltState)>();
        query
            .iter()
            .map(|(entity, (_bolt, pos, collider, state))| {
                (entity, *pos, collider.radius, state.damage)
            })
            .collect()
    };
    if bolts.is_empty() {
        return;
    }

    struct Strike {
        raider: Entity,
        bolt: Entity,
        impact: Position,
        damage: f64,
    }

    let mut strikes: Vec<Strike> = Vec::new();
    let mut spent: Vec<Entity> = Vec::new();
    {
        let mut query = world.query::<(&Raider, &Position, &Collider)>();
        for (raider, (_tag, pos, collider)) in query.iter() {
            for &(bolt, bolt_pos, bolt_radius, damage) in &bolts {
                if spent.contains(&bolt) {
                    continue;
                }
                if pos.distance_to(&bolt_pos) < collider.radius + bolt_radius {
                    spent.push(bolt);
                    strikes.push(Strike {
                        raider,
                        bolt,
                        impact: bolt_pos,
                        damage,
                    });
                    break;
                }
            }
        }
    }

    for strike in strikes {
        let _ = world.despawn(strike.bolt);
        world_setup::spawn_particle_burst(world, rng, strike.impact, ParticleTint::Spark, HIT_BURST);
        audio_events.push(AudioEvent::Hit);

        let mut slain_max_health = None;
        if let Ok(mut profile) = world.get::<&mut RaiderProfile>(strike.raider) {
            profile.health -= strike.damage;
            if profile.health <= 0.0 {
                slain_max_health = Some(profile.max_health);
            }
        }

        if let Some(max_health) = slain_max_health {
            let pos = world
                .get::<&Position>(strike.raider)
                .map(|p| *p)
                .unwrap_or(strike.impact);

            score.award((max_health.floor() as u32).max(1), store);
            world_setup::spawn_particle_burst(world, rng, pos, ParticleTint::Blood, DEATH_BURST);
            audio_events.push(AudioEvent::Death);
            if pickups::roll_drop(rng) {
                world_setup::spawn_pickup(world, rng, pos);
            }
            let _ = world.despawn(strike.raider);
        }
    }
}

/// Pickups within reach of the player are collected.
fn resolve_pickup_collection(
    world: &mut World,
    weapon: &mut WeaponLoadout,
    audio_events: &mut Vec<AudioEvent>,
) {
    let Some((player_pos, player_radius)) = player_reach(world) else {
        return;
    };

    let mut collected: Vec<(Entity, PickupKind)> = Vec::new();
    {
        let mut query = world.query::<(&Pickup, &Position, &Collider, &PickupState)>();
        for (entity, (_tag, pos, collider, state)) in query.iter() {
            if pos.distance_to(&player_pos) < collider.radius + player_radius {
                collected.push((entity, state.kind));
            }
        }
    }

    for (entity, kind) in collected {
        let _ = world.despawn(entity);
        apply_pickup(world, kind, weapon);
        audio_events.push(AudioEvent::Start);
    }
}

/// Collect the pickup under a pointer click, if any. Same effect path as
/// proximity collection, plus a glint burst at the pickup.
pub fn collect_pickup_at(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    weapon: &mut WeaponLoadout,
    point: Position,
    audio_events: &mut Vec<AudioEvent>,
) -> bool {
    let mut target: Option<(Entity, PickupKind, Position)> = None;
    {
        let mut query = world.query::<(&Pickup, &Position, &Collider, &PickupState)>();
        for (entity, (_tag, pos, collider, state)) in query.iter() {
            if pos.distance_to(&point) < collider.radius + PICKUP_CLICK_PAD {
                target = Some((entity, state.kind, *pos));
                break;
            }
        }
    }

    let Some((entity, kind, pos)) = target else {
        return false;
    };
    let _ = world.despawn(entity);
    apply_pickup(world, kind, weapon);
    world_setup::spawn_particle_burst(world, rng, pos, ParticleTint::Glint, GLINT_BURST);
    audio_events.push(AudioEvent::Start);
    true
}

fn apply_pickup(world: &mut World, kind: PickupKind, weapon: &mut WeaponLoadout) {
    for (_entity, keep) in world.query_mut::<&mut Keep>() {
        pickups::apply_effect(kind, weapon, &mut keep.health);
        break;
    }
}

fn player_reach(world: &World) -> Option<(Position, f64)> {
    world
        .query::<(&PlayerUnit, &Position, &Collider)>()
        .iter()
        .next()
        .map(|(_, (_, pos, collider))| (*pos, collider.radius))
}
