//! Cleanup system: ages timed entities and removes the expired ones.

use hecs::{Entity, World};

use redoubt_core::components::{BoltState, ParticleState, PickupState};

/// Decay remaining lifetimes and despawn entities whose time is up.
/// Uses a pre-allocated buffer to avoid per-frame allocation.
pub fn run(world: &mut World, dt: f64, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, bolt) in world.query_mut::<&mut BoltState>() {
        bolt.life_secs -= dt;
        if bolt.life_secs <= 0.0 {
            despawn_buffer.push(entity);
        }
    }

    for (entity, pickup) in world.query_mut::<&mut PickupState>() {
        pickup.life_secs -= dt;
        if pickup.life_secs <= 0.0 {
            despawn_buffer.push(entity);
        }
    }

    for (entity, particle) in world.query_mut::<&mut ParticleState>() {
        particle.life_secs -= dt;
        if particle.life_secs <= 0.0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
