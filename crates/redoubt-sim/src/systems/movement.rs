//! Kinematic integration: position += velocity * dt for every non-player
//! entity, plus the downward pull on particles.

use hecs::{Without, World};

use redoubt_core::components::{ParticleState, PlayerUnit};
use redoubt_core::constants::PARTICLE_GRAVITY;
use redoubt_core::types::{Position, Velocity};

/// Integrate bolts, raiders, and particles. The player has its own system.
pub fn run(world: &mut World, dt: f64) {
    for (_entity, (pos, vel)) in
        world.query_mut::<Without<(&mut Position, &Velocity), &PlayerUnit>>()
    {
        pos.x += vel.x * dt;
        pos.y += vel.y * dt;
    }

    // particles arc downward
    for (_entity, (vel, _particle)) in world.query_mut::<(&mut Velocity, &ParticleState)>() {
        vel.y += PARTICLE_GRAVITY * dt;
    }
}
