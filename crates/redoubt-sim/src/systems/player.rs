//! Player emplacement update: held-input acceleration, damping, clamping.
//!
//! The player integrates here rather than in the movement system because
//! acceleration, integration, and damping are interleaved per frame.

use hecs::World;

use redoubt_core::components::{Collider, PlayerUnit};
use redoubt_core::constants::*;
use redoubt_core::types::{Position, Velocity, Viewport};

use crate::session::InputState;

/// Run the player update for one frame.
pub fn run(world: &mut World, input: &InputState, dt: f64, view: &Viewport) {
    for (_entity, (_player, pos, vel, collider)) in
        world.query_mut::<(&PlayerUnit, &mut Position, &mut Velocity, &Collider)>()
    {
        let mut held = 0.0;
        if input.move_left {
            held -= 1.0;
        }
        if input.move_right {
            held += 1.0;
        }
        if held != 0.0 {
            vel.x += held * PLAYER_SPEED * PLAYER_ACCEL_FACTOR * dt;
        }

        pos.x += vel.x * dt;
        pos.y += vel.y * dt;

        let damp = (1.0 - PLAYER_DAMPING * dt).max(0.0);
        vel.x *= damp;
        vel.y *= damp;

        // keep near the keep base, with some vertical allowance for recoil
        let min_y = KEEP_Y + KEEP_HEIGHT - PLAYER_BAND_TOP;
        let max_y = KEEP_Y + KEEP_HEIGHT - PLAYER_BAND_BOTTOM;
        pos.y = pos.y.clamp(min_y, max_y);
        pos.x = pos.x.clamp(collider.radius, view.width - collider.radius);
    }
}
