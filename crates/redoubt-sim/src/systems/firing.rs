//! Firing system — cooldown-gated spread volleys toward the aim point.

use hecs::World;

use redoubt_core::components::{Collider, PlayerUnit};
use redoubt_core::constants::SPREAD_STEP_RAD;
use redoubt_core::events::AudioEvent;
use redoubt_core::types::{Position, SimTime};

use crate::session::{InputState, WeaponLoadout};
use crate::world_setup;

/// Emit a volley if fire intent is held and the cooldown has elapsed.
pub fn run(
    world: &mut World,
    input: &InputState,
    weapon: &mut WeaponLoadout,
    time: &SimTime,
    audio_events: &mut Vec<AudioEvent>,
) {
    if !input.firing {
        return;
    }
    if time.elapsed_secs - weapon.last_shot_secs <= weapon.cooldown_secs {
        return;
    }
    let Some((origin, muzzle_offset)) = player_muzzle(world) else {
        return;
    };

    weapon.last_shot_secs = time.elapsed_secs;

    // fan the volley symmetrically around the aim angle
    let aim = origin.angle_to(&input.aim);
    for i in 0..weapon.spread {
        let offset = (i as f64 - (weapon.spread - 1) as f64 / 2.0) * SPREAD_STEP_RAD;
        world_setup::spawn_bolt(world, origin, muzzle_offset, aim + offset, weapon.damage);
    }

    audio_events.push(AudioEvent::Fire);
}

fn player_muzzle(world: &World) -> Option<(Position, f64)> {
    world
        .query::<(&PlayerUnit, &Position, &Collider)>()
        .iter()
        .next()
        .map(|(_, (_, pos, collider))| (*pos, collider.radius))
}
