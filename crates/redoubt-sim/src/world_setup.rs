//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the keep, the player emplacement, and the raider/bolt/pickup/
//! particle entities with appropriate component bundles.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use redoubt_core::components::*;
use redoubt_core::constants::*;
use redoubt_core::enums::{ParticleTint, PickupKind, RaiderArchetype};
use redoubt_core::types::{Position, Velocity, Viewport};

/// Set up a fresh session world: the keep and the player emplacement.
pub fn setup_session(world: &mut World, view: &Viewport) {
    spawn_keep(world, view);
    spawn_player(world, view);
}

/// Spawn the keep at full health, anchored top-center of the wall.
pub fn spawn_keep(world: &mut World, view: &Viewport) -> hecs::Entity {
    world.spawn((
        Keep {
            health: KEEP_MAX_HEALTH,
        },
        Position::new(view.width / 2.0, KEEP_Y),
    ))
}

/// Spawn the player emplacement at its rest position below the gate.
pub fn spawn_player(world: &mut World, view: &Viewport) -> hecs::Entity {
    world.spawn((
        PlayerUnit,
        Position::new(
            view.width / 2.0,
            KEEP_Y + KEEP_HEIGHT - PLAYER_SPAWN_OFFSET,
        ),
        Velocity::default(),
        Collider {
            radius: PLAYER_RADIUS,
        },
    ))
}

/// Spawn a raider for the given wave, drawing its entry point and archetype
/// from the spawn distribution.
pub fn spawn_raider(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    wave: u32,
    view: &Viewport,
) -> hecs::Entity {
    let roll: f64 = rng.gen();
    let position = if roll < LANE_SPAWN_PROB {
        // the approach lane up the middle
        Position::new(
            rng.gen_range(
                view.width / 2.0 - LANE_HALF_WIDTH..view.width / 2.0 + LANE_HALF_WIDTH,
            ),
            view.height + SPAWN_MARGIN,
        )
    } else if roll < LANE_SPAWN_PROB + (1.0 - LANE_SPAWN_PROB) / 2.0 {
        Position::new(
            -SPAWN_MARGIN,
            rng.gen_range(view.height / 2.0..view.height - EDGE_SPAWN_BOTTOM_PAD),
        )
    } else {
        Position::new(
            view.width + SPAWN_MARGIN,
            rng.gen_range(view.height / 2.0..view.height - EDGE_SPAWN_BOTTOM_PAD),
        )
    };

    let archetype = draw_archetype(rng, wave);
    spawn_raider_at(world, position, archetype, view)
}

/// Spawn a raider of a known archetype at a known position, heading for the
/// gate. The velocity is computed once, here.
pub fn spawn_raider_at(
    world: &mut World,
    position: Position,
    archetype: RaiderArchetype,
    view: &Viewport,
) -> hecs::Entity {
    let (health, speed, radius) = raider_archetype_params(archetype);
    let angle = position.angle_to(&view.gate_center());

    world.spawn((
        Raider,
        position,
        Velocity::from_angle(angle, speed),
        Collider { radius },
        RaiderProfile {
            archetype,
            max_health: health,
            health,
        },
    ))
}

/// Draw an archetype for the given wave. The footman share is clamped so it
/// never crosses the skirmisher threshold.
fn draw_archetype(rng: &mut ChaCha8Rng, wave: u32) -> RaiderArchetype {
    let roll: f64 = rng.gen();
    let footman_share =
        (FOOTMAN_SHARE_BASE + wave as f64 * FOOTMAN_SHARE_STEP).min(FOOTMAN_SHARE_BASE);
    if roll < footman_share {
        RaiderArchetype::Footman
    } else if roll < SKIRMISHER_SHARE_CEIL {
        RaiderArchetype::Skirmisher
    } else {
        RaiderArchetype::Knight
    }
}

/// Kinematic parameters for a raider archetype: (health, speed px/s, radius).
pub fn raider_archetype_params(archetype: RaiderArchetype) -> (f64, f64, f64) {
    match archetype {
        RaiderArchetype::Footman => (FOOTMAN_HEALTH, FOOTMAN_SPEED, FOOTMAN_RADIUS),
        RaiderArchetype::Knight => (KNIGHT_HEALTH, KNIGHT_SPEED, KNIGHT_RADIUS),
        RaiderArchetype::Skirmisher => (
            SKIRMISHER_HEALTH,
            SKIRMISHER_SPEED,
            SKIRMISHER_RADIUS,
        ),
    }
}

/// Spawn a bolt leaving the muzzle along `angle`.
pub fn spawn_bolt(
    world: &mut World,
    origin: Position,
    muzzle_offset: f64,
    angle: f64,
    damage: f64,
) -> hecs::Entity {
    world.spawn((
        Bolt,
        Position::new(
            origin.x + angle.cos() * muzzle_offset,
            origin.y + angle.sin() * muzzle_offset,
        ),
        Velocity::from_angle(angle, BOLT_SPEED),
        Collider {
            radius: BOLT_RADIUS,
        },
        BoltState {
            damage,
            life_secs: BOLT_LIFETIME_SECS,
        },
    ))
}

/// Spawn a pickup of a random kind where a raider fell.
pub fn spawn_pickup(world: &mut World, rng: &mut ChaCha8Rng, position: Position) -> hecs::Entity {
    let kind = match rng.gen_range(0..4u32) {
        0 => PickupKind::RapidFire,
        1 => PickupKind::Spread,
        2 => PickupKind::Damage,
        _ => PickupKind::Heal,
    };
    spawn_pickup_of(world, position, kind)
}

/// Spawn a pickup of a known kind.
pub fn spawn_pickup_of(world: &mut World, position: Position, kind: PickupKind) -> hecs::Entity {
    world.spawn((
        Pickup,
        position,
        Collider {
            radius: PICKUP_RADIUS,
        },
        PickupState {
            kind,
            life_secs: PICKUP_LIFETIME_SECS,
        },
    ))
}

/// Spawn a radial burst of particles at `origin`.
pub fn spawn_particle_burst(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    origin: Position,
    tint: ParticleTint,
    count: u32,
) {
    for _ in 0..count {
        let angle = rng.gen_range(0.0..std::f64::consts::TAU);
        let speed = PARTICLE_SPEED_MIN + rng.gen::<f64>() * PARTICLE_SPEED_SPAN;
        let life = PARTICLE_LIFE_MIN + rng.gen::<f64>() * PARTICLE_LIFE_SPAN;
        let radius = PARTICLE_RADIUS_MIN + rng.gen::<f64>() * PARTICLE_RADIUS_SPAN;

        world.spawn((
            Particle,
            origin,
            Velocity::from_angle(angle, speed),
            ParticleState {
                tint,
                radius,
                life_secs: life,
                max_life_secs: life,
            },
        ));
    }
}
