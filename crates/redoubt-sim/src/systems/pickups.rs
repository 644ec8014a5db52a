//! Pickup effects — one application path shared by both collection triggers.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use redoubt_core::constants::*;
use redoubt_core::enums::{PickupKind, WeaponName};

use crate::session::WeaponLoadout;

/// Apply a collected pickup to the weapon or the keep. Both collection
/// paths (player proximity and direct click) route through here.
pub fn apply_effect(kind: PickupKind, weapon: &mut WeaponLoadout, keep_health: &mut f64) {
    match kind {
        PickupKind::RapidFire => {
            weapon.cooldown_secs =
                (weapon.cooldown_secs * WEAPON_COOLDOWN_FACTOR).max(WEAPON_COOLDOWN_FLOOR);
            weapon.name = WeaponName::Rapid;
        }
        PickupKind::Spread => {
            weapon.spread = (weapon.spread + 1).min(WEAPON_SPREAD_MAX);
            weapon.name = WeaponName::Spread;
        }
        PickupKind::Damage => {
            weapon.damage += 1.0;
            weapon.name = WeaponName::Strong;
        }
        PickupKind::Heal => {
            *keep_health = (*keep_health + HEAL_AMOUNT).min(KEEP_MAX_HEALTH);
        }
    }
}

/// Roll the drop chance for a slain raider.
pub fn roll_drop(rng: &mut ChaCha8Rng) -> bool {
    rng.gen::<f64>() < PICKUP_DROP_CHANCE
}
