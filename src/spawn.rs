/// Enemy spawning — random placement with top-band spacing and
/// level-scaled stats.

use rand::Rng;

use crate::config::{
    self, GAME_WIDTH, SPAWN_BAND, SPAWN_MARGIN, SPAWN_MAX_ATTEMPTS, SPAWN_MIN_SPACING,
};
use crate::entities::{AssetSet, Enemy};

/// True when no enemy still near the top edge sits within the minimum
/// horizontal spacing of `x`.
pub fn spot_is_free(enemies: &[Enemy], x: f32) -> bool {
    !enemies
        .iter()
        .any(|e| (e.x - x).abs() < SPAWN_MIN_SPACING && e.y < SPAWN_BAND)
}

/// One spawn cycle: draw a position and an archetype, retry on crowded
/// slots, and return the new ship or `None`.
///
/// A cycle that finds no free slot within the retry limit is a normal
/// outcome, not an error: the field just stays thinner for one interval.
/// A missing sprite asset also yields `None`, so nothing unrenderable
/// ever joins the pool.
pub fn spawn_enemy(
    enemies: &[Enemy],
    assets: &AssetSet,
    level: u32,
    sim_now: u64,
    rng: &mut impl Rng,
) -> Option<Enemy> {
    for _ in 0..SPAWN_MAX_ATTEMPTS {
        let x = rng.gen_range(SPAWN_MARGIN..=GAME_WIDTH - SPAWN_MARGIN);
        let archetype = &config::ARCHETYPES[rng.gen_range(0..config::ARCHETYPES.len())];

        if !spot_is_free(enemies, x) {
            continue;
        }

        if !assets.is_loaded(archetype.key) {
            log::warn!("sprite '{}' not loaded, dropping spawn", archetype.key);
            return None;
        }

        let mult = config::level_multiplier(level);
        let shoot_interval = (archetype.shoot_interval as f32 / mult) as u64;
        return Some(Enemy {
            x,
            y: 0.0,
            vy: archetype.speed * mult,
            archetype,
            hp: archetype.health,
            // First shot lands somewhere inside one interval so a fresh
            // wave doesn't fire in lockstep.
            next_fire: sim_now + rng.gen_range(0..=shoot_interval),
            bullet_speed: archetype.bullet_speed * mult,
            shoot_interval,
        });
    }

    log::debug!(
        "no free spawn slot after {} attempts, skipping cycle",
        SPAWN_MAX_ATTEMPTS
    );
    None
}
