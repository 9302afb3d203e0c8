use voidstrike::config::*;
use voidstrike::entities::{AssetSet, Enemy};
use voidstrike::spawn::{spawn_enemy, spot_is_free};

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn blocker(x: f32, y: f32) -> Enemy {
    Enemy {
        x,
        y,
        vy: 0.0,
        archetype: &ARCHETYPES[0],
        hp: 1,
        next_fire: u64::MAX,
        bullet_speed: 120.0,
        shoot_interval: 2500,
    }
}

// ── spot_is_free ──────────────────────────────────────────────────────────────

#[test]
fn slot_blocked_inside_spacing() {
    let enemies = vec![blocker(270.0, 50.0)];
    assert!(!spot_is_free(&enemies, 280.0));
    assert!(!spot_is_free(&enemies, 270.0));
    assert!(!spot_is_free(&enemies, 230.0));
}

#[test]
fn slot_free_outside_spacing() {
    let enemies = vec![blocker(270.0, 50.0)];
    assert!(spot_is_free(&enemies, 400.0));
    assert!(spot_is_free(&enemies, 320.0)); // exactly min spacing away
}

#[test]
fn slot_free_once_blocker_left_top_band() {
    let enemies = vec![blocker(270.0, 150.0)];
    assert!(spot_is_free(&enemies, 280.0));
}

#[test]
fn empty_field_is_all_free() {
    assert!(spot_is_free(&[], 25.0));
    assert!(spot_is_free(&[], 515.0));
}

// ── spawn_enemy ───────────────────────────────────────────────────────────────

#[test]
fn spawn_on_empty_field_succeeds() {
    let enemy = spawn_enemy(&[], &AssetSet::all(), 1, 0, &mut seeded_rng())
        .expect("empty field must yield a spawn");
    assert_eq!(enemy.y, 0.0);
    assert!(enemy.x >= SPAWN_MARGIN && enemy.x <= GAME_WIDTH - SPAWN_MARGIN);
    // Level 1 leaves the archetype stats unscaled
    assert_eq!(enemy.vy, enemy.archetype.speed);
    assert_eq!(enemy.hp, enemy.archetype.health);
    assert_eq!(enemy.bullet_speed, enemy.archetype.bullet_speed);
    assert_eq!(enemy.shoot_interval, enemy.archetype.shoot_interval);
    // First-shot deadline lands inside one interval
    assert!(enemy.next_fire <= enemy.shoot_interval);
}

#[test]
fn spawn_skips_cycle_when_top_band_is_crowded() {
    // Blockers every half-spacing across the whole spawnable range: every
    // draw lands within min spacing of one of them.
    let enemies: Vec<Enemy> = (0..=10)
        .map(|k| blocker(SPAWN_MARGIN + k as f32 * 50.0, 50.0))
        .collect();
    assert!(spawn_enemy(&enemies, &AssetSet::all(), 1, 0, &mut seeded_rng()).is_none());
}

#[test]
fn spawn_aborts_on_missing_asset() {
    assert!(spawn_enemy(&[], &AssetSet::empty(), 1, 0, &mut seeded_rng()).is_none());
}

#[test]
fn spawn_scales_stats_with_level() {
    // Same seed → same position and archetype draw at both levels
    let e1 = spawn_enemy(&[], &AssetSet::all(), 1, 0, &mut StdRng::seed_from_u64(7)).unwrap();
    let e3 = spawn_enemy(&[], &AssetSet::all(), 3, 0, &mut StdRng::seed_from_u64(7)).unwrap();
    assert_eq!(e1.archetype, e3.archetype);
    // Level 3 multiplier is 2.0: faster ships, faster bullets, half the
    // shot interval
    assert_eq!(e3.vy, e1.vy * 2.0);
    assert_eq!(e3.bullet_speed, e1.bullet_speed * 2.0);
    assert_eq!(e3.shoot_interval, e1.shoot_interval / 2);
}

#[test]
fn spawn_deadline_offsets_from_sim_clock() {
    let enemy = spawn_enemy(&[], &AssetSet::all(), 1, 40_000, &mut seeded_rng()).unwrap();
    assert!(enemy.next_fire >= 40_000);
    assert!(enemy.next_fire <= 40_000 + enemy.shoot_interval);
}

// ── Level multiplier table ────────────────────────────────────────────────────

#[test]
fn level_multiplier_steps_by_half() {
    assert_eq!(level_multiplier(1), 1.0);
    assert_eq!(level_multiplier(2), 1.5);
    assert_eq!(level_multiplier(3), 2.0);
    assert_eq!(level_multiplier(5), 3.0);
}

#[test]
fn roster_has_five_classes() {
    assert_eq!(ARCHETYPES.len(), 5);
    for archetype in &ARCHETYPES {
        assert!(archetype.health >= 1 && archetype.health <= 4);
        assert!(archetype.speed > 0.0);
        assert!(archetype.shoot_interval > 0);
    }
}
