use voidstrike::compute::init_state;
use voidstrike::config::ARCHETYPES;
use voidstrike::entities::*;

#[test]
fn entity_enums_compare() {
    assert_eq!(Phase::Running, Phase::Running);
    assert_ne!(Phase::Running, Phase::GameOver);
    assert_ne!(Phase::LevelTransition, Phase::GameOver);
    assert_eq!(BulletOwner::Player, BulletOwner::Player);
    assert_ne!(BulletOwner::Player, BulletOwner::Enemy);
}

#[test]
fn game_state_clone_is_independent() {
    let original = init_state(0);
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.x = 99.0;
    cloned.score = 999;
    cloned.enemies.push(Enemy {
        x: 5.0,
        y: 5.0,
        vy: 0.0,
        archetype: &ARCHETYPES[0],
        hp: 1,
        next_fire: 0,
        bullet_speed: 120.0,
        shoot_interval: 2500,
    });

    assert_eq!(original.player.x, 270.0);
    assert_eq!(original.score, 0);
    assert!(original.enemies.is_empty());
}

#[test]
fn asset_set_tracks_loaded_keys() {
    let mut assets = AssetSet::all();
    for archetype in &ARCHETYPES {
        assert!(assets.is_loaded(archetype.key));
    }
    assets.unload("voidWalker");
    assert!(!assets.is_loaded("voidWalker"));
    assert!(assets.is_loaded("nebulaWraith"));

    assert!(!AssetSet::empty().is_loaded("nebulaWraith"));
}
