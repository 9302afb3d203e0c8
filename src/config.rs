/// Field dimensions, timing constants and the enemy roster.
///
/// All values are world units (the field is 540×960 regardless of how the
/// frontend maps it to cells or pixels) and milliseconds.

pub const GAME_WIDTH: f32 = 540.0;
pub const GAME_HEIGHT: f32 = 960.0;

/// Height of one background tile; three of these stack into the backdrop.
pub const BACKGROUND_HEIGHT: f32 = 2720.0;
/// Number of background artworks cycled through on level transitions.
pub const BACKGROUND_ASSET_COUNT: usize = 3;
/// Downward scroll speed of the backdrop, units per second.
pub const BACKGROUND_SCROLL_SPEED: f32 = 120.0;

pub const PLAYER_SPEED: f32 = 100.0;
pub const PLAYER_BULLET_SPEED: f32 = 300.0;
pub const PLAYER_BULLET_SCALE: f32 = 0.4;
pub const PLAYER_BULLET_TINT: u32 = 0xFF0000;
/// Vertical offset between the player and the field bottom at spawn.
pub const PLAYER_SPAWN_OFFSET: f32 = 60.0;
/// Distance in front of a ship at which its bullets appear.
pub const MUZZLE_OFFSET: f32 = 20.0;

/// Period of the repeating enemy-spawn timer.
pub const ENEMY_SPAWN_DELAY: u64 = 1000;
/// Cadence at which held fire-intent is sampled into player bullets.
pub const FIRE_DELAY: u64 = 200;

/// How long an explosion effect stays on the field.
pub const EXPLOSION_DURATION: u64 = 1000;

/// Horizontal margin kept free of spawns on both field edges.
pub const SPAWN_MARGIN: f32 = 25.0;
/// Minimum horizontal distance to any enemy still near the top edge.
pub const SPAWN_MIN_SPACING: f32 = 50.0;
/// Enemies with y below this still block their horizontal slot.
pub const SPAWN_BAND: f32 = 100.0;
/// Random placements tried per spawn cycle before giving up.
pub const SPAWN_MAX_ATTEMPTS: u32 = 10;

/// Score awarded per enemy destroyed.
pub const KILL_REWARD: u32 = 10;
/// Score needed per level step.
pub const POINTS_PER_LEVEL: u32 = 250;

/// Delay on the host clock before a frozen sim clock resumes.
pub const CLOCK_RESUME_DELAY: u64 = 2000;
/// Further delay before spawning is re-enabled after the clock resumes.
pub const SPAWN_RESUME_DELAY: u64 = 1000;

// Collision half-extents.  Sprites are nominal squares scaled per
// archetype; bullets scale off their own base size.
pub const PLAYER_HALF: f32 = 24.0;
pub const ENEMY_SPRITE_HALF: f32 = 60.0;
pub const BULLET_SPRITE_HALF: f32 = 12.0;

// ── Enemy roster ─────────────────────────────────────────────────────────────

/// Static stats for one class of enemy, looked up by random draw at spawn.
#[derive(Debug, PartialEq)]
pub struct Archetype {
    /// Sprite key the host must have loaded for this enemy to spawn.
    pub key: &'static str,
    pub scale: f32,
    /// Base downward speed, units per second.
    pub speed: f32,
    /// Durability of one ship.  Damage resolution currently destroys on
    /// first hit; the field records archetype toughness for a multi-hit
    /// mode.
    pub health: u32,
    /// Base milliseconds between shots.
    pub shoot_interval: u64,
    /// Base downward bullet speed, units per second.
    pub bullet_speed: f32,
    /// 0xRRGGBB tint applied to this ship's bullets.
    pub bullet_tint: u32,
    pub bullet_scale: f32,
}

pub const ARCHETYPES: [Archetype; 5] = [
    Archetype { key: "nebulaWraith",  scale: 0.42, speed: 40.0, health: 2, shoot_interval: 2500, bullet_speed: 120.0, bullet_tint: 0xFF8000, bullet_scale: 0.6 },
    Archetype { key: "plasmaBeetle",  scale: 0.38, speed: 60.0, health: 1, shoot_interval: 1800, bullet_speed: 150.0, bullet_tint: 0x00FF00, bullet_scale: 0.5 },
    Archetype { key: "voidWalker",    scale: 0.25, speed: 30.0, health: 3, shoot_interval: 3000, bullet_speed: 100.0, bullet_tint: 0x0000FF, bullet_scale: 0.4 },
    Archetype { key: "darkStinger",   scale: 0.52, speed: 70.0, health: 1, shoot_interval: 1500, bullet_speed: 180.0, bullet_tint: 0xFFFF00, bullet_scale: 0.5 },
    Archetype { key: "meteorCrusher", scale: 0.23, speed: 20.0, health: 4, shoot_interval: 3500, bullet_speed: 90.0,  bullet_tint: 0xFF00FF, bullet_scale: 0.6 },
];

// ── Level scaling ────────────────────────────────────────────────────────────

/// Speed multiplier applied to enemy stats at the given level.
/// Level 1 → 1.0, level 2 → 1.5, level 3 → 2.0, …
pub fn level_multiplier(level: u32) -> f32 {
    1.0 + (level.saturating_sub(1)) as f32 * 0.5
}

/// The level a given score corresponds to.
pub fn level_for_score(score: u32) -> u32 {
    score / POINTS_PER_LEVEL + 1
}
