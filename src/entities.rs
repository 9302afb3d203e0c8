/// All game entity types — pure data, no logic.

use std::collections::HashSet;

use crate::background::Backdrop;
use crate::clock::Interval;
use crate::config::{self, Archetype};

/// Mutually exclusive simulation modes.  Spawning and firing only happen
/// in `Running`; the other two freeze the sim clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    Running,
    LevelTransition,
    GameOver,
}

#[derive(Clone, Debug, PartialEq)]
pub enum BulletOwner {
    Player,
    Enemy,
}

#[derive(Clone, Debug)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
    /// Vertical velocity, units per second.  Negative is upward.
    pub vy: f32,
    pub scale: f32,
    /// 0xRRGGBB render tint.
    pub tint: u32,
    pub owner: BulletOwner,
}

/// The one player ship.  Repositioned on respawn, never recreated.
#[derive(Clone, Debug)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub alive: bool,
}

#[derive(Clone, Debug)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    /// Downward velocity, units per second (archetype speed × level multiplier).
    pub vy: f32,
    pub archetype: &'static Archetype,
    /// Remaining hit points, seeded from the archetype.  Resolution
    /// currently destroys on first hit regardless.
    pub hp: u32,
    /// Absolute sim-clock deadline of this ship's next shot.
    pub next_fire: u64,
    /// Bullet speed for this ship, level-scaled at spawn.
    pub bullet_speed: f32,
    /// Milliseconds between this ship's shots, level-scaled at spawn.
    pub shoot_interval: u64,
}

/// A transient visual effect.  Carries no gameplay state; the cleanup
/// sweep drops it once the sim clock passes `expires_at`.
#[derive(Clone, Debug)]
pub struct Explosion {
    pub x: f32,
    pub y: f32,
    pub expires_at: u64,
}

// ── Host-loaded assets ────────────────────────────────────────────────────────

/// Sprite keys the host reports as loaded.  The spawner refuses to create
/// an enemy whose archetype key is missing, so a ship with no valid
/// representation never enters the simulation.
#[derive(Clone, Debug)]
pub struct AssetSet {
    loaded: HashSet<&'static str>,
}

impl AssetSet {
    /// Every archetype key present — the normal case.
    pub fn all() -> Self {
        AssetSet {
            loaded: config::ARCHETYPES.iter().map(|a| a.key).collect(),
        }
    }

    pub fn empty() -> Self {
        AssetSet { loaded: HashSet::new() }
    }

    pub fn is_loaded(&self, key: &str) -> bool {
        self.loaded.contains(key)
    }

    pub fn unload(&mut self, key: &str) {
        self.loaded.remove(key);
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire simulation context.  Cloneable so pure update functions can
/// return a new copy without mutating the original; no ambient globals,
/// so several independent games can run side by side.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    /// Velocity intent from the active input adapter, each axis in [-1, 1].
    pub move_intent: (f32, f32),
    pub fire_intent: bool,

    pub enemies: Vec<Enemy>,
    /// Player and enemy bullets in one pool, told apart by `owner`.
    pub bullets: Vec<Bullet>,
    pub explosions: Vec<Explosion>,
    pub backdrop: Backdrop,
    pub assets: AssetSet,

    pub score: u32,
    pub level: u32,
    pub phase: Phase,

    pub spawning_enabled: bool,
    /// Repeating spawn-attempt timer on the sim clock.
    pub spawn_timer: Interval,
    /// Repeating fire-intent sampling timer on the sim clock.
    pub fire_timer: Interval,

    /// Host-clock deadline at which a frozen sim clock resumes.
    pub resume_clock_at: Option<u64>,
    /// Host-clock deadline at which spawning is re-enabled.
    pub enable_spawn_at: Option<u64>,

    /// The simulation clock, milliseconds.  Frozen while `clock_paused`.
    pub sim_now: u64,
    pub clock_paused: bool,
    /// Last host timestamp seen by `update`; tick deltas derive from it.
    pub host_now: u64,

    pub width: f32,
    pub height: f32,
}
