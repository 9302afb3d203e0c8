/// Pure simulation-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (plus the host timestamp and, where needed, an RNG handle)
/// and returns a brand-new `GameState`.  Side effects are limited to the
/// injected RNG and anomaly logging.

use rand::Rng;

use crate::background::Backdrop;
use crate::clock::Interval;
use crate::config::{
    self, BACKGROUND_SCROLL_SPEED, BULLET_SPRITE_HALF, CLOCK_RESUME_DELAY, ENEMY_SPAWN_DELAY,
    ENEMY_SPRITE_HALF, EXPLOSION_DURATION, FIRE_DELAY, GAME_HEIGHT, GAME_WIDTH, KILL_REWARD,
    MUZZLE_OFFSET, PLAYER_BULLET_SCALE, PLAYER_BULLET_SPEED, PLAYER_BULLET_TINT, PLAYER_HALF,
    PLAYER_SPAWN_OFFSET, PLAYER_SPEED, SPAWN_RESUME_DELAY,
};
use crate::entities::{
    AssetSet, Bullet, BulletOwner, Explosion, GameState, Phase, Player,
};
use crate::spawn;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial game state.  `host_now` is the host's monotonic
/// millisecond timestamp; tick deltas are derived from it from here on.
pub fn init_state(host_now: u64) -> GameState {
    GameState {
        player: Player {
            x: GAME_WIDTH / 2.0,
            y: GAME_HEIGHT - PLAYER_SPAWN_OFFSET,
            vx: 0.0,
            vy: 0.0,
            alive: true,
        },
        move_intent: (0.0, 0.0),
        fire_intent: false,
        enemies: Vec::new(),
        bullets: Vec::new(),
        explosions: Vec::new(),
        backdrop: Backdrop::new(),
        assets: AssetSet::all(),
        score: 0,
        level: 1,
        phase: Phase::Running,
        spawning_enabled: true,
        spawn_timer: Interval::new(0, ENEMY_SPAWN_DELAY),
        fire_timer: Interval::new(0, FIRE_DELAY),
        resume_clock_at: None,
        enable_spawn_at: None,
        sim_now: 0,
        clock_paused: false,
        host_now,
        width: GAME_WIDTH,
        height: GAME_HEIGHT,
    }
}

// ── Input-intent setters (pure) ──────────────────────────────────────────────

/// Record the velocity intent reported by the input adapter.  Axes are
/// clamped to [-1, 1]; positive y points down the field.
pub fn set_move_intent(state: &GameState, dx: f32, dy: f32) -> GameState {
    GameState {
        move_intent: (dx.clamp(-1.0, 1.0), dy.clamp(-1.0, 1.0)),
        ..state.clone()
    }
}

pub fn set_fire_intent(state: &GameState, firing: bool) -> GameState {
    GameState {
        fire_intent: firing,
        ..state.clone()
    }
}

// ── Respawn ──────────────────────────────────────────────────────────────────

/// Handle the respawn control.  Only meaningful while game-over: the
/// player is repositioned to the bottom-centre spawn point, score and
/// level reset, the field cleared, and the backdrop returned to its
/// initial layout.  The clock and spawner come back through the same
/// staged resume used by level transitions, so the pool is guaranteed
/// empty the instant respawn completes.
pub fn request_respawn(state: &GameState, host_now: u64) -> GameState {
    if state.phase != Phase::GameOver {
        return state.clone();
    }
    let mut next = state.clone();
    next.player = Player {
        x: next.width / 2.0,
        y: next.height - PLAYER_SPAWN_OFFSET,
        vx: 0.0,
        vy: 0.0,
        alive: true,
    };
    next.score = 0;
    next.level = 1;
    next.enemies.clear();
    next.bullets.clear();
    next.backdrop.reset();
    next.phase = Phase::Running;
    next.host_now = host_now;
    begin_staged_resume(&mut next, host_now);
    next
}

// ── Per-tick update ──────────────────────────────────────────────────────────

/// Advance the simulation by one tick.  `host_now` is the host's monotonic
/// millisecond clock; the sim clock follows it except while frozen.  All
/// randomness comes through `rng` so callers control determinism.
pub fn update(state: &GameState, host_now: u64, rng: &mut impl Rng) -> GameState {
    let mut next = state.clone();
    let mut dt = host_now.saturating_sub(state.host_now);
    next.host_now = host_now;

    // ── 1. Clock-resume deadline, on the host clock ──────────────────────────
    if let Some(at) = next.resume_clock_at {
        if host_now >= at {
            next.resume_clock_at = None;
            next.clock_paused = false;
            if next.phase == Phase::LevelTransition {
                next.phase = Phase::Running;
            }
            // The sim clock restarts at the resume instant, not at the
            // last frozen tick.
            dt = host_now.saturating_sub(at.max(state.host_now));
        }
    }

    // ── 2. A frozen sim clock halts all time-driven behaviour at once ────────
    if next.clock_paused {
        return next;
    }
    next.sim_now += dt;
    let sim_now = next.sim_now;
    let dt_s = dt as f32 / 1000.0;

    // ── 3. Spawn-enable deadline, anchored to the advanced sim clock so the
    // restarted timer grants a full interval of grace ─────────────────────────
    if next.enable_spawn_at.map_or(false, |at| host_now >= at) {
        next.enable_spawn_at = None;
        next.spawning_enabled = true;
        // A restarted spawn timer always replaces the previous one.
        next.spawn_timer = Interval::new(sim_now, ENEMY_SPAWN_DELAY);
    }

    // ── 4. Player velocity from intent, clamped to the field ─────────────────
    next.player.vx = next.move_intent.0 * PLAYER_SPEED;
    next.player.vy = next.move_intent.1 * PLAYER_SPEED;
    next.player.x =
        (next.player.x + next.player.vx * dt_s).clamp(PLAYER_HALF, next.width - PLAYER_HALF);
    next.player.y =
        (next.player.y + next.player.vy * dt_s).clamp(PLAYER_HALF, next.height - PLAYER_HALF);

    // ── 5. Backdrop scroll ───────────────────────────────────────────────────
    next.backdrop.advance(BACKGROUND_SCROLL_SPEED * dt_s);

    // ── 6. Integrate bullets and enemies ─────────────────────────────────────
    // Existing bodies move first; anything created later this tick stays
    // at its creation position until the next tick.
    for bullet in &mut next.bullets {
        bullet.y += bullet.vy * dt_s;
    }
    for enemy in &mut next.enemies {
        enemy.y += enemy.vy * dt_s;
    }

    // ── 7. Player fire cadence ───────────────────────────────────────────────
    // The cadence timer decouples "fire held" from the frame rate: one
    // bullet per ready period, no matter how often the host ticks.
    if next.fire_timer.ready(sim_now) && next.fire_intent && next.phase == Phase::Running {
        next.bullets.push(Bullet {
            x: next.player.x,
            y: next.player.y - MUZZLE_OFFSET,
            vy: -PLAYER_BULLET_SPEED,
            scale: PLAYER_BULLET_SCALE,
            tint: PLAYER_BULLET_TINT,
            owner: BulletOwner::Player,
        });
    }

    // ── 8. Spawn cycle ───────────────────────────────────────────────────────
    if next.spawn_timer.ready(sim_now) && next.spawning_enabled && next.phase == Phase::Running {
        if let Some(enemy) = spawn::spawn_enemy(&next.enemies, &next.assets, next.level, sim_now, rng)
        {
            next.enemies.push(enemy);
        }
    }

    // ── 9. Enemy fire deadlines ──────────────────────────────────────────────
    let mut volley: Vec<Bullet> = Vec::new();
    for enemy in &mut next.enemies {
        if sim_now >= enemy.next_fire {
            volley.push(Bullet {
                x: enemy.x,
                y: enemy.y + MUZZLE_OFFSET,
                vy: enemy.bullet_speed,
                scale: enemy.archetype.bullet_scale,
                tint: enemy.archetype.bullet_tint,
                owner: BulletOwner::Enemy,
            });
            enemy.next_fire = sim_now + enemy.shoot_interval;
        }
    }
    next.bullets.extend(volley);

    // ── 10. Resolve collisions ────────────────────────────────────────────────
    resolve_collisions(&mut next);

    // ── 11. Cull off-field bodies ────────────────────────────────────────────
    let height = next.height;
    next.bullets.retain(|b| match b.owner {
        BulletOwner::Player => b.y > 0.0,
        BulletOwner::Enemy => b.y < height,
    });
    next.enemies.retain(|e| e.y < height + 100.0);

    // ── 12. Cull expired effects ─────────────────────────────────────────────
    next.explosions.retain(|e| sim_now < e.expires_at);

    // ── 13. Level progression ────────────────────────────────────────────────
    check_level_up(&mut next);

    next
}

// ── Collision resolution ─────────────────────────────────────────────────────

/// Axis-aligned overlap of two square bodies given their half-extents.
fn overlaps(ax: f32, ay: f32, ah: f32, bx: f32, by: f32, bh: f32) -> bool {
    (ax - bx).abs() < ah + bh && (ay - by).abs() < ah + bh
}

/// Apply the three pairwise relations for this tick.  Every detected
/// collision is resolved fully and synchronously; nothing is deferred.
fn resolve_collisions(state: &mut GameState) {
    let sim_now = state.sim_now;

    // Player bullets × enemies.  A bullet is spent on its first hit; the
    // ship it hits is destroyed outright.
    let mut spent: Vec<usize> = Vec::new();
    for (bi, bullet) in state.bullets.iter().enumerate() {
        if bullet.owner != BulletOwner::Player {
            continue;
        }
        let bullet_half = BULLET_SPRITE_HALF * bullet.scale;
        for enemy in state.enemies.iter_mut() {
            if enemy.hp == 0 {
                continue;
            }
            let enemy_half = ENEMY_SPRITE_HALF * enemy.archetype.scale;
            if overlaps(bullet.x, bullet.y, bullet_half, enemy.x, enemy.y, enemy_half) {
                enemy.hp = 0;
                state.explosions.push(Explosion {
                    x: enemy.x,
                    y: enemy.y,
                    expires_at: sim_now + EXPLOSION_DURATION,
                });
                state.score += KILL_REWARD;
                spent.push(bi);
                break;
            }
        }
    }
    state.enemies.retain(|e| e.hp > 0);
    for &i in spent.iter().rev() {
        state.bullets.remove(i);
    }

    // Player × enemies.
    let player = &state.player;
    let mut fatal = state.enemies.iter().any(|e| {
        let enemy_half = ENEMY_SPRITE_HALF * e.archetype.scale;
        overlaps(player.x, player.y, PLAYER_HALF, e.x, e.y, enemy_half)
    });

    // Player × enemy bullets.  The bullet is destroyed either way.
    if let Some(hit) = state.bullets.iter().position(|b| {
        b.owner == BulletOwner::Enemy
            && overlaps(
                player.x,
                player.y,
                PLAYER_HALF,
                b.x,
                b.y,
                BULLET_SPRITE_HALF * b.scale,
            )
    }) {
        state.bullets.remove(hit);
        fatal = true;
    }

    if fatal {
        enter_game_over(state);
    }
}

// ── Lifecycle transitions ────────────────────────────────────────────────────

fn enter_game_over(state: &mut GameState) {
    state.phase = Phase::GameOver;
    state.clock_paused = true;
    state.spawning_enabled = false;
    // Cancel any staged resume still in flight.
    state.resume_clock_at = None;
    state.enable_spawn_at = None;
    state.player.alive = false;
    state.player.vx = 0.0;
    state.player.vy = 0.0;
    state.explosions.push(Explosion {
        x: state.player.x,
        y: state.player.y,
        expires_at: state.sim_now + EXPLOSION_DURATION,
    });
}

/// Score update happened during collision resolution; level recompute
/// happens here; the field clear follows.  Always in that order.
fn check_level_up(state: &mut GameState) {
    if state.phase != Phase::Running {
        return;
    }
    let level = config::level_for_score(state.score);
    if level <= state.level {
        return;
    }
    // Jump straight to the computed level: a score increment that crosses
    // several thresholds still yields exactly one transition.
    state.level = level;
    state.phase = Phase::LevelTransition;
    state.clock_paused = true;
    state.enemies.clear();
    state.bullets.clear();
    state.backdrop.rotate();
    begin_staged_resume(state, state.host_now);
}

/// Two-step delayed re-enable after a disruptive transition: the sim
/// clock first, spawning a fixed grace window later.
fn begin_staged_resume(state: &mut GameState, host_now: u64) {
    state.spawning_enabled = false;
    state.resume_clock_at = Some(host_now + CLOCK_RESUME_DELAY);
    state.enable_spawn_at = Some(host_now + CLOCK_RESUME_DELAY + SPAWN_RESUME_DELAY);
}
