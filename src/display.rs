/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only translates
/// state into terminal commands.  World coordinates (540×960) are mapped
/// onto whatever cell grid the terminal currently offers.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use voidstrike::config::{BACKGROUND_HEIGHT, EXPLOSION_DURATION, GAME_HEIGHT, GAME_WIDTH};
use voidstrike::entities::{Bullet, Enemy, Explosion, GameState, Phase};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LEVEL: Color = Color::Green;
const C_HUD_MUSIC: Color = Color::Cyan;
const C_PLAYER: Color = Color::White;
const C_PLAYER_HIT: Color = Color::Red;
const C_HINT: Color = Color::DarkGrey;

/// One star glyph/colour pair per background artwork in the rotation.
const STARFIELDS: [(char, Color); 3] = [
    ('·', Color::DarkBlue),
    ('✦', Color::DarkMagenta),
    ('˚', Color::DarkCyan),
];

const STARS_PER_LAYER: usize = 28;

// ── Cell mapping ──────────────────────────────────────────────────────────────

/// The playfield's rectangle of terminal cells: row 0 is the HUD, row 1
/// and row h-2 the border, the last row the controls hint.
struct Grid {
    cols: u16,
    rows: u16,
}

impl Grid {
    fn measure() -> std::io::Result<Grid> {
        let (cols, rows) = terminal::size()?;
        Ok(Grid { cols, rows })
    }

    fn field_w(&self) -> u16 {
        self.cols.saturating_sub(2)
    }

    fn field_h(&self) -> u16 {
        self.rows.saturating_sub(4)
    }

    /// World position → terminal cell, or `None` when it falls outside
    /// the visible playfield.
    fn cell(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        if !(0.0..GAME_WIDTH).contains(&x) || !(0.0..GAME_HEIGHT).contains(&y) {
            return None;
        }
        let cx = 1 + (x / GAME_WIDTH * self.field_w() as f32) as u16;
        let cy = 2 + (y / GAME_HEIGHT * self.field_h() as f32) as u16;
        Some((cx.min(self.cols.saturating_sub(2)), cy.min(self.rows.saturating_sub(3))))
    }
}

fn tint_color(tint: u32) -> Color {
    Color::Rgb {
        r: (tint >> 16) as u8,
        g: (tint >> 8) as u8,
        b: tint as u8,
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState, music_on: bool) -> std::io::Result<()> {
    let grid = Grid::measure()?;

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_backdrop(out, state, &grid)?;
    draw_border(out, &grid)?;
    draw_hud(out, state, &grid, music_on)?;

    for enemy in &state.enemies {
        draw_enemy(out, enemy, &grid)?;
    }
    for bullet in &state.bullets {
        draw_bullet(out, bullet, &grid)?;
    }
    for explosion in &state.explosions {
        draw_explosion(out, explosion, state.sim_now, &grid)?;
    }

    draw_player(out, state, &grid)?;
    draw_controls_hint(out, state, &grid)?;

    match state.phase {
        Phase::LevelTransition => draw_level_banner(out, state, &grid)?,
        Phase::GameOver => draw_game_over(out, state, &grid)?,
        Phase::Running => {}
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, grid.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Backdrop ──────────────────────────────────────────────────────────────────

/// Cheap xorshift so every star lands on a stable pseudo-position.
fn star_hash(seed: u32) -> u32 {
    let mut x = seed ^ 0x9E37_79B9;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    x
}

/// Each backdrop layer paints a deterministic handful of stars; as the
/// layer tops advance the stars drift down and wrap with no seam.
fn draw_backdrop<W: Write>(out: &mut W, state: &GameState, grid: &Grid) -> std::io::Result<()> {
    for layer in &state.backdrop.layers {
        let (glyph, color) = STARFIELDS[layer.asset % STARFIELDS.len()];
        out.queue(style::SetForegroundColor(color))?;
        for k in 0..STARS_PER_LAYER {
            let h = star_hash((layer.asset as u32) << 16 | k as u32);
            let local_x = (h % GAME_WIDTH as u32) as f32;
            let local_y = (star_hash(h) % BACKGROUND_HEIGHT as u32) as f32;
            let world_y = layer.top + local_y;
            if let Some((cx, cy)) = grid.cell(local_x, world_y) {
                out.queue(cursor::MoveTo(cx, cy))?;
                out.queue(Print(glyph))?;
            }
        }
    }
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, grid: &Grid) -> std::io::Result<()> {
    let w = grid.cols as usize;
    let h = grid.rows;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(grid.cols.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(
    out: &mut W,
    state: &GameState,
    grid: &Grid,
    music_on: bool,
) -> std::io::Result<()> {
    // Score — left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score: {:>6}", state.score)))?;

    // Level — centre
    let level_str = format!("[ LEVEL {} ]", state.level);
    let lx = (grid.cols / 2).saturating_sub(level_str.len() as u16 / 2);
    out.queue(cursor::MoveTo(lx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LEVEL))?;
    out.queue(Print(&level_str))?;

    // Music icon — right
    let icon = if music_on { "♪ on " } else { "♪ off" };
    let rx = grid.cols.saturating_sub(icon.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_MUSIC))?;
    out.queue(Print(icon))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_player<W: Write>(out: &mut W, state: &GameState, grid: &Grid) -> std::io::Result<()> {
    let p = &state.player;
    let Some((cx, cy)) = grid.cell(p.x, p.y) else {
        return Ok(());
    };

    // Sprite (2 rows, 3 cols):
    //   ▲       ← tip
    //  /|\      ← wings + fuselage
    // The tip turns red while the ship is marked hit.
    let color = if p.alive { C_PLAYER } else { C_PLAYER_HIT };
    out.queue(style::SetForegroundColor(color))?;
    out.queue(cursor::MoveTo(cx, cy))?;
    out.queue(Print("▲"))?;

    let wing_y = cy + 1;
    if wing_y < grid.rows.saturating_sub(2) {
        out.queue(cursor::MoveTo(cx.saturating_sub(1).max(1), wing_y))?;
        out.queue(Print("/|\\"))?;
    }

    Ok(())
}

/// Sprite and colour for one enemy class.
fn enemy_sprite(key: &str) -> (&'static str, Color) {
    match key {
        "nebulaWraith" => ("≈Ψ≈", Color::Magenta),
        "plasmaBeetle" => ("(Ξ)", Color::Green),
        "voidWalker" => ("[ø]", Color::Blue),
        "darkStinger" => ("<V>", Color::Yellow),
        "meteorCrusher" => ("{◆}", Color::DarkRed),
        _ => ("<?>", Color::Grey),
    }
}

fn draw_enemy<W: Write>(out: &mut W, enemy: &Enemy, grid: &Grid) -> std::io::Result<()> {
    let Some((cx, cy)) = grid.cell(enemy.x, enemy.y) else {
        return Ok(());
    };
    let (sprite, color) = enemy_sprite(enemy.archetype.key);
    out.queue(style::SetForegroundColor(color))?;
    out.queue(cursor::MoveTo(cx.saturating_sub(1).max(1), cy))?;
    out.queue(Print(sprite))?;
    Ok(())
}

fn draw_bullet<W: Write>(out: &mut W, bullet: &Bullet, grid: &Grid) -> std::io::Result<()> {
    let Some((cx, cy)) = grid.cell(bullet.x, bullet.y) else {
        return Ok(());
    };
    let glyph = if bullet.vy < 0.0 { "║" } else { "↓" };
    out.queue(cursor::MoveTo(cx, cy))?;
    out.queue(style::SetForegroundColor(tint_color(bullet.tint)))?;
    out.queue(Print(glyph))?;
    Ok(())
}

fn draw_explosion<W: Write>(
    out: &mut W,
    explosion: &Explosion,
    sim_now: u64,
    grid: &Grid,
) -> std::io::Result<()> {
    let Some((cx, cy)) = grid.cell(explosion.x, explosion.y) else {
        return Ok(());
    };
    // Age the burst through three frames of glyphs.
    let remaining = explosion.expires_at.saturating_sub(sim_now);
    let (glyph, color) = if remaining * 3 > EXPLOSION_DURATION * 2 {
        ("✺", Color::Yellow)
    } else if remaining * 3 > EXPLOSION_DURATION {
        ("✳", Color::DarkYellow)
    } else {
        ("·", Color::DarkGrey)
    };
    out.queue(cursor::MoveTo(cx, cy))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(glyph))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, state: &GameState, grid: &Grid) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, grid.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    let hint = match state.phase {
        Phase::GameOver => "R : Respawn   Q : Leave",
        _ => "←→↑↓ / WASD : Move   SPACE : Fire   M : Music   Q : Leave",
    };
    out.queue(Print(hint))?;
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn centred_lines<W: Write>(
    out: &mut W,
    grid: &Grid,
    lines: &[(&str, Color)],
) -> std::io::Result<()> {
    let cx = grid.cols / 2;
    let start_row = (grid.rows / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }
    Ok(())
}

fn draw_level_banner<W: Write>(out: &mut W, state: &GameState, grid: &Grid) -> std::io::Result<()> {
    let level_line = format!("»  LEVEL {}  «", state.level);
    centred_lines(
        out,
        grid,
        &[
            ("╔══════════════════╗", Color::Cyan),
            (level_line.as_str(), Color::Cyan),
            ("╚══════════════════╝", Color::Cyan),
        ],
    )
}

fn draw_game_over<W: Write>(out: &mut W, state: &GameState, grid: &Grid) -> std::io::Result<()> {
    let score_line = format!("Final Score: {}", state.score);
    centred_lines(
        out,
        grid,
        &[
            ("╔══════════════════╗", Color::Red),
            ("║    GAME  OVER    ║", Color::Red),
            ("╚══════════════════╝", Color::Red),
            (score_line.as_str(), Color::Yellow),
            ("R - Respawn  Q - Leave", Color::White),
        ],
    )
}
