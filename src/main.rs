mod display;

use std::collections::HashMap;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    style::{self, Color, Print},
    terminal,
    ExecutableCommand, QueueableCommand,
};
use rand::thread_rng;

use voidstrike::compute::{init_state, request_respawn, set_fire_intent, set_move_intent, update};
use voidstrike::config::ARCHETYPES;
use voidstrike::entities::{GameState, Phase};

const FRAME: Duration = Duration::from_millis(33); // ≈30 FPS

// ── Held-key input model ──────────────────────────────────────────────────────

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 4 frames (≈133 ms) is
/// always refreshed before expiry.
const HOLD_WINDOW: u64 = 4;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

fn any_held(key_frame: &HashMap<KeyCode, u64>, keys: &[KeyCode], frame: u64) -> bool {
    keys.iter().any(|k| is_held(key_frame, k, frame))
}

// ── Logging ───────────────────────────────────────────────────────────────────

/// Route `RUST_LOG`-enabled output to a side file so the alternate screen
/// stays clean.
fn init_logging() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    if let Ok(file) = std::fs::File::create("voidstrike.log") {
        env_logger::Builder::from_env(env_logger::Env::default())
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();
    }
}

// ── Start screen ──────────────────────────────────────────────────────────────

enum MenuResult {
    Start,
    Quit,
}

fn show_start_screen<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<MenuResult> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let (width, height) = terminal::size()?;
    let cx = width / 2;
    let cy = height / 2;

    let title = "✦  V O I D S T R I K E  ✦";
    out.queue(cursor::MoveTo(
        cx.saturating_sub(title.chars().count() as u16 / 2),
        cy.saturating_sub(8),
    ))?;
    out.queue(style::SetForegroundColor(Color::Cyan))?;
    out.queue(Print(title))?;

    out.queue(cursor::MoveTo(cx.saturating_sub(12), cy.saturating_sub(6)))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print("Clear the void, ship by ship."))?;

    // Enemy roster, straight from the stat table
    out.queue(cursor::MoveTo(cx.saturating_sub(12), cy.saturating_sub(4)))?;
    out.queue(style::SetForegroundColor(Color::DarkGrey))?;
    out.queue(Print("The opposition:"))?;

    for (i, archetype) in ARCHETYPES.iter().enumerate() {
        let row = cy.saturating_sub(3) + i as u16;
        out.queue(cursor::MoveTo(cx.saturating_sub(12), row))?;
        out.queue(style::SetForegroundColor(Color::Red))?;
        out.queue(Print(format!("{:<14}", archetype.key)))?;
        out.queue(style::SetForegroundColor(Color::DarkGrey))?;
        out.queue(Print(format!(
            " speed {:>3}  fires every {:.1}s",
            archetype.speed,
            archetype.shoot_interval as f32 / 1000.0
        )))?;
    }

    out.queue(cursor::MoveTo(cx.saturating_sub(12), cy + 4))?;
    out.queue(style::SetForegroundColor(Color::DarkGrey))?;
    out.queue(Print("←→↑↓ / WASD : Move   SPACE : Fire   M : Music"))?;

    out.queue(cursor::MoveTo(cx.saturating_sub(12), cy + 6))?;
    out.queue(style::SetForegroundColor(Color::Yellow))?;
    out.queue(Print("ENTER - Launch     Q - Quit"))?;

    out.queue(style::ResetColor)?;
    out.flush()?;

    // Block until the user makes a choice
    loop {
        if let Ok(Event::Key(KeyEvent { code, kind, .. })) = rx.recv() {
            if kind == KeyEventKind::Release {
                continue;
            }
            match code {
                KeyCode::Enter | KeyCode::Char(' ') => return Ok(MenuResult::Start),
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    return Ok(MenuResult::Quit);
                }
                _ => {}
            }
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Returns `true` → quit program,  `false` → back to the start screen.
///
/// Input model: instead of acting on each key event individually, we keep
/// a `key_frame` map recording the frame number of the last press/repeat
/// event for every key.  Each frame the currently "fresh" keys collapse
/// into one velocity-intent vector and one fire-intent flag, which is all
/// the simulation ever sees.  Space plus two arrows held together just
/// works.
///
/// Works on two classes of terminal:
/// * **Keyboard-enhancement capable** (Ghostty, kitty, etc.): proper
///   `Press` / `Repeat` / `Release` events → keys are removed on release.
/// * **Classic terminals**: only `Press` events (OS key-repeat shows as
///   repeated `Press`).  Keys expire naturally after `HOLD_WINDOW` frames
///   of silence.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    rx: &mpsc::Receiver<Event>,
    epoch: &Instant,
    music_on: &mut bool,
) -> std::io::Result<bool> {
    let mut rng = thread_rng();

    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        let host_now = epoch.elapsed().as_millis() as u64;
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(Event::Key(KeyEvent { code, kind, modifiers, .. })) = rx.try_recv() {
            match kind {
                KeyEventKind::Press => {
                    key_frame.insert(code, frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            return Ok(false);
                        }
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(true);
                        }
                        KeyCode::Char('m') | KeyCode::Char('M') => {
                            *music_on = !*music_on;
                        }
                        KeyCode::Char('r') | KeyCode::Char('R')
                            if state.phase == Phase::GameOver =>
                        {
                            *state = request_respawn(state, host_now);
                        }
                        _ => {}
                    }
                }
                // Repeat: refresh timestamp so the key stays "held"
                KeyEventKind::Repeat => {
                    key_frame.insert(code, frame);
                }
                // Release: remove key immediately (keyboard-enhancement path)
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        // ── Collapse held keys into the two input intents ─────────────────────
        let left = any_held(
            &key_frame,
            &[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')],
            frame,
        );
        let right = any_held(
            &key_frame,
            &[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')],
            frame,
        );
        let up = any_held(
            &key_frame,
            &[KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W')],
            frame,
        );
        let down = any_held(
            &key_frame,
            &[KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('S')],
            frame,
        );
        let firing = is_held(&key_frame, &KeyCode::Char(' '), frame);

        let dx = (right as i8 - left as i8) as f32;
        let dy = (down as i8 - up as i8) as f32;
        *state = set_move_intent(state, dx, dy);
        *state = set_fire_intent(state, firing);

        *state = update(state, host_now, &mut rng);

        display::render(out, state, *music_on)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    init_logging();

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Ghostty / kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<()> {
    let epoch = Instant::now();
    let mut music_on = false;

    loop {
        match show_start_screen(out, rx)? {
            MenuResult::Quit => break,
            MenuResult::Start => {
                let host_now = epoch.elapsed().as_millis() as u64;
                let mut state = init_state(host_now);
                let quit = game_loop(out, &mut state, rx, &epoch, &mut music_on)?;
                if quit {
                    break;
                }
                // Otherwise back to the start screen
            }
        }
    }
    Ok(())
}
