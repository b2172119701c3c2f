//! Space Defender - terminal host
//!
//! Owns the terminal, the fixed-rate loop, and the RNG. Each frame: drain key
//! events, sample one `TickInput`, run one simulation tick, draw the result.

use std::io::{BufWriter, Write, stdout};
use std::sync::mpsc;
use std::thread;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use crossterm::{
    ExecutableCommand, QueueableCommand, cursor,
    event::{
        self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    terminal,
};
use rand::SeedableRng;
use rand_pcg::Pcg32;

use space_defender::Settings;
use space_defender::platform::InputCollector;
use space_defender::renderer::{self, Canvas, Renderer};
use space_defender::sim::{GameEvent, GameState, TickOutcome, tick};

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn main() -> std::io::Result<()> {
    env_logger::init();

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(clock_seed);
    log::info!("Space Defender starting with seed: {}", seed);

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Ask for release/repeat events; terminals without support ignore this
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Blocking reads stay on their own thread so the loop never waits on input
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break;
            }
        }
    });

    let result = run(&mut out, &rx, &settings, seed);

    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(e) = &result {
        log::error!("Terminal error: {}", e);
    }
    result
}

fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    settings: &Settings,
    seed: u64,
) -> std::io::Result<()> {
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut state = GameState::new();
    let mut input = InputCollector::new();
    let mut renderer = Renderer::new(settings);

    let (cols, rows) = terminal::size()?;
    let mut canvas = Canvas::new(cols, rows);
    let frame = settings.tick_duration();

    loop {
        let frame_start = Instant::now();

        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(key) => input.handle_key(key),
                Event::Resize(cols, rows) => {
                    canvas.resize(cols, rows);
                    out.queue(terminal::Clear(terminal::ClearType::All))?;
                }
                _ => {}
            }
        }

        let tick_input = input.sample();
        if tick(&mut state, &tick_input, &mut rng) == TickOutcome::Quit {
            log::info!("Exiting with score {}", state.player.score);
            break;
        }

        for event in &state.events {
            match event {
                GameEvent::Started => log::info!("Run started (seed {})", seed),
                GameEvent::LevelUp { level } => log::debug!("Level up -> {}", level),
                other => log::trace!("{:?}", other),
            }
        }

        renderer.draw(&mut canvas, &state);
        renderer::present(out, &canvas)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame {
            thread::sleep(frame - elapsed);
        }
    }

    Ok(())
}
