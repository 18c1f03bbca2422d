//! Line-oriented terminal front end.
//!
//! Reads commands from stdin and redraws the board after each one. Wall
//! clock time between commands is fed to the engine, so a mismatched pair
//! turns back down once the delay has passed.
//!
//! Usage: `memory-match [--seed N] [--config path.json]`
//!
//! Commands: `<index>` taps a card, `r` resets, `w [ms]` waits, `q` quits.

use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};

use memory_match::core::GameConfig;
use memory_match::engine::GameEngine;
use memory_match::view::{GameSnapshot, Renderer};

/// Cards per printed row.
const ROW_WIDTH: usize = 4;

struct TextRenderer<W: Write> {
    out: W,
    last_revision: Option<u64>,
}

impl<W: Write> TextRenderer<W> {
    fn new(out: W) -> Self {
        Self { out, last_revision: None }
    }

    fn draw(&mut self, snapshot: &GameSnapshot) -> io::Result<()> {
        let headline = if snapshot.has_won {
            "¡Genial! 🎉".to_string()
        } else {
            format!("¡Comencemos!🤯 Nivel: {}", snapshot.level)
        };
        writeln!(self.out, "{}", headline)?;
        writeln!(self.out, "Puntuación: {}", snapshot.score)?;

        for (row, cells) in snapshot.cells.chunks(ROW_WIDTH).enumerate() {
            let line: Vec<String> = cells
                .iter()
                .enumerate()
                .map(|(col, cell)| format!("{:>2}:{}", row * ROW_WIDTH + col, cell.display()))
                .collect();
            writeln!(self.out, "  {}", line.join("  "))?;
        }
        self.out.flush()
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, snapshot: &GameSnapshot) {
        if self.last_revision == Some(snapshot.revision) {
            return;
        }
        self.last_revision = Some(snapshot.revision);
        if let Err(err) = self.draw(snapshot) {
            log::error!("failed to draw board: {}", err);
        }
    }
}

fn parse_args() -> Result<GameConfig> {
    let mut config = None;
    let mut seed = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let value = args.next().context("--seed needs a value")?;
                seed = Some(value.parse::<u64>().with_context(|| format!("bad seed {:?}", value))?);
            }
            "--config" => {
                let path = args.next().context("--config needs a path")?;
                let json = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading config {}", path))?;
                config = Some(GameConfig::from_json(&json).with_context(|| format!("parsing config {}", path))?);
            }
            other => bail!("unknown argument {:?}", other),
        }
    }

    // Without a config file or --seed, every run deals different boards.
    let mut config = match config {
        Some(config) => config,
        None => GameConfig::default().with_seed(time_seed()),
    };
    if let Some(seed) = seed {
        config.seed = seed;
    }
    Ok(config)
}

fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

fn main() -> Result<()> {
    env_logger::init();

    let config = parse_args()?;
    log::info!("starting with seed {}", config.seed);
    let mut engine = GameEngine::new(config).context("creating engine")?;

    let stdout = io::stdout();
    let mut renderer = TextRenderer::new(stdout.lock());
    engine.render(&mut renderer);

    let mut last_input = Instant::now();
    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        let now = Instant::now();
        engine.advance_time(elapsed_ms(now.duration_since(last_input)));
        last_input = now;

        let mut parts = line.split_whitespace();
        match parts.next() {
            None => {}
            Some("q") => break,
            Some("r") => engine.reset()?,
            Some("w") => match wait_ms(parts.next(), engine.clear_remaining_ms()) {
                Some(ms) => {
                    std::thread::sleep(Duration::from_millis(ms));
                    let now = Instant::now();
                    engine.advance_time(elapsed_ms(now.duration_since(last_input)));
                    last_input = now;
                }
                None => eprintln!("bad wait {:?}", line),
            },
            Some(word) => match word.parse::<usize>() {
                Ok(index) => match engine.tap_card(index) {
                    Ok(outcome) => log::debug!("{:?}", outcome),
                    Err(err) => eprintln!("{}", err),
                },
                Err(_) => eprintln!("unknown command {:?}", word),
            },
        }

        engine.render(&mut renderer);
    }

    engine.cancel_pending();
    Ok(())
}

/// Milliseconds to wait for `w [ms]`, defaulting to the pending clear.
///
/// `None` for an argument that is not a millisecond count.
fn wait_ms(arg: Option<&str>, pending_ms: Option<u64>) -> Option<u64> {
    match arg {
        Some(v) => v.parse::<u64>().ok(),
        None => Some(pending_ms.unwrap_or(0)),
    }
}

fn elapsed_ms(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}
