use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use effect_snake::config::{
    DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, FRAME_INTERVAL_MS, GridSize, MAX_GRID_HEIGHT,
    MAX_GRID_WIDTH, MIN_GRID_EDGE, tick_interval,
};
use effect_snake::game::Game;
use effect_snake::input::{GameInput, poll_input};
use effect_snake::logging;
use effect_snake::renderer;
use effect_snake::terminal_runtime::{TerminalSession, install_panic_hook};
use effect_snake::ui::hud::HudInfo;
use tracing::info;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Board width in cells.
    #[arg(
        long,
        default_value_t = DEFAULT_GRID_WIDTH,
        value_parser = clap::value_parser!(u16).range(i64::from(MIN_GRID_EDGE)..=i64::from(MAX_GRID_WIDTH))
    )]
    width: u16,

    /// Board height in cells.
    #[arg(
        long,
        default_value_t = DEFAULT_GRID_HEIGHT,
        value_parser = clap::value_parser!(u16).range(i64::from(MIN_GRID_EDGE)..=i64::from(MAX_GRID_HEIGHT))
    )]
    height: u16,

    /// Seed for food placement; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Write debug logs to this file (filter with RUST_LOG).
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;
    install_panic_hook();

    run(&cli)
}

fn run(cli: &Cli) -> io::Result<()> {
    let bounds = GridSize::new(cli.width, cli.height);
    let mut game = match cli.seed {
        Some(seed) => Game::new_with_seed(bounds, seed),
        None => Game::new_random(bounds),
    };
    let hud_info = HudInfo {
        seed: Some(game.seed()),
    };
    info!(width = bounds.width, height = bounds.height, seed = game.seed(), "starting");

    let mut session = TerminalSession::enter()?;
    let mut last_tick = Instant::now();

    loop {
        let snapshot = game.snapshot();
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &snapshot, &hud_info))?;

        if let Some(input) = poll_input(Duration::from_millis(FRAME_INTERVAL_MS))? {
            match input {
                GameInput::Quit => break,
                GameInput::Restart if !game.is_alive() => {
                    game.restart();
                    last_tick = Instant::now();
                }
                GameInput::Restart => {}
                GameInput::Direction(direction) => game.set_direction(direction),
            }
        }

        if last_tick.elapsed() >= tick_interval(game.speed()) {
            game.tick();
            last_tick = Instant::now();
        }
    }

    info!(score = game.score(), "quitting");
    Ok(())
}
