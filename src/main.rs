mod apple;
mod collision;
mod config;
mod game;
mod grid;
mod input;
mod render;
mod scores;
mod session;
mod snake;
mod term;

use std::fs::{self, File};
use std::path::Path;

use anyhow::{Context, Result};
use log::{error, info};
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::config::{GameConfig, DATA_DIR, LOG_FILE};
use crate::game::SnakeGame;
use crate::term::TermManager;

fn main() -> Result<()> {
    // The terminal belongs to the game, so logs go to a file
    if let Err(e) = init_logging() {
        eprintln!("Logging disabled: {:#}", e);
    }

    let config = GameConfig::from_env();
    info!("starting snake, {}x{} board, roast {}", config.height, config.width, config.roast);

    let mut term = TermManager::new();
    if let Err(e) = term.setup() {
        let _ = term.restore();
        return Err(e);
    }

    let mut game = SnakeGame::new(config, term, rand::thread_rng());
    let res = game.run();
    let restored = game.front_mut().restore();

    if let Err(e) = &res {
        error!("game stopped: {:#}", e);
    }

    res?;
    restored?;
    info!("bye");
    Ok(())
}

fn init_logging() -> Result<()> {
    let level = match std::env::var("SNAKE_LOG").as_deref() {
        Ok("debug") => LevelFilter::Debug,
        _ => LevelFilter::Info,
    };

    fs::create_dir_all(DATA_DIR).with_context(|| format!("creating {}", DATA_DIR))?;
    let path = Path::new(DATA_DIR).join(LOG_FILE);
    let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;

    WriteLogger::init(level, Config::default(), file).context("installing logger")?;
    Ok(())
}
