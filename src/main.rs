//! Space Sniper entry point
//!
//! Runs the simulation headless: input event names (`turn-left`, `fire`, ...)
//! are read line by line from stdin, frames and score go to the logger.
//!
//! Usage: `space-sniper [settings.json]`

use std::io::BufRead;
use std::path::PathBuf;
use std::sync::mpsc;

use space_sniper::audio::AudioManager;
use space_sniper::render::LogFrontend;
use space_sniper::{GameLoop, Settings, SystemClock};

fn main() {
    env_logger::init();
    log::info!("Space Sniper (headless) starting...");

    let settings_path = std::env::args_os().nth(1).map(PathBuf::from);
    let settings = Settings::load_or_default(settings_path.as_deref());

    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });

    let audio = AudioManager::from_settings(&settings);
    let mut game = GameLoop::new(&settings, audio, LogFrontend::new(), SystemClock);
    game.run(&rx);
}
