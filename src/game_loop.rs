//! Fixed-cadence driver
//!
//! Single-threaded: input, tick, side effects and the sleep all run in
//! sequence. Commands take effect as soon as they arrive; the next tick reads
//! whatever state they left behind.

use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Duration;

use crate::audio::{AudioManager, SoundEffect};
use crate::hud::Border;
use crate::input::InputCommand;
use crate::render::{Frame, Frontend};
use crate::settings::Settings;
use crate::sim::{GameEvent, SimulationState, apply_command, tick};

/// Time source used to hold the tick cadence
pub trait Clock {
    fn sleep(&mut self, duration: Duration);
}

/// Wall-clock sleep, no drift compensation
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Owns the simulation and drives it against a frontend
pub struct GameLoop<F: Frontend, C: Clock> {
    state: SimulationState,
    audio: AudioManager,
    frontend: F,
    clock: C,
    tick_interval: Duration,
    max_ticks: Option<u64>,
}

impl<F: Frontend, C: Clock> GameLoop<F, C> {
    pub fn new(settings: &Settings, audio: AudioManager, frontend: F, clock: C) -> Self {
        let seed = settings.resolve_seed();
        log::info!("Starting run with seed {}", seed);
        Self {
            state: SimulationState::new(seed),
            audio,
            frontend,
            clock,
            tick_interval: settings.tick_interval(),
            max_ticks: settings.max_ticks,
        }
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SimulationState {
        &mut self.state
    }

    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    /// Start the music, draw the border and the initial score
    pub fn start(&mut self) {
        self.audio.start_music();
        self.frontend.draw_border(&Border::default());
        self.frontend.update_score_display(self.state.score);
    }

    /// Dispatch a named input event. Unknown names are ignored.
    pub fn handle_input(&mut self, name: &str) {
        match InputCommand::from_name(name) {
            Some(command) => apply_command(&mut self.state, command),
            None => log::debug!("Ignoring unknown input {:?}", name),
        }
    }

    /// One tick: advance, emit side effects, render
    pub fn step(&mut self) {
        tick(&mut self.state);

        for event in self.state.drain_events() {
            match event {
                GameEvent::Impact { .. } => self.audio.play(SoundEffect::Impact),
                GameEvent::ScoreChanged { score } => self.frontend.update_score_display(score),
                GameEvent::Burst { origin } => {
                    log::trace!("Burst at ({:.1}, {:.1})", origin.x, origin.y);
                }
            }
        }

        self.audio.keep_music_looping();
        self.frontend.render_frame(&Frame::capture(&self.state));
    }

    /// Apply every input that arrived since the last tick
    fn drain_inputs(&mut self, inputs: &Receiver<String>) {
        loop {
            match inputs.try_recv() {
                Ok(name) => self.handle_input(&name),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
    }

    /// Run until `max_ticks` (if configured) or forever
    pub fn run(&mut self, inputs: &Receiver<String>) {
        self.start();
        loop {
            if self.max_ticks.is_some_and(|max| self.state.time_ticks >= max) {
                log::info!(
                    "Stopping after {} ticks, final score {}",
                    self.state.time_ticks,
                    self.state.score
                );
                return;
            }
            self.drain_inputs(inputs);
            self.step();
            self.clock.sleep(self.tick_interval);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::AudioBackend;
    use crate::consts::*;
    use crate::sim::Pose;
    use glam::Vec2;
    use std::cell::Cell;
    use std::io;
    use std::rc::Rc;
    use std::sync::mpsc;

    #[derive(Default)]
    struct RecordingFrontend {
        borders: u32,
        scores: Vec<i64>,
        frames: Vec<u64>,
    }

    impl Frontend for RecordingFrontend {
        fn draw_border(&mut self, _border: &Border) {
            self.borders += 1;
        }

        fn update_score_display(&mut self, score: i64) {
            self.scores.push(score);
        }

        fn render_frame(&mut self, frame: &Frame) {
            self.frames.push(frame.tick);
        }
    }

    #[derive(Default)]
    struct FakeClock {
        slept: Vec<Duration>,
    }

    impl Clock for FakeClock {
        fn sleep(&mut self, duration: Duration) {
            self.slept.push(duration);
        }
    }

    struct CountingBackend(Rc<Cell<u32>>);

    impl AudioBackend for CountingBackend {
        fn play(&mut self, _effect: SoundEffect) -> io::Result<()> {
            self.0.set(self.0.get() + 1);
            Ok(())
        }
    }

    fn settings(max_ticks: Option<u64>) -> Settings {
        Settings {
            seed: Some(2024),
            max_ticks,
            ..Default::default()
        }
    }

    #[test]
    fn test_run_holds_cadence_and_renders_each_tick() {
        let (_tx, rx) = mpsc::channel();
        let mut game = GameLoop::new(
            &settings(Some(5)),
            AudioManager::default(),
            RecordingFrontend::default(),
            FakeClock::default(),
        );
        game.run(&rx);

        assert_eq!(game.state().time_ticks, 5);
        assert_eq!(game.frontend().borders, 1);
        assert_eq!(game.frontend().scores.first(), Some(&0));
        assert_eq!(game.frontend().frames, vec![1, 2, 3, 4, 5]);
        assert_eq!(game.clock.slept, vec![Duration::from_millis(TICK_INTERVAL_MS); 5]);
    }

    #[test]
    fn test_inputs_forwarded_and_unknown_ignored() {
        let (tx, rx) = mpsc::channel();
        for name in ["turn-left", "bogus", "Up", "decelerate", "accelerate"] {
            tx.send(name.to_string()).unwrap();
        }
        let mut game = GameLoop::new(
            &settings(Some(1)),
            AudioManager::default(),
            RecordingFrontend::default(),
            FakeClock::default(),
        );
        game.state_mut().player.pose = Pose::new(Vec2::ZERO, 0.0);
        game.run(&rx);

        let player = game.state().player;
        assert_eq!(player.pose.heading, 45.0);
        assert_eq!(player.speed, PLAYER_SPEED + 1.0);
    }

    #[test]
    fn test_collision_side_effects_dispatched() {
        let plays = Rc::new(Cell::new(0));
        let mut game = GameLoop::new(
            &settings(None),
            AudioManager::new(Box::new(CountingBackend(plays.clone()))),
            RecordingFrontend::default(),
            FakeClock::default(),
        );
        {
            let state = game.state_mut();
            for d in state.hostiles.iter_mut().chain(state.neutrals.iter_mut()) {
                d.pose.teleport(Vec2::new(-250.0, -250.0));
                d.speed = 0.0;
            }
            state.hostiles[0].pose.teleport(Vec2::new(15.0, 0.0));
        }
        game.step();

        assert_eq!(plays.get(), 1);
        assert_eq!(game.frontend().scores, vec![HOSTILE_RAM_PENALTY]);
        assert_eq!(game.frontend().frames, vec![1]);
        assert!(game.state().events.is_empty());
    }

    #[test]
    fn test_quiet_tick_does_not_refresh_score() {
        let mut game = GameLoop::new(
            &settings(None),
            AudioManager::default(),
            RecordingFrontend::default(),
            FakeClock::default(),
        );
        {
            let state = game.state_mut();
            for d in state.hostiles.iter_mut().chain(state.neutrals.iter_mut()) {
                d.pose.teleport(Vec2::new(200.0, -200.0));
                d.speed = 0.0;
            }
        }
        game.step();
        game.step();
        assert!(game.frontend().scores.is_empty());
        assert_eq!(game.frontend().frames.len(), 2);
    }

    #[test]
    fn test_music_started_once_per_run() {
        let music = Rc::new(Cell::new(0));
        let effects = Rc::new(Cell::new(0));
        let audio = AudioManager::new(Box::new(CountingBackend(effects.clone())))
            .with_music(Box::new(CountingBackend(music.clone())));
        let (_tx, rx) = mpsc::channel();
        let mut game = GameLoop::new(
            &settings(Some(4)),
            audio,
            RecordingFrontend::default(),
            FakeClock::default(),
        );
        game.run(&rx);
        game.start();

        assert_eq!(music.get(), 1);
        assert_eq!(game.frontend().borders, 2);
        assert_eq!(game.frontend().frames.len(), 4);
    }

    #[test]
    fn test_muted_run_plays_no_music() {
        let music = Rc::new(Cell::new(0));
        let mut audio =
            AudioManager::default().with_music(Box::new(CountingBackend(music.clone())));
        audio.set_muted(true);
        let (_tx, rx) = mpsc::channel();
        let mut game = GameLoop::new(
            &settings(Some(2)),
            audio,
            RecordingFrontend::default(),
            FakeClock::default(),
        );
        game.run(&rx);
        assert_eq!(music.get(), 0);
    }
}
