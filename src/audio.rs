//! Fire-and-forget sound effects
//!
//! Playback never blocks the tick and never fails it: backend errors are
//! logged and dropped.

use std::io;
use std::process::{Child, Command, Stdio};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Any collision (ram, hostile shot, neutral shot)
    Impact,
    /// Background track, looped for the whole run
    Music,
}

impl SoundEffect {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundEffect::Impact => "impact",
            SoundEffect::Music => "music",
        }
    }
}

/// Something that can start playing a sound
pub trait AudioBackend {
    /// Start playback and return immediately
    fn play(&mut self, effect: SoundEffect) -> io::Result<()>;

    /// Whether anything this backend started is still playing.
    /// Backends that cannot tell report true.
    fn is_active(&mut self) -> bool {
        true
    }
}

/// Backend that plays nothing
#[derive(Debug, Default)]
pub struct SilentBackend;

impl AudioBackend for SilentBackend {
    fn play(&mut self, effect: SoundEffect) -> io::Result<()> {
        log::trace!("(silent) {}", effect.as_str());
        Ok(())
    }
}

/// Backend that launches an external player process per effect
///
/// Children run in the background. Finished ones are reaped on the next
/// `play` or `is_active` call; any still running are killed on drop.
#[derive(Debug)]
pub struct CommandBackend {
    program: String,
    args: Vec<String>,
    children: Vec<Child>,
}

impl CommandBackend {
    /// Build from an argv list such as `["afplay", "explosion.mp3"]`
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self {
            program: program.clone(),
            args: args.to_vec(),
            children: Vec::new(),
        })
    }

    /// Collect exit statuses of finished children
    pub fn reap(&mut self) {
        self.children.retain_mut(|child| match child.try_wait() {
            Ok(Some(_)) => false,
            Ok(None) => true,
            Err(err) => {
                log::warn!("Lost track of `{}` child {}: {}", self.program, child.id(), err);
                false
            }
        });
    }

    /// Children started but not yet reaped
    pub fn pending(&self) -> usize {
        self.children.len()
    }
}

impl AudioBackend for CommandBackend {
    fn play(&mut self, _effect: SoundEffect) -> io::Result<()> {
        self.reap();
        let child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        self.children.push(child);
        Ok(())
    }

    fn is_active(&mut self) -> bool {
        self.reap();
        !self.children.is_empty()
    }
}

impl Drop for CommandBackend {
    fn drop(&mut self) {
        for child in &mut self.children {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

fn command_backend(argv: Option<&[String]>, what: &str) -> Box<dyn AudioBackend> {
    match argv.and_then(CommandBackend::from_argv) {
        Some(cmd) => {
            log::info!("{} via `{}`", what, cmd.program);
            Box::new(cmd)
        }
        None => Box::new(SilentBackend),
    }
}

/// Audio manager for the game
pub struct AudioManager {
    effects: Box<dyn AudioBackend>,
    music: Box<dyn AudioBackend>,
    music_started: bool,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(Box::new(SilentBackend))
    }
}

impl AudioManager {
    /// Manager with the given effects backend and no music
    pub fn new(effects: Box<dyn AudioBackend>) -> Self {
        Self {
            effects,
            music: Box::new(SilentBackend),
            music_started: false,
            muted: false,
        }
    }

    pub fn with_music(mut self, music: Box<dyn AudioBackend>) -> Self {
        self.music = music;
        self
    }

    /// Pick backends from settings: external commands if configured, else silence
    pub fn from_settings(settings: &crate::Settings) -> Self {
        let effects = command_backend(settings.impact_command.as_deref(), "Impact sound");
        let music = command_backend(settings.music_command.as_deref(), "Music");
        let mut audio = Self::new(effects).with_music(music);
        audio.set_muted(settings.muted);
        audio
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Play a sound effect, swallowing any failure
    pub fn play(&mut self, effect: SoundEffect) {
        if self.muted {
            return;
        }
        if let Err(err) = self.effects.play(effect) {
            log::warn!("Failed to play {} sound: {}", effect.as_str(), err);
        }
    }

    /// Start the background track. Later calls do nothing.
    pub fn start_music(&mut self) {
        if self.muted || self.music_started {
            return;
        }
        self.music_started = true;
        self.play_music();
    }

    /// Restart the background track if it has ended
    pub fn keep_music_looping(&mut self) {
        if self.music_started && !self.muted && !self.music.is_active() {
            log::debug!("Music ended, restarting");
            self.play_music();
        }
    }

    fn play_music(&mut self) {
        if let Err(err) = self.music.play(SoundEffect::Music) {
            log::warn!("Failed to start music: {}", err);
        }
    }
}
