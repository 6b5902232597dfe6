//! Named input events
//!
//! The surrounding shell delivers events by name (or by key name); each
//! recognized one maps to exactly one command.

use serde::{Deserialize, Serialize};

/// A player command delivered between ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputCommand {
    TurnLeft,
    TurnRight,
    Accelerate,
    Decelerate,
    Fire,
}

impl InputCommand {
    pub const ALL: [InputCommand; 5] = [
        InputCommand::TurnLeft,
        InputCommand::TurnRight,
        InputCommand::Accelerate,
        InputCommand::Decelerate,
        InputCommand::Fire,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InputCommand::TurnLeft => "turn-left",
            InputCommand::TurnRight => "turn-right",
            InputCommand::Accelerate => "accelerate",
            InputCommand::Decelerate => "decelerate",
            InputCommand::Fire => "fire",
        }
    }

    /// Default keyboard binding
    pub fn key(&self) -> &'static str {
        match self {
            InputCommand::TurnLeft => "Left",
            InputCommand::TurnRight => "Right",
            InputCommand::Accelerate => "Up",
            InputCommand::Decelerate => "Down",
            InputCommand::Fire => "space",
        }
    }

    /// Parse an event name or key name. Unrecognized names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|cmd| cmd.as_str() == name || cmd.key().eq_ignore_ascii_case(name))
    }
}
