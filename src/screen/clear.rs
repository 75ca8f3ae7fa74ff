//! Terminal clearing strategies.
//!
//! The renderer only needs "wipe what was drawn before"; how that happens is
//! a capability behind [`ScreenClearer`] so wrapping and padding stay testable
//! without spawning processes.

use crate::error::ClearError;
use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};
use crossterm::QueueableCommand;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::process::{Command, Stdio};

/// Something that can wipe the visible terminal before a redraw.
pub trait ScreenClearer {
    /// Clear the display. Must finish (or fail) before returning.
    fn clear_screen(&mut self) -> Result<(), ClearError>;
}

impl<C: ScreenClearer + ?Sized> ScreenClearer for Box<C> {
    fn clear_screen(&mut self) -> Result<(), ClearError> {
        (**self).clear_screen()
    }
}

/// Runs the platform clear command (`cls` on Windows, `clear` elsewhere)
/// with inherited stdio and waits for it to exit.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandClearer;

impl CommandClearer {
    fn command() -> Command {
        #[cfg(target_os = "windows")]
        {
            let mut cmd = Command::new("cmd");
            cmd.args(["/c", "cls"]);
            cmd
        }
        #[cfg(not(target_os = "windows"))]
        {
            Command::new("clear")
        }
    }
}

impl ScreenClearer for CommandClearer {
    fn clear_screen(&mut self) -> Result<(), ClearError> {
        let status = Self::command()
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;
        if status.success() {
            Ok(())
        } else {
            Err(ClearError::Status(status))
        }
    }
}

/// Clears stdout with terminal escape sequences instead of a child process.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiClearer;

impl ScreenClearer for AnsiClearer {
    fn clear_screen(&mut self) -> Result<(), ClearError> {
        let mut stdout = io::stdout().lock();
        stdout.queue(Clear(ClearType::All))?;
        stdout.queue(MoveTo(0, 0))?;
        stdout.flush()?;
        Ok(())
    }
}

/// Leaves the terminal alone. Used for pipes and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopClearer;

impl ScreenClearer for NoopClearer {
    fn clear_screen(&mut self) -> Result<(), ClearError> {
        Ok(())
    }
}

/// Config/CLI selector for a clearing strategy.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ClearMode {
    /// Spawn `clear` / `cls`.
    #[default]
    Command,
    /// Emit escape sequences directly.
    Ansi,
    /// Never clear.
    None,
}

impl ClearMode {
    pub fn into_clearer(self) -> Box<dyn ScreenClearer> {
        match self {
            Self::Command => Box::new(CommandClearer),
            Self::Ansi => Box::new(AnsiClearer),
            Self::None => Box::new(NoopClearer),
        }
    }
}
