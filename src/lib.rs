//! termframe: buffered, word-wrapped, bordered terminal screens with
//! validated line prompts.
//!
//! Lines are collected in a [`screen::Screen`], wrapped to a fixed width,
//! framed with border strings, and redrawn after clearing the terminal. A
//! [`prompt::PromptEngine`] layers a retry-until-valid input loop on top.
//!
//! # Quick start
//!
//! ```no_run
//! use termframe::prompt::{Acceptance, PromptEngine};
//! use termframe::screen::{CommandClearer, LayoutConfig};
//! use termframe::validators::is_unsigned;
//!
//! # fn example() -> Result<(), termframe::error::PromptError> {
//! let layout = LayoutConfig::new().with_width(40).with_borders("|");
//! let mut engine = PromptEngine::stdio(layout, CommandClearer);
//! engine.screen_mut().append_line("Welcome to the shop.");
//! let count = engine.get_response("How many?", Acceptance::predicate(is_unsigned))?;
//! engine.screen_mut().print(format!("You asked for {count}."))?;
//! engine.get_continue()?;
//! # Ok(())
//! # }
//! ```

pub mod build_info;
pub mod config;
pub mod error;
pub mod prompt;
pub mod screen;
#[cfg(test)]
pub mod testsupport;
pub mod validators;
