//! Retry-until-valid line prompts.
//!
//! A prompt appends its message to the screen once, then cycles render →
//! read → trim → check until the acceptance rule holds. Rejected input leaves
//! the buffer alone so the message stays visible; accepted input clears it.

use crate::error::PromptError;
use crate::screen::{LayoutConfig, Screen, ScreenClearer};
use std::collections::{BTreeSet, HashSet};
use std::fmt::{self, Display};
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Default message for [`PromptEngine::get_continue`].
pub const CONTINUE_MESSAGE: &str = "Press 'enter' to continue";

/// Rule a trimmed input line must satisfy to end a prompt.
///
/// Exact matches and set membership are adapters over a single predicate.
pub struct Acceptance(Box<dyn Fn(&str) -> bool>);

impl Acceptance {
    /// Accept only `target`.
    pub fn exact(target: impl Into<String>) -> Self {
        let target = target.into();
        Self(Box::new(move |candidate| candidate == target))
    }

    /// Accept any of `options`.
    pub fn one_of<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options: HashSet<String> = options.into_iter().map(Into::into).collect();
        Self(Box::new(move |candidate| options.contains(candidate)))
    }

    /// Accept whatever `check` approves.
    pub fn predicate(check: impl Fn(&str) -> bool + 'static) -> Self {
        Self(Box::new(check))
    }

    /// Accept only an empty line.
    pub fn empty() -> Self {
        Self::predicate(str::is_empty)
    }

    pub fn accepts(&self, candidate: &str) -> bool {
        (self.0)(candidate)
    }
}

impl fmt::Debug for Acceptance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Acceptance(..)")
    }
}

impl From<&str> for Acceptance {
    fn from(target: &str) -> Self {
        Self::exact(target)
    }
}

impl From<String> for Acceptance {
    fn from(target: String) -> Self {
        Self::exact(target)
    }
}

impl<const N: usize> From<[&str; N]> for Acceptance {
    fn from(options: [&str; N]) -> Self {
        Self::one_of(options)
    }
}

impl From<&[&str]> for Acceptance {
    fn from(options: &[&str]) -> Self {
        Self::one_of(options.iter().copied())
    }
}

impl From<Vec<String>> for Acceptance {
    fn from(options: Vec<String>) -> Self {
        Self::one_of(options)
    }
}

impl From<HashSet<String>> for Acceptance {
    fn from(options: HashSet<String>) -> Self {
        Self(Box::new(move |candidate| options.contains(candidate)))
    }
}

impl From<BTreeSet<String>> for Acceptance {
    fn from(options: BTreeSet<String>) -> Self {
        Self(Box::new(move |candidate| options.contains(candidate)))
    }
}

/// Drives prompts over a [`Screen`] and a blocking line source.
#[derive(Debug)]
pub struct PromptEngine<R, W, C> {
    screen: Screen<W, C>,
    input: R,
}

impl<C: ScreenClearer> PromptEngine<StdinLock<'static>, Stdout, C> {
    /// Engine reading from stdin and drawing to stdout.
    pub fn stdio(layout: LayoutConfig, clearer: C) -> Self {
        Self::new(
            Screen::new(layout, io::stdout(), clearer),
            io::stdin().lock(),
        )
    }
}

impl<R: BufRead, W: Write, C: ScreenClearer> PromptEngine<R, W, C> {
    pub fn new(screen: Screen<W, C>, input: R) -> Self {
        Self { screen, input }
    }

    /// Show `message` and block until a line satisfying `acceptance` arrives.
    ///
    /// Returns the trimmed line and clears the screen buffer. The message is
    /// appended once; rejected lines just trigger a redraw. End of input
    /// yields [`PromptError::InputExhausted`] with the buffer left as is.
    pub fn get_response(
        &mut self,
        message: impl Display,
        acceptance: impl Into<Acceptance>,
    ) -> Result<String, PromptError> {
        let acceptance = acceptance.into();
        self.screen.append_line(message);

        let mut attempts = 0usize;
        loop {
            self.screen.render()?;
            let candidate = self.read_trimmed_line()?;
            attempts += 1;
            if acceptance.accepts(&candidate) {
                tracing::debug!(attempts, "prompt accepted");
                self.screen.clear();
                return Ok(candidate);
            }
            tracing::debug!(attempts, input = %candidate, "prompt input rejected");
        }
    }

    /// Wait for an empty line under the default "press enter" message.
    pub fn get_continue(&mut self) -> Result<(), PromptError> {
        self.get_continue_with(CONTINUE_MESSAGE)
    }

    /// Wait for an empty line under a custom message.
    pub fn get_continue_with(&mut self, message: impl Display) -> Result<(), PromptError> {
        self.get_response(message, Acceptance::empty()).map(|_| ())
    }

    pub fn screen(&self) -> &Screen<W, C> {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut Screen<W, C> {
        &mut self.screen
    }

    pub fn into_parts(self) -> (Screen<W, C>, R) {
        (self.screen, self.input)
    }

    fn read_trimmed_line(&mut self) -> Result<String, PromptError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            tracing::warn!("input closed while waiting for a response");
            return Err(PromptError::InputExhausted);
        }
        Ok(line.trim().to_string())
    }
}
