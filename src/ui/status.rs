//! Fetch status line, rendered via an `indicatif` spinner.

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use super::icons::CROSS;

/// Lifecycle of a single board fetch.
///
/// The view is in exactly one state at a time. The only transitions are
/// `Loading → Ready` on fetch success and `Loading → Error` on fetch
/// failure; the terminal states never transition again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Error,
    Ready,
}

impl LoadState {
    /// Successor state once the in-flight fetch resolves.
    pub fn resolve(self, success: bool) -> LoadState {
        match self {
            LoadState::Loading => {
                if success {
                    LoadState::Ready
                } else {
                    LoadState::Error
                }
            }
            terminal => terminal,
        }
    }

    pub fn is_terminal(self) -> bool {
        !matches!(self, LoadState::Loading)
    }
}

/// Spinner shown while the board request is in flight.
///
/// Created in `Loading`; consumed by exactly one of [`Self::ready`] or
/// [`Self::error`]. Draws to stderr, so stdout stays clean for the board.
pub struct FetchStatus {
    bar: ProgressBar,
    state: LoadState,
}

impl FetchStatus {
    pub fn start(endpoint: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner} {msg}")
                .expect("spinner template is a valid static string"),
        );
        bar.set_message(format!("Loading board from {}", style(endpoint).dim()));
        bar.enable_steady_tick(Duration::from_millis(100));
        Self {
            bar,
            state: LoadState::Loading,
        }
    }

    /// Clear the spinner and report the fetch as complete.
    pub fn ready(mut self) -> LoadState {
        self.state = self.state.resolve(true);
        self.bar.finish_and_clear();
        self.state
    }

    /// Stop the spinner on a styled error line.
    pub fn error(mut self, message: &str) -> LoadState {
        self.state = self.state.resolve(false);
        self.bar
            .finish_with_message(format!("{}{}", CROSS, style(message).red().bold()));
        self.state
    }
}
