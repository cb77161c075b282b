//! Sync status spinner

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Spinner shown while a sync is in flight
pub struct SyncSpinner {
    bar: Mutex<Option<ProgressBar>>,
}

impl SyncSpinner {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Start (or retarget) the spinner with `message`
    pub fn start(&self, message: &str) {
        let Ok(mut slot) = self.bar.lock() else {
            return;
        };
        let bar = slot.get_or_insert_with(|| {
            let pb = ProgressBar::new_spinner();
            pb.set_style(Self::spinner_style());
            pb.enable_steady_tick(Duration::from_millis(100));
            pb
        });
        bar.set_message(message.to_string());
    }

    /// Stop the spinner, leaving `message` on screen.
    ///
    /// Returns `false` if no spinner was running.
    pub fn finish(&self, message: &str, success: bool) -> bool {
        let Ok(mut slot) = self.bar.lock() else {
            return false;
        };
        match slot.take() {
            Some(pb) => {
                let mark = if success { "v".green() } else { "x".red() };
                pb.finish_with_message(format!("{} {}", mark, message));
                true
            }
            None => false,
        }
    }

    /// Run `f` with the spinner hidden so its output is not overdrawn
    pub fn suspend<F: FnOnce()>(&self, f: F) {
        let bar = self.bar.lock().ok().and_then(|slot| slot.clone());
        match bar {
            Some(pb) => pb.suspend(f),
            None => f(),
        }
    }
}

impl Default for SyncSpinner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_and_finish() {
        let spinner = SyncSpinner::new();
        assert!(!spinner.finish("idle", true));

        spinner.start("Syncing with server...");
        spinner.start("Still syncing...");

        assert!(spinner.finish("done", true));
        assert!(!spinner.finish("again", true));
    }

    #[test]
    fn test_suspend_runs_closure() {
        let spinner = SyncSpinner::new();
        let mut calls = 0;
        spinner.suspend(|| calls += 1);

        spinner.start("Syncing with server...");
        spinner.suspend(|| calls += 1);
        spinner.finish("done", true);

        assert_eq!(calls, 2);
    }
}
