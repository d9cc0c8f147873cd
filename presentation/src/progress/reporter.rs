//! Progress reporting for quiz generation

use indicatif::{ProgressBar, ProgressStyle};
use quizgen_application::ProgressNotifier;
use quizgen_domain::{GenerationPhase, Model, Topic};
use std::sync::Mutex;
use std::time::Duration;

/// Spinner shown while a request is in flight
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn phase_message(phase: GenerationPhase) -> Option<&'static str> {
        match phase {
            GenerationPhase::Requesting => Some("Generating questions..."),
            GenerationPhase::Validating => Some("Checking the answer format..."),
            _ => None,
        }
    }

    fn finish(&self) {
        if let Ok(mut spinner) = self.spinner.lock()
            && let Some(pb) = spinner.take()
        {
            pb.finish_and_clear();
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_phase_change(&self, phase: GenerationPhase) {
        if phase.is_busy() {
            if let Ok(mut spinner) = self.spinner.lock() {
                let pb = spinner.get_or_insert_with(|| {
                    let pb = ProgressBar::new_spinner();
                    pb.set_style(Self::spinner_style());
                    pb.enable_steady_tick(Duration::from_millis(100));
                    pb
                });
                if let Some(message) = Self::phase_message(phase) {
                    pb.set_message(message);
                }
            }
        } else {
            self.finish();
        }
    }

    fn on_request_start(&self, topic: &Topic, model: &Model) {
        if let Ok(spinner) = self.spinner.lock()
            && let Some(pb) = spinner.as_ref()
        {
            pb.set_message(format!("Asking {} about {}...", model, topic));
        }
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        self.finish();
    }
}
