//! Progress notification port
//!
//! Defines the interface for reporting progress of a generation attempt.

use quizgen_domain::{GenerationPhase, Model, Topic};

/// Callback for progress updates during quiz generation
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called on every phase transition of the attempt
    fn on_phase_change(&self, phase: GenerationPhase);

    /// Called right before the request is sent
    fn on_request_start(&self, _topic: &Topic, _model: &Model) {}

    /// Called when the raw response arrives
    fn on_response_received(&self, _bytes: usize) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_phase_change(&self, _phase: GenerationPhase) {}
}
