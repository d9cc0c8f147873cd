//! Quiz session
//!
//! Owns the single observable slot a front-end renders from: the current
//! topic, the pipeline phase, the latest result and the loading flag. At most
//! one generation attempt is in flight per session; triggers arriving while
//! one is running are ignored rather than queued.

use super::generate_quiz::{GenerateQuizError, GenerateQuizInput, GenerateQuizUseCase};
use crate::ports::progress::ProgressNotifier;
use quizgen_domain::{GenerationPhase, GenerationResult, Model, Topic};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Snapshot of the session state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSlot {
    pub topic: String,
    pub phase: GenerationPhase,
    /// Result of the latest finished attempt; cleared when a new one starts.
    pub result: Option<GenerationResult>,
    pub loading: bool,
}

impl SessionSlot {
    /// User-facing error text for the latest attempt, if it failed.
    pub fn error_message(&self) -> Option<&'static str> {
        self.result.as_ref().and_then(GenerationResult::user_message)
    }
}

/// What happened to a generation trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// The attempt ran to a terminal result.
    Completed(GenerationResult),
    /// The attempt was cancelled before it finished; the slot is back to idle.
    Cancelled,
    /// Another attempt was already in flight.
    Ignored,
}

pub struct QuizSession {
    use_case: GenerateQuizUseCase,
    slot: Mutex<SessionSlot>,
    in_flight: AtomicBool,
}

impl QuizSession {
    pub fn new(use_case: GenerateQuizUseCase) -> Self {
        Self {
            use_case,
            slot: Mutex::new(SessionSlot::default()),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn model(&self) -> &Model {
        self.use_case.model()
    }

    /// Replace the topic text.
    ///
    /// Any previous failure is cleared so stale errors disappear as the user
    /// edits. Returns `false` and leaves the topic untouched while a request
    /// is in flight.
    pub fn set_topic(&self, topic: impl Into<String>) -> bool {
        if self.is_loading() {
            debug!("Ignoring topic edit while loading");
            return false;
        }
        let mut slot = self.lock_slot();
        slot.topic = topic.into();
        if matches!(slot.result, Some(GenerationResult::Failure { .. })) {
            slot.result = None;
            slot.phase = GenerationPhase::Idle;
        }
        true
    }

    pub fn snapshot(&self) -> SessionSlot {
        self.lock_slot().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Run one attempt for the current topic.
    pub async fn generate(&self, progress: &dyn ProgressNotifier) -> TriggerOutcome {
        self.run(progress, None).await
    }

    /// Run one attempt that aborts when `token` is cancelled.
    pub async fn generate_with_cancellation(
        &self,
        progress: &dyn ProgressNotifier,
        token: CancellationToken,
    ) -> TriggerOutcome {
        self.run(progress, Some(token)).await
    }

    async fn run(
        &self,
        progress: &dyn ProgressNotifier,
        token: Option<CancellationToken>,
    ) -> TriggerOutcome {
        let Some(_guard) = InFlightGuard::acquire(self) else {
            debug!("Generation already in flight, ignoring trigger");
            return TriggerOutcome::Ignored;
        };

        let topic = {
            let mut slot = self.lock_slot();
            slot.result = None;
            slot.phase = GenerationPhase::Idle;
            slot.loading = true;
            slot.topic.clone()
        };

        let mut input = GenerateQuizInput::new(topic);
        if let Some(token) = token {
            input = input.with_cancellation(token);
        }

        let recorder = SlotProgress {
            session: self,
            inner: progress,
        };
        let outcome = self.use_case.execute_with_progress(input, &recorder).await;

        let mut slot = self.lock_slot();
        slot.loading = false;
        let result = match outcome {
            Ok(set) => GenerationResult::Success(set),
            Err(GenerateQuizError::Cancelled) => {
                slot.phase = GenerationPhase::Idle;
                return TriggerOutcome::Cancelled;
            }
            Err(e) => match e.kind() {
                Some(kind) => GenerationResult::failure(kind, e.to_string()),
                None => return TriggerOutcome::Cancelled,
            },
        };
        slot.result = Some(result.clone());
        TriggerOutcome::Completed(result)
    }

    fn lock_slot(&self) -> MutexGuard<'_, SessionSlot> {
        self.slot.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Releases the single-flight gate however the attempt ends.
struct InFlightGuard<'a> {
    session: &'a QuizSession,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(session: &'a QuizSession) -> Option<Self> {
        session
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { session })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.session.lock_slot().loading = false;
        self.session.in_flight.store(false, Ordering::Release);
    }
}

/// Records every phase into the slot before forwarding it.
struct SlotProgress<'a> {
    session: &'a QuizSession,
    inner: &'a dyn ProgressNotifier,
}

impl ProgressNotifier for SlotProgress<'_> {
    fn on_phase_change(&self, phase: GenerationPhase) {
        {
            let mut slot = self.session.lock_slot();
            if let Err(e) = slot.phase.transition(phase) {
                warn!(error = %e, "Unexpected phase transition");
            }
            slot.phase = phase;
        }
        self.inner.on_phase_change(phase);
    }

    fn on_request_start(&self, topic: &Topic, model: &Model) {
        self.inner.on_request_start(topic, model);
    }

    fn on_response_received(&self, bytes: usize) {
        self.inner.on_response_received(bytes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BehaviorConfig;
    use crate::ports::generation_client::{GatewayError, GenerationClient};
    use crate::ports::progress::NoProgress;
    use async_trait::async_trait;
    use quizgen_domain::ErrorKind;
    use std::collections::VecDeque;
    use std::sync::Arc;
    use std::sync::atomic::AtomicUsize;
    use tokio::sync::Notify;

    const VALID: &str = r#"[{"question":"Q1","options":["A","B","C","D"],"correct":"B"}]"#;

    /// Returns scripted replies in order, optionally waiting on a gate first.
    struct FakeClient {
        model: Model,
        replies: Mutex<VecDeque<Result<String, GatewayError>>>,
        gate: Option<Arc<Notify>>,
        calls: AtomicUsize,
    }

    impl FakeClient {
        fn new(replies: Vec<Result<String, GatewayError>>) -> Self {
            Self {
                model: Model::default(),
                replies: Mutex::new(replies.into()),
                gate: None,
                calls: AtomicUsize::new(0),
            }
        }

        fn gated(replies: Vec<Result<String, GatewayError>>, gate: Arc<Notify>) -> Self {
            Self {
                gate: Some(gate),
                ..Self::new(replies)
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl GenerationClient for FakeClient {
        fn model(&self) -> &Model {
            &self.model
        }

        async fn generate(&self, _prompt: &str) -> Result<String, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(GatewayError::Other("no reply scripted".to_string())))
        }
    }

    fn session(client: &Arc<FakeClient>) -> QuizSession {
        QuizSession::new(GenerateQuizUseCase::new(
            client.clone(),
            BehaviorConfig::from_timeout_seconds(None),
        ))
    }

    #[tokio::test]
    async fn test_success_fills_slot() {
        let client = Arc::new(FakeClient::new(vec![Ok(VALID.to_string())]));
        let session = session(&client);
        assert!(session.set_topic("Rust"));

        let outcome = session.generate(&NoProgress).await;
        assert!(matches!(
            outcome,
            TriggerOutcome::Completed(GenerationResult::Success(_))
        ));

        let slot = session.snapshot();
        assert_eq!(slot.phase, GenerationPhase::Succeeded);
        assert!(!slot.loading);
        assert_eq!(slot.result.unwrap().questions().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_trigger_while_loading_is_ignored() {
        let gate = Arc::new(Notify::new());
        let client = Arc::new(FakeClient::gated(
            vec![Ok(VALID.to_string())],
            gate.clone(),
        ));
        let session = session(&client);
        session.set_topic("Rust");

        let (first, second) = tokio::join!(session.generate(&NoProgress), async {
            assert!(session.is_loading());
            assert!(session.snapshot().loading);
            assert!(!session.set_topic("Other"));
            let outcome = session.generate(&NoProgress).await;
            gate.notify_one();
            outcome
        });

        assert!(matches!(first, TriggerOutcome::Completed(_)));
        assert_eq!(second, TriggerOutcome::Ignored);
        assert_eq!(client.calls(), 1);
        assert_eq!(session.snapshot().topic, "Rust");
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn test_empty_topic_never_calls_client() {
        let client = Arc::new(FakeClient::new(vec![Ok(VALID.to_string())]));
        let session = session(&client);
        session.set_topic("   ");

        let outcome = session.generate(&NoProgress).await;
        match outcome {
            TriggerOutcome::Completed(result) => {
                assert_eq!(result.error_kind(), Some(ErrorKind::EmptyTopic))
            }
            other => panic!("expected Completed, got {:?}", other),
        }
        assert_eq!(client.calls(), 0);

        let slot = session.snapshot();
        assert_eq!(slot.phase, GenerationPhase::Failed(ErrorKind::EmptyTopic));
        assert_eq!(
            slot.error_message(),
            Some("Please enter a topic for the quiz.")
        );
    }

    #[tokio::test]
    async fn test_new_attempt_discards_previous_result() {
        let client = Arc::new(FakeClient::new(vec![
            Ok(VALID.to_string()),
            Ok("not json".to_string()),
        ]));
        let session = session(&client);
        session.set_topic("Rust");

        session.generate(&NoProgress).await;
        assert!(session.snapshot().result.unwrap().is_success());

        session.generate(&NoProgress).await;
        let slot = session.snapshot();
        assert_eq!(slot.phase, GenerationPhase::Failed(ErrorKind::InvalidFormat));
        assert_eq!(
            slot.result.unwrap().error_kind(),
            Some(ErrorKind::InvalidFormat)
        );
    }

    #[tokio::test]
    async fn test_editing_topic_clears_error() {
        let client = Arc::new(FakeClient::new(vec![Err(GatewayError::ConnectionError(
            "down".to_string(),
        ))]));
        let session = session(&client);
        session.set_topic("Rust");

        session.generate(&NoProgress).await;
        assert!(session.snapshot().error_message().is_some());

        assert!(session.set_topic("Rust ownership"));
        let slot = session.snapshot();
        assert_eq!(slot.error_message(), None);
        assert_eq!(slot.phase, GenerationPhase::Idle);
        assert_eq!(slot.topic, "Rust ownership");
    }

    #[tokio::test]
    async fn test_editing_topic_keeps_success() {
        let client = Arc::new(FakeClient::new(vec![Ok(VALID.to_string())]));
        let session = session(&client);
        session.set_topic("Rust");
        session.generate(&NoProgress).await;

        session.set_topic("Go");
        assert!(session.snapshot().result.unwrap().is_success());
    }

    #[tokio::test]
    async fn test_cancelled_attempt_returns_to_idle() {
        let gate = Arc::new(Notify::new());
        let client = Arc::new(FakeClient::gated(vec![Ok(VALID.to_string())], gate));
        let session = session(&client);
        session.set_topic("Rust");
        let token = CancellationToken::new();

        let (outcome, ()) = tokio::join!(
            session.generate_with_cancellation(&NoProgress, token.clone()),
            async { token.cancel() }
        );

        assert_eq!(outcome, TriggerOutcome::Cancelled);
        let slot = session.snapshot();
        assert_eq!(slot.phase, GenerationPhase::Idle);
        assert!(slot.result.is_none());
        assert!(!slot.loading);
        assert!(!session.is_loading());
    }
}
