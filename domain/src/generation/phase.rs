//! Per-attempt state machine
//!
//! ```text
//! Idle ─▶ Requesting ─▶ Validating ─▶ Succeeded
//!  │           │              └─────▶ Failed(InvalidFormat)
//!  │           ├─▶ Failed(GenerationFailed | MissingCredential)
//!  │           └─▶ Idle (cancelled)
//!  └─▶ Failed(EmptyTopic | MissingCredential)
//!
//! Succeeded | Failed(_) ─▶ Idle (next attempt)
//! ```

use crate::generation::result::ErrorKind;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationPhase {
    #[default]
    Idle,
    Requesting,
    Validating,
    Succeeded,
    Failed(ErrorKind),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid generation phase transition: {from} -> {to}")]
pub struct PhaseTransitionError {
    pub from: GenerationPhase,
    pub to: GenerationPhase,
}

impl GenerationPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationPhase::Idle => "idle",
            GenerationPhase::Requesting => "requesting",
            GenerationPhase::Validating => "validating",
            GenerationPhase::Succeeded => "succeeded",
            GenerationPhase::Failed(_) => "failed",
        }
    }

    /// A request is outstanding
    pub fn is_busy(&self) -> bool {
        matches!(self, GenerationPhase::Requesting | GenerationPhase::Validating)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, GenerationPhase::Succeeded | GenerationPhase::Failed(_))
    }

    pub fn can_transition_to(&self, next: GenerationPhase) -> bool {
        use GenerationPhase::*;
        matches!(
            (*self, next),
            (Idle, Requesting)
                | (Idle, Failed(ErrorKind::EmptyTopic | ErrorKind::MissingCredential))
                | (Requesting, Validating)
                | (
                    Requesting,
                    Failed(ErrorKind::GenerationFailed | ErrorKind::MissingCredential)
                )
                | (Requesting, Idle)
                | (Validating, Succeeded)
                | (Validating, Failed(ErrorKind::InvalidFormat))
                | (Succeeded | Failed(_), Idle)
        )
    }

    pub fn transition(self, next: GenerationPhase) -> Result<GenerationPhase, PhaseTransitionError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(PhaseTransitionError {
                from: self,
                to: next,
            })
        }
    }
}

impl std::fmt::Display for GenerationPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationPhase::Failed(kind) => write!(f, "failed({})", kind),
            other => write!(f, "{}", other.as_str()),
        }
    }
}
