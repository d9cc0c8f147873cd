//! Quiz domain
//!
//! Entities and pure functions that turn raw model text into a validated
//! [`QuizQuestionSet`](question::QuizQuestionSet):
//!
//! | Module | Role |
//! |--------|------|
//! | [`topic`] | Validated, trimmed user topic |
//! | [`sanitize`] | Allow-list based fence stripping |
//! | [`validation`] | Shape checks and the question-count policy |
//! | [`parsing`] | Sanitize → parse → validate, all-or-nothing |
//! | [`answer`] | Reveal-and-lock answering of a validated question |

pub mod answer;
pub mod parsing;
pub mod question;
pub mod sanitize;
pub mod topic;
pub mod validation;
