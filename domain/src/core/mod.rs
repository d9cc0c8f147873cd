//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: the generative model a session talks to
//! - [`error::DomainError`]: domain-level errors
//! - [`string`]: UTF-8 safe helpers for log previews

pub mod error;
pub mod model;
pub mod string;
