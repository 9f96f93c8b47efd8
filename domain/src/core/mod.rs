//! Core domain concepts shared across all subdomains.
//!
//! - [`error::LookupError`]: the submission error taxonomy and its user-facing messages
//! - [`error::AdaptError`]: failures while reshaping a service response
//! - [`string`]: display helpers

pub mod error;
pub mod string;
