//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`]: a catalog entry with its canonical answer
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod question;
pub mod string;
