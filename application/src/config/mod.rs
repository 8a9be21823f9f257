//! Application-level configuration.
//!
//! - [`VerifierParams`]: answer verification control (judge timeout)

pub mod verifier_params;

pub use verifier_params::{DEFAULT_JUDGE_TIMEOUT, VerifierParams};
