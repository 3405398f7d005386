//! Shared test support utilities for behaviour-driven suites.
//!
//! Exposes the token helpers (`StepText`, `StepTokens`) that parse quoted
//! step parameters so scenarios can feed consistent values into the option
//! builder.
pub mod tokens;
