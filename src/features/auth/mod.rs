//! Auth feature module: field rules, the submission state machine, and the
//! client for the hosted auth API. It keeps account logic out of the UI. This
//! module handles passwords and recovery tokens and must never log them.
//!
//! Flow Overview: each screen validates its draft locally, then makes exactly
//! one remote call per submit (sign up, sign in, request reset, update
//! password) and reports the result through the notification channel.

pub(crate) mod backend;
#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod flow;
pub(crate) mod session;
#[cfg(target_arch = "wasm32")]
pub(crate) mod state;
pub(crate) mod types;
pub(crate) mod validation;
