//! Shared frontend utilities for API access, configuration, errors, and build metadata.
//!
//! ## Account Flows
//!
//! Every account operation is a single call into the hosted auth API:
//!
//! 1. **Sign up:** `POST /auth/v1/signup`; the backend emails a confirmation link.
//! 2. **Sign in:** `POST /auth/v1/token?grant_type=password`; the response carries the user.
//! 3. **Forgot password:** `POST /auth/v1/recover?redirect_to=…`; the emailed link lands on
//!    `/reset-password` with the recovery session in the URL fragment.
//! 4. **Reset password:** `PUT /auth/v1/user` authorized with that recovery session.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids duplicated
//! logic in routes and features. Callers must avoid logging passwords and tokens.

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod endpoint;
pub(crate) mod errors;

pub(crate) use errors::AppError;
