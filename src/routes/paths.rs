//! Canonical route table. Every navigable path in the app is listed here.

pub const LANDING: &str = "/";
pub const SIGN_UP: &str = "/signup";
pub const SIGN_IN: &str = "/signin";
pub const FORGOT_PASSWORD: &str = "/forgot-password";
pub const RESET_PASSWORD: &str = "/reset-password";
