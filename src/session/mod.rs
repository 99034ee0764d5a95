//! Runtime wiring: animation scopes, stage configuration and the per-frame driver.

pub(crate) mod config;
pub(crate) mod scope;
pub(crate) mod stage;
