//! Shared geometry types, the error type and small numeric helpers.

pub(crate) mod core;
pub(crate) mod error;
pub(crate) mod math;
