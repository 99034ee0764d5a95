//! Viewport triggers: anchor parsing, page geometry and the registry that resolves windows.

pub(crate) mod anchor;
pub(crate) mod layout;
pub(crate) mod registry;
