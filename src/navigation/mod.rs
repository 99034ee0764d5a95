//! Page identity, the curtain transition and the router that gates scroll commands.

pub(crate) mod page;
pub(crate) mod router;
pub(crate) mod transition;
