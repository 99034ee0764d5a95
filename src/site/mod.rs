//! The agency site itself: its copy, the animations each page declares, the page-independent
//! overlays and the contact form.

pub(crate) mod chrome;
pub(crate) mod contact;
pub(crate) mod content;
pub(crate) mod pages;
