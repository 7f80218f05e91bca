//! Per-visitor UI state: theme preference, the statistics counter animation,
//! and the request-scoped state record handed to the page renderer.

pub mod counter;
pub mod handlers;
pub mod state;
pub mod theme;
