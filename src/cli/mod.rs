//! CLI operation mode handlers.
//!
//! - [`review_tui`]: Interactive console for reviewing products
//! - [`summary`]: Print per-view counts and exit
//!
//! Diagnostic log setup lives in [`logging`].

pub mod logging;
pub mod review_tui;
pub mod summary;
