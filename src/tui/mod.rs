//! Terminal User Interface for reviewing catalog products.
//!
//! This module provides the interactive review console built on the
//! bubbletea-rs framework.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::ReviewApp`]
//! - **View**: Rendering logic in each component's `view()` method
//! - **Update**: Message-driven state transitions in `update()`
//!
//! # Modules
//!
//! - [`app`]: Main application model and entry point
//! - [`messages`]: Message types for the update loop
//! - [`state`]: Views, pagination, and review flow state
//! - [`components`]: Reusable UI components
//! - [`input`]: Key-to-message mapping for input handling
//!
//! # Session Storage
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, the gateway and page size are handed over through module-level
//! storage. Call [`set_review_session`] before starting the program and
//! `ReviewApp::init()` picks it up and issues the first load.

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod state;
mod storage;

pub use app::ReviewApp;
pub use storage::{
    ReviewSession, set_initial_terminal_size, set_review_session, set_telemetry_sink,
};

pub(crate) use storage::{get_initial_terminal_size, get_review_session, get_telemetry_sink};
