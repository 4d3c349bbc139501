//! Server application models.
//!
//! Application state shared by HTTP handlers, and the record events published after
//! outposts and their stock rows change.

pub mod app;
pub mod event;
