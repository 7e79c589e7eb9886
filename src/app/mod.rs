//! Application state and logic

mod state;
mod actions;
mod handlers;
mod export;

pub use export::{export_format_for, EXPORT_KEYS};
pub use state::*;
