//! In-memory session state: active query, history, loading and toasts
//!
//! Nothing here outlives the process.

mod history;
mod loading;
mod notify;
mod state;

pub use history::*;
pub use loading::*;
pub use notify::*;
pub use state::*;
