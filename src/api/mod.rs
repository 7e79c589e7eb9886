//! Backend API: service trait, wire models and the HTTP client

mod backend;
mod models;
pub mod http;

#[cfg(test)]
pub mod mock;

pub use backend::*;
pub use models::*;
