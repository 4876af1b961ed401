mod auth;
pub mod client;
mod tasks;
pub mod types;
mod user;

pub use client::*;
pub use types::*;
