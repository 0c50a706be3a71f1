// Public fallible APIs in this crate share one concrete error contract (`VaidyaError`).
// Repeating per-function `# Errors` boilerplate obscures behavior more than it clarifies.
#![allow(
    clippy::missing_errors_doc,
    reason = "crate-wide fallible API uses one explicit error type; per-item boilerplate would duplicate contract"
)]

pub mod backend;
pub(crate) mod chat;
mod client;
pub mod error;
pub mod intersect;
pub(crate) mod jsonl;
pub mod log;
pub mod models;
pub mod normalize;
pub mod overlay;
pub mod screen;
pub mod session;
pub mod text;
pub mod transcript;

pub use client::Vaidya;
pub use error::{Result, VaidyaError};
