//! PDF Text Extraction Service
//!
//! A small Rust service that accepts an uploaded PDF document and returns
//! the text content of every page, joined in page order.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{AppError, AppResult};
