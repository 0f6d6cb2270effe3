#![forbid(unsafe_code)]

//! Core domain model and business logic for Juoppo, the drinking-session
//! recorder.
//!
//! This crate provides:
//! - Beverage records and alcohol unit conversion
//! - Session summaries
//! - Consumer persistence (SQLite)
//! - The interactive session loop

pub mod units;
pub mod beverage;
pub mod summary;
pub mod error;
pub mod config;
pub mod logging;
pub mod input;
pub mod store;
pub mod session;

// Re-export commonly used types
pub use error::{Error, Result};
pub use units::AlcoholContent;
pub use beverage::Beverage;
pub use summary::Summary;
pub use config::Config;
pub use store::{Consumer, ConsumerDirectory, DatabaseFile, Identification, Store};
pub use session::Session;
