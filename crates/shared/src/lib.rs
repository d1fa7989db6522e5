//! Shared types, errors, and configuration for Ledgerdesk.
//!
//! This crate provides common types used across all other crates:
//! - Typed codes for type-safe entity references
//! - Pagination types for the person search
//! - Application-wide error types and their HTTP mapping
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
