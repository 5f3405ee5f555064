//! spendlog - Terminal-based personal expense tracking
//!
//! This library provides the core functionality for the spendlog expense
//! tracker: a validated expense data model, an in-memory collection, JSON
//! file persistence with backups, CSV export/import, and read-only reports.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, categories, budgets, money)
//! - `manager`: In-memory expense collection
//! - `storage`: JSON file storage layer with atomic writes and backups
//! - `export` / `import`: CSV and JSON snapshot transfer
//! - `reports`: Pure aggregation over expense snapshots
//! - `cli` / `display`: Application shell and terminal formatting
//!
//! # Example
//!
//! ```rust,ignore
//! use spendlog::config::{paths::TrackerPaths, settings::Settings};
//! use spendlog::storage::FileHandler;
//!
//! let paths = TrackerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let file_handler = FileHandler::new(&paths)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod import;
pub mod manager;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
pub use manager::{ExpenseFilter, ExpenseManager};
