//! tally-cli - Terminal-based monthly expense tracker
//!
//! This library provides the core functionality for tally-cli. It records
//! dated expenses, keeps a running total for the active calendar month, and
//! archives completed months into a per-month history summary.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, month keys, money, summaries)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer (ledger, history aggregation, rollover)
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! The expense ledger is the single source of truth. History is a derived
//! view that excludes the active month and is fully rebuilt from the ledger
//! after every mutation; the active-month marker decides which expenses are
//! "current" and which belong to the archive.
//!
//! # Example
//!
//! ```rust,ignore
//! use tally::config::{paths::TallyPaths, settings::Settings};
//! use tally::storage::Storage;
//! use tally::services::RolloverService;
//!
//! let paths = TallyPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths)?;
//! storage.load_all()?;
//! RolloverService::new(&storage).reconcile(chrono::Local::now().date_naive())?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::TallyError;
