//! Business logic layer for tally-cli
//!
//! Services own the rules: validation, aggregation, and month rollover.
//! They borrow [`Storage`](crate::storage::Storage) and persist after every
//! mutation, returning advisory [`Notice`]s for the presentation layer to
//! render.

pub mod history;
pub mod ledger;
pub mod notice;
pub mod rollover;

pub use history::HistoryService;
pub use ledger::LedgerService;
pub use notice::Notice;
pub use rollover::RolloverService;
