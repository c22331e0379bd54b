//! Snapshot loading for batch and CLI inputs
//!
//! The calculators never perform I/O; this module is the boundary where
//! JSON and CSV snapshots exported by the sync layer become the plain
//! value types the calculators consume.

pub mod loader;

pub use loader::{
    load_holdings_csv, load_loans_csv, load_snapshot_json, PortfolioSnapshot, SnapshotError,
};
