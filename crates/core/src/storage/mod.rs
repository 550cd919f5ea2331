//! Backup storage for rate snapshots using Apache OpenDAL.
//!
//! Snapshots are small JSON documents written after every successful live
//! fetch and read back when the remote API is unreachable.
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │                Apache OpenDAL                 │
//! ├───────────────────────────────────────────────┤
//! │ op.write("forex_backup.json", json)           │
//! │ op.read("forex_backup.json")                  │
//! └───────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod service;

pub use config::{BackupKeys, BackupProvider};
pub use error::BackupError;
pub use service::BackupStore;
