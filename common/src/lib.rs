pub mod log_setup;
pub mod snapshot_cell;

pub use snapshot_cell::SnapshotCell;
