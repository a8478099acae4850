mod aggregator;

pub use aggregator::{aggregate_files, collect_track_from_dir};

#[cfg(test)]
pub mod unit_test;
