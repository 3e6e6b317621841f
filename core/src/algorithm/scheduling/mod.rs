//! Project scheduling algorithms

pub mod critical_path;

pub use self::critical_path::{critical_path, PotentielMetra, Schedule, TaskTiming};
