// Coverage report: per-target rows and summary statistics.

pub mod builder;
pub mod models;
