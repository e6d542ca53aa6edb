// Pipelines: end-to-end orchestration of the coverage check.

pub mod coverage;
