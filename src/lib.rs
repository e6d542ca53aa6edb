// Coverage Check: press release publication verification.
//
// This is the library root. Each module corresponds to a stage of the
// coverage pipeline: monitoring report parsing, similarity verification,
// report building, and output.

pub mod config;
pub mod monitoring;
pub mod output;
pub mod pipeline;
pub mod report;
pub mod similarity;
