//! Terminal presentation helpers for `tour-search`.

pub mod output;

pub use output::{format_count, score_badge, truncate, Status};
