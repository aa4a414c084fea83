//! Aggregation and derived-metric core behind the Swiss renewable-energy
//! dashboard: filtering by canton and category, per-canton and per-category
//! summaries, efficiency ratios, IQR outlier trimming, cumulative growth and
//! map centering for canton boundaries.

pub mod cli;
pub mod config;
pub mod geo;
pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod stats;
pub mod views;

#[cfg(test)]
#[path = "../tests/src_inline/fixtures.rs"]
pub(crate) mod fixtures;
