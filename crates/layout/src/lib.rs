//! Spatial layout passes for the newsletter engine.
//!
//! Takes the builder's absolutely-positioned block canvas through three
//! passes: dimension validation (email-safe envelope), row clustering
//! (vertical-overlap grouping), and row planning (proportional column
//! widths plus spacer requirements). All passes are pure and deterministic.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Invalid layout configuration: {0} = {1}")]
    InvalidConfig(&'static str, f32),
}

pub mod cluster;
pub mod config;
pub mod plan;
pub mod validate;

pub use self::cluster::{Row, cluster_rows};
pub use self::config::LayoutConfig;
pub use self::plan::{ColumnPlan, RowPlan, plan_rows};
pub use self::validate::{
    MAX_BLOCK_HEIGHT, MAX_BLOCK_WIDTH, MIN_BLOCK_HEIGHT, MIN_BLOCK_WIDTH, validate_blocks,
};
