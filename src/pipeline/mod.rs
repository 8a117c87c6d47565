//! Pipelines.
//!
//! The module provides a light [pipeline::Pipeline] trait,
//! implemented by the corpus [Reorganizer].
pub mod pipeline;
mod reorganize;

pub use reorganize::{Reorganizer, Summary};
