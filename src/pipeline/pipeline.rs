//! Pipeline trait.
use crate::error::Error;

/// Implemented by each pipeline.
///
/// `T` is what a successful run reports back, e.g. counts of processed items.
pub trait Pipeline<T> {
    fn run(&self) -> Result<T, Error>;
}
