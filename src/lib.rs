pub mod config;
pub mod error;
pub mod io;
pub mod pipeline;
pub mod processing;
