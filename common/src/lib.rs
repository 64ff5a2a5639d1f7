//! Shared building blocks for the reverse DNS scanner: configuration, the
//! resolver and target lists, and resolver selection.

pub mod config;
pub mod error;
pub mod network;
pub mod select;
