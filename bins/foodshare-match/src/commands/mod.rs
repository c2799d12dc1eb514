//! CLI command implementations

pub mod best;
pub mod distance;
pub mod parse;
pub mod rank;
