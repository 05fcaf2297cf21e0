//! # DSU: disjoint set union over integer indices
//!
//! Union by rank plus full path compression. See [`base::DSU`].

pub mod base;
pub mod testing;

pub use base::{DSU, DSUErr, DSURes};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
