mod dsu;

pub use dsu::{DSU, DSU_GROUP_INLINE, DSUErr, DSUGroup, DSURes};
