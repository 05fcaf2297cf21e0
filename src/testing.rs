//! Driver scenarios exercising the DSU store end to end.

pub mod cases;
