//! Fixtures providing deterministic datasets for tests.
//!
//! Factories insert one row with generated defaults; fixtures insert a fixed,
//! known dataset so HTTP-level tests can assert on exact rows, counts, and ordering.

pub mod seed;
