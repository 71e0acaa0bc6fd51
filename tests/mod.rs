// tests/mod.rs
//! Test suite organization for spacetraveling.
//!
//! Unit tests for the engine live under `unit/`; pure helpers also
//! carry `#[cfg(test)]` modules next to their implementation.
