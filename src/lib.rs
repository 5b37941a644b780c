//! Workspace-level integration tests for the totient range benchmark.
//!
//! The tests live in `tests/`; this crate has no code of its own.
