//! Shared helpers for the cipher engine.

pub(crate) mod alphabet;
