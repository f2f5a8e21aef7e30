//! Shared helpers used across domain modules.

pub mod money;
