//! Use cases: the scene engine and its supporting combinators.

pub mod retry;
pub mod run_scene;
pub mod standings;
