//! Language-model backend adapters.

pub mod chat_player;
pub mod protocol;
