//! External per-venue store adapters.

pub mod http_store;
