//! # cantina-store
//!
//! Persistence boundary for Cantina. Defines the [`UserStore`] contract the
//! authentication subsystem resolves principals through, plus the
//! concurrent in-memory implementations backing a single-node deployment.

pub mod cart;
pub mod users;

pub use cart::CartStore;
pub use users::{MemoryUserStore, UserStore};
