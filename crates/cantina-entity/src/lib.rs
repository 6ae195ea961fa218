//! # cantina-entity
//!
//! Domain entity models for Cantina. Every struct in this crate represents
//! a stored record or a domain value object. All entities derive `Debug`,
//! `Clone`, `Serialize`, and `Deserialize`.

pub mod session;
pub mod user;
