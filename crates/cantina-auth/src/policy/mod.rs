//! Route authorization policy: patterns, requirements, and the per-pipeline
//! rule tables.

pub mod pattern;
pub mod rules;

pub use pattern::RoutePattern;
pub use rules::{Decision, Requirement, RuleSet};
