//! Route pattern matching.

use std::fmt;

/// A route matcher parsed from a rule string.
///
/// `"/admin/**"` matches `/admin` and everything below it; any other string
/// matches exactly. Matching is on whole path segments: `/admin/**` does
/// not match `/administrator`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutePattern {
    /// Matches one path exactly.
    Exact(String),
    /// Matches the base path and any subpath of it.
    Prefix(String),
}

impl RoutePattern {
    /// Parses a rule string into a pattern.
    pub fn parse(raw: &str) -> Self {
        match raw.strip_suffix("/**") {
            Some(base) => Self::Prefix(base.to_string()),
            None => Self::Exact(raw.to_string()),
        }
    }

    /// Whether the given request path matches this pattern.
    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::Exact(p) => path == p,
            Self::Prefix(base) => {
                path == base || (path.starts_with(base) && path[base.len()..].starts_with('/'))
            }
        }
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(p) => write!(f, "{p}"),
            Self::Prefix(base) => write!(f, "{base}/**"),
        }
    }
}
