//! Ordered authorization rule tables, evaluated first-match-wins.

use cantina_entity::session::AuthIdentity;
use cantina_entity::user::Role;

use super::pattern::RoutePattern;

/// What a matched route demands of the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Always allowed, identity or not.
    Public,
    /// Any resolved principal, any role.
    AuthenticatedOnly,
    /// A resolved principal whose role matches exactly. Roles are flat:
    /// there is no "at least" relation between them.
    Role(Role),
}

/// The outcome of evaluating a request against a rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The request may proceed to its handler.
    Granted,
    /// No principal was resolved and the route demands one.
    Unauthenticated,
    /// A principal was resolved but its role does not satisfy the route.
    Forbidden,
}

/// An ordered list of `(pattern, requirement)` pairs.
///
/// Evaluation walks the list in declaration order and the first matching
/// pattern wins. A path no rule matches falls back to
/// [`Requirement::AuthenticatedOnly`]: unknown routes are never public.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<(RoutePattern, Requirement)>,
}

impl RuleSet {
    /// Builds a rule set from `(pattern, requirement)` rule strings.
    pub fn new<I, S>(rules: I) -> Self
    where
        I: IntoIterator<Item = (S, Requirement)>,
        S: AsRef<str>,
    {
        Self {
            rules: rules
                .into_iter()
                .map(|(raw, req)| (RoutePattern::parse(raw.as_ref()), req))
                .collect(),
        }
    }

    /// The rule table for the stateless API pipeline.
    pub fn api() -> Self {
        Self::new([
            ("/api/auth/**", Requirement::Public),
            ("/api/cart/**", Requirement::Role(Role::Client)),
            ("/api/admin/**", Requirement::Role(Role::Staff)),
        ])
    }

    /// The rule table for the browser pipeline.
    ///
    /// Logout stays public so a stale cookie can always be cleared, the
    /// behavior the login/logout endpoints have always had.
    pub fn web() -> Self {
        Self::new([
            ("/static/**", Requirement::Public),
            ("/favicon.ico", Requirement::Public),
            ("/", Requirement::Public),
            ("/menu", Requirement::Public),
            ("/signup", Requirement::Public),
            ("/login", Requirement::Public),
            ("/about", Requirement::Public),
            ("/logout", Requirement::Public),
            ("/cart/**", Requirement::Role(Role::Client)),
            ("/profile", Requirement::Role(Role::Client)),
            ("/admin/**", Requirement::Role(Role::Staff)),
        ])
    }

    /// Evaluates a request path against the table.
    ///
    /// Pure: same path + same identity always yield the same decision.
    pub fn evaluate(&self, path: &str, identity: Option<&AuthIdentity>) -> Decision {
        let requirement = self
            .rules
            .iter()
            .find(|(pattern, _)| pattern.matches(path))
            .map(|(_, requirement)| *requirement)
            .unwrap_or(Requirement::AuthenticatedOnly);

        match requirement {
            Requirement::Public => Decision::Granted,
            Requirement::AuthenticatedOnly => match identity {
                Some(_) => Decision::Granted,
                None => Decision::Unauthenticated,
            },
            Requirement::Role(required) => match identity {
                None => Decision::Unauthenticated,
                Some(id) if id.role == required => Decision::Granted,
                Some(_) => Decision::Forbidden,
            },
        }
    }
}
