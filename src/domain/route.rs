//! Route labeling.
//!
//! Destination URLs frequently embed identifiers (`/users/42`), which would
//! give every request its own histogram. A [`RouteLabeler`] maps such URLs to
//! a fixed label (`/users/:id`) using an ordered list of regex rules.

use anyhow::{Context, Result};
use regex::Regex;

/// A single `pattern -> label` substitution.
#[derive(Debug, Clone)]
pub struct RouteRule {
    pattern: Regex,
    label: String,
}

impl RouteRule {
    /// Compiles `pattern` into a rule.
    ///
    /// # Errors
    /// Returns an error if `pattern` is not a valid regular expression.
    pub fn new(pattern: &str, label: impl Into<String>) -> Result<Self> {
        // ---
        let pattern =
            Regex::new(pattern).with_context(|| format!("Invalid route pattern: {pattern}"))?;

        Ok(Self::from_regex(pattern, label))
    }

    /// Builds a rule from an already compiled regex.
    pub fn from_regex(pattern: Regex, label: impl Into<String>) -> Self {
        // ---
        Self {
            pattern,
            label: label.into(),
        }
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Ordered, first-match-wins URL labeler.
///
/// Rules are consulted in the order they were supplied; evaluation stops at
/// the first pattern that matches. A URL no rule matches is its own label.
#[derive(Debug, Clone, Default)]
pub struct RouteLabeler {
    rules: Vec<RouteRule>,
}

impl RouteLabeler {
    pub fn new(rules: Vec<RouteRule>) -> Self {
        Self { rules }
    }

    /// Returns the label for `url`.
    pub fn label<'a>(&'a self, url: &'a str) -> &'a str {
        // ---
        self.rules
            .iter()
            .find(|rule| rule.pattern.is_match(url))
            .map_or(url, |rule| rule.label.as_str())
    }

    pub fn rules(&self) -> &[RouteRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
