//! Pattern compiler and single-attempt matcher.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::params::PathParams;

/// Run of one-or-more `*` characters.
#[allow(clippy::expect_used)]
static WILDCARD_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*+").expect("valid wildcard regex"));

/// `:name` terminated by `/`, an escaped character (`\.`, `\?`) or the end.
///
/// A name starts with any letter or `_` (never a digit) and continues with
/// ASCII word characters.
///
/// The terminator is captured and written back, since the regex crate has
/// no lookahead.
#[allow(clippy::expect_used)]
static PARAM_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r":([\p{Alphabetic}_][A-Za-z0-9_]*)(/|\\.|$)").expect("valid parameter token regex")
});

/// `/:name` occurrences in the raw pattern.
#[allow(clippy::expect_used)]
static DECLARED_PARAM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/:([^/]+)").expect("valid declared parameter regex"));

/// Structural matcher built from one path pattern
///
/// Carries the compiled regex, the capture names it defines and the
/// parameter names scanned from the raw pattern. A rule whose regex failed to
/// compile has no regex and never matches.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pattern: Arc<str>,
    source: String,
    regex: Option<Regex>,
    captures: Vec<Arc<str>>,
    declared: Vec<Arc<str>>,
}

impl CompiledRule {
    /// Compile `pattern`, reporting a rule the regex engine rejects
    ///
    /// # Errors
    ///
    /// Returns an error when the rewritten pattern is not a valid regex,
    /// e.g. an unbalanced `(` or a parameter name declared twice.
    pub fn try_compile(pattern: &str) -> Result<Self> {
        let source = rule_source(pattern);
        let regex = RegexBuilder::new(&source)
            .case_insensitive(true)
            .build()
            .with_context(|| format!("Failed to compile path pattern `{pattern}` as `{source}`"))?;

        let captures = regex
            .capture_names()
            .flatten()
            .map(Arc::<str>::from)
            .collect();

        Ok(Self {
            pattern: Arc::from(pattern),
            source,
            regex: Some(regex),
            captures,
            declared: declared_params(pattern),
        })
    }

    /// Compile `pattern`, degrading to a never-matching rule on failure.
    #[must_use]
    pub fn compile(pattern: &str) -> Self {
        match Self::try_compile(pattern) {
            Ok(rule) => rule,
            Err(err) => {
                warn!(
                    pattern = %pattern,
                    error = %format!("{err:#}"),
                    "Path pattern cannot be compiled, it will never match"
                );
                Self {
                    pattern: Arc::from(pattern),
                    source: rule_source(pattern),
                    regex: None,
                    captures: Vec::new(),
                    declared: declared_params(pattern),
                }
            }
        }
    }

    /// The pattern this rule was compiled from.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The regex source the pattern was rewritten into.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Capture names defined by the compiled regex, in pattern order.
    #[must_use]
    pub fn capture_names(&self) -> &[Arc<str>] {
        &self.captures
    }

    /// Parameter names scanned from the raw pattern (`/:name` tokens).
    #[must_use]
    pub fn declared_params(&self) -> &[Arc<str>] {
        &self.declared
    }

    /// `false` for a rule that degraded because its regex was rejected.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.regex.is_some()
    }
}

/// Compile a path pattern into a [`CompiledRule`].
#[must_use]
pub fn compile(pattern: &str) -> CompiledRule {
    CompiledRule::compile(pattern)
}

/// Rewrite a path pattern into regex source.
///
/// The steps run in a fixed order: later steps rely on the escaping done by
/// earlier ones (parameter tokens end at an escaped character).
fn rule_source(pattern: &str) -> String {
    // `/` is the segment separator and needs no escaping
    let escaped = pattern.replace('.', r"\.").replace('?', r"\?");
    let trimmed = escaped.trim_end_matches('/');
    let wildcarded = WILDCARD_RUN.replace_all(trimmed, ".*");
    let parameterised = PARAM_TOKEN.replace_all(&wildcarded, |caps: &regex::Captures<'_>| {
        format!("(?P<{}>[^/]+?){}", &caps[1], &caps[2])
    });

    let mut source = String::with_capacity(parameterised.len() + 8);
    source.push('^');
    source.push_str(&parameterised);
    source.push_str("(?:/|$)");
    source
}

/// Scan a raw pattern for the parameter names it declares.
///
/// Everything after `/:` up to the next `/` is taken as the name, so a
/// glued token like `/:a:b` declares `a:b`.
#[must_use]
pub fn declared_params(pattern: &str) -> Vec<Arc<str>> {
    DECLARED_PARAM
        .captures_iter(pattern)
        .filter_map(|caps| caps.get(1))
        .map(|m| Arc::<str>::from(m.as_str()))
        .collect()
}

/// Drop everything from the first `?` on.
#[inline]
#[must_use]
pub fn strip_query(url: &str) -> &str {
    url.split_once('?').map_or(url, |(path, _)| path)
}

/// Run one match attempt of `rule` against `url`.
///
/// The query string is ignored. The first match the rule finds must span the
/// whole path, and the rule's capture names must equal `expected` as a set;
/// anything else is no match.
#[must_use]
pub fn attempt_match(rule: &CompiledRule, expected: &[Arc<str>], url: &str) -> Option<PathParams> {
    let path = strip_query(url);
    let regex = rule.regex.as_ref()?;
    let caps = regex.captures(path)?;
    let whole = caps.get(0)?;

    if whole.start() != 0 || whole.end() != path.len() {
        debug!(
            pattern = %rule.pattern,
            path = %path,
            matched = %whole.as_str(),
            "Path pattern matched only part of the path"
        );
        return None;
    }

    if !same_names(&rule.captures, expected) {
        warn!(
            pattern = %rule.pattern,
            captures = ?rule.captures,
            expected = ?expected,
            "Captured parameters disagree with declared parameters"
        );
        return None;
    }

    let mut params = PathParams::new();
    for name in &rule.captures {
        if let Some(value) = caps.name(name) {
            params.push(Arc::clone(name), value.as_str().to_string());
        }
    }
    Some(params)
}

/// Order-independent comparison of two name lists.
fn same_names(left: &[Arc<str>], right: &[Arc<str>]) -> bool {
    if left.len() != right.len() {
        return false;
    }
    let mut left: Vec<&str> = left.iter().map(AsRef::as_ref).collect();
    let mut right: Vec<&str> = right.iter().map(AsRef::as_ref).collect();
    left.sort_unstable();
    right.sort_unstable();
    left == right
}
