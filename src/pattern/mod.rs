//! # Pattern Module
//!
//! Compiles path patterns such as `/pim-connection/:pimConnectionId/flow/:flowId`
//! into a structural matching rule, and runs a single match attempt of a rule
//! against a URL.
//!
//! ## Pattern Syntax
//!
//! - Literal segments match themselves, case-insensitively
//! - `:name` binds one-or-more non-`/` characters to `name`
//! - A run of `*` matches any sequence of characters, across segments
//! - `.` and `?` are literal characters
//! - Trailing slashes in the pattern are ignored, and a single trailing slash
//!   in the URL is always accepted
//!
//! ## Two Phases
//!
//! 1. **Compilation** ([`compile`]): the pattern is rewritten into a regex and
//!    the parameter names it declares are scanned independently.
//! 2. **Matching** ([`attempt_match`]): the query string is stripped, the rule
//!    must consume the whole path, and the captured names must agree with the
//!    declared ones.
//!
//! ## Example
//!
//! ```rust
//! use routematcher::pattern::{attempt_match, compile};
//!
//! let rule = compile("/a/:id");
//! let params = attempt_match(&rule, rule.declared_params(), "/a/5?x=1").unwrap();
//! assert_eq!(params.get("id"), Some("5"));
//! ```
//!
//! Malformed patterns never fail here. A pattern the regex engine rejects
//! compiles to a rule that matches nothing.

mod core;

pub use self::core::{attempt_match, compile, declared_params, strip_query, CompiledRule};
