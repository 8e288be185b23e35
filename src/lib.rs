//! # routematcher
//!
//! **routematcher** is a small declarative URL path matcher. Bind a URL, register
//! an ordered sequence of path patterns each with an async handler, and the
//! first pattern that structurally matches has its handler invoked with the
//! extracted parameters. No later pattern is evaluated.
//!
//! ## Architecture
//!
//! - **[`pattern`]** - compiles a path pattern into a structural matching rule
//!   and runs a single match attempt against a URL
//! - **[`matcher`]** - the fluent Open/Closed chain with short-circuit semantics
//!   and async result propagation
//! - **[`params`]** - parameters extracted from a matched URL
//! - **[`outcome`]** - how a handler's return value maps to the chain result
//!
//! ### Matching Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Caller
//!     participant Chain as RouteMatcher
//!     participant Pattern as pattern::compile
//!     participant Handler
//!
//!     Caller->>Chain: route_matcher(url)
//!     loop each match_path(pattern, handler)
//!         alt chain is Open
//!             Chain->>Pattern: compile(pattern)
//!             Pattern-->>Chain: CompiledRule
//!             Chain->>Chain: attempt_match(rule, url)
//!             alt matched
//!                 Chain->>Handler: handler(params)
//!                 Handler-->>Chain: pending future
//!                 Chain->>Chain: become Closed
//!             end
//!         else chain is Closed
//!             Chain->>Chain: no-op
//!         end
//!     end
//!     Caller->>Chain: result().await
//!     Chain-->>Caller: false | handler outcome (None → true)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use routematcher::route_matcher;
//!
//! async fn dispatch(url: &str) -> anyhow::Result<bool> {
//!     route_matcher(url)
//!         .match_path("/pim-connection/:pimConnectionId/flow/:flowId", |params| async move {
//!             let _flow = params.get("flowId");
//!             Ok(())
//!         })
//!         .match_path("/health", |_| async { Ok(true) })
//!         .result()
//!         .await
//! }
//!
//! assert!(futures::executor::block_on(dispatch("/pim-connection/1/flow/2")).unwrap());
//! assert!(!futures::executor::block_on(dispatch("/unknown")).unwrap());
//! ```
//!
//! ## Pattern Syntax
//!
//! | Pattern | Matches | Params |
//! |---------|---------|--------|
//! | `/users` | `/users`, `/USERS/`, `/users?x=1` | - |
//! | `/users/:id` | `/users/42` | `id = "42"` |
//! | `/static/*` | `/static/css/site.css` | - |
//! | `/files/report.pdf` | `/files/report.pdf` (not `/files/reportXpdf`) | - |
//!
//! Matching is case-insensitive, the query string is ignored and a single
//! trailing slash is always accepted.
//!
//! ## Logging
//!
//! Match attempts emit `tracing` events (`debug` per attempt, `info` on the
//! match that closes a chain, `warn` for patterns that can never match).
//! Installing a subscriber is left to the application.

pub mod matcher;
pub mod outcome;
pub mod params;
pub mod pattern;

pub use matcher::{route_matcher, RouteMatcher};
pub use outcome::HandlerOutcome;
pub use params::PathParams;
pub use pattern::{compile, CompiledRule};
