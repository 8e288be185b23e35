//! # Matcher Module
//!
//! The fluent matcher chain: bind a URL, register patterns with async
//! handlers in order, then await the outcome.
//!
//! ## States
//!
//! - **Open** - nothing matched yet; each `match_path` compiles its pattern
//!   and tries it against the URL
//! - **Closed** - a pattern matched and its handler was invoked; later
//!   `match_path` calls do nothing
//!
//! ## Outcome
//!
//! | chain state | handler resolved to | `result()` |
//! |-------------|---------------------|------------|
//! | Open        | -                   | `Ok(false)` |
//! | Closed      | `Ok(())` / `Ok(None)` | `Ok(true)` |
//! | Closed      | `Ok(b)` / `Ok(Some(b))` | `Ok(b)` |
//! | Closed      | `Err(e)`            | `Err(e)` |
//!
//! The handler's future is polled exactly once, inside `result()`. There is
//! no cancellation: dropping the chain drops the unpolled future.
//!
//! Handler futures are stored as `BoxFuture`, so they must be `Send`; state
//! held across an `.await` cannot be `Rc` or a `RefCell` borrow.

mod core;
#[cfg(test)]
mod tests;

pub use self::core::{route_matcher, PendingResult, RouteMatcher};
