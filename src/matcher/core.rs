//! Matcher chain - registration-ordered, first match wins.

use futures::future::{BoxFuture, FutureExt};
use std::fmt;
use std::future::Future;
use tracing::{debug, info};

use crate::outcome::HandlerOutcome;
use crate::params::PathParams;
use crate::pattern::{attempt_match, compile};

/// Pending result of the one handler a chain invoked.
pub type PendingResult<'a, E> = BoxFuture<'a, Result<Option<bool>, E>>;

/// Fluent matcher bound to one URL
///
/// A chain starts [`Open`](RouteMatcher::Open). The first pattern passed to
/// [`match_path`](RouteMatcher::match_path) that structurally matches the URL
/// has its handler invoked, and the chain becomes
/// [`Closed`](RouteMatcher::Closed). Every later `match_path` is a no-op, so at
/// most one handler runs per chain.
///
/// Both operations take `self` by value: a transition returns a new value
/// instead of mutating a shared one.
///
/// # Example
///
/// ```rust
/// use routematcher::route_matcher;
///
/// let handled = futures::executor::block_on(
///     route_matcher("/pim-connection/12345/flow/6789?page=2")
///         .match_path("/pim-connection/:pimConnectionId/flow/:flowId", |params| async move {
///             assert_eq!(params.get("pimConnectionId"), Some("12345"));
///             assert_eq!(params.get("flowId"), Some("6789"));
///             Ok(())
///         })
///         .match_path("/pim-connection/:pimConnection", |_| async { Ok(false) })
///         .result(),
/// )
/// .unwrap();
/// assert!(handled);
/// ```
pub enum RouteMatcher<'a, E = anyhow::Error> {
    /// No pattern has matched yet.
    Open {
        /// The URL every pattern is tested against, query string included.
        url: &'a str,
    },
    /// A pattern matched; holds its handler's unpolled future.
    Closed {
        pending: PendingResult<'a, E>,
    },
}

/// Create a matcher chain for `url` whose handlers fail with `anyhow::Error`.
///
/// Use [`RouteMatcher::new`] to pick another error type.
#[must_use]
pub fn route_matcher(url: &str) -> RouteMatcher<'_> {
    RouteMatcher::new(url)
}

impl<'a, E> RouteMatcher<'a, E> {
    /// Create a matcher chain for `url` with handler error type `E`.
    ///
    /// ```rust
    /// use routematcher::RouteMatcher;
    ///
    /// #[derive(Debug)]
    /// struct Rejected;
    ///
    /// let chain = RouteMatcher::<Rejected>::new("/a/1")
    ///     .match_path("/a/:id", |_| async { Err::<(), _>(Rejected) });
    /// assert!(futures::executor::block_on(chain.result()).is_err());
    /// ```
    #[must_use]
    pub fn new(url: &'a str) -> Self {
        Self::Open { url }
    }

    /// Test `pattern` against the bound URL and invoke `handler` on a match
    ///
    /// On an open chain the pattern is compiled and matched. No match returns
    /// the chain unchanged. A match calls `handler` with the extracted
    /// parameters right away and returns a closed chain holding the future it
    /// produced; that future is only polled by [`result`](Self::result).
    ///
    /// On a closed chain both `pattern` and `handler` are ignored.
    ///
    /// The handler's future must be `Send`, so it cannot hold an `Rc` or a
    /// `RefCell` borrow across an `.await`:
    ///
    /// ```compile_fail
    /// use std::rc::Rc;
    /// use routematcher::route_matcher;
    ///
    /// let _chain = route_matcher("/a").match_path("/a", |_| async {
    ///     let local = Rc::new(1);
    ///     futures::future::ready(()).await;
    ///     Ok(*local == 1)
    /// });
    /// ```
    #[must_use]
    pub fn match_path<F, Fut, R>(self, pattern: &str, handler: F) -> Self
    where
        F: FnOnce(PathParams) -> Fut,
        Fut: Future<Output = Result<R, E>> + Send + 'a,
        R: HandlerOutcome,
    {
        let url = match self {
            Self::Open { url } => url,
            closed @ Self::Closed { .. } => {
                debug!(pattern = %pattern, "Route already matched, skipping pattern");
                return closed;
            }
        };

        let rule = compile(pattern);
        let Some(params) = attempt_match(&rule, rule.declared_params(), url) else {
            debug!(pattern = %pattern, url = %url, "Route match attempt failed");
            return Self::Open { url };
        };

        info!(
            pattern = %pattern,
            url = %url,
            path_params = ?params,
            "Route matched"
        );

        let pending = handler(params);
        Self::Closed {
            pending: async move { pending.await.map(HandlerOutcome::into_outcome) }.boxed(),
        }
    }

    /// Resolve the chain
    ///
    /// - open (nothing matched): `Ok(false)`
    /// - closed, handler gave no explicit outcome: `Ok(true)`
    /// - closed, handler returned a boolean: that boolean
    ///
    /// # Errors
    ///
    /// A handler error is returned as-is.
    pub async fn result(self) -> Result<bool, E> {
        match self {
            Self::Open { url } => {
                debug!(url = %url, "No route matched");
                Ok(false)
            }
            Self::Closed { pending } => Ok(pending.await?.unwrap_or(true)),
        }
    }

    /// `true` once a pattern has matched.
    #[must_use]
    pub fn is_matched(&self) -> bool {
        matches!(self, Self::Closed { .. })
    }

    /// The bound URL, or `None` once the chain is closed.
    #[must_use]
    pub fn url(&self) -> Option<&'a str> {
        match self {
            Self::Open { url } => Some(*url),
            Self::Closed { .. } => None,
        }
    }
}

impl<E> fmt::Debug for RouteMatcher<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { url } => f.debug_struct("Open").field("url", url).finish(),
            Self::Closed { .. } => f.debug_struct("Closed").finish_non_exhaustive(),
        }
    }
}
