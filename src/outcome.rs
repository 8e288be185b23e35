//! Conversion of handler return values into a chain outcome.

/// A value a matched handler may resolve to.
///
/// `None` means the handler declared no explicit outcome; the chain then
/// resolves to `true`. `Some(b)` resolves the chain to exactly `b`.
pub trait HandlerOutcome {
    fn into_outcome(self) -> Option<bool>;
}

impl HandlerOutcome for () {
    #[inline]
    fn into_outcome(self) -> Option<bool> {
        None
    }
}

impl HandlerOutcome for bool {
    #[inline]
    fn into_outcome(self) -> Option<bool> {
        Some(self)
    }
}

impl HandlerOutcome for Option<bool> {
    #[inline]
    fn into_outcome(self) -> Option<bool> {
        self
    }
}
