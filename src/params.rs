//! Path parameters extracted by a successful match.

use smallvec::SmallVec;
use std::collections::HashMap;
use std::ops::Index;
use std::sync::Arc;

/// Maximum number of path parameters before heap allocation.
/// Most route patterns have ≤4 parameters (e.g., `/users/:id/posts/:postId`).
pub const MAX_INLINE_PARAMS: usize = 8;

/// Stack-allocated `(name, value)` storage.
///
/// Names are `Arc<str>` shared with the compiled rule; values are owned
/// slices of the matched URL.
pub type ParamVec = SmallVec<[(Arc<str>, String); MAX_INLINE_PARAMS]>;

/// Named parameters bound by a matched pattern.
///
/// `/pim-connection/:pimConnectionId/flow/:flowId` matched against
/// `/pim-connection/12345/flow/6789` yields
/// `{pimConnectionId: "12345", flowId: "6789"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams {
    params: ParamVec,
}

impl PathParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, name: Arc<str>, value: String) {
        self.params.push((name, value));
    }

    /// Get a parameter by name
    ///
    /// Uses "last write wins" semantics if a name was bound more than once.
    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .rfind(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_str())
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate over `(name, value)` pairs in pattern order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_ref(), v.as_str()))
    }

    /// Parameter names in pattern order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(k, _)| k.as_ref())
    }

    /// Convert to a `HashMap`
    /// Note: This allocates - use [`PathParams::get`] when only a few values are needed
    #[must_use]
    pub fn into_map(self) -> HashMap<String, String> {
        self.params
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }
}

impl From<PathParams> for HashMap<String, String> {
    fn from(params: PathParams) -> Self {
        params.into_map()
    }
}

impl Index<&str> for PathParams {
    type Output = str;

    /// # Panics
    ///
    /// Panics if `name` was not bound by the pattern.
    fn index(&self, name: &str) -> &str {
        match self.get(name) {
            Some(value) => value,
            None => panic!("no path parameter named `{name}`"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PathParams {
        let mut params = PathParams::new();
        params.push(Arc::from("pimConnectionId"), "12345".to_string());
        params.push(Arc::from("flowId"), "6789".to_string());
        params
    }

    #[test]
    fn test_get_and_index() {
        let params = sample();
        assert_eq!(params.get("pimConnectionId"), Some("12345"));
        assert_eq!(&params["flowId"], "6789");
        assert_eq!(params.get("missing"), None);
        assert_eq!(params.len(), 2);
        assert!(!params.is_empty());
    }

    #[test]
    fn test_last_write_wins() {
        let mut params = sample();
        params.push(Arc::from("flowId"), "override".to_string());
        assert_eq!(params.get("flowId"), Some("override"));
    }

    #[test]
    fn test_names_preserve_order() {
        let names: Vec<_> = sample().names().map(str::to_string).collect();
        assert_eq!(names, vec!["pimConnectionId", "flowId"]);
    }

    #[test]
    fn test_into_map() {
        let map: HashMap<String, String> = sample().into();
        assert_eq!(map.len(), 2);
        assert_eq!(map["flowId"], "6789");
    }

    #[test]
    #[should_panic(expected = "no path parameter named `nope`")]
    fn test_index_missing_panics() {
        let _ = &sample()["nope"];
    }
}
