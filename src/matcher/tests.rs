use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use futures::executor::block_on;

use super::{route_matcher, RouteMatcher};

#[test]
fn test_new_chain_is_open() {
    let chain = RouteMatcher::<anyhow::Error>::new("/a/1");
    assert!(!chain.is_matched());
    assert_eq!(chain.url(), Some("/a/1"));
}

#[test]
fn test_no_match_keeps_chain_open() {
    let chain = route_matcher("/a/1")
        .match_path("/b/:id", |_| async { Ok(true) });
    assert!(!chain.is_matched());
    assert_eq!(chain.url(), Some("/a/1"));
}

#[test]
fn test_match_closes_chain() {
    let chain = route_matcher("/a/1")
        .match_path("/a/:id", |_| async { Ok(()) });
    assert!(chain.is_matched());
    assert_eq!(chain.url(), None);
    assert_eq!(format!("{chain:?}"), "Closed { .. }");
}

#[test]
fn test_handler_invoked_eagerly_but_polled_in_result() {
    let invoked = Arc::new(AtomicUsize::new(0));
    let polled = Arc::new(AtomicUsize::new(0));

    let chain = {
        let invoked = Arc::clone(&invoked);
        let polled = Arc::clone(&polled);
        route_matcher("/a/1").match_path("/a/:id", move |_| {
            invoked.fetch_add(1, Ordering::SeqCst);
            async move {
                polled.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }
        })
    };

    assert_eq!(invoked.load(Ordering::SeqCst), 1);
    assert_eq!(polled.load(Ordering::SeqCst), 0);

    assert!(block_on(chain.result()).unwrap());
    assert_eq!(polled.load(Ordering::SeqCst), 1);
}

#[test]
fn test_closed_chain_ignores_later_patterns() {
    let calls = Arc::new(AtomicUsize::new(0));
    let later = Arc::clone(&calls);

    let chain = route_matcher("/a/1")
        .match_path("/a/:id", |_| async { Ok(false) })
        .match_path("/a/:other", move |_| {
            later.fetch_add(1, Ordering::SeqCst);
            async { Ok(true) }
        });

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(!block_on(chain.result()).unwrap());
}

#[test]
fn test_open_chain_result_is_false() {
    let chain = route_matcher("/nothing/here");
    assert_eq!(format!("{chain:?}"), r#"Open { url: "/nothing/here" }"#);
    assert!(!block_on(chain.result()).unwrap());
}

#[test]
fn test_outcome_mapping() {
    let unit = route_matcher("/x").match_path("/x", |_| async { Ok(()) });
    assert!(block_on(unit.result()).unwrap());

    let none = route_matcher("/x").match_path("/x", |_| async { Ok(None::<bool>) });
    assert!(block_on(none.result()).unwrap());

    let some_false =
        route_matcher("/x").match_path("/x", |_| async { Ok(Some(false)) });
    assert!(!block_on(some_false.result()).unwrap());

    let explicit_true = route_matcher("/x").match_path("/x", |_| async { Ok(true) });
    assert!(block_on(explicit_true.result()).unwrap());
}

#[derive(Debug, PartialEq, Eq)]
struct HandlerFailed(&'static str);

#[test]
fn test_handler_error_propagates_unchanged() {
    let chain = RouteMatcher::<HandlerFailed>::new("/x")
        .match_path("/x", |_| async { Err::<(), _>(HandlerFailed("boom")) });
    assert_eq!(block_on(chain.result()), Err(HandlerFailed("boom")));
}
