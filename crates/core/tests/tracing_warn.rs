//! The default sink reports advisories as `tracing` WARN events.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use siftmap_core::{element, filter_map, positional, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// Counts WARN events seen by the subscriber.
#[derive(Clone, Default)]
struct WarnCounter(Arc<AtomicUsize>);

impl WarnCounter {
    fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> Layer<S> for WarnCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::WARN {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

fn with_counter<R>(f: impl FnOnce() -> R) -> (R, usize) {
    let counter = WarnCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    let out = tracing::subscriber::with_default(subscriber, f);
    (out, counter.count())
}

#[test]
fn positional_pass_emits_one_warning() {
    let ((out, source), warnings) = with_counter(|| {
        let mut source = vec![1, 2];
        let out = filter_map(
            &mut source,
            positional(|_: &mut Visit<'_, i32>| true),
            positional(|v: &mut Visit<'_, i32>| *v.element() * 10),
        );
        (out, source)
    });

    assert_eq!(out, [10, 20]);
    assert_eq!(source, [1, 2]);
    assert_eq!(warnings, 1);
}

#[test]
fn each_pass_warns_again() {
    let (_, warnings) = with_counter(|| {
        for _ in 0..3 {
            let mut source = vec![1, 2];
            filter_map(
                &mut source,
                positional(|_: &mut Visit<'_, i32>| true),
                element(|x: &i32| *x),
            );
        }
    });

    assert_eq!(warnings, 3);
}

#[test]
fn element_only_pass_is_silent() {
    let (out, warnings) = with_counter(|| {
        let mut source = vec![1, 2];
        filter_map(
            &mut source,
            element(|x: &i32| *x > 1),
            element(|x: &i32| *x),
        )
    });

    assert_eq!(out, [2]);
    assert_eq!(warnings, 0);
}
