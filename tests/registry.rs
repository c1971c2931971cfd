//! Tests for registration, fan-out dispatch, and its ordering guarantees.

use loghub::{CallbackSink, Filter, Metadata, NullSink, Registry, Severity, SinkHandle};
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

/// Sink that records every delivered message under a label.
fn recording_sink(
    label: &'static str,
    filter: Filter,
    deliveries: &Arc<Mutex<Vec<(String, &'static str)>>>,
) -> SinkHandle {
    let deliveries = Arc::clone(deliveries);
    Arc::new(CallbackSink::new(filter, move |_metadata, message| {
        deliveries
            .lock()
            .unwrap()
            .push((message.to_string(), label));
    }))
}

/// Counts how many times it is formatted, to observe lazy rendering.
struct CountedPayload<'a> {
    text: &'a str,
    renders: &'a AtomicUsize,
}

impl fmt::Display for CountedPayload<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.renders.fetch_add(1, Ordering::SeqCst);
        f.write_str(self.text)
    }
}

fn info(tag: &str) -> Metadata {
    Metadata::new(Severity::Info).with_tag(tag)
}

#[test]
fn sinks_are_visited_in_registration_order() {
    let registry = Registry::new();
    let deliveries = Arc::new(Mutex::new(Vec::new()));
    registry.register(recording_sink("first", Filter::new(), &deliveries));
    registry.register(recording_sink("second", Filter::new(), &deliveries));

    registry.log(&info("net"), format_args!("up"));

    let seen = deliveries.lock().unwrap();
    assert_eq!(
        *seen,
        [("up".to_string(), "first"), ("up".to_string(), "second")]
    );
}

#[test]
fn message_is_rendered_once_and_shared() {
    let registry = Registry::new();
    let deliveries = Arc::new(Mutex::new(Vec::new()));
    registry.register(recording_sink("a", Filter::new(), &deliveries));
    registry.register(recording_sink("b", Filter::new(), &deliveries));

    let renders = AtomicUsize::new(0);
    let payload = CountedPayload {
        text: "payload",
        renders: &renders,
    };
    registry.log(&info("net"), format_args!("{payload}"));

    assert_eq!(renders.load(Ordering::SeqCst), 1);
    let seen = deliveries.lock().unwrap();
    assert_eq!(
        *seen,
        [("payload".to_string(), "a"), ("payload".to_string(), "b")]
    );
}

#[test]
fn no_matching_sink_means_no_render_at_all() {
    let registry = Registry::new();
    let deliveries = Arc::new(Mutex::new(Vec::new()));
    registry.register(recording_sink(
        "strict",
        Filter::with_severity(Severity::Fatal),
        &deliveries,
    ));

    let renders = AtomicUsize::new(0);
    let payload = CountedPayload {
        text: "payload",
        renders: &renders,
    };
    registry.log(&info("net"), format_args!("{payload}"));

    assert_eq!(renders.load(Ordering::SeqCst), 0);
    assert!(deliveries.lock().unwrap().is_empty());
}

#[test]
fn empty_rendered_message_short_circuits_every_sink() {
    let registry = Registry::new();
    let deliveries = Arc::new(Mutex::new(Vec::new()));
    registry.register(recording_sink("a", Filter::new(), &deliveries));
    registry.register(recording_sink("b", Filter::new(), &deliveries));

    registry.log(&info("net"), format_args!(""));

    assert!(deliveries.lock().unwrap().is_empty());
}

#[test]
fn only_matching_sinks_receive_the_record() {
    let registry = Registry::new();
    let deliveries = Arc::new(Mutex::new(Vec::new()));

    let mut net_only = Filter::new();
    net_only.add_tag("net", Severity::Debug);
    registry.register(recording_sink("net", net_only, &deliveries));
    registry.register(recording_sink(
        "errors",
        Filter::with_severity(Severity::Error),
        &deliveries,
    ));

    registry.log(&info("net"), format_args!("up"));

    let seen = deliveries.lock().unwrap();
    assert_eq!(*seen, [("up".to_string(), "net")]);
}

#[test]
fn register_many_appends() {
    let registry = Registry::new();
    registry.register(Arc::new(NullSink::new()));
    registry.register_many([
        Arc::new(NullSink::new()) as SinkHandle,
        Arc::new(NullSink::new()) as SinkHandle,
    ]);
    assert_eq!(registry.sink_count(), 3);
}

#[test]
fn replace_swaps_the_whole_set() {
    let registry = Registry::new();
    registry.register(Arc::new(NullSink::new()));
    registry.register(Arc::new(NullSink::new()));

    registry.replace([Arc::new(NullSink::new()) as SinkHandle]);
    assert_eq!(registry.sink_count(), 1);

    registry.clear();
    assert_eq!(registry.sink_count(), 0);
}

#[test]
fn unregister_matches_handle_identity() {
    let registry = Registry::new();
    let keep: SinkHandle = Arc::new(NullSink::new());
    let drop: SinkHandle = Arc::new(NullSink::new());
    registry.register(Arc::clone(&keep));
    registry.register(Arc::clone(&drop));

    registry.unregister(&drop);
    assert_eq!(registry.sink_count(), 1);

    // Unregistering an unknown handle is a no-op.
    registry.unregister(&drop);
    assert_eq!(registry.sink_count(), 1);
}

#[test]
fn nested_dispatch_from_a_sink_does_not_deadlock() {
    let registry = Arc::new(Registry::new());
    let deliveries = Arc::new(Mutex::new(Vec::new()));

    let inner_registry = Arc::clone(&registry);
    let inner_deliveries = Arc::clone(&deliveries);
    registry.register(Arc::new(CallbackSink::new(
        Filter::new(),
        move |metadata, message| {
            inner_deliveries.lock().unwrap().push(message.to_string());
            if metadata.severity() == Severity::Error {
                let follow_up = Metadata::new(Severity::Info).with_tag("diag");
                inner_registry.log(&follow_up, format_args!("nested"));
            }
        },
    )));

    registry.log(
        &Metadata::new(Severity::Error).with_tag("net"),
        format_args!("outer"),
    );

    let seen = deliveries.lock().unwrap();
    assert_eq!(*seen, ["outer".to_string(), "nested".to_string()]);
}

#[test]
fn replace_is_atomic_from_a_readers_view() {
    let registry = Arc::new(Registry::new());
    let deliveries = Arc::new(Mutex::new(Vec::new()));

    let set_a: Vec<SinkHandle> = (0..2)
        .map(|_| recording_sink("a", Filter::new(), &deliveries))
        .collect();
    let set_b: Vec<SinkHandle> = (0..3)
        .map(|_| recording_sink("b", Filter::new(), &deliveries))
        .collect();
    registry.replace(set_a.clone());

    let flipper = {
        let registry = Arc::clone(&registry);
        let set_a = set_a.clone();
        let set_b = set_b.clone();
        thread::spawn(move || {
            for round in 0..200 {
                if round % 2 == 0 {
                    registry.replace(set_b.clone());
                } else {
                    registry.replace(set_a.clone());
                }
            }
        })
    };

    for call in 0..200 {
        registry.log(&info("net"), format_args!("call-{call}"));
    }
    flipper.join().unwrap();

    // Group deliveries per log call: each call went to the full A set or
    // the full B set, never to a mix or a partial list.
    let seen = deliveries.lock().unwrap();
    for call in 0..200 {
        let message = format!("call-{call}");
        let labels: Vec<&'static str> = seen
            .iter()
            .filter(|(seen_message, _)| *seen_message == message)
            .map(|(_, label)| *label)
            .collect();
        match labels.as_slice() {
            ["a", "a"] | ["b", "b", "b"] => {}
            other => panic!("call {call} delivered to a partial set: {other:?}"),
        }
    }
}
