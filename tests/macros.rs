//! Tests for the call-site macros and the global registry they target.
//!
//! Every test here mutates the process-wide registry, so they run
//! serially.

use loghub::{CallbackSink, Conditional, Filter, Metadata, Severity, clog, log, registry};
use serial_test::serial;
use std::sync::{Arc, Mutex};

type Captured = Arc<Mutex<Vec<(Metadata, String)>>>;

/// Points the global registry at a single capturing sink.
fn capture_globally() -> Captured {
    let captured: Captured = Arc::new(Mutex::new(Vec::new()));
    let sink_capture = Arc::clone(&captured);
    registry::global().replace([Arc::new(CallbackSink::new(
        Filter::new(),
        move |metadata, message| {
            sink_capture
                .lock()
                .unwrap()
                .push((metadata.clone(), message.to_string()));
        },
    )) as loghub::SinkHandle]);
    captured
}

#[test]
#[serial]
fn log_formats_and_captures_the_call_site() {
    let captured = capture_globally();

    log!(Severity::Info, "net", "connected in {} ms", 12);

    let seen = captured.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let (metadata, message) = &seen[0];
    assert_eq!(message, "connected in 12 ms");
    assert_eq!(metadata.severity(), Severity::Info);
    assert_eq!(metadata.tag(), Some("net"));

    let call_site = metadata.call_site().expect("macro captures the call site");
    assert_eq!(call_site.name(), module_path!());
    assert!(call_site.file().ends_with("macros.rs"));
    assert!(call_site.line() > 0);
    assert!(metadata.timestamp().is_some());

    registry::global().clear();
}

#[test]
#[serial]
fn clog_with_false_logs_nothing() {
    let captured = capture_globally();

    clog!(Severity::Info, "net", false, "never seen");

    assert!(captured.lock().unwrap().is_empty());
    registry::global().clear();
}

#[test]
#[serial]
fn clog_samples_with_a_shared_gate() {
    let captured = capture_globally();

    let every_second = Conditional::every(2);
    for attempt in 0..4 {
        clog!(
            Severity::Warning,
            "net",
            every_second.clone(),
            "retry {}",
            attempt
        );
    }

    let seen = captured.lock().unwrap();
    let messages: Vec<&str> = seen.iter().map(|(_, message)| message.as_str()).collect();
    assert_eq!(messages, ["retry 1", "retry 3"]);
    registry::global().clear();
}
