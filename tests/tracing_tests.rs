//! Observes the `tracing` output of the parser through a collecting subscriber layer.

use std::sync::{Arc, Mutex};

use jparse::ParseOptions;
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::Registry;

#[derive(Debug, Clone)]
struct Recorded {
    target: String,
    level: Level,
    procedure: Option<String>,
    message: Option<String>,
}

#[derive(Default, Clone)]
struct Collector {
    events: Arc<Mutex<Vec<Recorded>>>,
    spans: Arc<Mutex<Vec<&'static str>>>,
}

#[derive(Default)]
struct Fields {
    procedure: Option<String>,
    message: Option<String>,
}

impl Visit for Fields {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "procedure" {
            self.procedure = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        match field.name() {
            "message" => self.message = Some(format!("{value:?}")),
            "procedure" => self.procedure = Some(format!("{value:?}").trim_matches('"').to_string()),
            _ => {}
        }
    }
}

impl<S: Subscriber> Layer<S> for Collector {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = Fields::default();
        event.record(&mut fields);
        let metadata = event.metadata();
        self.events.lock().unwrap().push(Recorded {
            target: metadata.target().to_string(),
            level: *metadata.level(),
            procedure: fields.procedure,
            message: fields.message,
        });
    }

    fn on_new_span(&self, attrs: &Attributes<'_>, _id: &Id, _ctx: Context<'_, S>) {
        self.spans.lock().unwrap().push(attrs.metadata().name());
    }
}

fn observe<T>(f: impl FnOnce() -> T) -> (T, Collector) {
    let collector = Collector::default();
    let subscriber = Registry::default().with(collector.clone());
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, collector)
}

#[test]
fn test_entry_points_open_spans() {
    let (result, collector) = observe(|| jparse::parse_source("class A {}"));
    assert!(result.is_ok());
    let spans = collector.spans.lock().unwrap().clone();
    assert!(spans.contains(&"parse_source"), "{spans:?}");
    assert!(spans.contains(&"parse"), "{spans:?}");
}

#[test]
fn test_procedure_events_follow_the_recorded_trace() {
    let options = ParseOptions::default().with_trace(true);
    let (result, collector) = observe(|| jparse::parse_source_with_options("class A { int f() { return 1; } }", options));
    let (_, trace) = result.unwrap();

    let events = collector.events.lock().unwrap();
    let grammar: Vec<&Recorded> = events.iter().filter(|e| e.target == "jparse::grammar").collect();
    assert_eq!(grammar.len(), trace.len());
    assert!(grammar.iter().all(|e| e.level == Level::TRACE));
    for (event, recorded) in grammar.iter().zip(&trace) {
        assert_eq!(event.procedure.as_deref(), Some(recorded.procedure));
    }
    assert_eq!(grammar.first().and_then(|e| e.procedure.as_deref()), Some("compilation_unit"));
}

#[test]
fn test_no_procedure_events_without_trace_recording() {
    let (result, collector) = observe(|| jparse::parse_source("class A { void f() { g(); } }"));
    assert!(result.is_ok());
    let events = collector.events.lock().unwrap();
    assert!(events.iter().all(|e| e.procedure.is_none()), "{events:?}");
}

#[test]
fn test_failures_are_logged_at_debug() {
    let (result, collector) = observe(|| jparse::parse_source("class {"));
    assert!(result.is_err());
    let events = collector.events.lock().unwrap();
    let failure = events
        .iter()
        .find(|e| e.target == "jparse::grammar" && e.level == Level::DEBUG)
        .expect("a debug event for the failed parse");
    assert_eq!(failure.message.as_deref(), Some("parse failed"));
}
