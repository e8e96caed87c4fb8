//! Metrics registry for the echo gateway.
//!
//! Counter and summary families carry fixed label names and dynamic label
//! values, stored as atomics in a `DashMap`. Label values are kept in the order
//! the names were declared so rendered series read `method` before `endpoint`.
//! Summary sums are accumulated in nanoseconds and rendered in seconds.

use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use dashmap::DashMap;

pub const REQUESTS_TOTAL: &str = "api_requests_total";
pub const REQUEST_DURATION: &str = "api_request_duration_seconds";
const PROCESS_START_TIME: &str = "process_start_time_seconds";

const REQUEST_LABELS: &[&str] = &["method", "endpoint"];

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

fn label_key(names: &[&str], values: &[&str]) -> Vec<String> {
    debug_assert_eq!(names.len(), values.len(), "label arity mismatch");
    values.iter().map(|v| v.to_string()).collect()
}

fn label_str(names: &[&str], values: &[String]) -> String {
    names
        .iter()
        .zip(values)
        .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
        .collect::<Vec<_>>()
        .join(",")
}

fn render_header(out: &mut String, name: &str, help: &str, kind: &str) {
    let _ = writeln!(out, "# HELP {} {}", name, help);
    let _ = writeln!(out, "# TYPE {} {}", name, kind);
}

/// Label pair every request is accounted under.
///
/// `endpoint` is the URI path taken verbatim (no templating, no query string).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestLabels {
    pub method: String,
    pub endpoint: String,
}

impl RequestLabels {
    pub fn new(method: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            endpoint: endpoint.into(),
        }
    }

    fn values(&self) -> [&str; 2] {
        [self.method.as_str(), self.endpoint.as_str()]
    }
}

pub struct CounterVec {
    name: &'static str,
    help: &'static str,
    label_names: &'static [&'static str],
    map: DashMap<Vec<String>, AtomicU64>,
}

impl CounterVec {
    pub fn new(name: &'static str, help: &'static str, label_names: &'static [&'static str]) -> Self {
        Self {
            name,
            help,
            label_names,
            map: DashMap::new(),
        }
    }

    /// Increment by 1.
    pub fn inc(&self, values: &[&str]) {
        self.add(values, 1);
    }

    /// Increment by an arbitrary value.
    pub fn add(&self, values: &[&str], v: u64) {
        let key = label_key(self.label_names, values);
        let counter = self.map.entry(key).or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(v, Ordering::Relaxed);
    }

    /// Current value for a label set (0 if never touched).
    pub fn get(&self, values: &[&str]) -> u64 {
        let key = label_key(self.label_names, values);
        self.map
            .get(&key)
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Render in Prometheus text exposition format.
    fn render(&self, out: &mut String) {
        render_header(out, self.name, self.help, "counter");
        let mut rows: Vec<(Vec<String>, u64)> = self
            .map
            .iter()
            .map(|r| (r.key().clone(), r.value().load(Ordering::Relaxed)))
            .collect();
        rows.sort();
        for (key, val) in rows {
            let _ = writeln!(out, "{}{{{}}} {}", self.name, label_str(self.label_names, &key), val);
        }
    }
}

#[derive(Default)]
struct AtomicSummary {
    count: AtomicU64,
    sum_nanos: AtomicU64,
}

/// Point-in-time view of one summary series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummarySnapshot {
    pub count: u64,
    pub sum: Duration,
}

/// Summary without quantile objectives: `_sum` (seconds) and `_count` only.
pub struct SummaryVec {
    name: &'static str,
    help: &'static str,
    label_names: &'static [&'static str],
    map: DashMap<Vec<String>, AtomicSummary>,
}

impl SummaryVec {
    pub fn new(name: &'static str, help: &'static str, label_names: &'static [&'static str]) -> Self {
        Self {
            name,
            help,
            label_names,
            map: DashMap::new(),
        }
    }

    pub fn observe(&self, values: &[&str], elapsed: Duration) {
        let key = label_key(self.label_names, values);
        let nanos = u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX);

        let s = self.map.entry(key).or_insert_with(AtomicSummary::default);
        s.count.fetch_add(1, Ordering::Relaxed);
        s.sum_nanos.fetch_add(nanos, Ordering::Relaxed);
    }

    pub fn get(&self, values: &[&str]) -> Option<SummarySnapshot> {
        let key = label_key(self.label_names, values);
        self.map.get(&key).map(|s| SummarySnapshot {
            count: s.count.load(Ordering::Relaxed),
            sum: Duration::from_nanos(s.sum_nanos.load(Ordering::Relaxed)),
        })
    }

    fn render(&self, out: &mut String) {
        render_header(out, self.name, self.help, "summary");
        let mut rows: Vec<(Vec<String>, u64, u64)> = self
            .map
            .iter()
            .map(|r| {
                let s = r.value();
                (
                    r.key().clone(),
                    s.sum_nanos.load(Ordering::Relaxed),
                    s.count.load(Ordering::Relaxed),
                )
            })
            .collect();
        rows.sort();
        for (key, sum_nanos, count) in rows {
            let labels = label_str(self.label_names, &key);
            let secs = Duration::from_nanos(sum_nanos).as_secs_f64();
            let _ = writeln!(out, "{}_sum{{{}}} {}", self.name, labels, secs);
            let _ = writeln!(out, "{}_count{{{}}} {}", self.name, labels, count);
        }
    }
}

/// Process-wide registry: one per process, shared via `AppState`.
pub struct EchoMetrics {
    pub requests_total: CounterVec,
    pub request_duration: SummaryVec,
    start_time_seconds: f64,
}

impl Default for EchoMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl EchoMetrics {
    pub fn new() -> Self {
        let start_time_seconds = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs_f64();
        Self {
            requests_total: CounterVec::new(
                REQUESTS_TOTAL,
                "Total number of requests received",
                REQUEST_LABELS,
            ),
            request_duration: SummaryVec::new(
                REQUEST_DURATION,
                "The duration of HTTP requests in seconds",
                REQUEST_LABELS,
            ),
            start_time_seconds,
        }
    }

    /// One duration observation plus one counter increment for the same labels.
    pub fn record_request(&self, labels: &RequestLabels, elapsed: Duration) {
        let values = labels.values();
        self.request_duration.observe(&values, elapsed);
        self.requests_total.inc(&values);
    }

    pub fn requests(&self, labels: &RequestLabels) -> u64 {
        self.requests_total.get(&labels.values())
    }

    pub fn duration(&self, labels: &RequestLabels) -> Option<SummarySnapshot> {
        self.request_duration.get(&labels.values())
    }

    /// Render all families in Prometheus text exposition format (0.0.4).
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.requests_total.render(&mut out);
        self.request_duration.render(&mut out);

        render_header(
            &mut out,
            PROCESS_START_TIME,
            "Start time of the process since unix epoch in seconds.",
            "gauge",
        );
        let _ = writeln!(out, "{} {}", PROCESS_START_TIME, self.start_time_seconds);
        out
    }
}
