//! Metrics sink boundary.
//!
//! All instrumentation flows through `MetricsEvent` and `MetricsSink`.
//! This module is the only bridge between executors and the global
//! metrics state.

use crate::obs::metrics;
use std::{cell::RefCell, rc::Rc, time::Instant};

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<Rc<dyn MetricsSink>>> = RefCell::new(None);
}

///
/// ExecKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExecKind {
    Select,
    Insert,
    Update,
    Delete,
}

///
/// MetricsEvent
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MetricsEvent {
    ExecStart {
        kind: ExecKind,
        table: String,
    },
    ExecFinish {
        kind: ExecKind,
        table: String,
        rows_touched: u64,
        micros: u128,
    },
    RowsScanned {
        table: String,
        rows_scanned: u64,
    },
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent);
}

/// GlobalMetricsSink
/// Default thread-local sink that writes into the global metrics state.
/// Acts as the concrete sink when no scoped override is installed.

pub(crate) struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: MetricsEvent) {
        metrics::with_state_mut(|m| match event {
            MetricsEvent::ExecStart { kind, table } => metrics::exec_start(m, kind, &table),
            MetricsEvent::ExecFinish {
                kind,
                table,
                rows_touched,
                micros,
            } => metrics::exec_finish(m, kind, &table, rows_touched, micros),
            MetricsEvent::RowsScanned {
                table,
                rows_scanned,
            } => metrics::rows_scanned(m, &table, rows_scanned),
        });
    }
}

pub(crate) fn record(event: MetricsEvent) {
    let sink = SINK_OVERRIDE.with(|cell| cell.borrow().clone());

    match sink {
        Some(sink) => sink.record(event),
        None => GlobalMetricsSink.record(event),
    }
}

/// Snapshot the current metrics state.
#[must_use]
pub fn metrics_report() -> metrics::EventReport {
    metrics::report()
}

/// Reset all metrics state.
pub fn metrics_reset_all() {
    metrics::reset_all();
}

/// Run a closure with a temporary metrics sink override on this thread.
pub fn with_metrics_sink<T>(sink: Rc<dyn MetricsSink>, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<Rc<dyn MetricsSink>>);

    impl Drop for Guard {
        fn drop(&mut self) {
            let prev = self.0.take();
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = prev;
            });
        }
    }

    let prev = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink));
    let _guard = Guard(prev);

    f()
}

/// Span
/// RAII guard that emits start/finish events for one executor call.
/// Finish accounting happens even when the call fails or unwinds.

pub(crate) struct Span {
    kind: ExecKind,
    table: String,
    start: Instant,
    rows: u64,
}

impl Span {
    #[must_use]
    pub(crate) fn new(kind: ExecKind, table: &str) -> Self {
        record(MetricsEvent::ExecStart {
            kind,
            table: table.to_string(),
        });

        Self {
            kind,
            table: table.to_string(),
            start: Instant::now(),
            rows: 0,
        }
    }

    pub(crate) const fn set_rows(&mut self, rows: u64) {
        self.rows = rows;
    }

    pub(crate) fn scanned(&self, rows: u64) {
        record(MetricsEvent::RowsScanned {
            table: self.table.clone(),
            rows_scanned: rows,
        });
    }
}

impl Drop for Span {
    fn drop(&mut self) {
        record(MetricsEvent::ExecFinish {
            kind: self.kind,
            table: std::mem::take(&mut self.table),
            rows_touched: self.rows,
            micros: self.start.elapsed().as_micros(),
        });
    }
}
