use csvdb::{
    core::obs::{ExecKind, MetricsEvent, MetricsSink, with_metrics_sink},
    prelude::*,
};
use std::{cell::RefCell, rc::Rc};
use tempfile::TempDir;

#[derive(Default)]
struct Recorder(RefCell<Vec<MetricsEvent>>);

impl MetricsSink for Recorder {
    fn record(&self, event: MetricsEvent) {
        self.0.borrow_mut().push(event);
    }
}

fn seeded_db() -> (TempDir, Db) {
    let dir = TempDir::new().unwrap();
    let db = Db::open(dir.path());
    db.define_table("t", &[ColumnDef::int("id")]).unwrap();
    db.insert("t")
        .values_many((1..=4).map(|id| ValueRecord::new().with("id", id.to_string())))
        .execute()
        .unwrap();

    (dir, db)
}

#[test]
fn report_counts_calls_and_rows() {
    metrics_reset_all();
    let (_dir, db) = seeded_db();

    db.select(["id"]).from("t").limit(1).execute().unwrap();
    db.delete("t").filter(ge("id", "3")).execute().unwrap();

    let report = metrics_report();
    assert_eq!(report.ops.insert_calls, 1);
    assert_eq!(report.ops.rows_inserted, 4);
    assert_eq!(report.ops.select_calls, 1);
    assert_eq!(report.ops.rows_selected, 1);
    assert_eq!(report.ops.delete_calls, 1);
    assert_eq!(report.ops.rows_deleted, 2);
    // insert saw 0 rows, select and delete saw 4 each
    assert_eq!(report.tables["t"].rows_scanned, 8);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["tables"]["t"]["delete_calls"], 1);
}

#[test]
fn failed_call_still_finishes_its_span() {
    let (_dir, db) = seeded_db();
    let recorder = Rc::new(Recorder::default());

    with_metrics_sink(recorder.clone(), || {
        db.select(["missing"]).from("t").execute().unwrap_err();
    });

    let events = recorder.0.borrow();
    assert!(matches!(
        events.first(),
        Some(MetricsEvent::ExecStart {
            kind: ExecKind::Select,
            ..
        })
    ));
    assert!(matches!(
        events.last(),
        Some(MetricsEvent::ExecFinish {
            kind: ExecKind::Select,
            rows_touched: 0,
            ..
        })
    ));
}
