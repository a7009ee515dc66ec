use crate::obs::sink::ExecKind;
use serde::{Deserialize, Serialize};
use std::{cell::RefCell, collections::BTreeMap};

///
/// EventState
/// Ephemeral, in-memory counters for operator calls.
///

#[derive(Clone, Debug, Default)]
pub(crate) struct EventState {
    pub(crate) ops: EventOps,
    pub(crate) tables: BTreeMap<String, TableCounters>,
}

///
/// EventOps
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EventOps {
    // Executor entrypoints
    pub select_calls: u64,
    pub insert_calls: u64,
    pub update_calls: u64,
    pub delete_calls: u64,

    // Rows touched
    pub rows_scanned: u64,
    pub rows_selected: u64,
    pub rows_inserted: u64,
    pub rows_updated: u64,
    pub rows_deleted: u64,

    // Cumulative wall time per executor, in microseconds
    pub select_micros: u128,
    pub insert_micros: u128,
    pub update_micros: u128,
    pub delete_micros: u128,
}

///
/// TableCounters
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct TableCounters {
    pub select_calls: u64,
    pub insert_calls: u64,
    pub update_calls: u64,
    pub delete_calls: u64,
    pub rows_scanned: u64,
    pub rows_touched: u64,
}

///
/// EventReport
/// Point-in-time copy of the counters.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EventReport {
    pub ops: EventOps,
    pub tables: BTreeMap<String, TableCounters>,
}

thread_local! {
    static EVENT_STATE: RefCell<EventState> = RefCell::new(EventState::default());
}

/// Borrow metrics mutably.
pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&mut m.borrow_mut()))
}

pub(crate) fn report() -> EventReport {
    EVENT_STATE.with(|m| {
        let m = m.borrow();

        EventReport {
            ops: m.ops.clone(),
            tables: m.tables.clone(),
        }
    })
}

/// Reset all counters (useful in tests).
pub(crate) fn reset_all() {
    with_state_mut(|m| *m = EventState::default());
}

pub(crate) fn exec_start(m: &mut EventState, kind: ExecKind, table: &str) {
    let ops = &mut m.ops;
    let calls = match kind {
        ExecKind::Select => &mut ops.select_calls,
        ExecKind::Insert => &mut ops.insert_calls,
        ExecKind::Update => &mut ops.update_calls,
        ExecKind::Delete => &mut ops.delete_calls,
    };
    *calls = calls.saturating_add(1);

    let entry = m.tables.entry(table.to_string()).or_default();
    let calls = match kind {
        ExecKind::Select => &mut entry.select_calls,
        ExecKind::Insert => &mut entry.insert_calls,
        ExecKind::Update => &mut entry.update_calls,
        ExecKind::Delete => &mut entry.delete_calls,
    };
    *calls = calls.saturating_add(1);
}

pub(crate) fn exec_finish(
    m: &mut EventState,
    kind: ExecKind,
    table: &str,
    rows_touched: u64,
    micros: u128,
) {
    let ops = &mut m.ops;
    let (rows, time) = match kind {
        ExecKind::Select => (&mut ops.rows_selected, &mut ops.select_micros),
        ExecKind::Insert => (&mut ops.rows_inserted, &mut ops.insert_micros),
        ExecKind::Update => (&mut ops.rows_updated, &mut ops.update_micros),
        ExecKind::Delete => (&mut ops.rows_deleted, &mut ops.delete_micros),
    };
    *rows = rows.saturating_add(rows_touched);
    *time = time.saturating_add(micros);

    let entry = m.tables.entry(table.to_string()).or_default();
    entry.rows_touched = entry.rows_touched.saturating_add(rows_touched);
}

pub(crate) fn rows_scanned(m: &mut EventState, table: &str, rows: u64) {
    m.ops.rows_scanned = m.ops.rows_scanned.saturating_add(rows);

    let entry = m.tables.entry(table.to_string()).or_default();
    entry.rows_scanned = entry.rows_scanned.saturating_add(rows);
}
