use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Which query an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    AllOrders,
    PendingCustomers,
    LargeOrders,
    SummaryByCategory,
    AvailableProducts,
    UniqueCustomers,
    TotalAmount,
    CustomerSummaries,
    Page,
    TransformOrders,
}

/// Events emitted by the [`super::QueryEngine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryEvent {
    Started {
        query: QueryKind,
        input_rows: usize,
    },
    Finished {
        query: QueryKind,
        output_rows: usize,
        elapsed: Duration,
    },
}

/// Observer hook for query events.
pub trait QueryObserver: Send + Sync {
    fn on_event(&self, event: &QueryEvent);
}

/// A simple stderr logger for query events.
#[derive(Debug, Default)]
pub struct StdErrQueryObserver;

impl QueryObserver for StdErrQueryObserver {
    fn on_event(&self, event: &QueryEvent) {
        match event {
            QueryEvent::Started { query, input_rows } => {
                eprintln!("[query][start] query={query:?} input_rows={input_rows}");
            }
            QueryEvent::Finished {
                query,
                output_rows,
                elapsed,
            } => {
                eprintln!("[query][done] query={query:?} output_rows={output_rows} elapsed={elapsed:?}");
            }
        }
    }
}

/// Cumulative counters across every run of an engine.
///
/// Callers can snapshot them at any time; counters are never reset.
#[derive(Debug, Default)]
pub struct QueryMetrics {
    runs: AtomicU64,
    rows_in: AtomicU64,
    rows_out: AtomicU64,
    last_elapsed_ns: AtomicU64,
}

impl QueryMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&self, input_rows: usize, output_rows: usize, elapsed: Duration) {
        let _ = self.runs.fetch_add(1, Ordering::SeqCst);
        let _ = self.rows_in.fetch_add(input_rows as u64, Ordering::SeqCst);
        let _ = self.rows_out.fetch_add(output_rows as u64, Ordering::SeqCst);
        self.last_elapsed_ns
            .store(elapsed.as_nanos().min(u64::MAX as u128) as u64, Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> QueryMetricsSnapshot {
        QueryMetricsSnapshot {
            runs: self.runs.load(Ordering::SeqCst),
            rows_in: self.rows_in.load(Ordering::SeqCst),
            rows_out: self.rows_out.load(Ordering::SeqCst),
            last_elapsed: Duration::from_nanos(self.last_elapsed_ns.load(Ordering::SeqCst)),
        }
    }
}

/// Immutable snapshot of [`QueryMetrics`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryMetricsSnapshot {
    pub runs: u64,
    pub rows_in: u64,
    pub rows_out: u64,
    pub last_elapsed: Duration,
}

impl fmt::Display for QueryMetricsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "runs={}, rows_in={}, rows_out={}, last_elapsed={:?}",
            self.runs, self.rows_in, self.rows_out, self.last_elapsed
        )
    }
}
