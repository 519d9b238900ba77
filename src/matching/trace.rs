use serde::Serialize;

use crate::core::result::MatchStatus;
use crate::matching::cascade::MatchStage;

/// Structured decision trace for one reconciled line: the candidates that
/// were considered, the cascade stage that succeeded (if any), and the final
/// classification. Replaces line-by-line print tracing with a value callers
/// can inspect.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineTrace {
    pub line_number: u32,
    pub candidates: Vec<String>,
    pub stage: Option<MatchStage>,
    pub status: MatchStatus,
}

/// Observability hook receiving one [`LineTrace`] per reconciled line
pub trait TraceSink {
    fn record(&mut self, trace: LineTrace);
}

/// Discards traces; the default sink
#[derive(Debug, Default)]
pub struct NullSink;

impl TraceSink for NullSink {
    fn record(&mut self, _trace: LineTrace) {}
}

/// Accumulates traces in memory for inspection
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub traces: Vec<LineTrace>,
}

impl TraceSink for CollectingSink {
    fn record(&mut self, trace: LineTrace) {
        self.traces.push(trace);
    }
}
