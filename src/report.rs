//! Collected results in printable form.

use std::fmt::Write as _;
use std::time::Duration;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::algorithm::Distance;
use crate::graph::Weight;
use crate::protocol::{RunOutcome, RunStats};
use crate::Result;

/// One column of the result table. Vertex labels are 1-indexed.
#[derive(Debug, Clone, Serialize)]
pub struct VertexRow<W> {
    pub vertex: usize,
    pub length: Distance<W>,
    pub predecessor: Option<usize>,
}

/// Final report of one run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport<W> {
    pub started_at: DateTime<Local>,
    pub elapsed_secs: f64,
    pub source: usize,
    pub negative_cycle: bool,
    pub vertices: Vec<VertexRow<W>>,
    pub stats: RunStats,
}

impl<W: Weight> RunReport<W> {
    pub fn new(outcome: &RunOutcome<W>, started_at: DateTime<Local>, elapsed: Duration) -> Self {
        let result = &outcome.result;
        let vertices = result
            .distances
            .iter()
            .zip(&result.predecessors)
            .enumerate()
            .map(|(v, (length, pred))| VertexRow {
                vertex: v + 1,
                length: *length,
                predecessor: pred.map(|p| p + 1),
            })
            .collect();

        RunReport {
            started_at,
            elapsed_secs: elapsed.as_secs_f64(),
            source: result.source + 1,
            negative_cycle: result.negative_cycle_detected(),
            vertices,
            stats: outcome.stats,
        }
    }

    /// The result block: a negative-cycle notice or the `P`/`Len`/`Pred` table.
    ///
    /// Every row, header included, is one label cell followed by one
    /// right-aligned tab-terminated cell per vertex, so the columns line up.
    pub fn render_table(&self) -> String {
        let mut out = String::from("Results:\n\n");
        if self.negative_cycle {
            out.push_str("A negative cycle was detected.\n");
            return out;
        }

        out.push_str("P:\t");
        for row in &self.vertices {
            let _ = write!(out, "{:>6}\t", row.vertex);
        }
        out.push_str("\nLen:\t");
        for row in &self.vertices {
            let _ = write!(out, "{:>6}\t", row.length.to_string());
        }
        out.push_str("\nPred:\t");
        for row in &self.vertices {
            let pred = row.predecessor.map_or_else(|| "-".to_string(), |p| p.to_string());
            let _ = write!(out, "{:>6}\t", pred);
        }
        out.push('\n');
        out
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
