//! Run, run store and label-object types.
//!
//! - `Run`: one horizontal pixel segment `[start, start + length)` on a raster line.
//! - `RunStore`: per-line sorted runs of one object, occupied lines only.
//! - `LabelObject`: the runs of one object plus the start index of the raster
//!   region they are expressed in.
//!
//! Pixel-edge lattice
//! - Column/line indices address pixel centers. Edge index `k` addresses the
//!   pixel border at coordinate `k - 0.5`, so a run covers edges `start..=end`.

use nalgebra::Vector2;

/// Integer pixel-edge coordinate (edge `k` lies at `k - 0.5`).
pub type Edge = i64;

/// Maximal horizontal segment of object pixels on one raster line.
///
/// Ordering is lexicographic over `(line, start, length)`, which is the
/// canonical global order used to pick the starting vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Run {
    pub line: i64,
    pub start: i64,
    pub length: i64,
}

impl Run {
    #[inline]
    pub fn new(line: i64, start: i64, length: i64) -> Self {
        Self {
            line,
            start,
            length,
        }
    }

    /// One past the last covered column; also the right pixel edge.
    #[inline]
    pub fn end(&self) -> Edge {
        self.start.saturating_add(self.length)
    }

    #[inline]
    pub fn contains(&self, column: i64) -> bool {
        column >= self.start && column < self.end()
    }

    /// Left pixel edge of the run as a point `(column - 0.5, line)`.
    #[inline]
    pub fn left_end(&self) -> Vector2<f64> {
        Vector2::new(self.start as f64 - 0.5, self.line as f64)
    }

    /// Right pixel edge of the run as a point `(end - 0.5, line)`.
    #[inline]
    pub fn right_end(&self) -> Vector2<f64> {
        Vector2::new(self.end() as f64 - 0.5, self.line as f64)
    }
}

/// Sorted runs of one object, grouped by line.
///
/// Only occupied lines are stored, so memory follows the run count and not
/// the row extent; gaps are found by binary search over the line numbers.
///
/// Invariants:
/// - Every stored run has `length > 0`.
/// - Runs on one line are ascending by `start` and never touch or overlap.
/// - Every stored line is non-empty; lines are ascending by line number.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunStore {
    first_line: i64,
    lines: Vec<Vec<Run>>,
    run_count: usize,
}

impl RunStore {
    /// Build from runs in any order. Zero-length runs are dropped; runs that
    /// touch or overlap on a line are coalesced.
    pub fn from_runs<I: IntoIterator<Item = Run>>(runs: I) -> Self {
        let mut runs: Vec<Run> = runs.into_iter().filter(|r| r.length > 0).collect();
        runs.sort_unstable();
        let mut lines: Vec<Vec<Run>> = Vec::new();
        for run in runs {
            match lines.last_mut() {
                Some(row) if row[0].line == run.line => match row.last_mut() {
                    Some(last) if run.start <= last.end() => {
                        let end = last.end().max(run.end());
                        last.length = end - last.start;
                    }
                    _ => row.push(run),
                },
                _ => lines.push(vec![run]),
            }
        }
        let first_line = lines.first().map_or(0, |row| row[0].line);
        let run_count = lines.iter().map(Vec::len).sum();
        Self {
            first_line,
            lines,
            run_count,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.run_count == 0
    }

    /// Number of runs after coalescing.
    #[inline]
    pub fn run_count(&self) -> usize {
        self.run_count
    }

    /// Row extent from the first to the last occupied line, gaps included.
    /// Never overflows, even for lines at the ends of the `i64` range.
    pub fn line_span(&self) -> u64 {
        match (self.lines.first(), self.lines.last()) {
            (Some(first), Some(last)) => last[0].line.abs_diff(first[0].line).saturating_add(1),
            _ => 0,
        }
    }

    /// Row extent `N` of the object (gaps included), saturated to `usize`.
    #[inline]
    pub fn line_count(&self) -> usize {
        usize::try_from(self.line_span()).unwrap_or(usize::MAX)
    }

    /// Number of lines holding at least one run.
    #[inline]
    pub fn occupied_line_count(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn first_line(&self) -> i64 {
        self.first_line
    }

    /// Runs on absolute `line`; empty for gaps and lines outside the extent.
    pub fn line(&self, line: i64) -> &[Run] {
        match self.line_index(line) {
            Some(idx) => &self.lines[idx],
            None => &[],
        }
    }

    fn line_index(&self, line: i64) -> Option<usize> {
        self.lines.binary_search_by_key(&line, |row| row[0].line).ok()
    }

    /// Lexicographically smallest run; its left end is the trace start.
    pub fn first_run(&self) -> Option<&Run> {
        self.lines.first()?.first()
    }

    /// All runs in canonical `(line, start)` order.
    pub fn runs(&self) -> impl Iterator<Item = &Run> + '_ {
        self.lines.iter().flatten()
    }

    pub fn pixel_count(&self) -> i64 {
        self.runs().map(|r| r.length).sum()
    }
}

/// Runs of one labelled object as delivered by segmentation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelObject {
    pub runs: Vec<Run>,
    /// Raster index `(column, line)` of the region's top-left pixel within
    /// the full image; added to every vertex before the affine mapping.
    pub start_index: Vector2<i64>,
}

impl Default for LabelObject {
    fn default() -> Self {
        Self {
            runs: Vec::new(),
            start_index: Vector2::zeros(),
        }
    }
}

impl LabelObject {
    pub fn new(runs: Vec<Run>) -> Self {
        Self {
            runs,
            ..Self::default()
        }
    }

    pub fn with_start_index(mut self, column: i64, line: i64) -> Self {
        self.start_index = Vector2::new(column, line);
        self
    }

    /// Fresh store for one tracing pass.
    pub fn store(&self) -> RunStore {
        RunStore::from_runs(self.runs.iter().copied())
    }
}
