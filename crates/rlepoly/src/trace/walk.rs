//! Boundary tracer: the state machine over a `RunStore`.
//!
//! Each step handles one state and ends at the next corner:
//! - `walk_right` (UpRight): along the top edge of the followed run until a
//!   run on the line above starts, or the run ends.
//! - `walk_left` (DownLeft): along the bottom edge until a run on the line
//!   below ends, or the run starts.
//! - `climb` (UpLeft) / `descend` (DownRight): through stacked runs whose
//!   ends line up, until the side stops.
//!
//! At the corner the two pixels ahead decide the turn
//! (`Connectivity::resolve`) and the turn table gives the next state. Vertices
//! are emitted at turns only, never on straight passes.
//!
//! Precondition: the store holds one connected object (under the chosen
//! connectivity). Other stores may yield a partial outline; overlapping runs
//! cannot reach the tracer because the store coalesces them.

use nalgebra::Vector2;

use super::cfg::{STEP_BUDGET_PER_RUN, STEP_BUDGET_SLACK};
use super::types::{Cursor, State, TraceCfg, TraceError, Turn};
use crate::rle::{Run, RunStore};

/// Corner budget used when `TraceCfg::max_steps` is unset.
pub fn default_step_budget(store: &RunStore) -> usize {
    store
        .run_count()
        .saturating_mul(STEP_BUDGET_PER_RUN)
        .saturating_add(STEP_BUDGET_SLACK)
}

/// One-shot tracer over one store. Consumed by `trace`, so a cursor is never
/// reused across objects.
pub struct BoundaryTracer<'a> {
    store: &'a RunStore,
    cfg: TraceCfg,
    cursor: Cursor,
    start: Vector2<i64>,
    vertices: Vec<Vector2<i64>>,
    closed: bool,
}

impl<'a> BoundaryTracer<'a> {
    /// `None` for an empty store.
    pub fn new(store: &'a RunStore, cfg: TraceCfg) -> Option<Self> {
        let first = store.first_run()?;
        // Top-left corner of the first pixel; nothing lies above it or to its left.
        let start = Vector2::new(first.start, first.line);
        Some(Self {
            store,
            cfg,
            cursor: Cursor {
                point: start,
                line: first.line,
                run: 0,
                state: State::UpRight,
            },
            start,
            vertices: vec![start],
            closed: false,
        })
    }

    /// Trace without a budget. Returns corners on the pixel-edge lattice,
    /// starting at the top-left corner of the first run.
    pub fn trace(mut self) -> Vec<Vector2<i64>> {
        while !self.closed {
            self.step();
        }
        self.finish()
    }

    /// Trace with a corner budget (`cfg.max_steps` or `default_step_budget`).
    ///
    /// Stores with a line gap are rejected up front: every line of a
    /// connected object holds a run, so its line span never exceeds the run
    /// count.
    pub fn trace_capped(mut self) -> Result<Vec<Vector2<i64>>, TraceError> {
        let lines = self.store.line_span();
        let runs = self.store.run_count();
        if lines > runs as u64 {
            tracing::warn!(lines, runs, "trace_line_gap");
            return Err(TraceError::LineGap { lines, runs });
        }
        let budget = self
            .cfg
            .max_steps
            .unwrap_or_else(|| default_step_budget(self.store));
        let mut steps = 0usize;
        while !self.closed {
            if steps >= budget {
                tracing::warn!(
                    steps,
                    vertices = self.vertices.len(),
                    "trace_step_limit"
                );
                return Err(TraceError::StepLimitExceeded {
                    steps,
                    vertices: self.vertices.len(),
                });
            }
            steps += 1;
            self.step();
        }
        Ok(self.finish())
    }

    fn finish(self) -> Vec<Vector2<i64>> {
        tracing::debug!(
            runs = self.store.run_count(),
            vertices = self.vertices.len(),
            "trace_closed"
        );
        self.vertices
    }

    fn step(&mut self) {
        tracing::trace!(
            state = ?self.cursor.state,
            end = ?self.cursor.state.position_flag(),
            line = self.cursor.line,
            x = self.cursor.point.x,
            "trace_step"
        );
        match self.cursor.state {
            State::UpRight => self.walk_right(),
            State::DownLeft => self.walk_left(),
            State::UpLeft => self.climb(),
            State::DownRight => self.descend(),
        }
    }

    #[inline]
    fn run(&self, line: i64, idx: usize) -> Run {
        self.store.line(line)[idx]
    }

    /// Record a corner and move the cursor onto `(line, run)` in the state
    /// reached by `turn`. The first return to the start closes the trace.
    fn corner(&mut self, vertex: Vector2<i64>, turn: Turn, line: i64, run: usize) {
        if vertex == self.start {
            self.closed = true;
        } else {
            self.vertices.push(vertex);
        }
        self.cursor = Cursor {
            point: vertex,
            line,
            run,
            state: self.cursor.state.turn(turn),
        };
    }

    fn walk_right(&mut self) {
        let Cursor {
            point, line, run, ..
        } = self.cursor;
        let end = self.run(line, run).end();
        let above = line - 1;
        let obstacle = self.store.leftmost_left_end_inside(above, point.x, end);
        let x = obstacle.map_or(end, |q| self.run(above, q).start);
        let turn = self
            .cfg
            .connectivity
            .resolve(obstacle.is_some(), x < end);
        let vertex = Vector2::new(x, line);
        match (turn, obstacle) {
            (Turn::Left, Some(q)) => self.corner(vertex, turn, above, q),
            _ => self.corner(vertex, Turn::Right, line, run),
        }
    }

    fn walk_left(&mut self) {
        let Cursor {
            point, line, run, ..
        } = self.cursor;
        let start = self.run(line, run).start;
        let below = line + 1;
        let obstacle = self.store.rightmost_right_end_inside(below, start, point.x);
        let x = obstacle.map_or(start, |s| self.run(below, s).end());
        let turn = self
            .cfg
            .connectivity
            .resolve(obstacle.is_some(), x > start);
        let vertex = Vector2::new(x, below);
        match (turn, obstacle) {
            (Turn::Left, Some(s)) => self.corner(vertex, turn, below, s),
            _ => self.corner(vertex, Turn::Right, line, run),
        }
    }

    fn climb(&mut self) {
        loop {
            let Cursor { line, run, .. } = self.cursor;
            let x = self.run(line, run).start;
            let above = line - 1;
            let ahead_left = self.store.run_at(above, x - 1);
            let ahead_right = self.store.run_at(above, x);
            let turn = self
                .cfg
                .connectivity
                .resolve(ahead_left.is_some(), ahead_right.is_some());
            let vertex = Vector2::new(x, line);
            match (turn, ahead_left, ahead_right) {
                (Turn::Straight, _, Some(q)) => {
                    self.cursor.line = above;
                    self.cursor.run = q;
                    self.cursor.point = vertex;
                }
                (Turn::Left, Some(p), _) => return self.corner(vertex, turn, above, p),
                _ => return self.corner(vertex, Turn::Right, line, run),
            }
        }
    }

    fn descend(&mut self) {
        loop {
            let Cursor { line, run, .. } = self.cursor;
            let x = self.run(line, run).end();
            let below = line + 1;
            let ahead_left = self.store.run_at(below, x);
            let ahead_right = self.store.run_at(below, x - 1);
            let turn = self
                .cfg
                .connectivity
                .resolve(ahead_left.is_some(), ahead_right.is_some());
            let vertex = Vector2::new(x, below);
            match (turn, ahead_left, ahead_right) {
                (Turn::Straight, _, Some(s)) => {
                    self.cursor.line = below;
                    self.cursor.run = s;
                    self.cursor.point = vertex;
                }
                (Turn::Left, Some(s), _) => return self.corner(vertex, turn, below, s),
                _ => return self.corner(vertex, Turn::Right, line, run),
            }
        }
    }
}
