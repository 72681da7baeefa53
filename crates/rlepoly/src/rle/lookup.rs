//! Stateless run lookups between consecutive lines.
//!
//! All searches are binary searches over one sorted line. Because runs on a
//! line never touch, both `start` and `end` are strictly increasing along the
//! line, so `partition_point` works on either key.
//!
//! The "end inside" family answers: which run on `line` has its left (or
//! right) pixel edge inside an edge interval? The tracer asks the half-open
//! pair (`leftmost_left_end_inside`, `rightmost_right_end_inside`) with the
//! interval spanned by the cursor and the end of the run it follows, so an
//! end that meets the run end diagonally is seen. The other two are strict
//! on both bounds.

use nalgebra::Vector2;

use super::types::{Edge, RunStore};

impl RunStore {
    /// Index (within `line`) of the run covering `column`.
    pub fn run_at(&self, line: i64, column: i64) -> Option<usize> {
        let runs = self.line(line);
        let idx = runs.partition_point(|r| r.start <= column).checked_sub(1)?;
        runs[idx].contains(column).then_some(idx)
    }

    /// True iff `column` lies in some run's `[start, start + length)` on `line`.
    #[inline]
    pub fn is_run_index_valid(&self, line: i64, column: i64) -> bool {
        self.run_at(line, column).is_some()
    }

    /// Snap `point.x` onto the closest run extent `[left_end, right_end]` on
    /// `line`. Equidistant candidates resolve to the left one.
    pub fn clip_to_line(&self, point: Vector2<f64>, line: i64) -> Option<Vector2<f64>> {
        let runs = self.line(line);
        let k = runs.partition_point(|r| r.right_end().x < point.x);
        let after = runs.get(k).map(|r| point.x.max(r.left_end().x));
        let before = k.checked_sub(1).map(|i| runs[i].right_end().x);
        let x = match (before, after) {
            (Some(b), Some(a)) => {
                if point.x - b <= a - point.x {
                    b
                } else {
                    a
                }
            }
            (b, a) => b.or(a)?,
        };
        Some(Vector2::new(x, line as f64))
    }

    /// Leftmost run on `line` whose left edge lies in `(after, until]`.
    pub fn leftmost_left_end_inside(&self, line: i64, after: Edge, until: Edge) -> Option<usize> {
        let runs = self.line(line);
        let k = runs.partition_point(|r| r.start <= after);
        runs.get(k).filter(|r| r.start <= until).map(|_| k)
    }

    /// Rightmost run on `line` whose left edge lies strictly inside
    /// `(after, before)`. Ends that only touch a bound (a diagonal contact)
    /// do not count.
    pub fn rightmost_left_end_inside(&self, line: i64, after: Edge, before: Edge) -> Option<usize> {
        let runs = self.line(line);
        let idx = runs.partition_point(|r| r.start < before).checked_sub(1)?;
        (runs[idx].start > after).then_some(idx)
    }

    /// Leftmost run on `line` whose right edge lies strictly inside
    /// `(after, before)`.
    pub fn leftmost_right_end_inside(&self, line: i64, after: Edge, before: Edge) -> Option<usize> {
        let runs = self.line(line);
        let k = runs.partition_point(|r| r.end() <= after);
        runs.get(k).filter(|r| r.end() < before).map(|_| k)
    }

    /// Rightmost run on `line` whose right edge lies in `[from, before)`.
    pub fn rightmost_right_end_inside(&self, line: i64, from: Edge, before: Edge) -> Option<usize> {
        let runs = self.line(line);
        let idx = runs.partition_point(|r| r.end() < before).checked_sub(1)?;
        (runs[idx].end() >= from).then_some(idx)
    }
}
