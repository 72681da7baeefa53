//! Tracer state, turn table and configuration.
//!
//! Kept small and explicit so `walk.rs` reads as the state machine only.

use std::fmt;

use nalgebra::Vector2;

/// Which diagonal contacts belong to the object.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Connectivity {
    /// Edge neighbours only; diagonal contacts are separate pieces.
    Four,
    /// Edge and corner neighbours.
    #[default]
    Eight,
}

impl Connectivity {
    /// Turn at a corner from the two pixels ahead of the heading
    /// (`ahead_left`, `ahead_right`), with the object on the right.
    #[inline]
    pub fn resolve(self, ahead_left: bool, ahead_right: bool) -> Turn {
        match (self, ahead_left, ahead_right) {
            (Connectivity::Eight, true, _) | (Connectivity::Four, true, true) => Turn::Left,
            (_, _, true) => Turn::Straight,
            _ => Turn::Right,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    Left,
    Straight,
    Right,
}

/// Local configuration being traced (clockwise on screen, y down).
///
/// - `UpRight`: along a run's top edge, heading right.
/// - `DownRight`: down a run's right side.
/// - `DownLeft`: along a run's bottom edge, heading left.
/// - `UpLeft`: up a run's left side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

/// Which extremity of the followed run the cursor sits on or heads for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunEnd {
    Left,
    Right,
}

/// Next state per `(state, turn)`. Rows follow `State` order, columns
/// `[Left, Straight, Right]`.
const TRANSITIONS: [[State; 3]; 4] = [
    // UpLeft (north)
    [State::DownLeft, State::UpLeft, State::UpRight],
    // UpRight (east)
    [State::UpLeft, State::UpRight, State::DownRight],
    // DownLeft (west)
    [State::DownRight, State::DownLeft, State::UpLeft],
    // DownRight (south)
    [State::UpRight, State::DownRight, State::DownLeft],
];

impl State {
    #[inline]
    pub fn turn(self, turn: Turn) -> State {
        let row = match self {
            State::UpLeft => 0,
            State::UpRight => 1,
            State::DownLeft => 2,
            State::DownRight => 3,
        };
        let col = match turn {
            Turn::Left => 0,
            Turn::Straight => 1,
            Turn::Right => 2,
        };
        TRANSITIONS[row][col]
    }

    #[inline]
    pub fn position_flag(self) -> RunEnd {
        match self {
            State::UpRight | State::DownRight => RunEnd::Right,
            State::UpLeft | State::DownLeft => RunEnd::Left,
        }
    }
}

/// Mutable context of one tracing pass.
///
/// `point` lives on the pixel-edge lattice; `run` indexes into `line`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor {
    pub point: Vector2<i64>,
    pub line: i64,
    pub run: usize,
    pub state: State,
}

/// Tracer configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct TraceCfg {
    pub connectivity: Connectivity,
    /// Corner budget for capped traces; `None` derives one from the run count.
    pub max_steps: Option<usize>,
}

/// Errors surfaced by capped traces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceError {
    /// The budget ran out before the start vertex came back (malformed runs).
    StepLimitExceeded { steps: usize, vertices: usize },
    /// The runs cover more lines than there are runs, so the object has a
    /// line gap and cannot be connected.
    LineGap { lines: u64, runs: usize },
}

impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceError::StepLimitExceeded { steps, vertices } => write!(
                f,
                "trace did not close within {steps} steps ({vertices} vertices emitted); runs are malformed"
            ),
            TraceError::LineGap { lines, runs } => write!(
                f,
                "{runs} runs span {lines} lines; a connected object has a run on every line"
            ),
        }
    }
}

impl std::error::Error for TraceError {}
