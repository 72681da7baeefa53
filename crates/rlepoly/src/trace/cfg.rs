//! Fixed tracing constants (internal).

/// Corner budget per run for capped traces. Every horizontal boundary
/// segment starts at a run end on one of the two lines it separates, so a
/// store of `n` runs has at most `4n` segments and `8n` corners.
pub(crate) const STEP_BUDGET_PER_RUN: usize = 8;
/// Extra corners on top of the per-run budget.
pub(crate) const STEP_BUDGET_SLACK: usize = 8;
