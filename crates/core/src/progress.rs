//! Course progress arithmetic.

use serde::Serialize;

/// A user's completion state for one course.
///
/// `completed` counts only lectures belonging to the course in question;
/// the query that produces these numbers must filter by course, never by
/// user alone.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ProgressSummary {
    /// Lectures the user has marked complete in this course.
    pub completed: i64,
    /// Total lectures in the course.
    pub total: i64,
}

impl ProgressSummary {
    pub fn new(completed: i64, total: i64) -> Self {
        Self { completed, total }
    }

    /// Fraction of the course completed, in `[0, 1]`.
    ///
    /// A course with no lectures has fraction 0, not NaN.
    pub fn fraction(&self) -> f64 {
        if self.total <= 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64
        }
    }

    /// True once every lecture is complete (and the course has lectures).
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed >= self.total
    }
}
