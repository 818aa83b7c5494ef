use coursehub_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `lecture_progress` table.
///
/// At most one per (user, lecture). Created on first interaction with a
/// lecture (completed = false) or directly on completion. Completion is
/// monotone: `mark_complete` never un-sets it, and marking an already
/// complete lecture is a no-op that preserves the original `completed_at`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LectureProgress {
    pub id: DbId,
    pub user_id: DbId,
    pub lecture_id: DbId,
    pub completed: bool,
    pub completed_at: Option<Timestamp>,
    pub last_accessed: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
