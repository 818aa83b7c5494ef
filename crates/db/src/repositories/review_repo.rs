//! Repository for the `reviews` table.
//!
//! One review per (user, course), enforced by `uq_reviews_user_course`.
//! Resubmission is an upsert; under two concurrent submissions the
//! constraint guarantees a single row holding one of the two values
//! (last writer wins). The average is computed by `AVG()` at query time,
//! never denormalized, so it can not go stale after a mutation.

use coursehub_core::error::CoreError;
use coursehub_core::review::{validate_comment, validate_rating};
use coursehub_core::types::DbId;
use sqlx::PgPool;

use crate::map_db_err;
use crate::models::review::{Review, ReviewStats, ReviewWithAuthor, SubmitReview};
use crate::repositories::EnrollmentRepo;

/// Column list for `reviews` queries.
const REVIEW_COLUMNS: &str = "id, user_id, course_id, rating, comment, created_at, updated_at";

/// Default page size for review listings.
const DEFAULT_LIMIT: i64 = 10;

/// Maximum page size for review listings.
const MAX_LIMIT: i64 = 100;

pub struct ReviewRepo;

impl ReviewRepo {
    /// Submit or replace a user's review of a course.
    ///
    /// Validates the rating and comment before any write, requires
    /// enrollment, and upserts on (user, course): a second submission
    /// replaces rating, comment, and `updated_at` in place.
    pub async fn submit(
        pool: &PgPool,
        user_id: DbId,
        course_id: DbId,
        input: &SubmitReview,
    ) -> Result<Review, CoreError> {
        validate_rating(input.rating)?;
        validate_comment(&input.comment)?;

        if !EnrollmentRepo::is_enrolled(pool, user_id, course_id).await? {
            return Err(CoreError::NotEnrolled { user_id, course_id });
        }

        let query = format!(
            "INSERT INTO reviews (user_id, course_id, rating, comment) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (user_id, course_id) DO UPDATE SET \
                 rating = EXCLUDED.rating, \
                 comment = EXCLUDED.comment, \
                 updated_at = now() \
             RETURNING {REVIEW_COLUMNS}"
        );
        let review = sqlx::query_as::<_, Review>(&query)
            .bind(user_id)
            .bind(course_id)
            .bind(input.rating)
            .bind(input.comment.trim())
            .fetch_one(pool)
            .await
            .map_err(map_db_err)?;

        tracing::info!(user_id, course_id, rating = review.rating, "Review submitted");
        Ok(review)
    }

    /// A user's own review of a course, if any (for pre-filling the form).
    pub async fn find_by_user_and_course(
        pool: &PgPool,
        user_id: DbId,
        course_id: DbId,
    ) -> Result<Option<Review>, CoreError> {
        let query = format!(
            "SELECT {REVIEW_COLUMNS} FROM reviews \
             WHERE user_id = $1 AND course_id = $2"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(user_id)
            .bind(course_id)
            .fetch_optional(pool)
            .await
            .map_err(map_db_err)
    }

    /// The course's mean rating, or `None` when it has no reviews.
    pub async fn average_rating(pool: &PgPool, course_id: DbId) -> Result<Option<f64>, CoreError> {
        sqlx::query_scalar(
            "SELECT AVG(rating)::float8 FROM reviews WHERE course_id = $1",
        )
        .bind(course_id)
        .fetch_one(pool)
        .await
        .map_err(map_db_err)
    }

    /// Average and count in one round trip, for the course detail page.
    pub async fn stats_for_course(
        pool: &PgPool,
        course_id: DbId,
    ) -> Result<ReviewStats, CoreError> {
        let (average, count): (Option<f64>, i64) = sqlx::query_as(
            "SELECT AVG(rating)::float8, COUNT(*) FROM reviews WHERE course_id = $1",
        )
        .bind(course_id)
        .fetch_one(pool)
        .await
        .map_err(map_db_err)?;

        Ok(ReviewStats { average, count })
    }

    /// Recent reviews for a course with reviewer display attributes,
    /// newest first.
    pub async fn list_for_course(
        pool: &PgPool,
        course_id: DbId,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<ReviewWithAuthor>, CoreError> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
        let offset = offset.unwrap_or(0);

        sqlx::query_as::<_, ReviewWithAuthor>(
            "SELECT r.id, r.user_id, u.username, u.display_name, u.avatar_url, \
                    r.rating, r.comment, r.created_at, r.updated_at \
             FROM reviews r \
             JOIN users u ON u.id = r.user_id \
             WHERE r.course_id = $1 \
             ORDER BY r.created_at DESC \
             LIMIT $2 OFFSET $3",
        )
        .bind(course_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
        .map_err(map_db_err)
    }
}
