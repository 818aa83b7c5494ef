//! Integration tests for course reviews.
//!
//! The invariants under test: ratings outside 1..=5 never reach the table,
//! reviews require enrollment, resubmission replaces the existing row, and
//! the average is computed from whatever rows exist at query time.

use assert_matches::assert_matches;
use coursehub_core::error::CoreError;
use coursehub_db::models::course::CreateCourse;
use coursehub_db::models::review::SubmitReview;
use coursehub_db::models::user::UpsertUser;
use coursehub_db::repositories::{CourseRepo, EnrollmentRepo, ReviewRepo, UserRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_user(pool: &PgPool, id: i64, username: &str) -> i64 {
    UserRepo::upsert(
        pool,
        &UpsertUser {
            id,
            username: username.to_string(),
            display_name: username.to_string(),
            avatar_url: None,
        },
    )
    .await
    .unwrap()
    .id
}

async fn seed_course(pool: &PgPool, slug: &str) -> i64 {
    CourseRepo::create(
        pool,
        &CreateCourse {
            title: slug.to_string(),
            slug: slug.to_string(),
            description: None,
            image_url: None,
            topic_ids: Vec::new(),
        },
    )
    .await
    .unwrap()
    .id
}

async fn enrolled_user(pool: &PgPool, id: i64, username: &str, course_id: i64) -> i64 {
    let user_id = seed_user(pool, id, username).await;
    EnrollmentRepo::enroll(pool, user_id, course_id).await.unwrap();
    user_id
}

fn review(rating: i32, comment: &str) -> SubmitReview {
    SubmitReview {
        rating,
        comment: comment.to_string(),
    }
}

async fn review_count(pool: &PgPool, user_id: i64, course_id: i64) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM reviews WHERE user_id = $1 AND course_id = $2")
        .bind(user_id)
        .bind(course_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Test: validation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_rating_out_of_range_rejected(pool: PgPool) {
    let course_id = seed_course(&pool, "rust-101").await;
    let user_id = enrolled_user(&pool, 1, "alice", course_id).await;

    for bad in [0, 6, -1] {
        let result = ReviewRepo::submit(&pool, user_id, course_id, &review(bad, "nope")).await;
        assert_matches!(result, Err(CoreError::Validation(_)), "rating {bad} should be rejected");
    }

    // Rejection happens before any write.
    assert_eq!(review_count(&pool, user_id, course_id).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_review_requires_enrollment(pool: PgPool) {
    let course_id = seed_course(&pool, "rust-101").await;
    let user_id = seed_user(&pool, 1, "alice").await;

    let result = ReviewRepo::submit(&pool, user_id, course_id, &review(5, "great")).await;
    assert_matches!(result, Err(CoreError::NotEnrolled { .. }));
    assert_eq!(review_count(&pool, user_id, course_id).await, 0);
}

// ---------------------------------------------------------------------------
// Test: upsert semantics
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_resubmission_replaces_in_place(pool: PgPool) {
    let course_id = seed_course(&pool, "rust-101").await;
    let user_id = enrolled_user(&pool, 1, "alice", course_id).await;

    let first = ReviewRepo::submit(&pool, user_id, course_id, &review(4, "good"))
        .await
        .unwrap();
    assert_eq!(first.rating, 4);

    let second = ReviewRepo::submit(&pool, user_id, course_id, &review(2, "changed my mind"))
        .await
        .unwrap();
    assert_eq!(second.id, first.id);
    assert_eq!(second.rating, 2);
    assert_eq!(second.comment, "changed my mind");
    assert_eq!(second.created_at, first.created_at);

    assert_eq!(review_count(&pool, user_id, course_id).await, 1);

    // The replacement is what the average sees.
    let stats = ReviewRepo::stats_for_course(&pool, course_id).await.unwrap();
    assert_eq!(stats.count, 1);
    assert_eq!(stats.average, Some(2.0));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_comment_is_trimmed(pool: PgPool) {
    let course_id = seed_course(&pool, "rust-101").await;
    let user_id = enrolled_user(&pool, 1, "alice", course_id).await;

    let saved = ReviewRepo::submit(&pool, user_id, course_id, &review(5, "  padded  "))
        .await
        .unwrap();
    assert_eq!(saved.comment, "padded");
}

// ---------------------------------------------------------------------------
// Test: averages
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_average_absent_without_reviews(pool: PgPool) {
    let course_id = seed_course(&pool, "rust-101").await;

    let average = ReviewRepo::average_rating(&pool, course_id).await.unwrap();
    assert_eq!(average, None);

    let stats = ReviewRepo::stats_for_course(&pool, course_id).await.unwrap();
    assert_eq!(stats.average, None);
    assert_eq!(stats.count, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_average_over_distinct_reviewers(pool: PgPool) {
    let course_id = seed_course(&pool, "rust-101").await;
    let alice = enrolled_user(&pool, 1, "alice", course_id).await;
    let bob = enrolled_user(&pool, 2, "bob", course_id).await;

    ReviewRepo::submit(&pool, alice, course_id, &review(2, ""))
        .await
        .unwrap();
    ReviewRepo::submit(&pool, bob, course_id, &review(4, ""))
        .await
        .unwrap();

    let stats = ReviewRepo::stats_for_course(&pool, course_id).await.unwrap();
    assert_eq!(stats.count, 2);
    assert_eq!(stats.average, Some(3.0));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_average_scoped_to_course(pool: PgPool) {
    let a = seed_course(&pool, "course-a").await;
    let b = seed_course(&pool, "course-b").await;
    let alice = enrolled_user(&pool, 1, "alice", a).await;
    EnrollmentRepo::enroll(&pool, alice, b).await.unwrap();

    ReviewRepo::submit(&pool, alice, a, &review(5, "")).await.unwrap();

    assert_eq!(
        ReviewRepo::average_rating(&pool, a).await.unwrap(),
        Some(5.0)
    );
    assert_eq!(ReviewRepo::average_rating(&pool, b).await.unwrap(), None);
}

// ---------------------------------------------------------------------------
// Test: listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_for_course_with_authors(pool: PgPool) {
    let course_id = seed_course(&pool, "rust-101").await;
    let alice = enrolled_user(&pool, 1, "alice", course_id).await;
    enrolled_user(&pool, 2, "bob", course_id).await;

    ReviewRepo::submit(&pool, alice, course_id, &review(5, "loved it"))
        .await
        .unwrap();

    let listed = ReviewRepo::list_for_course(&pool, course_id, None, None)
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].username, "alice");
    assert_eq!(listed[0].rating, 5);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_own_review_lookup(pool: PgPool) {
    let course_id = seed_course(&pool, "rust-101").await;
    let alice = enrolled_user(&pool, 1, "alice", course_id).await;

    assert!(ReviewRepo::find_by_user_and_course(&pool, alice, course_id)
        .await
        .unwrap()
        .is_none());

    ReviewRepo::submit(&pool, alice, course_id, &review(3, ""))
        .await
        .unwrap();

    let own = ReviewRepo::find_by_user_and_course(&pool, alice, course_id)
        .await
        .unwrap()
        .expect("own review should be found");
    assert_eq!(own.rating, 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_course_cascades_reviews(pool: PgPool) {
    let course_id = seed_course(&pool, "doomed").await;
    let alice = enrolled_user(&pool, 1, "alice", course_id).await;
    ReviewRepo::submit(&pool, alice, course_id, &review(4, ""))
        .await
        .unwrap();

    CourseRepo::delete(&pool, course_id).await.unwrap();

    assert_eq!(review_count(&pool, alice, course_id).await, 0);
}
