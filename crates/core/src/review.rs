//! Review validation rules.

use crate::error::CoreError;

/// Lowest accepted star rating.
pub const MIN_RATING: i32 = 1;

/// Highest accepted star rating.
pub const MAX_RATING: i32 = 5;

/// Maximum review comment length in characters.
pub const MAX_COMMENT_CHARS: usize = 4000;

/// Validate a star rating. Must be an integer in `[1, 5]`.
///
/// Out-of-range values are rejected before any write happens; the error
/// message names the offending value so the caller can re-prompt.
pub fn validate_rating(rating: i32) -> Result<(), CoreError> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}"
        )))
    }
}

/// Validate a review comment. Comments may be empty (a bare star rating is
/// allowed) but are capped to keep pathological payloads out of the table.
pub fn validate_comment(comment: &str) -> Result<(), CoreError> {
    let len = comment.chars().count();
    if len > MAX_COMMENT_CHARS {
        return Err(CoreError::Validation(format!(
            "comment must be at most {MAX_COMMENT_CHARS} characters, got {len}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn accepts_all_in_range_ratings() {
        for rating in 1..=5 {
            assert!(validate_rating(rating).is_ok(), "rating {rating} rejected");
        }
    }

    #[test]
    fn rejects_out_of_range_ratings() {
        for rating in [0, 6, -1, 100] {
            let err = validate_rating(rating).unwrap_err();
            assert_matches!(err, CoreError::Validation(msg) => {
                assert!(msg.contains(&rating.to_string()), "message should name {rating}: {msg}");
            });
        }
    }

    #[test]
    fn accepts_empty_comment() {
        assert!(validate_comment("").is_ok());
    }

    #[test]
    fn rejects_oversized_comment() {
        let comment = "x".repeat(MAX_COMMENT_CHARS + 1);
        assert_matches!(validate_comment(&comment), Err(CoreError::Validation(_)));
    }
}
