use thiserror::Error;

/// Lowest accepted rating.
pub const RATING_MIN: i16 = 1;
/// Highest accepted rating.
pub const RATING_MAX: i16 = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RatingError {
    #[error("rating must be between {RATING_MIN} and {RATING_MAX}, got {0}")]
    OutOfRange(i16),
}

/// Validate that a rating lies in the 1-5 domain. Out-of-range values are
/// surfaced to the caller, never silently coerced.
pub fn validate_rating(rating: i16) -> Result<(), RatingError> {
    if !(RATING_MIN..=RATING_MAX).contains(&rating) {
        return Err(RatingError::OutOfRange(rating));
    }
    Ok(())
}

/// Arithmetic mean of a rating sequence, 0.0 when empty.
pub fn average_rating(ratings: &[i16]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    let sum: i64 = ratings.iter().map(|&r| i64::from(r)).sum();
    sum as f64 / ratings.len() as f64
}
