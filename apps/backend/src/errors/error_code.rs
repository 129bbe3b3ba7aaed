//! Stable error codes carried by `AppError`.
//!
//! All codes are SCREAMING_SNAKE_CASE. Add new codes here; never pass
//! ad-hoc strings as error codes.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation
    ValidationError,
    FkViolation,

    // Not found
    GameNotFound,
    UserNotFound,
    ReviewNotFound,
    NotFound,

    // Conflicts
    DuplicateLink,
    UniqueViolation,
    Conflict,

    // Infrastructure
    DbError,
    DbUnavailable,
    DbTimeout,
    ConfigError,
    Internal,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::FkViolation => "FK_VIOLATION",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::ReviewNotFound => "REVIEW_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::DuplicateLink => "DUPLICATE_LINK",
            Self::UniqueViolation => "UNIQUE_VIOLATION",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::ConfigError => "CONFIG_ERROR",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
