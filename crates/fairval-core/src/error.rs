//! Error types for the Fairval core crate.
//!
//! All date, schedule, and convention failures are reported through
//! [`CoreError`]; higher-level crates wrap it in their own error enums.

use thiserror::Error;

/// A specialized Result type for Fairval core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The error type for date, calendar, and schedule operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Invalid tenor specification.
    #[error("Invalid tenor: {message}")]
    InvalidTenor {
        /// Description of the tenor error.
        message: String,
    },

    /// Invalid schedule specification (e.g. end date not after start date).
    #[error("Invalid schedule: {reason}")]
    InvalidSchedule {
        /// Description of what's invalid.
        reason: String,
    },

    /// Day count calculation error.
    #[error("Day count error: {reason}")]
    DayCountError {
        /// Description of the error.
        reason: String,
    },

    /// Calendar or business day error.
    #[error("Calendar error: {reason}")]
    CalendarError {
        /// Description of the error.
        reason: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid tenor error.
    #[must_use]
    pub fn invalid_tenor(message: impl Into<String>) -> Self {
        Self::InvalidTenor {
            message: message.into(),
        }
    }

    /// Creates an invalid schedule error.
    #[must_use]
    pub fn invalid_schedule(reason: impl Into<String>) -> Self {
        Self::InvalidSchedule {
            reason: reason.into(),
        }
    }

    /// Creates a day count error.
    #[must_use]
    pub fn day_count_error(reason: impl Into<String>) -> Self {
        Self::DayCountError {
            reason: reason.into(),
        }
    }

    /// Creates a calendar error.
    #[must_use]
    pub fn calendar_error(reason: impl Into<String>) -> Self {
        Self::CalendarError {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::invalid_date("2024-02-30 is not a valid date");
        assert!(err.to_string().contains("Invalid date"));
    }

    #[test]
    fn test_schedule_error_display() {
        let err = CoreError::invalid_schedule("end date 2024-01-01 not after start 2025-01-01");
        assert!(err.to_string().contains("Invalid schedule"));
    }
}
