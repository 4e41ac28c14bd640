//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::CustomerNotFound
            | Self::ServicePlanNotFound
            | Self::ComplaintNotFound
            | Self::EngineerNotFound
            | Self::SupportTicketNotFound
            | Self::NotificationNotFound
            | Self::UserNotFound => StatusCode::NOT_FOUND,

            // 500 Internal Server Error
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (validation errors)
            Self::ValidationFailed
            | Self::ValueOutOfRange
            | Self::ComplaintRatingInvalid
            | Self::EngineerRatingInvalid => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_codes() {
        assert_eq!(ErrorCode::CustomerNotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::ComplaintNotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::UserNotFound.http_status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_other_statuses() {
        assert_eq!(ErrorCode::Success.http_status(), StatusCode::OK);
        assert_eq!(ErrorCode::ValidationFailed.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::EngineerRatingInvalid.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::ValueOutOfRange.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::InternalError.http_status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
