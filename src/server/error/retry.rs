use sea_orm::DbErr;

use super::Error;

/// Strategy for handling errors in a retry context
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff (transient failures)
    Retry,
    /// Failed permanently
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            Self::UexError(uex_error) => match uex_error {
                // Request never reached UEX or the connection dropped
                uex::Error::RequestError { .. } => ErrorRetryStrategy::Retry,

                // UEX is temporarily unavailable
                uex::Error::UpstreamStatus { status, .. } if status.is_server_error() => {
                    ErrorRetryStrategy::Retry
                }

                // Client errors, unexpected statuses, undecodable bodies and bad settings
                // won't resolve by asking again
                uex::Error::UpstreamStatus { .. }
                | uex::Error::UpstreamDecode { .. }
                | uex::Error::ConfigError(_) => ErrorRetryStrategy::Fail,
            },

            Self::DbErr(db_err) => match db_err {
                // Connection errors - transient, should retry
                DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => ErrorRetryStrategy::Retry,

                // Query, constraint and conversion errors indicate bugs or bad data
                _ => ErrorRetryStrategy::Fail,
            },

            Self::ConfigError(_) => ErrorRetryStrategy::Fail,
            Self::AuthError(_) => ErrorRetryStrategy::Fail,
            Self::SyncError(_) => ErrorRetryStrategy::Fail,
            Self::NotFound { .. } => ErrorRetryStrategy::Fail,
            Self::InternalError(_) => ErrorRetryStrategy::Fail,
            Self::SchedulerError(_) => ErrorRetryStrategy::Fail,
        }
    }
}
