use tower_sessions::session::Error as SessionError;
use crate::data::models::AppError;
use crate::store::StoreError;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::StoreError(err)
    }
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        AppError::SessionError(err.to_string())
    }
}
