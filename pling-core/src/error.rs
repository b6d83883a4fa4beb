use crate::repository;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(&'static str),

    #[error("no push tokens registered for user")]
    NoTokensForUser,

    #[error("notification not pending")]
    NotificationNotPending,

    #[error("gateway error: {0}")]
    Gateway(#[from] expo_push_client::Error),

    #[error("database error: {0}")]
    Database(#[from] repository::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::warn!(err = %self);

        match self {
            Error::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::NoTokensForUser => StatusCode::NOT_FOUND,
            Error::NotificationNotPending => StatusCode::CONFLICT,
            Error::Gateway(_) => StatusCode::BAD_GATEWAY,
            Error::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
        .into_response()
    }
}
