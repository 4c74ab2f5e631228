// HTTP-facing error type
use crate::domain::department::UnknownDepartment;
use crate::domain::filters::UnknownTimeframe;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    UnknownDepartment(#[from] UnknownDepartment),

    #[error(transparent)]
    UnknownTimeframe(#[from] UnknownTimeframe),

    #[error("store id must not be empty")]
    EmptyStoreId,

    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::UnknownDepartment(_)
            | AppError::UnknownTimeframe(_)
            | AppError::EmptyStoreId => StatusCode::BAD_REQUEST,
            AppError::Internal(e) => {
                tracing::error!("Internal server error: {:#}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
