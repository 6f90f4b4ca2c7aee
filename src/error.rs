use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::product::{MissingFields, ProductKey};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error(transparent)]
    MissingFields(#[from] MissingFields),

    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("A product with {0} already exists")]
    Duplicate(ProductKey),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedBody(format!("Failed to parse the request body as JSON: {}", err))
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<ProductKey>,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::MissingFields(_) | AppError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            AppError::Duplicate(_) => StatusCode::CONFLICT,
        }
    }

    fn body(self) -> ErrorBody {
        let message = self.to_string();
        match self {
            AppError::Unauthorized => ErrorBody {
                error: "Unauthorized",
                message: None,
                status_code: None,
                details: None,
            },
            AppError::MissingFields(_) => ErrorBody {
                error: "Bad Request",
                message: Some(message),
                status_code: None,
                details: None,
            },
            AppError::MalformedBody(reason) => ErrorBody {
                error: "Bad Request",
                message: Some(reason),
                status_code: None,
                details: None,
            },
            AppError::Duplicate(key) => ErrorBody {
                error: "Product already exists",
                message: Some(message),
                status_code: Some(StatusCode::CONFLICT.as_u16()),
                details: Some(key),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        tracing::warn!(status = status.as_u16(), "{}", self);
        (status, Json(self.body())).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
