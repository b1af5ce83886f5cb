use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("store error: {0}")]
    Store(String),

    #[error("failed to parse csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("improperly configured: {0}")]
    Config(#[from] config::ConfigError),

    #[error("failed to decode document: {0}")]
    Decode(#[from] bson::de::Error),
}

impl From<mongodb::error::Error> for Error {
    fn from(e: mongodb::error::Error) -> Self {
        Error::Store(e.to_string())
    }
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Error::BadRequest(_) => "Invalid request",
            Error::NotFound(_) => "Not found",
            Error::Store(_) => "Database operation failed",
            _ => "Internal server error",
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("request failed: {}", &self);
        } else {
            tracing::debug!("request rejected: {}", &self);
        }
        let body = match &self {
            Error::BadRequest(msg) | Error::NotFound(msg) => json!({
                "success": false,
                "message": msg,
            }),
            _ => json!({
                "success": false,
                "message": self.message(),
                "error": self.to_string(),
            }),
        };
        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, Error>;
