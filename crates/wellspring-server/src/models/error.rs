//! API Error Body and Extractor
//!
//! Every failure returns `{ "error": <kind>, "detail": <text> }` with the
//! status the taxonomy prescribes. `ApiJson` replaces the stock `Json`
//! extractor so malformed request bodies land in the same shape.

use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use wellspring::domain::EngineError;

/// Structured error payload
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
    pub detail: String,
}

/// An error ready to leave the HTTP boundary
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    error: &'static str,
    detail: String,
}

impl ApiError {
    pub fn validation(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: "validation_error",
            detail: detail.into(),
        }
    }

    /// Engine error mapping for pipelines where an empty result means a
    /// bad request rather than a missing resource
    pub fn empty_as_bad_request(err: EngineError) -> Self {
        match err {
            EngineError::EmptyResult(detail) => Self {
                status: StatusCode::BAD_REQUEST,
                error: "empty_result",
                detail,
            },
            other => other.into(),
        }
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Validation(detail) => Self {
                status: StatusCode::BAD_REQUEST,
                error: "validation_error",
                detail,
            },
            EngineError::Decode(detail) => Self {
                status: StatusCode::BAD_REQUEST,
                error: "decode_error",
                detail,
            },
            EngineError::EmptyResult(detail) => Self {
                status: StatusCode::NOT_FOUND,
                error: "empty_result",
                detail,
            },
            EngineError::Internal(detail) => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: "internal_error",
                detail,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(error = self.error, detail = %self.detail, "request failed");
        }
        (
            self.status,
            Json(ErrorBody {
                error: self.error.to_string(),
                detail: self.detail,
            }),
        )
            .into_response()
    }
}

/// `Json` with the rejection converted into the structured error body
pub struct ApiJson<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: serde::de::DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(ApiError::validation(rejection.body_text())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taxonomy_maps_to_statuses() {
        let cases = [
            (EngineError::validation("x"), StatusCode::BAD_REQUEST),
            (EngineError::decode("x"), StatusCode::BAD_REQUEST),
            (EngineError::empty_result("x"), StatusCode::NOT_FOUND),
            (EngineError::internal("x"), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status, status);
        }
    }

    #[test]
    fn test_empty_result_can_downgrade_to_bad_request() {
        let err = ApiError::empty_as_bad_request(EngineError::empty_result("nothing"));
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        let other = ApiError::empty_as_bad_request(EngineError::decode("bad"));
        assert_eq!(other.status, StatusCode::BAD_REQUEST);
        assert_eq!(other.error, "decode_error");
    }
}
