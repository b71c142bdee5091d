use serde::Serialize;
use thiserror::Error;

/// Rejections from the watch-progress engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgressError {
    #[error("invalid index {0}: listing indexes start at 1")]
    InvalidIndex(i64),

    #[error("index {index} is out of range: the watchlist has {len} shows")]
    IndexOutOfRange { index: i64, len: usize },

    #[error("show {index} ({name}) is not currently being watched")]
    NotCurrentlyWatching { index: i64, name: String },
}

/// Unified API error type.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "bad_request",
            Self::NotFound(_) => "not_found",
            Self::Conflict(_) => "conflict",
            Self::Internal(_) => "internal_error",
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            Self::BadRequest(_) => 400,
            Self::NotFound(_) => 404,
            Self::Conflict(_) => 409,
            Self::Internal(_) => 500,
        }
    }
}

impl From<ProgressError> for ApiError {
    fn from(e: ProgressError) -> Self {
        match e {
            ProgressError::InvalidIndex(_) => Self::BadRequest(e.to_string()),
            ProgressError::IndexOutOfRange { .. } => Self::NotFound(e.to_string()),
            ProgressError::NotCurrentlyWatching { .. } => Self::Conflict(e.to_string()),
        }
    }
}

/// JSON error envelope: `{ "error": { "code": "…", "message": "…", "details": {} } }`
#[derive(Serialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    pub details: serde_json::Value,
}

impl From<&ApiError> for ErrorEnvelope {
    fn from(e: &ApiError) -> Self {
        Self {
            error: ErrorBody {
                code: e.code().to_string(),
                message: e.to_string(),
                details: serde_json::Value::Object(serde_json::Map::new()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_errors_map_to_client_statuses() {
        fn mapped(err: ProgressError) -> (u16, &'static str) {
            let api = ApiError::from(err);
            (api.status_code(), api.code())
        }

        assert_eq!(mapped(ProgressError::InvalidIndex(0)), (400, "bad_request"));

        let out_of_range = ProgressError::IndexOutOfRange { index: 9, len: 2 };
        assert_eq!(mapped(out_of_range), (404, "not_found"));

        let idle = ProgressError::NotCurrentlyWatching {
            index: 1,
            name: "The Bear".into(),
        };
        assert_eq!(mapped(idle), (409, "conflict"));
    }

    #[test]
    fn envelope_shape() {
        let err = ApiError::NotFound("index 9 is out of range".into());
        let value = serde_json::to_value(ErrorEnvelope::from(&err)).unwrap();
        assert_eq!(value["error"]["code"], "not_found");
        assert_eq!(value["error"]["message"], "not found: index 9 is out of range");
        assert!(value["error"]["details"].as_object().unwrap().is_empty());
    }
}
