use serde::{Deserialize, Serialize};

use super::error::ApiError;

/// Lifecycle of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Idle,
    Pending,
    Resolved,
    Rejected,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Idle => "idle",
            Status::Pending => "pending",
            Status::Resolved => "resolved",
            Status::Rejected => "rejected",
        }
    }
}

/// Serializable form of an [`ApiError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
}

impl ErrorBody {
    /// Raw JSON text, as shown on screen.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }
}

impl From<&ApiError> for ErrorBody {
    fn from(err: &ApiError) -> Self {
        Self {
            kind: err.kind().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<ApiError> for ErrorBody {
    fn from(err: ApiError) -> Self {
        Self::from(&err)
    }
}

/// Result envelope: request status plus whatever data or error it produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppResponse<T> {
    pub status: Status,
    pub data: Option<T>,
    pub error: Option<ErrorBody>,
}

impl<T> Default for AppResponse<T> {
    fn default() -> Self {
        Self::idle()
    }
}

impl<T> AppResponse<T> {
    pub fn idle() -> Self {
        Self {
            status: Status::Idle,
            data: None,
            error: None,
        }
    }

    pub fn pending() -> Self {
        Self {
            status: Status::Pending,
            data: None,
            error: None,
        }
    }

    pub fn resolved(data: T) -> Self {
        Self {
            status: Status::Resolved,
            data: Some(data),
            error: None,
        }
    }

    pub fn rejected(error: impl Into<ErrorBody>) -> Self {
        Self {
            status: Status::Rejected,
            data: None,
            error: Some(error.into()),
        }
    }

    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => Self::resolved(data),
            Err(err) => Self::rejected(err),
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.status == Status::Resolved
    }

    pub fn is_pending(&self) -> bool {
        self.status == Status::Pending
    }

    /// Raw JSON text of the error, as shown on screen.
    pub fn error_text(&self) -> Option<String> {
        self.error.as_ref().map(ErrorBody::to_json)
    }
}
