use std::fmt;

#[derive(Debug, Clone)]
pub enum ApiError {
    /// Credential rejected (HTTP 401/403). Treated as fatal by callers.
    Unauthorized(String),
    /// The API answered but refused the request (`success: false` or a
    /// non-auth error status).
    Rejected { status: u16, message: String },
    /// The request never produced a usable response.
    Network(String),
    /// The response body did not match the expected shape.
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// Auth rejections invalidate the whole run; everything else only
    /// affects the entity being created.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unauthorized(message) => write!(f, "unauthorized: {message}"),
            ApiError::Rejected { status, message } => {
                write!(f, "api rejected request (status {status}): {message}")
            }
            ApiError::Network(message) => write!(f, "network error: {message}"),
            ApiError::Decode(message) => write!(f, "unexpected response body: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::decode(err.to_string())
        } else {
            ApiError::network(err.to_string())
        }
    }
}
