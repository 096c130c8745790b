use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Url(#[from] url::ParseError),
    #[error("base URL cannot hold path segments")]
    InvalidBaseUrl,
    #[error("unexpected response status {0}")]
    Status(u16),
    #[error("upstream reported status {status}: {message}")]
    Upstream { status: u16, message: String },
    #[error("response is missing its data payload")]
    MissingData,
}
