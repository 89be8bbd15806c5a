use reqwest::StatusCode;

/// A failed request against the calculation service.
///
/// Every variant is the same failure from the caller's point of view: the
/// operation did not produce a result. The variants only record how it failed.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
    #[error("request failed: {0}")]
    Reqwest(#[from] reqwest::Error),
    /// The server answered with a non-2xx status. The message is the
    /// response body, or `HTTP <status>` when the body is empty.
    #[error("{}", status_message(.0, .1))]
    HttpStatus(StatusCode, String),
}

impl ApiError {
    /// Status code of the rejected response, if the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::HttpStatus(status, _) => Some(*status),
            ApiError::Reqwest(e) => e.status(),
            ApiError::Url(_) => None,
        }
    }
}

fn status_message(status: &StatusCode, body: &str) -> String {
    if body.is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        body.to_string()
    }
}
