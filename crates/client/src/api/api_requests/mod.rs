mod arithmetic;
mod history;

pub use arithmetic::{Add, Divide, Multiply, Subtract};
pub use history::History;

use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;

/// Defintion of an API request
pub trait ApiRequest: Send + Sync {
    /// Has a response type
    type Response: DeserializeOwned;

    /// Builds a Reqwest request
    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder;
}

/// Appends `path` to the base address verbatim, so a base path like `/api`
/// survives. `Url::join` would replace it.
pub(crate) fn endpoint(base_url: &Url, path: &str) -> String {
    format!("{}{}", base_url.as_str().trim_end_matches('/'), path)
}
