use reqwest::{Client, RequestBuilder, Url};
use serde_json::Value;

use super::{endpoint, ApiRequest};

/// `GET /history`, no body
#[derive(Debug, Clone, Copy)]
pub struct History;

impl ApiRequest for History {
    type Response = Value;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        client.get(endpoint(base_url, "/history"))
    }
}
