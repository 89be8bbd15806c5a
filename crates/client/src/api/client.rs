use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE},
    Client, Url,
};
use serde_json::Value;

use super::api_requests::{Add, ApiRequest, Divide, History, Multiply, Subtract};
use super::error::ApiError;
use crate::models::OperandPair;

#[derive(Debug, Clone)]
/// ApiClient for interacting with the calculation service
pub struct ApiClient {
    /// Base URL every request path is appended to
    pub remote: Url,
    client: Client,
}

impl ApiClient {
    /// Create a new ApiClient at a remote endpoint
    /// # Arguments
    /// * `remote` - The base URL for the API, e.g. `http://localhost:5000/api`
    /// # Returns
    /// * `Self` - The client
    pub fn new(remote: &str) -> Result<Self, ApiError> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let client = Client::builder().default_headers(default_headers).build()?;

        Ok(Self {
            remote: Url::parse(remote)?,
            client,
        })
    }

    /// Call a method that implements ApiRequest on the calculation service
    pub async fn call<T: ApiRequest>(&self, request: T) -> Result<T::Response, ApiError> {
        let request = request.build_request(&self.remote, &self.client).build()?;
        tracing::debug!(method = %request.method(), url = %request.url(), "sending request");

        let response = self.client.execute(request).await?;
        let status = response.status();
        tracing::debug!(status = status.as_u16(), "received response");

        if status.is_success() {
            Ok(response.json::<T::Response>().await?)
        } else {
            // A body we cannot read is reported the same as an empty one
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "request rejected by server");
            Err(ApiError::HttpStatus(status, body))
        }
    }

    pub async fn add(&self, operands: OperandPair) -> Result<Value, ApiError> {
        self.call(Add(operands)).await
    }

    pub async fn subtract(&self, operands: OperandPair) -> Result<Value, ApiError> {
        self.call(Subtract(operands)).await
    }

    pub async fn multiply(&self, operands: OperandPair) -> Result<Value, ApiError> {
        self.call(Multiply(operands)).await
    }

    pub async fn divide(&self, operands: OperandPair) -> Result<Value, ApiError> {
        self.call(Divide(operands)).await
    }

    /// Fetch the server's calculation history
    pub async fn history(&self) -> Result<Value, ApiError> {
        self.call(History).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_invalid_remote() {
        assert!(matches!(ApiClient::new("::not a url"), Err(ApiError::Url(_))));
    }

    #[test]
    fn new_keeps_remote_path() {
        let client = ApiClient::new("http://localhost:5000/api").unwrap();
        assert_eq!(client.remote.as_str(), "http://localhost:5000/api");
    }
}
