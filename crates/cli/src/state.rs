use calc_client::prelude::*;

use crate::config::Config;

/// Everything an op needs, resolved once at startup
pub struct AppState {
    config: Config,
    client: ApiClient,
}

impl AppState {
    pub fn from_config(config: Config) -> Result<Self, AppStateSetupError> {
        let client = ApiClient::new(config.api_base_url().as_str())?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppStateSetupError {
    #[error("api error: {0}")]
    ApiError(#[from] calc_client::error::ApiError),
}
