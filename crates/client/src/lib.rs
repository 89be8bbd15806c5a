mod api;
mod models;

pub mod prelude {
    pub use crate::api::{
        api_requests::{Add, ApiRequest, Divide, History, Multiply, Subtract},
        ApiClient,
    };
    pub use crate::models::{Calculation, OperandPair};
}

pub mod error {
    pub use crate::api::ApiError;
    pub use reqwest::StatusCode;
}
