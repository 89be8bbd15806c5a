use reqwest::{Client, RequestBuilder, Url};
use serde::Serialize;
use serde_json::Value;

use super::{endpoint, ApiRequest};
use crate::models::OperandPair;

macro_rules! arithmetic_request {
    ($(($name:ident, $path:literal)),* $(,)?) => {
        $(
            #[doc = concat!("`POST ", $path, "` with `{num1, num2}` as the body")]
            #[derive(Debug, Clone, Copy, PartialEq, Serialize)]
            pub struct $name(pub OperandPair);

            impl From<OperandPair> for $name {
                fn from(operands: OperandPair) -> Self {
                    Self(operands)
                }
            }

            impl ApiRequest for $name {
                type Response = Value;

                fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
                    client.post(endpoint(base_url, $path)).json(&self)
                }
            }
        )*
    };
}

arithmetic_request! {
    (Add, "/add"),
    (Subtract, "/subtract"),
    (Multiply, "/multiply"),
    (Divide, "/divide"),
}
