//! Exercises `ApiClient` against a local mock of the calculation service.

use httpmock::prelude::*;
use serde_json::{json, Value};

use calc_client::error::ApiError;
use calc_client::prelude::*;

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(&server.url("/api")).unwrap()
}

#[tokio::test]
async fn arithmetic_ops_post_operands_to_their_path() {
    let server = MockServer::start_async().await;
    let client = client_for(&server);

    let cases = [
        ("/api/add", 7.0),
        ("/api/subtract", -1.0),
        ("/api/multiply", 12.0),
        ("/api/divide", 0.75),
    ];

    for (path, result) in cases {
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path(path)
                    .header("content-type", "application/json")
                    .json_body(json!({"num1": 3.0, "num2": 4.0}));
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(json!({"result": result}));
            })
            .await;

        let operands = OperandPair::new(3.0, 4.0);
        let response = match path {
            "/api/add" => client.add(operands).await,
            "/api/subtract" => client.subtract(operands).await,
            "/api/multiply" => client.multiply(operands).await,
            _ => client.divide(operands).await,
        }
        .unwrap();

        assert_eq!(response, json!({"result": result}));
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn history_is_a_get_without_body() {
    let server = MockServer::start_async().await;
    let history = json!([
        {
            "id": "b7d4",
            "expression": "1 + 2",
            "result": 3,
            "error": null,
            "timestamp": 1_700_000_000_000i64,
        }
    ]);
    let body = history.clone();
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/history")
                .header("content-type", "application/json")
                .body("");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(body);
        })
        .await;

    let response = client_for(&server).history().await.unwrap();

    assert_eq!(response, history);
    let calcs = Calculation::list_from_value(&response).unwrap();
    assert_eq!(calcs[0].to_string(), "1 + 2 = 3");
    mock.assert_async().await;
}

#[tokio::test]
async fn success_payload_is_returned_verbatim() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/add");
            then.status(200).body(r#"{"result": 7}"#);
        })
        .await;

    let response = client_for(&server)
        .call(Add(OperandPair::new(3.0, 4.0)))
        .await
        .unwrap();

    assert_eq!(response["result"], 7);
}

#[tokio::test]
async fn client_error_carries_body_text() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/divide");
            then.status(400).body("bad input");
        })
        .await;

    let err = client_for(&server)
        .divide(OperandPair::new(1.0, 0.0))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::HttpStatus(_, _)));
    assert_eq!(err.status().map(|s| s.as_u16()), Some(400));
    assert_eq!(err.to_string(), "bad input");
}

#[tokio::test]
async fn server_error_without_body_reports_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/history");
            then.status(500);
        })
        .await;

    let err = client_for(&server).history().await.unwrap_err();

    assert_eq!(err.to_string(), "HTTP 500");
}

#[tokio::test]
async fn base_address_is_prefixed_verbatim() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/v2/calc/multiply");
            then.status(200).json_body(json!({"result": 10}));
        })
        .await;

    let client = ApiClient::new(&server.url("/v2/calc")).unwrap();
    let response = client.multiply(OperandPair::new(2.0, 5.0)).await.unwrap();

    assert_eq!(response, json!({"result": 10}));
    mock.assert_async().await;
}

#[tokio::test]
async fn malformed_success_body_is_an_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/subtract");
            then.status(200).body("not json");
        })
        .await;

    let err = client_for(&server)
        .subtract(OperandPair::new(5.0, 2.0))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Reqwest(_)));
}

#[tokio::test]
async fn transport_failure_is_an_error() {
    // Nothing listens on the discard port
    let client = ApiClient::new("http://127.0.0.1:9/api").unwrap();

    let err = client.history().await.unwrap_err();

    assert!(matches!(err, ApiError::Reqwest(_)));
    assert!(err.status().is_none());
}

#[tokio::test]
async fn arbitrary_json_passes_through() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/history");
            then.status(200).body("[]");
        })
        .await;

    let response: Value = client_for(&server).call(History).await.unwrap();

    assert_eq!(response, json!([]));
}
