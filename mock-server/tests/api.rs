use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::app;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn rpc_request(method: &str, params: Value) -> Request<String> {
    let body = json!({
        "jsonrpc": "2.0",
        "id": "test-id",
        "method": method,
        "params": params,
    });
    Request::builder()
        .method("POST")
        .uri("/")
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

#[tokio::test]
async fn feed_returns_posts_and_aggregates() {
    let resp = app()
        .oneshot(rpc_request("/v1/posts/arena", json!({"filter": "Top Today"})))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let posts = body["result"]["posts"].as_array().unwrap();
    assert_eq!(posts.len(), 2);
    assert!(body["result"]["views"].is_array());
    assert!(body["result"]["votes"].is_array());
}

#[tokio::test]
async fn get_post_returns_matching_fixture() {
    let resp = app()
        .oneshot(rpc_request("/v1/posts/get", json!({"post_uuid": "post-1"})))
        .await
        .unwrap();

    let body = body_json(resp).await;
    assert_eq!(body["result"]["post"]["uuid"], "post-1");
    assert_eq!(body["result"]["post"]["poll"]["total_votes"], 120);
}

#[tokio::test]
async fn get_post_unknown_id_yields_error_envelope() {
    let resp = app()
        .oneshot(rpc_request("/v1/posts/get", json!({"post_uuid": "post-404"})))
        .await
        .unwrap();

    // JSON-RPC errors travel in a 200 response; the envelope carries the
    // failure.
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["error"]["code"], -32004);
    assert!(body.get("result").is_none());
}

#[tokio::test]
async fn get_comments_only_post_1_has_a_thread() {
    let resp = app()
        .oneshot(rpc_request("/v1/comments/get", json!({"post_uuid": "post-1"})))
        .await
        .unwrap();
    let body = body_json(resp).await;
    let comments = body["result"]["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0]["replies"].as_array().unwrap().len(), 1);

    let resp = app()
        .oneshot(rpc_request("/v1/comments/get", json!({"post_uuid": "post-2"})))
        .await
        .unwrap();
    let body = body_json(resp).await;
    assert!(body["result"]["comments"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn get_poll_absent_is_null() {
    let resp = app()
        .oneshot(rpc_request("/v1/polls/get", json!({"post_uuid": "post-2"})))
        .await
        .unwrap();
    let body = body_json(resp).await;
    assert!(body["result"]["poll"].is_null());
}

#[tokio::test]
async fn unknown_method_yields_method_not_found() {
    let resp = app()
        .oneshot(rpc_request("/v1/does/not/exist", json!({})))
        .await
        .unwrap();
    let body = body_json(resp).await;
    assert_eq!(body["error"]["code"], -32601);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("/v1/does/not/exist"));
}

#[tokio::test]
async fn malformed_body_is_rejected_at_http_level() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .header(http::header::CONTENT_TYPE, "application/json")
                .body("not json".to_string())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(resp.status().is_client_error());
}
