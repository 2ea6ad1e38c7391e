//! JSON-RPC test double for the feed endpoint.
//!
//! Serves the whole API from one `POST /` route over a small fixture
//! dataset. Fixtures are written as raw JSON, independent of the core
//! crate's DTOs; integration tests catch schema drift between the two.
//! Unknown methods and unknown user ids answer with error envelopes so
//! clients can exercise their `RpcError` classification, and a dedicated
//! stall method never answers within any reasonable timeout so clients can
//! exercise their abort path.

use std::time::Duration;

use axum::{routing::post, Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Method that sleeps far longer than any sane client timeout.
pub const STALL_METHOD: &str = "/v1/test/stall";

const STALL: Duration = Duration::from_secs(30);

/// Inbound request envelope.
#[derive(Debug, Deserialize)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub id: String,
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

type RpcOutcome = Result<Value, (i64, String)>;

pub fn app() -> Router {
    Router::new().route("/", post(handle_rpc))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn handle_rpc(Json(request): Json<RpcRequest>) -> Json<Value> {
    let outcome = match request.method.as_str() {
        "/v1/posts/arena" => Ok(feed()),
        "/v1/posts/get" => get_post(&request.params),
        "/v1/comments/get" => Ok(get_comments(&request.params)),
        "/v1/polls/get" => Ok(get_poll(&request.params)),
        "/v1/users/get" => get_user(&request.params),
        STALL_METHOD => {
            tokio::time::sleep(STALL).await;
            Ok(Value::Null)
        }
        other => Err((-32601, format!("method not found: {other}"))),
    };

    Json(match outcome {
        Ok(result) => json!({"result": result}),
        Err((code, message)) => json!({"error": {"code": code, "message": message}}),
    })
}

fn str_param<'a>(params: &'a Value, key: &str) -> &'a str {
    params.get(key).and_then(Value::as_str).unwrap_or_default()
}

fn feed() -> Value {
    json!({
        "posts": [post_fixture("post-1"), post_fixture("post-2")],
        "views": [{"content_uuid": "post-1"}],
        "votes": [{"content_uuid": "post-1", "vote_type": 1}],
    })
}

fn get_post(params: &Value) -> RpcOutcome {
    let uuid = str_param(params, "post_uuid");
    post_fixture(uuid)
        .map(|post| json!({"post": post}))
        .ok_or_else(|| (-32004, format!("post not found: {uuid}")))
}

fn get_comments(params: &Value) -> Value {
    if str_param(params, "post_uuid") == "post-1" {
        json!({"comments": [
            {
                "uuid": "comment-1",
                "body": "Congrats, what was the hardest part?",
                "author": user_fixture("user-2"),
                "created_at": "2024-01-15T11:00:00Z",
                "replies": [{
                    "uuid": "reply-1",
                    "body": "Finding product-market fit, by far.",
                    "author": user_fixture("user-1"),
                    "created_at": "2024-01-15T11:15:00Z",
                }],
            },
            {
                "uuid": "comment-2",
                "body": "Inspiring. How did you bootstrap?",
                "author": user_fixture("user-2"),
                "created_at": "2024-01-15T11:30:00Z",
            },
        ]})
    } else {
        json!({"comments": []})
    }
}

fn get_poll(params: &Value) -> Value {
    let poll = if str_param(params, "post_uuid") == "post-1" {
        poll_fixture()
    } else {
        Value::Null
    };
    json!({"poll": poll})
}

fn get_user(params: &Value) -> RpcOutcome {
    let uuid = str_param(params, "user_uuid");
    let user = user_fixture(uuid).ok_or_else(|| (-32004, format!("user not found: {uuid}")))?;
    let posts: Vec<Value> = ["post-1", "post-2"]
        .iter()
        .filter_map(|id| post_fixture(id))
        .filter(|p| p["author"]["uuid"] == uuid)
        .collect();

    let mut user = user;
    user["posts"] = json!(posts);
    Ok(json!({"user": user}))
}

fn user_fixture(uuid: &str) -> Option<Value> {
    match uuid {
        "user-1" => Some(json!({
            "uuid": "user-1",
            "username": "CryptoKing",
            "age": 28,
            "gender": "Male",
            "location": "San Francisco, CA",
            "net_worth": 2_500_000,
        })),
        // Deliberately sparse: only the required fields.
        "user-2" => Some(json!({
            "uuid": "user-2",
            "username": "TechGuru",
        })),
        _ => None,
    }
}

fn post_fixture(uuid: &str) -> Option<Value> {
    match uuid {
        "post-1" => Some(json!({
            "uuid": "post-1",
            "body": "Just sold my startup! Ask me anything.",
            "author": user_fixture("user-1"),
            "created_at": "2024-01-15T10:30:00Z",
            "views": ["anon", "user-2", "user-3"],
            "votes": ["anon", "user-2"],
            "poll": poll_fixture(),
        })),
        "post-2" => Some(json!({
            "uuid": "post-2",
            "body": "The AI revolution is moving faster than predicted.",
            "author": user_fixture("user-2"),
            "created_at": "2024-01-15T09:15:00Z",
            "views": ["anon", "user-1"],
            "votes": ["anon"],
        })),
        _ => None,
    }
}

fn poll_fixture() -> Value {
    json!({
        "uuid": "poll-1",
        "question": "What's the most important factor for startup success?",
        "options": [
            {"text": "Product-Market Fit", "votes": 45},
            {"text": "Team Quality", "votes": 32},
            {"text": "Timing", "votes": 28},
            {"text": "Funding", "votes": 15},
        ],
        "total_votes": 120,
    })
}
