//! Network-free fallback data source.
//!
//! # Design
//! A fixed in-memory seed (5 authors across distinct net-worth tiers, 5
//! posts with one embedded poll, a 2-comment tree with one nested reply)
//! plus per-method synthesis keyed on the same method strings the transport
//! would send. Responses are wire-shaped [`Value`]s so the facade decodes
//! transport output and mock output through one path. Seed constructors
//! build fresh values on every call; feed sorting therefore always works on
//! a copy and can never corrupt later calls.
//!
//! The synthesis is deliberately permissive: an unknown post id yields a
//! default post, an unknown method yields a generic acknowledgement. The
//! single strict lookup is get-user, which fails with `NotFound` — a
//! profile view has no meaningful empty state.

use std::collections::HashSet;
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::rpc::methods;
use crate::types::{Author, Comment, FeedFilter, Poll, PollOption, Post, User};

/// Serves synthetic responses for every known method, after an artificial
/// delay that emulates network latency.
#[derive(Debug, Clone)]
pub struct MockApi {
    delay: Duration,
}

impl MockApi {
    pub fn new(delay: Duration) -> Self {
        MockApi { delay }
    }

    /// Synthesize the response for `method`, mirroring the shapes the real
    /// endpoint returns.
    pub async fn respond(&self, method: &str, params: &Value) -> Result<Value, ApiError> {
        tokio::time::sleep(self.delay).await;
        match method {
            methods::FEED => Ok(feed_response(params)),
            methods::GET_POST => Ok(post_response(params)),
            methods::GET_COMMENTS => Ok(comments_response(params)),
            methods::GET_POLL => Ok(poll_response(params)),
            methods::GET_USER => user_response(params),
            // Unknown future methods get a generic acknowledgement rather
            // than a crash.
            _ => Ok(json!({"status": "ok", "method": method, "params": params})),
        }
    }
}

fn str_param<'a>(params: &'a Value, key: &str) -> &'a str {
    params.get(key).and_then(Value::as_str).unwrap_or_default()
}

fn feed_response(params: &Value) -> Value {
    let filter = FeedFilter::parse(str_param(params, "filter"));
    let posts = sorted_feed(filter);
    // Fixed aggregate view/vote events, unrelated to the ordering, mirroring
    // what the real feed endpoint additionally reports.
    json!({
        "posts": posts,
        "views": [
            {"content_uuid": "post-1"},
            {"content_uuid": "post-2"},
            {"content_uuid": "post-3"},
        ],
        "votes": [
            {"content_uuid": "post-1", "vote_type": 1},
            {"content_uuid": "post-2", "vote_type": 1},
            {"content_uuid": "post-3", "vote_type": -1},
        ],
    })
}

fn post_response(params: &Value) -> Value {
    let uuid = str_param(params, "post_uuid");
    let posts = seed_posts();
    // Unknown ids fall back to the first seed post: a deliberate leniency so
    // the detail view always has something to show, not a "found" semantic.
    let post = posts.iter().find(|p| p.uuid == uuid).or_else(|| posts.first());
    json!({"post": post})
}

fn comments_response(params: &Value) -> Value {
    let comments = if str_param(params, "post_uuid") == "post-1" {
        seed_comments()
    } else {
        Vec::new()
    };
    json!({"comments": comments})
}

fn poll_response(params: &Value) -> Value {
    let uuid = str_param(params, "post_uuid");
    let poll = seed_posts().into_iter().find(|p| p.uuid == uuid).and_then(|p| p.poll);
    json!({"poll": poll})
}

fn user_response(params: &Value) -> Result<Value, ApiError> {
    let uuid = str_param(params, "user_uuid");
    let author = seed_users()
        .into_iter()
        .find(|u| u.uuid == uuid)
        .ok_or(ApiError::NotFound)?;
    let posts: Vec<Post> = seed_posts().into_iter().filter(|p| p.author.uuid == uuid).collect();
    Ok(json!({"user": User::from_author(author, posts)}))
}

/// A fresh copy of the seed posts, reordered per `filter`. `None` (an
/// unrecognized label) serves the seed order unchanged.
fn sorted_feed(filter: Option<FeedFilter>) -> Vec<Post> {
    let mut posts = seed_posts();
    match filter {
        Some(FeedFilter::TopToday) => {
            posts.sort_by(|a, b| b.votes.len().cmp(&a.votes.len()));
        }
        Some(FeedFilter::NewToday) => {
            posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        }
        Some(FeedFilter::TopAllTime) => {
            posts.sort_by(|a, b| {
                (b.votes.len() + b.views.len()).cmp(&(a.votes.len() + a.views.len()))
            });
        }
        Some(FeedFilter::ControversialAllTime) => {
            // Posts whose vote-to-view ratio sits closest to 50% sort first.
            posts.sort_by(|a, b| controversy(a).total_cmp(&controversy(b)));
        }
        None => {}
    }
    posts
}

/// Absolute distance of the vote-to-view ratio from 0.5. No views counts as
/// a ratio of 0.
fn controversy(post: &Post) -> f64 {
    let ratio = if post.views.is_empty() {
        0.0
    } else {
        post.votes.len() as f64 / post.views.len() as f64
    };
    (0.5 - ratio).abs()
}

fn ids(members: &[&str]) -> HashSet<String> {
    members.iter().map(|m| (*m).to_string()).collect()
}

// All seed activity happens on one synthetic day.
fn ts(hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, hour, min, 0)
        .single()
        .expect("valid seed timestamp")
}

fn seed_author(n: usize) -> Author {
    seed_users().swap_remove(n)
}

/// The five seed authors, one per net-worth tier.
pub fn seed_users() -> Vec<Author> {
    vec![
        Author {
            uuid: "user-1".to_string(),
            username: "CryptoKing".to_string(),
            age: Some(28),
            gender: Some("Male".to_string()),
            location: Some("San Francisco, CA".to_string()),
            net_worth: Some(2_500_000),
        },
        Author {
            uuid: "user-2".to_string(),
            username: "TechGuru".to_string(),
            age: Some(35),
            gender: Some("Male".to_string()),
            location: Some("Seattle, WA".to_string()),
            net_worth: Some(1_800_000),
        },
        Author {
            uuid: "user-3".to_string(),
            username: "StartupQueen".to_string(),
            age: Some(31),
            gender: Some("Female".to_string()),
            location: Some("Austin, TX".to_string()),
            net_worth: Some(3_200_000),
        },
        Author {
            uuid: "user-4".to_string(),
            username: "InvestorPro".to_string(),
            age: Some(42),
            gender: Some("Male".to_string()),
            location: Some("New York, NY".to_string()),
            net_worth: Some(8_500_000),
        },
        Author {
            uuid: "user-5".to_string(),
            username: "FinanceWiz".to_string(),
            age: Some(29),
            gender: Some("Female".to_string()),
            location: Some("Boston, MA".to_string()),
            net_worth: Some(1_200_000),
        },
    ]
}

/// The five seed posts; post-1 carries the one embedded poll and owns the
/// seeded comment tree.
pub fn seed_posts() -> Vec<Post> {
    vec![
        Post {
            uuid: "post-1".to_string(),
            body: "Just sold my startup for $50M! The journey from my garage to this exit has \
                   been incredible. Key lesson: focus on solving real problems, not just \
                   building cool tech."
                .to_string(),
            author: seed_author(0),
            created_at: ts(10, 30),
            views: ids(&["anon", "user-2", "user-3"]),
            votes: ids(&["anon", "user-2"]),
            poll: Some(Poll {
                uuid: "poll-1".to_string(),
                question: "What's the most important factor for startup success?".to_string(),
                options: vec![
                    PollOption { text: "Product-Market Fit".to_string(), votes: 45 },
                    PollOption { text: "Team Quality".to_string(), votes: 32 },
                    PollOption { text: "Timing".to_string(), votes: 28 },
                    PollOption { text: "Funding".to_string(), votes: 15 },
                ],
                total_votes: 120,
            }),
        },
        Post {
            uuid: "post-2".to_string(),
            body: "The AI revolution is happening faster than anyone predicted. Companies that \
                   don't adapt will be left behind. What's your take on the future of work?"
                .to_string(),
            author: seed_author(1),
            created_at: ts(9, 15),
            views: ids(&["anon", "user-1", "user-4"]),
            votes: ids(&["anon", "user-1", "user-4", "user-5"]),
            poll: None,
        },
        Post {
            uuid: "post-3".to_string(),
            body: "Diversification is key! Don't put all your eggs in one basket. My portfolio: \
                   40% stocks, 30% real estate, 20% crypto, 10% bonds. How do you allocate?"
                .to_string(),
            author: seed_author(3),
            created_at: ts(8, 45),
            views: ids(&["anon", "user-1", "user-2", "user-5"]),
            votes: ids(&["anon", "user-2", "user-5"]),
            poll: None,
        },
        Post {
            uuid: "post-4".to_string(),
            body: "Remote work is here to stay. My team's productivity increased 40% since \
                   going fully remote. The key is trust and clear communication."
                .to_string(),
            author: seed_author(2),
            created_at: ts(7, 20),
            views: ids(&["anon", "user-1", "user-3", "user-4"]),
            votes: ids(&["anon", "user-1", "user-3"]),
            poll: None,
        },
        Post {
            uuid: "post-5".to_string(),
            body: "Compound interest is the 8th wonder of the world. Started investing \
                   $500/month at 25, now worth $2.3M at 45. Start early, stay consistent!"
                .to_string(),
            author: seed_author(4),
            created_at: ts(6, 30),
            views: ids(&["anon", "user-2", "user-3", "user-4"]),
            votes: ids(&["anon", "user-2", "user-3", "user-4"]),
            poll: None,
        },
    ]
}

/// The seeded comment tree for post-1: two top-level comments, the first
/// carrying one nested reply.
pub fn seed_comments() -> Vec<Comment> {
    vec![
        Comment {
            uuid: "comment-1".to_string(),
            body: "Congratulations! What was the biggest challenge you faced during the journey?"
                .to_string(),
            author: seed_author(1),
            created_at: ts(11, 0),
            replies: Some(vec![Comment {
                uuid: "reply-1".to_string(),
                body: "Thanks! The biggest challenge was finding product-market fit. We pivoted \
                       3 times before getting it right."
                    .to_string(),
                author: seed_author(0),
                created_at: ts(11, 15),
                replies: None,
            }]),
        },
        Comment {
            uuid: "comment-2".to_string(),
            body: "This is inspiring! How did you handle the early days when you had no funding?"
                .to_string(),
            author: seed_author(4),
            created_at: ts(11, 30),
            replies: None,
        },
    ]
}
