//! Domain DTOs for the feed API.
//!
//! # Design
//! These types mirror the wire schema field for field. Every value is built
//! fresh from a decoded response (or from the mock data source) on each
//! fetch; nothing is mutated in place. Optional author fields are omitted
//! from JSON when absent so "unknown net worth" stays distinguishable from
//! "net worth of zero" across round-trips — only display code may collapse
//! the two, via [`Author::net_worth_or_zero`].

use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single feed post.
///
/// `views` and `votes` are sets of opaque viewer identifiers (which may
/// include the synthetic `"anon"`): membership is meaningful, order is not.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Post {
    pub uuid: String,
    pub body: String,
    pub author: Author,
    pub created_at: DateTime<Utc>,
    pub views: HashSet<String>,
    pub votes: HashSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poll: Option<Poll>,
}

/// Author summary embedded in posts and comments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Author {
    pub uuid: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_worth: Option<u64>,
}

impl Author {
    /// Net worth for display purposes only. Storage and serialization keep
    /// the `Option`; an absent net worth is not a net worth of zero.
    pub fn net_worth_or_zero(&self) -> u64 {
        self.net_worth.unwrap_or(0)
    }
}

/// A comment on a post. `replies` makes this a tree of arbitrary depth;
/// depth-limited rendering is the view layer's problem, not the data model's.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    pub uuid: String,
    pub body: String,
    pub author: Author,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replies: Option<Vec<Comment>>,
}

/// A poll attached to a post.
///
/// `total_votes` is authoritative as reported by the server and is not
/// required to equal the sum of the option counts; never recompute it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Poll {
    pub uuid: String,
    pub question: String,
    pub options: Vec<PollOption>,
    pub total_votes: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PollOption {
    pub text: String,
    pub votes: u64,
}

/// A user profile. `posts` is present only when the user was fetched via
/// the get-user operation, which attaches that user's posts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub uuid: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_worth: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posts: Option<Vec<Post>>,
}

impl User {
    /// Build a profile from an author summary plus that user's posts.
    pub fn from_author(author: Author, posts: Vec<Post>) -> Self {
        User {
            uuid: author.uuid,
            username: author.username,
            age: author.age,
            gender: author.gender,
            location: author.location,
            net_worth: author.net_worth,
            posts: Some(posts),
        }
    }
}

/// The four feed orderings the arena endpoint recognizes. The wire value is
/// the human-readable label, exactly as the remote API expects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedFilter {
    TopToday,
    NewToday,
    TopAllTime,
    ControversialAllTime,
}

impl FeedFilter {
    pub const ALL: [FeedFilter; 4] = [
        FeedFilter::TopToday,
        FeedFilter::NewToday,
        FeedFilter::TopAllTime,
        FeedFilter::ControversialAllTime,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FeedFilter::TopToday => "Top Today",
            FeedFilter::NewToday => "New Today",
            FeedFilter::TopAllTime => "Top All Time",
            FeedFilter::ControversialAllTime => "Controversial All Time",
        }
    }

    /// Parse a wire label back into a filter. Unrecognized labels yield
    /// `None`; the mock data source then serves the feed unordered.
    pub fn parse(label: &str) -> Option<FeedFilter> {
        FeedFilter::ALL.into_iter().find(|f| f.as_str() == label)
    }
}

impl fmt::Display for FeedFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result shape of the feed listing method: the posts plus aggregate
/// view/vote events the endpoint reports alongside them.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedPage {
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub views: Option<Vec<ViewEvent>>,
    #[serde(default)]
    pub votes: Option<Vec<VoteEvent>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewEvent {
    pub content_uuid: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VoteEvent {
    pub content_uuid: String,
    pub vote_type: i32,
}

/// Result shape of the get-post method.
#[derive(Debug, Clone, Deserialize)]
pub struct PostResponse {
    #[serde(default)]
    pub post: Option<Post>,
}

/// Result shape of the get-comments method.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentsResponse {
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// Result shape of the get-poll method.
#[derive(Debug, Clone, Deserialize)]
pub struct PollResponse {
    #[serde(default)]
    pub poll: Option<Poll>,
}

/// Result shape of the get-user method.
#[derive(Debug, Clone, Deserialize)]
pub struct UserResponse {
    pub user: User,
}
