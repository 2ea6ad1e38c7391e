//! Domain-shaped facade over the transport and the mock data source.
//!
//! # Design
//! Five fetch operations, one per view need; each is a thin pass-through
//! that frames fixed parameters, runs the shared call path and decodes the
//! per-method result shape. The only decision logic lives in the shared
//! path: did the transport fail, and if so, is mock fallback enabled.
//! Every call is independent and idempotent from the caller's point of
//! view; concurrent fetches (the post detail view issues post, comments and
//! poll at once) need no coordination here.

use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::config::Config;
use crate::error::ApiError;
use crate::mock::MockApi;
use crate::rpc::methods;
use crate::transport::Transport;
use crate::types::{
    Comment, CommentsResponse, FeedFilter, FeedPage, Poll, PollResponse, Post, PostResponse,
    User, UserResponse,
};

/// The one component the rendering layer talks to.
#[derive(Debug, Clone)]
pub struct FeedClient {
    transport: Transport,
    mock: MockApi,
    mock_fallback: bool,
    mock_only: bool,
}

impl FeedClient {
    pub fn new(config: Config) -> Self {
        FeedClient {
            transport: Transport::new(&config),
            mock: MockApi::new(config.mock_delay),
            mock_fallback: config.mock_fallback,
            mock_only: config.mock_only,
        }
    }

    /// Shared call path: transport first, mock data as the recovery point.
    ///
    /// With fallback disabled every transport error propagates unchanged.
    /// The mock path can itself fail (get-user on an unknown id); that
    /// failure is final — there is no further recovery.
    async fn call(&self, method: &str, params: Value) -> Result<Value, ApiError> {
        if self.mock_only {
            return self.mock.respond(method, &params).await;
        }
        match self.transport.call(method, params.clone()).await {
            Ok(result) => Ok(result),
            Err(err) if self.mock_fallback => {
                tracing::warn!(method, error = %err, "api call failed, serving mock data");
                self.mock.respond(method, &params).await
            }
            Err(err) => Err(err),
        }
    }

    /// List the feed under one of the four recognized orderings.
    pub async fn list_posts(&self, filter: FeedFilter) -> Result<Vec<Post>, ApiError> {
        let result = self
            .call(methods::FEED, json!({"filter": filter.as_str()}))
            .await?;
        let page: FeedPage = decode(result)?;
        Ok(page.posts)
    }

    /// Fetch a single post.
    pub async fn get_post(&self, post_uuid: &str) -> Result<Option<Post>, ApiError> {
        let result = self
            .call(methods::GET_POST, json!({"post_uuid": post_uuid}))
            .await?;
        let response: PostResponse = decode(result)?;
        Ok(response.post)
    }

    /// Fetch the comment tree for a post. A missing field decodes to an
    /// empty list.
    pub async fn get_comments(&self, post_uuid: &str) -> Result<Vec<Comment>, ApiError> {
        let result = self
            .call(methods::GET_COMMENTS, json!({"post_uuid": post_uuid}))
            .await?;
        let response: CommentsResponse = decode(result)?;
        Ok(response.comments)
    }

    /// Fetch the poll attached to a post, if any.
    pub async fn get_poll(&self, post_uuid: &str) -> Result<Option<Poll>, ApiError> {
        let result = self
            .call(methods::GET_POLL, json!({"post_uuid": post_uuid}))
            .await?;
        let response: PollResponse = decode(result)?;
        Ok(response.poll)
    }

    /// Fetch a user profile with that user's posts attached. Absence is
    /// always an error; a profile view has no meaningful empty state.
    pub async fn get_user(&self, user_uuid: &str) -> Result<User, ApiError> {
        let result = self
            .call(methods::GET_USER, json!({"user_uuid": user_uuid}))
            .await?;
        let response: UserResponse = decode(result)?;
        Ok(response.user)
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::MalformedResponse(e.to_string()))
}
