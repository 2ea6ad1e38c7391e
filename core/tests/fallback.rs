//! Behavior of the facade in mock-only mode: the transport is never
//! touched, every operation is served from the seed dataset.

use std::time::{Duration, Instant};

use feed_core::{ApiError, Config, FeedClient, FeedFilter};

fn mock_client() -> FeedClient {
    FeedClient::new(Config {
        // Guarantee nothing ever answers here.
        base_url: "http://127.0.0.1:1".to_string(),
        mock_only: true,
        mock_delay: Duration::from_millis(5),
        ..Config::default()
    })
}

fn uuids(posts: &[feed_core::Post]) -> Vec<&str> {
    posts.iter().map(|p| p.uuid.as_str()).collect()
}

#[tokio::test]
async fn every_filter_preserves_cardinality() {
    let client = mock_client();
    for filter in FeedFilter::ALL {
        let posts = client.list_posts(filter).await.unwrap();
        assert_eq!(posts.len(), 5, "filter {filter}");
    }
}

#[tokio::test]
async fn repeated_calls_return_identical_orderings() {
    let client = mock_client();
    for filter in FeedFilter::ALL {
        let first = client.list_posts(filter).await.unwrap();
        let second = client.list_posts(filter).await.unwrap();
        assert_eq!(first, second, "filter {filter} must not mutate the seed");
    }
}

#[tokio::test]
async fn top_today_sorts_by_vote_count_descending() {
    let posts = mock_client().list_posts(FeedFilter::TopToday).await.unwrap();
    assert_eq!(uuids(&posts), vec!["post-2", "post-5", "post-3", "post-4", "post-1"]);
}

#[tokio::test]
async fn new_today_sorts_most_recent_first() {
    let posts = mock_client().list_posts(FeedFilter::NewToday).await.unwrap();
    assert_eq!(uuids(&posts), vec!["post-1", "post-2", "post-3", "post-4", "post-5"]);
}

#[tokio::test]
async fn top_all_time_sorts_by_votes_plus_views() {
    let posts = mock_client().list_posts(FeedFilter::TopAllTime).await.unwrap();
    assert_eq!(uuids(&posts), vec!["post-5", "post-2", "post-3", "post-4", "post-1"]);
}

#[tokio::test]
async fn controversial_puts_near_half_ratios_first() {
    let posts = mock_client()
        .list_posts(FeedFilter::ControversialAllTime)
        .await
        .unwrap();
    let order = uuids(&posts);

    // post-1 is closest to a 50% vote-to-view ratio; post-3 and post-4 are
    // equally distant and must both precede the far-out post-5 and post-2.
    assert_eq!(order[0], "post-1");
    let pos = |id: &str| order.iter().position(|p| *p == id).unwrap();
    assert!(pos("post-3") < pos("post-5") && pos("post-3") < pos("post-2"));
    assert!(pos("post-4") < pos("post-5") && pos("post-4") < pos("post-2"));
    assert!(pos("post-5") < pos("post-2"));
}

#[tokio::test]
async fn get_post_finds_seed_posts_and_defaults_unknown_ids() {
    let client = mock_client();

    let post = client.get_post("post-3").await.unwrap().unwrap();
    assert_eq!(post.uuid, "post-3");

    // Deliberate leniency: an unknown id serves the first seed post rather
    // than an empty result.
    let post = client.get_post("post-999").await.unwrap().unwrap();
    assert_eq!(post.uuid, "post-1");
}

#[tokio::test]
async fn only_post_1_owns_the_seeded_comment_thread() {
    let client = mock_client();

    let comments = client.get_comments("post-1").await.unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].replies.as_ref().unwrap().len(), 1);
    assert!(comments[1].replies.is_none());

    assert!(client.get_comments("post-2").await.unwrap().is_empty());
}

#[tokio::test]
async fn get_poll_returns_embedded_poll_or_absent() {
    let client = mock_client();

    let poll = client.get_poll("post-1").await.unwrap().unwrap();
    assert_eq!(poll.uuid, "poll-1");
    assert_eq!(poll.total_votes, 120);
    assert_eq!(poll.options.len(), 4);

    assert!(client.get_poll("post-2").await.unwrap().is_none());
}

#[tokio::test]
async fn get_user_merges_exactly_that_users_posts() {
    let user = mock_client().get_user("user-1").await.unwrap();
    assert_eq!(user.username, "CryptoKing");
    let posts = user.posts.unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].uuid, "post-1");
}

#[tokio::test]
async fn get_user_unknown_id_is_not_found() {
    let err = mock_client().get_user("does-not-exist").await.unwrap_err();
    assert_eq!(err, ApiError::NotFound);
}

#[tokio::test]
async fn mock_responses_honor_the_artificial_delay() {
    let client = FeedClient::new(Config {
        base_url: "http://127.0.0.1:1".to_string(),
        mock_only: true,
        mock_delay: Duration::from_millis(50),
        ..Config::default()
    });

    let started = Instant::now();
    client.get_poll("post-1").await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(50));
}
