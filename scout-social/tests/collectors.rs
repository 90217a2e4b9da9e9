mod common;

use common::{CountingPacer, api_for, guarded};
use scout_social::medium::posts::collect_latest_post_ids;
use scout_social::medium::responses::collect_responses;
use scout_social::medium::{Handle, PostId, ScoutError, UserId};
use serde_json::json;
use std::collections::HashSet;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount(server: &MockServer, at: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(guarded(body))
        .mount(server)
        .await;
}

// ---------- identity ----------

#[tokio::test]
async fn resolves_user_id_and_back() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/@alice"))
        .and(query_param("format", "json"))
        .respond_with(guarded(json!({ "payload": { "user": { "userId": "U1", "name": "Alice" } } })))
        .expect(1)
        .mount(&server)
        .await;
    mount(
        &server,
        "/_/api/users/U1",
        json!({ "payload": { "value": { "userId": "U1", "username": "alice" } } }),
    )
    .await;

    let api = api_for(&server);
    let id = api.resolve_user_id(&Handle::from("alice")).await.unwrap();
    assert_eq!(id, UserId::from("U1"));
    let handle = api.resolve_handle(&id).await.unwrap();
    assert_eq!(handle, Handle::from("alice"));
}

#[tokio::test]
async fn missing_identity_fields_are_not_found() {
    let server = MockServer::start().await;
    mount(&server, "/@ghost", json!({ "payload": { "user": {} } })).await;
    mount(&server, "/_/api/users/U0", json!({ "payload": {} })).await;
    mount(&server, "/@empty", json!({ "success": true })).await;

    let api = api_for(&server);
    let err = api.resolve_user_id(&Handle::from("ghost")).await.unwrap_err();
    assert!(
        matches!(err, ScoutError::NotFound { path: "payload.user.userId" }),
        "got {err:?}"
    );
    let err = api.resolve_handle(&UserId::from("U0")).await.unwrap_err();
    assert!(
        matches!(err, ScoutError::NotFound { path: "payload.value.username" }),
        "got {err:?}"
    );
    let err = api.resolve_user_id(&Handle::from("empty")).await.unwrap_err();
    assert!(
        matches!(err, ScoutError::NotFound { path: "payload" }),
        "got {err:?}"
    );
}

// ---------- latest posts ----------

#[tokio::test]
async fn collects_post_ids_across_handles_and_skips_users_without_posts() {
    let server = MockServer::start().await;
    mount(
        &server,
        "/@bob/latest",
        json!({ "payload": { "references": { "Post": {
            "k1": { "id": "P1", "title": "one" },
            "k2": { "id": "P2", "title": "two" }
        }, "User": {} } } }),
    )
    .await;
    mount(&server, "/@carol/latest", json!({ "payload": { "references": {} } })).await;
    mount(&server, "/@dan/latest", json!({ "payload": {} })).await;
    mount(
        &server,
        "/@erin/latest",
        json!({ "payload": { "references": { "Post": { "k9": { "id": "P9" } } } } }),
    )
    .await;

    let handles: Vec<Handle> = ["bob", "carol", "dan", "erin"]
        .into_iter()
        .map(Handle::from)
        .collect();
    let ids = collect_latest_post_ids(&api_for(&server), &handles)
        .await
        .unwrap();

    // Map order within a handle is unspecified; handle order is not.
    assert_eq!(ids.len(), 3);
    let bob: HashSet<_> = ids[..2].iter().cloned().collect();
    assert_eq!(bob, HashSet::from([PostId::from("P1"), PostId::from("P2")]));
    assert_eq!(ids[2], PostId::from("P9"));
}

#[tokio::test]
async fn malformed_post_references_are_not_treated_as_empty() {
    let server = MockServer::start().await;
    mount(
        &server,
        "/@bob/latest",
        json!({ "payload": { "references": { "Post": ["P1"] } } }),
    )
    .await;

    let err = collect_latest_post_ids(&api_for(&server), &[Handle::from("bob")])
        .await
        .unwrap_err();
    assert!(matches!(err, ScoutError::Parse(_)), "got {err:?}");
}

#[tokio::test]
async fn failed_latest_fetch_is_not_treated_as_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/@bob/latest"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = collect_latest_post_ids(&api_for(&server), &[Handle::from("bob")])
        .await
        .unwrap_err();
    assert!(matches!(err, ScoutError::Transport(_)), "got {err:?}");
}

// ---------- responses ----------

#[tokio::test]
async fn collects_responses_in_post_order_and_paces_every_post() {
    let server = MockServer::start().await;
    mount(
        &server,
        "/_/api/posts/P1/responses",
        json!({ "payload": { "value": [
            { "creatorId": "U7", "createdAt": 1_000, "recommends": 3 },
            { "creatorId": "U8", "createdAt": 2_000, "virtuals": { "recommends": 4 } }
        ] } }),
    )
    .await;
    mount(
        &server,
        "/_/api/posts/P2/responses",
        json!({ "payload": { "value": [] } }),
    )
    .await;
    mount(
        &server,
        "/_/api/posts/P3/responses",
        json!({ "payload": { "value": [
            { "creatorId": "U7", "createdAt": 3_000, "recommends": 9 }
        ] } }),
    )
    .await;

    let pacer = CountingPacer::default();
    let posts: Vec<PostId> = ["P1", "P2", "P3"].into_iter().map(PostId::from).collect();
    let records = collect_responses(&api_for(&server), &pacer, &posts)
        .await
        .unwrap();

    let creators: Vec<_> = records.iter().map(|r| r.creator_id.as_str()).collect();
    assert_eq!(creators, ["U7", "U8", "U7"]);
    assert_eq!(records[1].recommends, 4);
    assert_eq!(pacer.pauses(), 3);
}

#[tokio::test]
async fn no_posts_means_no_requests_and_no_pauses() {
    let server = MockServer::start().await;
    let pacer = CountingPacer::default();
    let records = collect_responses(&api_for(&server), &pacer, &[])
        .await
        .unwrap();
    assert!(records.is_empty());
    assert_eq!(pacer.pauses(), 0);
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn responses_without_value_are_not_found() {
    let server = MockServer::start().await;
    mount(&server, "/_/api/posts/P1/responses", json!({ "payload": {} })).await;

    let err = collect_responses(
        &api_for(&server),
        &CountingPacer::default(),
        &[PostId::from("P1")],
    )
    .await
    .unwrap_err();
    assert!(
        matches!(err, ScoutError::NotFound { path: "payload.value" }),
        "got {err:?}"
    );
}
