//! Integration tests for the dashboard endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use serde_json::json;
use sqlx::PgPool;

fn slice_count(slices: &serde_json::Value, value: &str) -> i64 {
    slices
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["value"] == value)
        .unwrap()["count"]
        .as_i64()
        .unwrap()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_collection_renders_the_zero_state(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/dashboard").await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = body_json(response).await["data"].clone();
    assert_eq!(data["total"], 0);

    // Every enumerated value is present with a zero count and zero share.
    let by_priority = data["by_priority"].as_array().unwrap();
    assert_eq!(by_priority.len(), 4);
    for slice in by_priority {
        assert_eq!(slice["count"], 0);
        assert_eq!(slice["share"], 0.0);
    }
    assert_eq!(data["by_status"].as_array().unwrap().len(), 5);

    assert!(data["recent"].as_array().unwrap().is_empty());
    assert!(data["top_tags"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn submission_increments_total_and_priority_count(pool: PgPool) {
    let app = common::build_test_app(pool);

    let before = body_json(get(app.clone(), "/api/v1/dashboard").await).await["data"].clone();
    assert_eq!(before["total"], 0);

    let response = post_json(
        app.clone(),
        "/api/v1/bugs",
        json!({
            "title": "Login fails",
            "priority": "Critical",
            "reporter_name": "Alice",
            "tags": "auth, login"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let after = body_json(get(app, "/api/v1/dashboard").await).await["data"].clone();

    assert_eq!(after["total"], 1);
    assert_eq!(slice_count(&after["by_priority"], "Critical"), 1);
    assert_eq!(slice_count(&after["by_status"], "Open"), 1);

    let recent = after["recent"].as_array().unwrap();
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0]["title"], "Login fails");

    let tags: Vec<&str> = after["top_tags"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["tag"].as_str().unwrap())
        .collect();
    assert_eq!(tags, vec!["auth", "login"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn recent_is_capped_at_five_newest(pool: PgPool) {
    let app = common::build_test_app(pool);

    for i in 1..=7 {
        let response = post_json(
            app.clone(),
            "/api/v1/bugs",
            json!({ "title": format!("bug {i}"), "reporter_name": "Alice" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let data = body_json(get(app, "/api/v1/dashboard").await).await["data"].clone();

    assert_eq!(data["total"], 7);
    let recent: Vec<&str> = data["recent"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["title"].as_str().unwrap())
        .collect();
    assert_eq!(recent, vec!["bug 7", "bug 6", "bug 5", "bug 4", "bug 3"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn top_tags_rank_by_frequency_across_bugs(pool: PgPool) {
    let app = common::build_test_app(pool);

    for tags in ["auth, ui", "auth", "perf"] {
        let response = post_json(
            app.clone(),
            "/api/v1/bugs",
            json!({ "title": "bug", "reporter_name": "Alice", "tags": tags }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let data = body_json(get(app, "/api/v1/dashboard").await).await["data"].clone();

    let top = data["top_tags"].as_array().unwrap();
    assert_eq!(top[0]["tag"], "auth");
    assert_eq!(top[0]["count"], 2);
}
