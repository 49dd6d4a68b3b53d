mod common;

use serde_json::{Value, json};

#[tokio::test]
async fn test_stats_for_link_without_clicks() {
    let (store, server) = common::setup();
    let link = common::create_test_link(&store, "quiet1").await;

    let response = server.get(&format!("/api/links/{}/stats", link.id)).await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({ "total_clicks": 0, "bot_clicks": 0, "country_stats": [] })
    );
}

#[tokio::test]
async fn test_stats_groups_by_country() {
    let (store, server) = common::setup();
    let link = common::create_test_link(&store, "busy01").await;
    let other = common::create_test_link(&store, "other1").await;

    common::create_test_click(&store, link.id, "US", false).await;
    common::create_test_click(&store, link.id, "US", true).await;
    common::create_test_click(&store, link.id, "FR", false).await;
    common::create_test_click(&store, link.id, "US", false).await;
    common::create_test_click(&store, other.id, "DE", true).await;

    let response = server.get(&format!("/api/links/{}/stats", link.id)).await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({
            "total_clicks": 4,
            "bot_clicks": 1,
            "country_stats": [
                { "country": "US", "count": 3 },
                { "country": "FR", "count": 1 }
            ]
        })
    );
}

#[tokio::test]
async fn test_stats_ties_ordered_by_country() {
    let (store, server) = common::setup();
    let link = common::create_test_link(&store, "ties01").await;

    common::create_test_click(&store, link.id, "US", false).await;
    common::create_test_click(&store, link.id, "DE", false).await;
    common::create_test_click(&store, link.id, "FR", false).await;

    let json = server
        .get(&format!("/api/links/{}/stats", link.id))
        .await
        .json::<Value>();

    let countries: Vec<&str> = json["country_stats"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["country"].as_str().unwrap())
        .collect();
    assert_eq!(countries, vec!["DE", "FR", "US"]);
}

#[tokio::test]
async fn test_stats_for_missing_link() {
    let (_store, server) = common::setup();

    let response = server.get("/api/links/42/stats").await;

    response.assert_status_not_found();
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_stats_non_numeric_id() {
    let (_store, server) = common::setup();

    let response = server.get("/api/links/abc/stats").await;

    response.assert_status_bad_request();
}
