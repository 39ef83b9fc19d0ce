//! Listing, filtered search and boolean search.

use crate::common::make_hit;
use mockito::Matcher;
use std::time::Duration;
use udd::{BoolQuery, Client, ClientError, SearchFilters, Session};

fn session() -> Session {
    Session::new("tok-123")
}

fn hits_body() -> String {
    let hits = vec![
        make_hit("1", "A fire broke out", &["A <em>fire</em> broke out"]),
        make_hit("2", "Flooded basement", &[]),
    ];
    serde_json::to_string(&hits).unwrap()
}

#[tokio::test]
async fn fetch_all_lists_incidents() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/search/all")
        .match_header("authorization", "Bearer tok-123")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(hits_body())
        .create_async()
        .await;

    let client = Client::new(&server.url(), Duration::from_secs(5)).unwrap();
    let hits = client.fetch_all(&session()).await.unwrap();

    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].index.id, "1");
    assert!(hits[1].highlights.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn search_sends_only_set_filters() {
    let filters = SearchFilters {
        employee_name: "Ivan".to_string(),
        address: "Novi Sad".to_string(),
        distance: "10km".to_string(),
        knn: true,
        ..Default::default()
    };

    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/search")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("employeeName".to_string(), "Ivan".to_string()),
            Matcher::UrlEncoded("address".to_string(), "Novi Sad".to_string()),
            Matcher::UrlEncoded("distance".to_string(), "10km".to_string()),
            Matcher::UrlEncoded("knn".to_string(), "true".to_string()),
        ]))
        .with_status(200)
        .with_body(hits_body())
        .create_async()
        .await;

    let client = Client::new(&server.url(), Duration::from_secs(5)).unwrap();
    let hits = client.search(&session(), &filters).await.unwrap();

    assert_eq!(hits.len(), 2);
    mock.assert_async().await;
}

#[tokio::test]
async fn search_bool_posts_token_array() {
    let query = BoolQuery::parse("employeeName:Ivan and NOT incidentSeverity:low");

    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/search/bool")
        .match_header("authorization", "Bearer tok-123")
        .match_body(Matcher::Json(serde_json::json!({
            "expression": ["employeeName:Ivan", "AND", "NOT", "incidentSeverity:low"]
        })))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let client = Client::new(&server.url(), Duration::from_secs(5)).unwrap();
    let hits = client.search_bool(&session(), &query).await.unwrap();

    assert!(hits.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn malformed_response_is_json_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/search/all")
        .with_status(200)
        .with_body("<html>gateway</html>")
        .create_async()
        .await;

    let client = Client::new(&server.url(), Duration::from_secs(5)).unwrap();
    let err = client.fetch_all(&session()).await.unwrap_err();
    assert!(matches!(err, ClientError::Json(_)));
}

#[tokio::test]
async fn backend_failure_is_api_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/search")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("elasticsearch unavailable")
        .create_async()
        .await;

    let client = Client::new(&server.url(), Duration::from_secs(5)).unwrap();
    let filters = SearchFilters {
        incident_severity: "high".to_string(),
        ..Default::default()
    };
    match client.search(&session(), &filters).await {
        Err(ClientError::Api { status, .. }) => assert_eq!(status, 500),
        other => panic!("expected Api error, got {:?}", other),
    }
}
