//! Session persistence.

use std::io::Write;
use std::time::Duration;
use udd::{Client, Config, Session, SessionStore};

fn stored_session(dir: &tempfile::TempDir) -> (SessionStore, Session) {
    let store = SessionStore::new(dir.path().join("session.json"));
    let session = Session::new("tok-123");
    store.save(&session).unwrap();
    (store, session)
}

#[test]
fn save_load_clear() {
    let dir = tempfile::tempdir().unwrap();
    let store = SessionStore::new(dir.path().join("nested").join("session.json"));

    assert!(store.load().unwrap().is_none());

    store.save(&Session::new("tok-123")).unwrap();
    assert_eq!(store.load().unwrap().unwrap().token, "tok-123");

    store.clear().unwrap();
    assert!(store.load().unwrap().is_none());
    // Clearing twice is fine.
    store.clear().unwrap();
}

#[test]
fn config_points_store_at_session_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("s.json");
    let config = Config::new(None, Some(path.clone()), None).unwrap();

    assert_eq!(config.session_store().path(), path.as_path());
    assert_eq!(config.api_url, "http://localhost:8080");
}

#[tokio::test]
async fn rejected_token_during_search_clears_session() {
    let dir = tempfile::tempdir().unwrap();
    let (store, session) = stored_session(&dir);

    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/search/all")
        .with_status(401)
        .create_async()
        .await;

    let client = Client::new(&server.url(), Duration::from_secs(5)).unwrap();
    let err = client.fetch_all(&session).await.unwrap_err();

    assert!(store.clear_if_rejected(&err));
    assert!(store.load().unwrap().is_none());
}

#[tokio::test]
async fn forbidden_upload_clears_session() {
    let mut pdf = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
    pdf.write_all(b"%PDF-1.4").unwrap();

    let dir = tempfile::tempdir().unwrap();
    let (store, session) = stored_session(&dir);

    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/parse")
        .with_status(403)
        .create_async()
        .await;

    let client = Client::new(&server.url(), Duration::from_secs(5)).unwrap();
    let err = client.upload(&session, pdf.path()).await.unwrap_err();

    assert!(store.clear_if_rejected(&err));
    assert!(store.load().unwrap().is_none());
}

#[tokio::test]
async fn server_failure_keeps_session() {
    let dir = tempfile::tempdir().unwrap();
    let (store, session) = stored_session(&dir);

    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/search/all")
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let client = Client::new(&server.url(), Duration::from_secs(5)).unwrap();
    let err = client.fetch_all(&session).await.unwrap_err();

    assert!(!store.clear_if_rejected(&err));
    assert_eq!(store.load().unwrap().unwrap().token, "tok-123");
}
