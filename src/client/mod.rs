// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! HTTP client for the incident search backend.
//!
//! Thin request/response wrappers, one per endpoint. No retries: a failed
//! call surfaces as a `ClientError` and the caller decides what to show.
//!
//! | Method          | Endpoint            | Auth   |
//! |-----------------|---------------------|--------|
//! | `login`         | `POST /auth/signin` | none   |
//! | `register`      | `POST /auth/signup` | none   |
//! | `upload`        | `POST /parse`       | bearer |
//! | `index`         | `POST /index`       | bearer |
//! | `fetch_all`     | `GET /search/all`   | bearer |
//! | `search`        | `GET /search`       | bearer |
//! | `search_bool`   | `POST /search/bool` | bearer |

pub mod config;
pub mod session;

pub use config::Config;
pub use session::{Session, SessionError, SessionStore};

use crate::query::BoolQuery;
use crate::types::{Credentials, ParsedDocument, SearchFilters, SearchHit};
use reqwest::multipart::{Form, Part};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Not authorized")]
    Unauthorized,
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },
}

impl ClientError {
    /// The backend rejected the credentials or the session token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Unauthorized)
    }
}

/// Backend client bound to one base URL.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    http: reqwest::Client,
}

impl Client {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Client {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authed(&self, builder: RequestBuilder, session: &Session) -> RequestBuilder {
        builder.bearer_auth(&session.token)
    }

    // =========================================================================
    // AUTH
    // =========================================================================

    pub async fn login(&self, credentials: &Credentials) -> Result<Session, ClientError> {
        let (_, body) = self.post_credentials("/auth/signin", credentials).await?;
        Ok(Session::new(body))
    }

    /// Create an account. The backend answers with a status message, not a
    /// token: the user still has to log in afterwards.
    ///
    /// A message containing `Error` is a rejection even under a 2xx status.
    pub async fn register(&self, credentials: &Credentials) -> Result<String, ClientError> {
        let (status, message) = self.post_credentials("/auth/signup", credentials).await?;
        if message.contains("Error") {
            return Err(ClientError::Api {
                status: status.as_u16(),
                body: message,
            });
        }
        Ok(message)
    }

    async fn post_credentials(
        &self,
        path: &str,
        credentials: &Credentials,
    ) -> Result<(StatusCode, String), ClientError> {
        log::debug!("POST {} as {}", path, credentials.username);
        let response = self
            .http
            .post(self.url(path))
            .json(credentials)
            .send()
            .await?;
        let response = check(response).await?;
        let status = response.status();
        let body = response.text().await?;
        Ok((status, unquote_body(&body)))
    }

    // =========================================================================
    // DOCUMENTS
    // =========================================================================

    /// Send a PDF for parsing. The result is not indexed until `index` is called.
    pub async fn upload(&self, session: &Session, path: &Path) -> Result<ParsedDocument, ClientError> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload.pdf".to_string());
        log::debug!("POST /parse {} ({} bytes)", file_name, bytes.len());

        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("application/pdf")?;
        let form = Form::new().part("file", part);

        let request = self.authed(self.http.post(self.url("/parse")), session);
        read_json(request.multipart(form).send().await?).await
    }

    /// Index a reviewed document.
    pub async fn index(&self, session: &Session, document: &ParsedDocument) -> Result<(), ClientError> {
        log::debug!("POST /index {}", document.filename);
        let request = self.authed(self.http.post(self.url("/index")), session);
        check(request.json(document).send().await?).await?;
        Ok(())
    }

    // =========================================================================
    // SEARCH
    // =========================================================================

    pub async fn fetch_all(&self, session: &Session) -> Result<Vec<SearchHit>, ClientError> {
        log::debug!("GET /search/all");
        let request = self.authed(self.http.get(self.url("/search/all")), session);
        read_json(request.send().await?).await
    }

    pub async fn search(
        &self,
        session: &Session,
        filters: &SearchFilters,
    ) -> Result<Vec<SearchHit>, ClientError> {
        let pairs = filters.query_pairs();
        log::debug!("GET /search with {} filters", pairs.len());
        let request = self.authed(self.http.get(self.url("/search")), session);
        read_json(request.query(&pairs).send().await?).await
    }

    pub async fn search_bool(
        &self,
        session: &Session,
        query: &BoolQuery,
    ) -> Result<Vec<SearchHit>, ClientError> {
        log::debug!("POST /search/bool {:?}", query.expression);
        let request = self.authed(self.http.post(self.url("/search/bool")), session);
        read_json(request.json(query).send().await?).await
    }
}

/// Turn a non-2xx response into an error.
async fn check(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(ClientError::Unauthorized);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ClientError::Api {
        status: status.as_u16(),
        body,
    })
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let body = check(response).await?.text().await?;
    Ok(serde_json::from_str(&body)?)
}

/// The auth endpoints answer with bare text, sometimes JSON-quoted.
fn unquote_body(body: &str) -> String {
    let body = body.trim();
    match serde_json::from_str::<String>(body) {
        Ok(token) => token,
        Err(_) => body.to_string(),
    }
}
