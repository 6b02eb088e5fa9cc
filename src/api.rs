//! Backend access for the portfolio endpoints.
//!
//! `PortfolioApi` is the seam between the UI and the server: the real
//! implementation speaks HTTP via reqwest, while tests and demo mode plug in
//! canned implementations.

use std::future::Future;

use anyhow::{Context, Result};
use serde::Deserialize;

/// A visitor comment as returned by the backend. Display-only: no identity,
/// no validation, no mutation on this side.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Comment {
    pub message: String,
    pub email: String,
}

/// The portfolio backend endpoints the client consumes.
pub trait PortfolioApi {
    /// `GET /comments` — the comment list.
    fn fetch_comments(&self) -> impl Future<Output = Result<Vec<Comment>>>;

    /// `GET /data` — greeting strings (earlier page variant).
    fn fetch_greetings(&self) -> impl Future<Output = Result<Vec<String>>>;

    /// `GET /login-status` — the HTTP status code *is* the payload.
    fn login_status(&self) -> impl Future<Output = Result<u16>>;

    /// `GET /login` — login/logout control markup, verbatim text.
    fn login_control(&self) -> impl Future<Output = Result<String>>;

    /// `POST /comments` with form-encoded fields. Only success matters;
    /// the response body is unused.
    fn post_comment(&self, fields: &[(String, String)]) -> impl Future<Output = Result<()>>;
}

/// HTTP implementation against a configured backend origin.
pub struct HttpApi {
    base_url: String,
    http: reqwest::Client,
}

impl HttpApi {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl PortfolioApi for HttpApi {
    // The GET endpoints deliberately skip status checks: a non-OK body that
    // fails to decode surfaces as an error the same way a rejected fetch
    // would, and nothing more is done with it.
    fn fetch_comments(&self) -> impl Future<Output = Result<Vec<Comment>>> {
        async move {
            self.http
                .get(self.url("/comments"))
                .send()
                .await
                .context("GET /comments failed")?
                .json()
                .await
                .context("Failed to decode /comments body")
        }
    }

    fn fetch_greetings(&self) -> impl Future<Output = Result<Vec<String>>> {
        async move {
            self.http
                .get(self.url("/data"))
                .send()
                .await
                .context("GET /data failed")?
                .json()
                .await
                .context("Failed to decode /data body")
        }
    }

    fn login_status(&self) -> impl Future<Output = Result<u16>> {
        async move {
            let response = self
                .http
                .get(self.url("/login-status"))
                .send()
                .await
                .context("GET /login-status failed")?;
            Ok(response.status().as_u16())
        }
    }

    fn login_control(&self) -> impl Future<Output = Result<String>> {
        async move {
            self.http
                .get(self.url("/login"))
                .send()
                .await
                .context("GET /login failed")?
                .text()
                .await
                .context("Failed to read /login body")
        }
    }

    fn post_comment(&self, fields: &[(String, String)]) -> impl Future<Output = Result<()>> {
        let request = self.http.post(self.url("/comments")).form(fields);
        async move {
            request
                .send()
                .await
                .context("POST /comments failed")?
                .error_for_status()
                .context("POST /comments was rejected")?;
            Ok(())
        }
    }
}
