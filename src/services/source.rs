//! Member Source
//!
//! Read-only access to the remote member collection. The source is injected
//! into the global store so it can be replaced in tests.

use crate::constants::FETCH_TIMEOUT_SECS;
use crate::domain::Member;
use crate::error::{Error, Result};
use futures::FutureExt;
use futures::future::BoxFuture;
use reqwest::StatusCode;
use std::time::Duration;

/// Something that can produce the full member collection
pub trait MemberSource: Send + Sync + 'static {
    /// Fetch every member, in server order
    fn fetch(&self) -> BoxFuture<'static, Result<Vec<Member>>>;

    /// Human-readable origin for logs
    fn describe(&self) -> String;
}

/// Fetches members with a single HTTP GET
#[derive(Clone)]
pub struct HttpMemberSource {
    client: reqwest::Client,
    url: String,
}

impl HttpMemberSource {
    /// Create a source for the given URL
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(Error::Invalid {
                message: "Member source URL is empty".to_string(),
            });
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .build()?;

        Ok(Self { client, url })
    }
}

impl MemberSource for HttpMemberSource {
    fn fetch(&self) -> BoxFuture<'static, Result<Vec<Member>>> {
        let client = self.client.clone();
        let url = self.url.clone();

        async move {
            tracing::debug!(url = %url, "Fetching members");
            let response = client.get(&url).send().await?;
            check_status(response.status(), &url)?;
            let body = response.bytes().await?;
            decode_members(&body)
        }
        .boxed()
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

impl std::fmt::Debug for HttpMemberSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpMemberSource")
            .field("url", &self.url)
            .finish()
    }
}

/// Reject non-2xx responses
fn check_status(status: StatusCode, url: &str) -> Result<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(Error::HttpStatus {
            status: status.as_u16(),
            url: url.to_string(),
        })
    }
}

/// Decode a response body; every element must already have the member shape
pub fn decode_members(body: &[u8]) -> Result<Vec<Member>> {
    Ok(serde_json::from_slice(body)?)
}
