use crate::error::FinderError;
use std::time::Duration;
use tracing::debug;

/// Page retrieval seam. The pipeline only ever needs the body of a GET,
/// so tests can drive it with canned documents.
#[async_trait::async_trait]
pub trait Fetch: Send + Sync {
    async fn get_text(&self, url: &str) -> Result<String, FinderError>;
}

pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// `timeout` of `None` leaves the transport's own behavior untouched.
    pub fn new(timeout: Option<Duration>) -> Result<HttpFetcher, FinderError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(HttpFetcher {
            client: builder.build()?,
        })
    }
}

#[async_trait::async_trait]
impl Fetch for HttpFetcher {
    async fn get_text(&self, url: &str) -> Result<String, FinderError> {
        debug!("Visit {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FinderError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.text().await?)
    }
}
