use std::time::Duration;

use anyhow::{Context, Result};
use http::StatusCode;
use reqwest::Client;
use tracing::debug;

/// Path of the default instance metadata endpoint
pub const METADATA_PATH: &str = "/latest/meta-data/";

/// Path of the endpoint issuing IMDSv2 session tokens
pub const TOKEN_PATH: &str = "/latest/api/token";

/// Header carrying a session token on metadata requests
pub const TOKEN_HEADER: &str = "X-aws-ec2-metadata-token";

/// Header carrying the requested lifetime of a session token
pub const TOKEN_TTL_HEADER: &str = "X-aws-ec2-metadata-token-ttl-seconds";

/// Minimum duration of a session token in seconds
pub const MIN_TOKEN_TTL_SECONDS: u32 = 1;

/// Maximum duration of a session token in seconds
pub const MAX_TOKEN_TTL_SECONDS: u32 = 21600;

/// Retrieves the listing of all top-level categories when passed to `get` or `get_v2`
pub const ALL_CATEGORIES: &str = "";

/// Turns a stopped or unreachable mock into an error rather than a hang
const REQUEST_TIMEOUT: Duration = Duration::from_secs(1);

/// Raw response returned by the mock
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetadataResponse {
  pub body: String,
  pub status: StatusCode,
}

/// HTTP client for the metadata and token endpoints of a running mock
#[derive(Clone, Debug)]
pub struct ImdsClient {
  endpoint: String,
  metadata_url: String,
  token_url: String,
  http: Client,
}

impl ImdsClient {
  /// Client for a mock exposed on `localhost:<port>`
  pub fn new(port: u16) -> Result<Self> {
    Self::with_endpoint(&format!("http://localhost:{port}"))
  }

  /// Client for a mock reachable at the given scheme and authority, i.e. `http://127.0.0.1:1338`
  pub fn with_endpoint(endpoint: &str) -> Result<Self> {
    let endpoint = endpoint.trim_end_matches('/').to_string();
    let http = Client::builder()
      .timeout(REQUEST_TIMEOUT)
      .build()
      .context("Failed to build HTTP client")?;

    Ok(Self {
      metadata_url: format!("{endpoint}{METADATA_PATH}"),
      token_url: format!("{endpoint}{TOKEN_PATH}"),
      endpoint,
      http,
    })
  }

  pub fn endpoint(&self) -> &str {
    &self.endpoint
  }

  /// `http://localhost:<port>/latest/meta-data/`
  pub fn metadata_url(&self) -> &str {
    &self.metadata_url
  }

  /// `http://localhost:<port>/latest/api/token`
  pub fn token_url(&self) -> &str {
    &self.token_url
  }

  /// Retrieve an instance category
  ///
  /// Status codes:
  ///   200: category was retrieved
  ///   404: category does not exist
  pub async fn get(&self, category: &str) -> Result<MetadataResponse> {
    self.get_v2(category, "").await
  }

  /// Retrieve an instance category using a session token
  ///
  /// An empty token is not sent. If the mock was not started with IMDSv2
  /// enforced, the token has no effect.
  ///
  /// Status codes:
  ///   200: category was retrieved
  ///   404: category does not exist
  ///   401: session token is either missing, invalid or expired
  pub async fn get_v2(&self, category: &str, token: &str) -> Result<MetadataResponse> {
    let url = format!("{}{category}", self.metadata_url);
    let mut req = self.http.get(&url);
    if !token.is_empty() {
      req = req.header(TOKEN_HEADER, token);
    }

    let rsp = req.send().await.with_context(|| format!("Failed to query {url}"))?;
    into_metadata_response(rsp).await
  }

  /// Request a session token valid for `ttl` seconds
  ///
  /// Status codes:
  ///   200: token was created
  ///   400: TTL was outside the bounds of 1 to 21600 seconds
  pub async fn token_with_ttl(&self, ttl: u32) -> Result<MetadataResponse> {
    let rsp = self
      .http
      .put(&self.token_url)
      .header(TOKEN_TTL_HEADER, ttl.to_string())
      .send()
      .await
      .with_context(|| format!("Failed to request session token from {}", self.token_url))?;

    into_metadata_response(rsp).await
  }
}

async fn into_metadata_response(rsp: reqwest::Response) -> Result<MetadataResponse> {
  let status = rsp.status();
  let url = rsp.url().to_string();
  let body = rsp.text().await.with_context(|| format!("Failed to read response from {url}"))?;
  debug!("{url} responded with {status}");

  Ok(MetadataResponse { body, status })
}
