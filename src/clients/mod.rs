/// External API clients module
use crate::domain::PhotoQuery;
use crate::errors::{ApiError, ApiResult};
use crate::utils::redact_api_key;
use reqwest::{Client, StatusCode, Url};
use serde_json::value::RawValue;
use serde_json::Value;
use std::time::Duration;
use tracing::{info, warn};

/// HTTP client wrapper with common configuration
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(timeout: Duration) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("rover-proxy/1.0")
            .build()?;
        Ok(Self { client })
    }

    pub fn get_client(&self) -> &Client {
        &self.client
    }
}

/// Outcome of a photo listing call
#[derive(Debug)]
pub enum PhotoFetch {
    /// Upstream body, parsed but not validated.
    Photos(Value),
    /// Upstream answered 429.
    RateLimited,
}

/// NASA Mars Rover Photos client
pub struct MarsPhotosClient {
    http_client: HttpClient,
    base_url: String,
    api_key: String,
}

impl MarsPhotosClient {
    pub fn new(base_url: String, api_key: String, timeout: Duration) -> ApiResult<Self> {
        Ok(Self {
            http_client: HttpClient::new(timeout)?,
            base_url,
            api_key,
        })
    }

    /// Build `{base}/rovers/{rover}/photos?sol=..&page=..&api_key=..[&camera=..]`
    pub fn photos_url(&self, query: &PhotoQuery) -> ApiResult<Url> {
        let mut url = self.endpoint(&["rovers", &query.rover, "photos"])?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("sol", &query.sol.to_string())
                .append_pair("page", &query.page.to_string())
                .append_pair("api_key", &self.api_key);
            if let Some(camera) = &query.camera {
                pairs.append_pair("camera", camera);
            }
        }
        Ok(url)
    }

    /// Build `{base}/manifests/{rover}?api_key=..`
    pub fn manifest_url(&self, rover: &str) -> ApiResult<Url> {
        let mut url = self.endpoint(&["manifests", rover])?;
        url.query_pairs_mut().append_pair("api_key", &self.api_key);
        Ok(url)
    }

    /// Fetch one page of photos for a rover and sol
    pub async fn fetch_photos(&self, query: &PhotoQuery) -> ApiResult<PhotoFetch> {
        let url = self.photos_url(query)?;
        info!(url = %redact_api_key(&url), "Fetching photos");

        let resp = self.http_client.get_client().get(url).send().await?;

        let status = resp.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            warn!(rover = %query.rover, sol = query.sol, "NASA API rate limit hit");
            return Ok(PhotoFetch::RateLimited);
        }
        if !status.is_success() {
            return Err(ApiError::upstream(status));
        }

        let json: Value = resp.json().await?;
        let count = json
            .get("photos")
            .and_then(Value::as_array)
            .map_or(0, Vec::len);
        info!(
            rover = %query.rover,
            sol = query.sol,
            camera = query.camera.as_deref().unwrap_or("all"),
            count,
            "Photos fetched"
        );

        Ok(PhotoFetch::Photos(json))
    }

    /// Fetch the mission manifest for a rover, body kept verbatim
    pub async fn fetch_manifest(&self, rover: &str) -> ApiResult<Box<RawValue>> {
        let url = self.manifest_url(rover)?;
        info!(url = %redact_api_key(&url), "Fetching manifest");

        let resp = self.http_client.get_client().get(url).send().await?;

        if !resp.status().is_success() {
            return Err(ApiError::upstream(resp.status()));
        }

        let raw = resp.json::<Box<RawValue>>().await?;
        Ok(raw)
    }

    fn endpoint(&self, segments: &[&str]) -> ApiResult<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ApiError::Internal(format!("invalid NASA API base URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::Internal(format!("NASA API base URL cannot be a base: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}
