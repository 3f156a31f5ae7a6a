//! HTTP image loader with connection pooling and retry logic.

use super::{ImagePipelineError, Result};
use reqwest::Client;
use std::time::Duration;

/// Trait for loading raw image bytes from a URL.
#[async_trait::async_trait]
pub trait ImageLoader: Send + Sync {
    /// Load image data from a URL.
    async fn load(&self, url: &str) -> Result<Vec<u8>>;

    /// Check whether a URL is supported by this loader.
    fn supports_url(&self, url: &str) -> bool;
}

/// HTTP-based image loader with bounded retries.
#[derive(Debug)]
pub struct HttpImageLoader {
    client: Client,
    max_retries: u32,
}

impl HttpImageLoader {
    pub fn new() -> Self {
        Self::with_config(3, Duration::from_secs(30))
    }

    /// Create with custom retry and timeout configuration.
    pub fn with_config(max_retries: u32, timeout: Duration) -> Self {
        let client = Client::builder()
            .pool_max_idle_per_host(10)
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            max_retries,
        }
    }

    async fn load_once(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ImagePipelineError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ImagePipelineError::Network(format!(
                "HTTP {}: {}",
                response.status(),
                url
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ImagePipelineError::Network(e.to_string()))?;

        Ok(bytes.to_vec())
    }
}

impl Default for HttpImageLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ImageLoader for HttpImageLoader {
    async fn load(&self, url: &str) -> Result<Vec<u8>> {
        let mut last_error = None;

        for attempt in 0..self.max_retries.max(1) {
            if attempt > 0 {
                // Exponential backoff
                let delay = Duration::from_millis(100 * 2u64.pow(attempt));
                tokio::time::sleep(delay).await;
            }

            match self.load_once(url).await {
                Ok(data) => return Ok(data),
                Err(e) => {
                    log::warn!("image load attempt {} failed: {}", attempt + 1, e);
                    last_error = Some(e);
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| ImagePipelineError::Network("unknown error".to_string())))
    }

    fn supports_url(&self, url: &str) -> bool {
        matches!(
            url::Url::parse(url).map(|u| u.scheme().to_string()),
            Ok(scheme) if scheme == "http" || scheme == "https"
        )
    }
}
