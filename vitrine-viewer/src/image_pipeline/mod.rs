//! Image loading pipeline: fetch, decode, cache.
//!
//! The carousel never sees pipeline failures; a load that cannot
//! complete leaves a `Failed` entry behind and the tile renders as a
//! placeholder.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use iced::widget::image::Handle;
use thiserror::Error;

pub mod loader;
pub mod processor;

pub use loader::{HttpImageLoader, ImageLoader};

/// Errors that can occur in the image pipeline.
#[derive(Debug, Error)]
pub enum ImagePipelineError {
    #[error("network error: {0}")]
    Network(String),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("processing error: {0}")]
    Processing(String),

    #[error("unsupported URL: {0}")]
    UnsupportedUrl(String),
}

/// Result type for image pipeline operations.
pub type Result<T> = std::result::Result<T, ImagePipelineError>;

/// Lifecycle of one cached image, keyed by URL.
#[derive(Debug, Clone)]
pub enum ImageState {
    Loading,
    Loaded(Handle),
    Failed,
}

/// Shared in-memory image cache. Clones are cheap and refer to the
/// same underlying map.
#[derive(Debug, Clone, Default)]
pub struct ImageCache {
    cache: Arc<Mutex<HashMap<String, ImageState>>>,
}

impl ImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<ImageState> {
        self.cache.lock().unwrap().get(key).cloned()
    }

    /// The decoded handle for `key`, if the load has completed.
    pub fn handle(&self, key: &str) -> Option<Handle> {
        match self.get(key) {
            Some(ImageState::Loaded(handle)) => Some(handle),
            _ => None,
        }
    }

    /// Mark `key` as loading. Returns false if an entry already exists,
    /// so callers can skip duplicate fetches.
    pub fn begin(&self, key: &str) -> bool {
        let mut cache = self.cache.lock().unwrap();
        if cache.contains_key(key) {
            return false;
        }
        cache.insert(key.to_string(), ImageState::Loading);
        true
    }

    pub fn set_loaded(&self, key: String, handle: Handle) {
        self.cache
            .lock()
            .unwrap()
            .insert(key, ImageState::Loaded(handle));
    }

    pub fn set_failed(&self, key: String) {
        self.cache.lock().unwrap().insert(key, ImageState::Failed);
    }
}

/// Fetch and decode an image, returning it with its cache key.
///
/// Failures are logged here and flattened to a message-friendly string;
/// the update loop only needs to know which cache slot to fail.
pub async fn fetch(
    loader: Arc<dyn ImageLoader>,
    url: String,
) -> (String, std::result::Result<Handle, String>) {
    let result = match load_and_decode(loader.as_ref(), &url).await {
        Ok(handle) => Ok(handle),
        Err(error) => {
            log::warn!("image load failed for {url}: {error}");
            Err(error.to_string())
        }
    };
    (url, result)
}

async fn load_and_decode(loader: &dyn ImageLoader, url: &str) -> Result<Handle> {
    if !loader.supports_url(url) {
        return Err(ImagePipelineError::UnsupportedUrl(url.to_string()));
    }
    let bytes = loader.load(url).await?;
    processor::decode_to_handle(bytes).await
}
