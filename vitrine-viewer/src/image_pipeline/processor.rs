//! Decode raw bytes into iced image handles off the UI thread.

use super::{ImagePipelineError, Result};
use iced::widget::image::Handle;
use image::GenericImageView;

/// Sources larger than this on either edge are downscaled before the
/// RGBA conversion; the screen never shows more pixels than a backdrop.
const MAX_DECODE_EDGE: u32 = 1920;

/// Decode image bytes into an RGBA handle on a blocking worker.
pub async fn decode_to_handle(data: Vec<u8>) -> Result<Handle> {
    tokio::task::spawn_blocking(move || decode_sync(&data))
        .await
        .map_err(|e| ImagePipelineError::Processing(e.to_string()))?
}

fn decode_sync(data: &[u8]) -> Result<Handle> {
    let decoded = image::load_from_memory(data)
        .map_err(|e| ImagePipelineError::Decode(e.to_string()))?;

    let bounded = if decoded.width() > MAX_DECODE_EDGE
        || decoded.height() > MAX_DECODE_EDGE
    {
        decoded.thumbnail(MAX_DECODE_EDGE, MAX_DECODE_EDGE)
    } else {
        decoded
    };

    let rgba = bounded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(Handle::from_rgba(width, height, rgba.into_raw()))
}
