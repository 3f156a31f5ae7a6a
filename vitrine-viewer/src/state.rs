//! Application state.

use std::sync::Arc;
use std::time::{Duration, Instant};

use vitrine_model::{Gallery, ImageRef};

use crate::carousel::{CarouselState, SnapAnimator};
use crate::constants::{STRIP_PADDING, TILE_SIDE, TILE_SPACING};
use crate::image_pipeline::{HttpImageLoader, ImageCache};

#[derive(Debug)]
pub struct State {
    pub gallery: Gallery,
    pub carousel: CarouselState,
    pub animator: SnapAnimator,
    /// Image currently rendered full-screen behind the strip.
    pub background: ImageRef,
    /// Last visible index mirrored into the background selection.
    pub observed_index: usize,
    pub images: ImageCache,
    pub loader: Arc<HttpImageLoader>,
    pub period: Duration,
    pub pulse_enabled: bool,
    /// Reference point for the pulse phase.
    pub epoch: Instant,
    /// Clock of the most recent frame tick; the pulse is a pure
    /// function of `now - epoch` evaluated at each redraw.
    pub now: Instant,
}

impl State {
    pub fn new(
        gallery: Gallery,
        window_width: f32,
        period: Duration,
        pulse_enabled: bool,
    ) -> Self {
        let background = gallery.first().clone();
        let strip_viewport = (window_width - 2.0 * STRIP_PADDING).max(1.0);
        let carousel = CarouselState::new(
            gallery.len(),
            TILE_SIDE,
            TILE_SPACING,
            strip_viewport,
        );
        let now = Instant::now();

        Self {
            gallery,
            carousel,
            animator: SnapAnimator::new(),
            background,
            observed_index: 0,
            images: ImageCache::new(),
            loader: Arc::new(HttpImageLoader::new()),
            period,
            pulse_enabled,
            epoch: now,
            now,
        }
    }

    /// Mirror the carousel's visible index into the background
    /// selection. Fires on every index change for the lifetime of the
    /// screen; re-observing an unchanged index is a no-op.
    ///
    /// Returns true when the observation produced a change.
    pub fn sync_background(&mut self) -> bool {
        let index = self.carousel.visible_index;
        if index == self.observed_index {
            return false;
        }
        log::debug!("visible index: {index}");
        self.observed_index = index;
        self.background = self.gallery.entry(index).clone();
        true
    }

    /// Elapsed time feeding the tile pulse.
    pub fn pulse_elapsed(&self) -> Duration {
        self.now.saturating_duration_since(self.epoch)
    }
}
