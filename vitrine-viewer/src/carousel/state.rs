//! Scroll model for the tile strip: offset, stride, and the derived
//! visible index.

use iced::widget::scrollable::{Id as ScrollableId, Viewport};

/// Horizontal scroll state for a fixed-size tile row.
///
/// The offset held here is the controller's own model of the strip.
/// The animator writes into it and the visible index derives from it.
/// Viewport reports from user gestures only refresh the layout metrics
/// (viewport width, max scroll), never the index, so the backdrop
/// stays coupled to the controller alone.
#[derive(Debug, Clone)]
pub struct CarouselState {
    pub total_items: usize,
    pub item_width: f32,
    pub item_spacing: f32,
    pub viewport_width: f32,
    pub scroll_x: f32,
    pub max_scroll: f32,
    pub visible_index: usize,
    pub scrollable_id: ScrollableId,
}

impl CarouselState {
    pub fn new(
        total_items: usize,
        item_width: f32,
        item_spacing: f32,
        viewport_width: f32,
    ) -> Self {
        let mut state = Self {
            total_items,
            item_width,
            item_spacing,
            viewport_width,
            scroll_x: 0.0,
            max_scroll: 0.0,
            visible_index: 0,
            scrollable_id: ScrollableId::unique(),
        };
        state.recompute_max_scroll();
        state
    }

    /// Set the absolute scroll offset and re-derive the visible index.
    pub fn set_scroll_x(&mut self, x: f32) {
        self.scroll_x = x.clamp(0.0, self.max_scroll.max(0.0));
        self.visible_index = self.derive_visible_index();
    }

    /// Absorb a viewport report from the scrollable widget.
    ///
    /// Layout metrics only: the reported offset is not mirrored into
    /// `scroll_x`, so wheel/drag motion never feeds the visible index.
    pub fn update_viewport(&mut self, viewport: Viewport) {
        let width = viewport.bounds().width;
        if (width - self.viewport_width).abs() > 0.5 {
            self.viewport_width = width;
        }
        let content_width = viewport.content_bounds().width;
        self.max_scroll = (content_width - self.viewport_width).max(0.0);
    }

    /// Aligned scroll offset for `index`, clamped so the final entries
    /// right-align at the end of the strip rather than overscrolling.
    pub fn index_to_scroll(&self, index: usize) -> f32 {
        (index as f32 * self.stride()).min(self.max_scroll.max(0.0))
    }

    fn derive_visible_index(&self) -> usize {
        let stride = self.stride();
        if stride <= 0.0 || self.total_items == 0 {
            return 0;
        }
        let index = (self.scroll_x / stride).floor() as usize;
        index.min(self.total_items.saturating_sub(1))
    }

    fn recompute_max_scroll(&mut self) {
        let content_width = self.content_width();
        self.max_scroll = (content_width - self.viewport_width).max(0.0);
    }

    #[inline]
    pub fn stride(&self) -> f32 {
        (self.item_width + self.item_spacing).max(1.0)
    }

    #[inline]
    fn content_width(&self) -> f32 {
        if self.total_items == 0 {
            return 0.0;
        }
        self.total_items as f32 * self.item_width
            + (self.total_items.saturating_sub(1)) as f32 * self.item_spacing
    }
}
