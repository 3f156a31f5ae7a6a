//! Layout and timing constants for the carousel screen.

use std::time::Duration;

/// Side length of a carousel tile in logical pixels.
pub const TILE_SIDE: f32 = 300.0;

/// Corner radius applied to each tile.
pub const TILE_RADIUS: f32 = 10.0;

/// Gap between adjacent tiles.
pub const TILE_SPACING: f32 = 8.0;

/// Horizontal padding around the tile strip.
pub const STRIP_PADDING: f32 = 10.0;

/// Vertical offset of the tile strip from the top of the screen.
pub const STRIP_TOP_OFFSET: f32 = 40.0;

/// Duration of one animated scroll transition.
pub const SNAP_DURATION: Duration = Duration::from_millis(600);

/// Default auto-advance period; overridable via configuration.
pub const DEFAULT_PERIOD: Duration = Duration::from_millis(3000);

/// Cadence of the frame subscription that drives the snap animator and
/// the tile pulse.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Amplitude of the tile pulse.
pub const PULSE_AMPLITUDE: f32 = 0.05;

/// Time divisor of the tile pulse, in milliseconds.
pub const PULSE_DIVISOR_MS: f32 = 300.0;
