//! Palette defaults plus sizing and styling constants for the widget.

/// Palette size on startup
pub const DEFAULT_PALETTE_SIZE: usize = 5;

/// Smallest palette the size input accepts
pub const MIN_PALETTE_SIZE: usize = 2;

/// Largest palette the size input accepts
pub const MAX_PALETTE_SIZE: usize = 10;

/// Full width of the saturation jitter, in percentage points
pub const SATURATION_JITTER: f64 = 40.0;

/// Full width of the lightness jitter, in percentage points
pub const LIGHTNESS_JITTER: f64 = 30.0;

/// Saturation bounds for derived colors
pub const SATURATION_RANGE: (f64, f64) = (20.0, 100.0);

/// Lightness bounds for derived colors
pub const LIGHTNESS_RANGE: (f64, f64) = (20.0, 80.0);

/// How long a successful copy banner stays up, in milliseconds
pub const COPY_NOTICE_MS: u64 = 2000;

/// Default banner lifetime, in milliseconds
pub const NOTICE_MS: u64 = 3000;

/// Swatch preview width
pub const SWATCH_WIDTH: f32 = 96.0;

/// Swatch preview height
pub const SWATCH_HEIGHT: f32 = 120.0;

/// Border radius for swatches and buttons
pub const RADIUS: f32 = 4.0;

/// Gap between widget elements
pub const GAP: f32 = 8.0;

/// Padding around the whole widget
pub const PADDING: f32 = 12.0;

/// Size input field width
pub const INPUT_WIDTH: f32 = 28.0;

/// Input font size
pub const INPUT_FONT: f32 = 11.0;

/// Label font size
pub const LABEL_FONT: f32 = 10.0;

/// Hex label font size
pub const HEX_FONT: f32 = 13.0;
