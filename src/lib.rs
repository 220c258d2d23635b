//! # floem-palette
//!
//! A complementary color palette generator for [Floem](https://github.com/lapce/floem).
//!
//! The color math ([`math`], [`PaletteColor`]) and palette generation
//! ([`generate_complementary_colors`], [`Palette`]) are plain functions with
//! an injectable [`RandomSource`]. The widget on top renders the palette as
//! clickable swatches that copy their hex code to the clipboard.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_palette::{palette_generator, Palette, PaletteHandle};
//!
//! let handle = PaletteHandle::new(RwSignal::new(Palette::default()));
//! // Use `palette_generator(handle)` in your Floem view tree, and
//! // `handle.load_colors(&["#FF0000", "#00FF00"])` to show given colors.
//! ```
//!
//! Without the widget:
//!
//! ```
//! use floem_palette::{generate_complementary_colors, RngSource};
//!
//! let colors = generate_complementary_colors("#FF0000", 4, &mut RngSource::seeded(1));
//! assert_eq!(colors.len(), 4);
//! assert_eq!(colors[0], "#FF0000");
//! ```

mod clipboard;
mod color;
mod constants;
mod error;
mod inputs;
pub mod math;
mod notification;
mod palette;
mod palette_view;
mod random;
mod swatch;

pub use clipboard::{ClipboardBackend, ClipboardError, CopyText, SystemClipboard};
pub use color::{Hsl, PaletteColor, Rgb};
pub use constants::{DEFAULT_PALETTE_SIZE, MAX_PALETTE_SIZE, MIN_PALETTE_SIZE};
pub use error::ColorError;
pub use notification::Notification;
pub use palette::{JitterConfig, Palette, generate_complementary_colors};
pub use palette_view::PaletteHandle;
pub use random::{RandomSource, RngSource, random_hex};

use std::sync::Once;

use floem::prelude::*;
use floem::text::FONT_SYSTEM;

static LOAD_LUCIDE_FONT: Once = Once::new();

/// Creates the top-level palette generator view.
///
/// The view reads from and writes to the handle's palette signal. An empty
/// palette is filled on creation; external changes (such as
/// [`PaletteHandle::load_colors`]) are reflected in the swatches and size
/// input.
///
/// Space regenerates the palette only while the panel or one of its
/// children holds keyboard focus; Floem has no document-wide key listener.
/// A focused swatch takes Space as "copy" instead.
pub fn palette_generator(handle: PaletteHandle) -> impl IntoView {
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
    palette_view::palette_view(handle)
}
