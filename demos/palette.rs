//! Standalone demo: opens a window with the palette generator.
//!
//! Run with `RUST_LOG=debug` to see each generated palette.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_palette::{Palette, PaletteHandle, palette_generator};

fn main() {
    env_logger::init();

    let handle = PaletteHandle::new(RwSignal::new(Palette::default()));

    floem::Application::new()
        .window(
            move |_| {
                palette_generator(handle).on_event_stop(
                    floem::event::EventListener::WindowClosed,
                    |_| floem::quit_app(),
                )
            },
            Some(
                WindowConfig::default()
                    .size((640.0, 300.0))
                    .title("floem-palette"),
            ),
        )
        .run();
}
