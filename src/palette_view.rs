//! Palette panel: generate button and size input above a row of swatches,
//! with a notification banner underneath.

use std::cell::RefCell;
use std::rc::Rc;

use floem::event::{Event, EventListener, EventPropagation};
use floem::keyboard::{Key, NamedKey};
use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate, create_effect};
use floem::views::dyn_stack;

use crate::clipboard::{CopyText, SystemClipboard};
use crate::constants;
use crate::error::ColorError;
use crate::inputs::{size_input, text_button};
use crate::notification::{Banner, Notification};
use crate::palette::Palette;
use crate::random::RngSource;
use crate::swatch::swatch;

/// Shared state of one palette widget: the palette and its banner.
///
/// Cheap to copy; every copy talks to the same widget.
#[derive(Clone, Copy)]
pub struct PaletteHandle {
    palette: RwSignal<Palette>,
    banner: Banner,
}

impl PaletteHandle {
    pub fn new(palette: RwSignal<Palette>) -> Self {
        Self {
            palette,
            banner: Banner::new(),
        }
    }

    pub fn palette(&self) -> RwSignal<Palette> {
        self.palette
    }

    /// Hex codes currently on screen.
    pub fn hexes(&self) -> Vec<String> {
        self.palette.get_untracked().hexes()
    }

    /// Show exactly `hexes`, resizing the palette to match.
    ///
    /// If any entry is invalid the palette is left alone and the banner
    /// reports the failure.
    pub fn load_colors<S: AsRef<str>>(&self, hexes: &[S]) -> Result<(), ColorError> {
        let mut next = self.palette.get_untracked();
        match next.replace_colors(hexes) {
            Ok(()) => {
                self.palette.set(next);
                Ok(())
            }
            Err(err) => {
                log::error!("Invalid colors provided: {err}");
                self.banner.show(Notification::from(&err));
                Err(err)
            }
        }
    }

    pub(crate) fn notify(&self, notification: Notification) {
        self.banner.show(notification);
    }
}

/// Creates the palette panel bound to `handle`.
pub(crate) fn palette_view(handle: PaletteHandle) -> impl IntoView {
    let palette = handle.palette;
    let banner = handle.banner;
    let size = RwSignal::new(palette.get_untracked().size());
    let rng = Rc::new(RefCell::new(RngSource::thread()));
    let clipboard = Rc::new(RefCell::new(SystemClipboard::new()));

    // Generated colors always parse, so a failure here is a bug, not user input.
    let regenerate: Rc<dyn Fn()> = Rc::new(move || {
        let mut next = palette.get_untracked();
        match next.regenerate(&mut *rng.borrow_mut()) {
            Ok(()) => palette.set(next),
            Err(err) => log::error!("Palette generation failed: {err}"),
        }
    });

    let on_copy: Rc<dyn Fn(&str)> = Rc::new(move |hex: &str| {
        match clipboard.borrow_mut().copy_text(hex) {
            Ok(()) => {
                log::info!("Copied {hex} to clipboard");
                handle.notify(Notification::copied(hex));
            }
            Err(err) => {
                log::warn!("Copy of {hex} failed: {err}");
                handle.notify(Notification::copy_failed());
            }
        }
    });

    if palette.get_untracked().colors().is_empty() {
        regenerate();
    }

    // Size input → palette (regenerates at the new size)
    let on_resize = regenerate.clone();
    create_effect(move |_| {
        let n = size.get();
        if palette.get_untracked().size() != n {
            palette.update(|p| p.set_size(n));
            on_resize();
        }
    });

    // External palette → size input (e.g. after `Palette::replace_colors`)
    create_effect(move |_| {
        let n = palette.get().size();
        if size.get_untracked() != n {
            size.set(n);
        }
    });

    let on_generate = regenerate.clone();
    let on_space = regenerate;

    v_stack((
        h_stack((
            text_button("Generate", move || on_generate()),
            empty().style(|s| s.flex_grow(1.0)),
            size_input("Colors", size),
        ))
        .style(|s| s.items_center().gap(constants::GAP)),
        dyn_stack(
            move || {
                palette
                    .get()
                    .colors()
                    .iter()
                    .cloned()
                    .enumerate()
                    .collect::<Vec<_>>()
            },
            |(i, color)| (*i, color.hex().to_string()),
            move |(_, color)| swatch(color, on_copy.clone()),
        )
        .style(|s| {
            s.flex_wrap(floem::taffy::FlexWrap::Wrap)
                .gap(constants::GAP)
                .justify_center()
        }),
        banner.view(),
    ))
    .style(|s| {
        s.gap(constants::GAP)
            .padding(constants::PADDING)
            .size_full()
            .items_center()
            .background(Color::rgb8(242, 242, 242))
    })
    .keyboard_navigable()
    .on_event(EventListener::KeyDown, move |e| {
        if let Event::KeyDown(ke) = e
            && ke.key.logical_key == Key::Named(NamedKey::Space)
            && !ke.key.repeat
        {
            on_space();
            return EventPropagation::Stop;
        }
        EventPropagation::Continue
    })
}
