//! A single clickable color swatch.

use std::rc::Rc;

use floem::event::{Event, EventListener, EventPropagation};
use floem::keyboard::{Key, NamedKey};
use floem::prelude::*;

use crate::color::PaletteColor;
use crate::constants;

/// Preview block, hex code and a copy hint.
///
/// Clicking the swatch, or pressing Enter or Space while it has focus,
/// calls `on_copy` with the hex code.
pub(crate) fn swatch(color: PaletteColor, on_copy: Rc<dyn Fn(&str)>) -> impl IntoView {
    let (r, g, b) = color.to_unit_rgb();
    let hex = color.hex().to_string();
    let hsl = color.hsl();

    let click_hex = hex.clone();
    let click_copy = on_copy.clone();
    let key_hex = hex.clone();

    v_stack((
        empty().style(move |s| {
            s.width(constants::SWATCH_WIDTH)
                .height(constants::SWATCH_HEIGHT)
                .border_radius(constants::RADIUS)
                .background(Color::rgb(r, g, b))
        }),
        label(move || hex.clone()).style(|s| {
            s.font_size(constants::HEX_FONT)
                .font_family("monospace".to_string())
                .color(Color::rgb8(40, 40, 40))
        }),
        label(move || format!("hsl({}, {}%, {}%)", hsl.h, hsl.s, hsl.l)).style(|s| {
            s.font_size(constants::LABEL_FONT)
                .color(Color::rgb8(120, 120, 120))
        }),
        h_stack((
            label(|| lucide_icons::Icon::Copy.unicode().to_string())
                .style(|s| s.font_size(10.0).font_family("lucide".to_string())),
            label(|| "Click to copy"),
        ))
        .style(|s| {
            s.gap(3.0)
                .items_center()
                .font_size(constants::LABEL_FONT)
                .color(Color::rgb8(150, 150, 150))
        }),
    ))
    .style(|s| {
        s.gap(4.0)
            .padding(6.0)
            .items_center()
            .border(1.0)
            .border_color(Color::rgb8(220, 220, 220))
            .border_radius(constants::RADIUS)
            .background(Color::WHITE)
            .cursor(floem::style::CursorStyle::Pointer)
            .hover(|s| s.border_color(Color::rgb8(150, 150, 150)))
            .focus_visible(|s| s.border_color(Color::rgb8(59, 130, 246)))
    })
    .keyboard_navigable()
    .on_event_stop(EventListener::PointerUp, move |_| {
        click_copy(&click_hex);
    })
    .on_event(EventListener::KeyDown, move |e| {
        if let Event::KeyDown(ke) = e
            && matches!(
                ke.key.logical_key,
                Key::Named(NamedKey::Enter) | Key::Named(NamedKey::Space)
            )
        {
            on_copy(&key_hex);
            return EventPropagation::Stop;
        }
        EventPropagation::Continue
    })
}
