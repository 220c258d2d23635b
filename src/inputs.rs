//! Input controls: the palette size field and a text button.

use floem::event::EventPropagation;
use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate, create_effect};

use crate::constants;

/// Parse a typed size and clamp it to the accepted range.
///
/// Returns `None` for text that is not a whole number.
pub(crate) fn parse_size(raw: &str) -> Option<usize> {
    let num = raw.trim().parse::<i64>().ok()?;
    let clamped = num.clamp(
        constants::MIN_PALETTE_SIZE as i64,
        constants::MAX_PALETTE_SIZE as i64,
    );
    Some(clamped as usize)
}

/// A numeric input bound to the requested palette size.
///
/// The value is committed on Enter or focus loss. Invalid text snaps back to
/// the current size.
pub(crate) fn size_input(lbl: &'static str, size: RwSignal<usize>) -> impl IntoView {
    let text = RwSignal::new(size.get_untracked().to_string());

    // Signal → text (external updates)
    create_effect(move |_| {
        let expected = size.get().to_string();
        if text.get_untracked() != expected {
            text.set(expected);
        }
    });

    let on_commit = move || {
        let raw = text.get_untracked();
        let committed = match parse_size(&raw) {
            Some(new_size) => {
                if new_size != size.get_untracked() {
                    size.set(new_size);
                }
                new_size
            }
            None => size.get_untracked(),
        };
        let formatted = committed.to_string();
        if raw != formatted {
            text.set(formatted);
        }
    };
    let on_commit_clone = on_commit;

    h_stack((
        label(move || lbl).style(|s| {
            s.font_size(constants::LABEL_FONT)
                .color(Color::rgb8(120, 120, 120))
        }),
        text_input(text)
            .style(|s| {
                s.width(constants::INPUT_WIDTH)
                    .padding(2.0)
                    .font_size(constants::INPUT_FONT)
                    .font_family("monospace".to_string())
                    .background(Color::WHITE)
                    .border(1.0)
                    .border_color(Color::rgb8(200, 200, 200))
                    .border_radius(3.0)
            })
            .on_event_stop(floem::event::EventListener::FocusLost, move |_| {
                on_commit();
            })
            .on_event(floem::event::EventListener::KeyDown, move |e| {
                if let floem::event::Event::KeyDown(ke) = e
                    && ke.key.logical_key
                        == floem::keyboard::Key::Named(floem::keyboard::NamedKey::Enter)
                {
                    on_commit_clone();
                    return EventPropagation::Stop;
                }
                EventPropagation::Continue
            }),
    ))
    .style(|s| s.items_center().gap(4.0))
}

/// A flat button that runs `on_press` on pointer release.
pub(crate) fn text_button(text: &'static str, on_press: impl Fn() + 'static) -> impl IntoView {
    let pressed = RwSignal::new(false);
    container(label(move || text).style(move |s| {
        let c = if pressed.get() {
            Color::rgb8(220, 220, 220)
        } else {
            Color::WHITE
        };
        s.font_size(constants::HEX_FONT).color(c)
    }))
    .style(|s| {
        s.padding_horiz(constants::PADDING)
            .padding_vert(6.0)
            .items_center()
            .justify_center()
            .border_radius(constants::RADIUS)
            .background(Color::rgb8(59, 130, 246))
            .cursor(floem::style::CursorStyle::Pointer)
            .hover(|s| s.background(Color::rgb8(37, 99, 235)))
    })
    .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        pressed.set(false);
        on_press();
    })
}
