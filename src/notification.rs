//! Transient notification banner.

use std::time::Duration;

use floem::action::exec_after;
use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};

use crate::constants;
use crate::error::ColorError;

/// A message and how long to show it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub duration: Duration,
}

impl Notification {
    /// A notification with the default lifetime.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            duration: Duration::from_millis(constants::NOTICE_MS),
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn copied(hex: &str) -> Self {
        Self::new(format!("Copied {hex} to clipboard!"))
            .with_duration(Duration::from_millis(constants::COPY_NOTICE_MS))
    }

    pub fn copy_failed() -> Self {
        Self::new("Failed to copy to clipboard")
    }
}

impl From<&ColorError> for Notification {
    fn from(err: &ColorError) -> Self {
        match err {
            ColorError::InvalidFormat(_) => Self::new("Invalid color format provided"),
        }
    }
}

/// What the banner shows, plus a counter bumped on every post.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct BannerState {
    message: Option<String>,
    generation: u64,
}

impl BannerState {
    /// Show `message`; returns the id its hide timer must present.
    pub(crate) fn post(&mut self, message: String) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.message = Some(message);
        self.generation
    }

    /// Hide the message if `id` is still the latest post.
    ///
    /// A timer started for an older message never hides a newer one.
    pub(crate) fn expire(&mut self, id: u64) -> bool {
        if self.generation != id || self.message.is_none() {
            return false;
        }
        self.message = None;
        true
    }

    pub(crate) fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Reactive banner driven by a [`BannerState`].
#[derive(Clone, Copy)]
pub(crate) struct Banner {
    state: RwSignal<BannerState>,
}

impl Banner {
    pub(crate) fn new() -> Self {
        Self {
            state: RwSignal::new(BannerState::default()),
        }
    }

    pub(crate) fn show(self, notification: Notification) {
        let mut id = 0;
        self.state.update(|state| id = state.post(notification.message));
        exec_after(notification.duration, move |_| {
            self.state.update(|state| {
                state.expire(id);
            });
        });
    }

    /// The message on screen right now, if any.
    pub(crate) fn message(self) -> Option<String> {
        self.state.get_untracked().message().map(str::to_string)
    }

    pub(crate) fn view(self) -> impl IntoView {
        let state = self.state;
        let text = move || state.get().message().unwrap_or_default().to_string();
        label(text).style(move |s| {
            let visible = state.get().message().is_some();
            s.padding_horiz(constants::PADDING)
                .padding_vert(6.0)
                .border_radius(constants::RADIUS)
                .font_size(constants::HEX_FONT)
                .color(Color::WHITE)
                .background(Color::rgb8(40, 40, 40))
                .apply_if(!visible, |s| s.hide())
        })
    }
}
