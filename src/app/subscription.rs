// SPDX-License-Identifier: MPL-2.0
use super::{App, Message};
use crate::lightbox;
use iced::{event, mouse, time, window, Subscription};
use std::time::Duration;

/// How often the fade-in is advanced while it is running.
const FADE_TICK: Duration = Duration::from_millis(16);

impl App {
    pub fn subscription(&self) -> Subscription<Message> {
        let events = if self.lightbox.is_open() {
            event::listen_with(route_while_open)
        } else {
            event::listen_with(route_while_closed)
        };

        let fade = if self.opened_at.is_some() {
            time::every(FADE_TICK).map(Message::Tick)
        } else {
            Subscription::none()
        };

        Subscription::batch([events, fade])
    }
}

/// Routing with the modal open: resizes update the viewport, wheel input
/// always reaches the gesture interpreter (the image scrollable shields it
/// but would otherwise mark it captured), and everything widgets did not
/// capture is raw gesture input.
fn route_while_open(
    event: event::Event,
    status: event::Status,
    _window: window::Id,
) -> Option<Message> {
    if let event::Event::Window(window::Event::Resized(size)) = &event {
        return Some(Message::Lightbox(lightbox::Message::ViewportResized(*size)));
    }
    if matches!(
        event,
        event::Event::Mouse(mouse::Event::WheelScrolled { .. })
    ) {
        return Some(Message::Lightbox(lightbox::Message::RawEvent(event)));
    }
    match status {
        event::Status::Ignored => Some(Message::Lightbox(lightbox::Message::RawEvent(event))),
        event::Status::Captured => None,
    }
}

fn route_while_closed(
    event: event::Event,
    _status: event::Status,
    _window: window::Id,
) -> Option<Message> {
    if let event::Event::Window(window::Event::Resized(size)) = event {
        Some(Message::Lightbox(lightbox::Message::ViewportResized(size)))
    } else {
        None
    }
}
