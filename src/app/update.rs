// SPDX-License-Identifier: MPL-2.0
use super::{App, Message};
use crate::lightbox;
use crate::lightbox::session::LifecycleEvent;
use iced::Task;
use std::time::Instant;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Lightbox(msg) => self.dispatch_lightbox(msg),
            Message::OpenThumbnail { flat_index } => {
                let Some((group, index)) = self.gallery.locate(flat_index) else {
                    return Task::none();
                };
                let group = group.to_string();
                self.focused_cell = None;
                self.dispatch_lightbox(lightbox::Message::Open {
                    group,
                    index,
                    origin: Some(flat_index),
                })
            }
            Message::ThumbnailLoaded { path, result } => {
                if let Ok(image) = result {
                    self.store_thumbnail(path, image);
                }
                Task::none()
            }
            Message::Tick(now) => {
                if let Some(started) = self.opened_at {
                    let elapsed = now.saturating_duration_since(started);
                    if elapsed.as_millis() >= u128::from(crate::config::MODAL_FADE_MS) {
                        self.opened_at = None;
                    }
                }
                Task::none()
            }
        }
    }

    fn dispatch_lightbox(&mut self, message: lightbox::Message) -> Task<Message> {
        let (effect, task) = self.lightbox.handle(&self.gallery, message);
        if let lightbox::Effect::Lifecycle(event) = effect {
            self.apply_lifecycle(event);
        }
        task.map(Message::Lightbox)
    }

    pub(super) fn apply_lifecycle(&mut self, event: LifecycleEvent) {
        match event {
            LifecycleEvent::Opened { .. } => {
                self.opened_at = (!self.reduced_motion).then(Instant::now);
            }
            LifecycleEvent::Navigated { .. } => {}
            LifecycleEvent::Closed { restore_focus_to } => {
                self.opened_at = None;
                self.focused_cell = restore_focus_to;
            }
        }
    }
}
