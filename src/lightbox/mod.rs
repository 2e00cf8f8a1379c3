// SPDX-License-Identifier: MPL-2.0
//! The modal viewer component.
//!
//! [`State`] owns the viewer's lifecycle session, viewport transform,
//! gesture interpreter, focus ring, and preload cache, and wires them
//! together behind a single message handler. The shell feeds it messages
//! and uncaptured window events and renders from its read-only accessors;
//! lifecycle transitions come back as [`Effect`]s.

pub mod focus;
pub mod gestures;
pub mod preload;
pub mod session;
pub mod transform;

use crate::config::Config;
use crate::error;
use crate::gallery::GalleryIndex;
use crate::media::ImageData;
use focus::{FocusRing, FocusTarget};
use gestures::{GestureContext, GestureInterpreter, Intent};
use iced::widget::scrollable::AbsoluteOffset;
use iced::{event, Point, Rectangle, Size, Task, Vector};
use preload::{PreloadCache, PreloadConfig};
use session::{Direction, LifecycleEvent, Session};
use std::path::PathBuf;
use transform::{fitted_size, Scale, ViewportTransform};

/// Identifier of the viewer's scrollable, which mirrors the pan offset.
pub const SCROLLABLE_ID: &str = "lightbox-image-scrollable";

/// Height of the caption/close bar across the top of the modal.
pub const TOP_BAR_HEIGHT: f32 = 56.0;

/// Height of the zoom toolbar across the bottom of the modal.
pub const TOOLBAR_HEIGHT: f32 = 64.0;

#[derive(Debug, Clone)]
pub enum Message {
    Open {
        group: String,
        index: usize,
        /// Flat grid position the request came from, for focus restore.
        origin: Option<usize>,
    },
    Navigate(Direction),
    Close,
    ZoomIn,
    ZoomOut,
    ResetZoom,
    ImageLoaded {
        path: PathBuf,
        result: error::Result<ImageData>,
    },
    Preloaded {
        path: PathBuf,
        result: error::Result<ImageData>,
    },
    RawEvent(event::Event),
    ViewportResized(Size),
}

/// What the shell must react to after a message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Lifecycle(LifecycleEvent),
}

pub struct State {
    session: Session,
    transform: ViewportTransform,
    gestures: GestureInterpreter,
    focus: FocusRing,
    preload: PreloadCache,
    /// Currently displayed image, `None` while loading or after a failure.
    image: Option<ImageData>,
    caption: Option<String>,
    /// Path of the load in flight; stale completions are dropped.
    pending: Option<PathBuf>,
    viewport: Size,
    zoom_enabled: bool,
    show_toolbar: bool,
    wheel_zoom_factor: f32,
    swipe_threshold: f32,
}

impl State {
    pub fn new(config: &Config) -> Self {
        let defaults = Config::default();
        let preload_enabled = config
            .preload_enabled
            .or(defaults.preload_enabled)
            .unwrap_or(true);
        let preload = if preload_enabled {
            PreloadCache::new(PreloadConfig::default())
        } else {
            PreloadCache::new(PreloadConfig::disabled())
        };
        Self {
            session: Session::new(),
            transform: ViewportTransform::new(),
            gestures: GestureInterpreter::new(),
            focus: FocusRing::new(),
            preload,
            image: None,
            caption: None,
            pending: None,
            viewport: Size::new(1.0, 1.0),
            zoom_enabled: config
                .zoom_enabled
                .or(defaults.zoom_enabled)
                .unwrap_or(true),
            show_toolbar: config
                .show_toolbar
                .or(defaults.show_toolbar)
                .unwrap_or(true),
            wheel_zoom_factor: config
                .wheel_zoom_factor
                .or(defaults.wheel_zoom_factor)
                .unwrap_or(crate::config::DEFAULT_WHEEL_ZOOM_FACTOR),
            swipe_threshold: config
                .swipe_threshold
                .or(defaults.swipe_threshold)
                .unwrap_or(crate::config::DEFAULT_SWIPE_NAV_THRESHOLD),
        }
    }

    // ===== Read-only accessors for the view =====

    pub fn is_open(&self) -> bool {
        self.session.is_open()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn image(&self) -> Option<&ImageData> {
        self.image.as_ref()
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn scale(&self) -> Scale {
        self.transform.scale()
    }

    pub fn pan(&self) -> Vector {
        self.transform.pan()
    }

    pub fn focus_target(&self) -> FocusTarget {
        self.focus.current()
    }

    pub fn shows_toolbar(&self) -> bool {
        self.show_toolbar && self.zoom_enabled
    }

    /// Contain-fitted size of the current image at scale 1.
    pub fn base_size(&self) -> Size {
        match &self.image {
            Some(image) => fitted_size(image.width, image.height, self.viewport),
            None => self.viewport,
        }
    }

    /// Where the scaled, panned image sits in the window.
    pub fn content_bounds(&self) -> Rectangle {
        let base = self.base_size();
        let scale = self.transform.scale().get();
        let size = Size::new(base.width * scale, base.height * scale);
        let pan = self.transform.pan();
        Rectangle::new(
            Point::new(
                (self.viewport.width - size.width) / 2.0 + pan.x,
                (self.viewport.height - size.height) / 2.0 + pan.y,
            ),
            size,
        )
    }

    /// Strip occupied by the caption/close bar.
    fn top_bar_bounds(&self) -> Rectangle {
        Rectangle::new(
            Point::ORIGIN,
            Size::new(self.viewport.width, TOP_BAR_HEIGHT),
        )
    }

    /// Strip occupied by the zoom toolbar, when it is shown.
    fn toolbar_bounds(&self) -> Option<Rectangle> {
        self.shows_toolbar().then(|| {
            Rectangle::new(
                Point::new(0.0, self.viewport.height - TOOLBAR_HEIGHT),
                Size::new(self.viewport.width, TOOLBAR_HEIGHT),
            )
        })
    }

    // ===== Message handling =====

    pub fn handle(&mut self, gallery: &GalleryIndex, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::Open {
                group,
                index,
                origin,
            } => self.open(gallery, &group, index, origin),
            Message::Navigate(direction) => self.navigate(gallery, direction),
            Message::Close => self.close(),
            Message::ZoomIn => {
                self.zoom_center(self.wheel_zoom_factor);
                (Effect::None, self.sync_scroll())
            }
            Message::ZoomOut => {
                self.zoom_center(1.0 / self.wheel_zoom_factor);
                (Effect::None, self.sync_scroll())
            }
            Message::ResetZoom => {
                self.transform.reset();
                (Effect::None, self.sync_scroll())
            }
            Message::ImageLoaded { path, result } => {
                if self.pending.as_deref() != Some(path.as_path()) {
                    // A newer request superseded this load
                    return (Effect::None, Task::none());
                }
                self.pending = None;
                match result {
                    Ok(image) => {
                        self.preload.insert(path, image.clone());
                        self.image = Some(image);
                    }
                    // The caption stays so the failure message has context
                    Err(_) => self.image = None,
                }
                (Effect::None, Task::none())
            }
            Message::Preloaded { path, result } => {
                if let Ok(image) = result {
                    self.preload.insert(path, image);
                }
                (Effect::None, Task::none())
            }
            Message::RawEvent(event) => self.handle_raw_event(gallery, &event),
            Message::ViewportResized(size) => {
                self.viewport = size;
                let base = self.base_size();
                self.transform.clamp_pan(self.viewport, base);
                (Effect::None, self.sync_scroll())
            }
        }
    }

    fn open(
        &mut self,
        gallery: &GalleryIndex,
        group: &str,
        index: usize,
        origin: Option<usize>,
    ) -> (Effect, Task<Message>) {
        let Some(event) = self.session.open(gallery, group, index, origin) else {
            // Unknown group or out-of-range index: stay closed, say nothing
            return (Effect::None, Task::none());
        };
        self.transform.reset();
        self.gestures.reset();
        self.focus = FocusRing::new();

        let load = self.load_current(gallery);
        let preload = self.preload_neighbors(gallery, &[Direction::Previous, Direction::Next]);
        (
            Effect::Lifecycle(event),
            Task::batch([load, preload, self.sync_scroll()]),
        )
    }

    fn navigate(&mut self, gallery: &GalleryIndex, direction: Direction) -> (Effect, Task<Message>) {
        // Navigation only makes sense on the unzoomed image
        if !self.transform.is_reset() {
            return (Effect::None, Task::none());
        }
        let Some(event) = self.session.navigate(gallery, direction) else {
            return (Effect::None, Task::none());
        };
        self.transform.reset();
        let load = self.load_current(gallery);
        let preload = self.preload_neighbors(gallery, &[direction]);
        (
            Effect::Lifecycle(event),
            Task::batch([load, preload, self.sync_scroll()]),
        )
    }

    fn close(&mut self) -> (Effect, Task<Message>) {
        let Some(event) = self.session.close() else {
            return (Effect::None, Task::none());
        };
        self.image = None;
        self.caption = None;
        self.pending = None;
        self.transform.reset();
        self.gestures.reset();
        (Effect::Lifecycle(event), Task::none())
    }

    fn zoom_center(&mut self, factor: f32) {
        if !self.zoom_enabled {
            return;
        }
        let base = self.base_size();
        let center = Point::new(self.viewport.width / 2.0, self.viewport.height / 2.0);
        self.transform.zoom_at(center, factor, self.viewport, base);
    }

    /// Absolute scroll offset that realizes the current pan. The image sits
    /// in a scrollable with hidden scrollbars; the widget's offset and this
    /// state are kept in lockstep by [`Self::sync_scroll`] tasks.
    pub fn scroll_offset(&self) -> AbsoluteOffset {
        let base = self.base_size();
        let scale = self.transform.scale().get();
        let pan = self.transform.pan();
        let offset_axis = |scaled: f32, viewport: f32, pan: f32| {
            let max = (scaled - viewport).max(0.0);
            ((scaled - viewport) / 2.0 - pan).clamp(0.0, max)
        };
        AbsoluteOffset {
            x: offset_axis(base.width * scale, self.viewport.width, pan.x),
            y: offset_axis(base.height * scale, self.viewport.height, pan.y),
        }
    }

    fn sync_scroll(&self) -> Task<Message> {
        iced::widget::operation::scroll_to(iced::widget::Id::new(SCROLLABLE_ID), self.scroll_offset())
    }

    fn handle_raw_event(
        &mut self,
        gallery: &GalleryIndex,
        event: &event::Event,
    ) -> (Effect, Task<Message>) {
        if !self.session.is_open() {
            return (Effect::None, Task::none());
        }
        let ctx = GestureContext {
            scale: self.transform.scale().get(),
            viewport: self.viewport,
            content_bounds: self.content_bounds(),
            has_image: self.image.is_some(),
            top_bar: self.top_bar_bounds(),
            toolbar: self.toolbar_bounds(),
            zoom_enabled: self.zoom_enabled,
            wheel_zoom_factor: self.wheel_zoom_factor,
            swipe_threshold: self.swipe_threshold,
        };
        let Some(intent) = self.gestures.interpret(event, &ctx) else {
            return (Effect::None, Task::none());
        };
        self.apply_intent(gallery, intent)
    }

    fn apply_intent(&mut self, gallery: &GalleryIndex, intent: Intent) -> (Effect, Task<Message>) {
        let base = self.base_size();
        match intent {
            Intent::Navigate(direction) => self.navigate(gallery, direction),
            Intent::ZoomAt { anchor, factor } => {
                if self.zoom_enabled {
                    self.transform.zoom_at(anchor, factor, self.viewport, base);
                }
                (Effect::None, self.sync_scroll())
            }
            Intent::ScaleTo { anchor, scale } => {
                if self.zoom_enabled {
                    self.transform
                        .set_scale_at(anchor, Scale::new(scale), self.viewport, base);
                }
                (Effect::None, self.sync_scroll())
            }
            Intent::ToggleZoom { anchor } => {
                if self.zoom_enabled {
                    self.transform.toggle_at(anchor, self.viewport, base);
                }
                (Effect::None, self.sync_scroll())
            }
            Intent::Pan { delta } => {
                self.transform.pan_by(delta, self.viewport, base);
                (Effect::None, self.sync_scroll())
            }
            Intent::ResetZoom => {
                self.transform.reset();
                (Effect::None, self.sync_scroll())
            }
            Intent::Close => self.close(),
            Intent::CycleFocus { backward } => {
                self.focus.cycle(backward);
                (Effect::None, Task::none())
            }
        }
    }

    /// Loads the image the session points at, serving from the preload
    /// cache when possible.
    fn load_current(&mut self, gallery: &GalleryIndex) -> Task<Message> {
        let Some(open) = self.session.current() else {
            return Task::none();
        };
        let Some(entry) = gallery.entry(&open.group, open.index) else {
            return Task::none();
        };
        self.caption = entry.caption.clone();
        let path = entry.best_source().to_path_buf();

        if let Some(image) = self.preload.get(&path) {
            self.image = Some(image);
            self.pending = None;
            return Task::none();
        }

        self.pending = Some(path.clone());
        Task::perform(preload::load_in_background(path), |(path, result)| {
            Message::ImageLoaded { path, result }
        })
    }

    fn preload_neighbors(
        &mut self,
        gallery: &GalleryIndex,
        directions: &[Direction],
    ) -> Task<Message> {
        if !self.preload.is_enabled() {
            return Task::none();
        }
        let Some(open) = self.session.current() else {
            return Task::none();
        };
        let group = open.group.clone();
        let current = open.index;

        let mut wanted: Vec<PathBuf> = Vec::new();
        for &direction in directions {
            let Some(index) = self.session.neighbor(gallery, direction) else {
                continue;
            };
            if index == current {
                continue;
            }
            if let Some(entry) = gallery.entry(&group, index) {
                let path = entry.best_source().to_path_buf();
                if !wanted.contains(&path) {
                    wanted.push(path);
                }
            }
        }

        let tasks: Vec<Task<Message>> = self
            .preload
            .missing(&wanted)
            .into_iter()
            .map(|path| {
                Task::perform(preload::load_in_background(path), |(path, result)| {
                    Message::Preloaded { path, result }
                })
            })
            .collect();
        Task::batch(tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::Thumbnail;
    use iced::{keyboard, mouse};

    fn gallery() -> GalleryIndex {
        GalleryIndex::new(vec![
            Thumbnail::new("/g/a.jpg").with_group("g").with_caption("A"),
            Thumbnail::new("/g/b.jpg").with_group("g").with_caption("B"),
            Thumbnail::new("/g/c.jpg").with_group("g").with_caption("C"),
        ])
    }

    fn state() -> State {
        let mut state = State::new(&Config::default());
        state.viewport = Size::new(800.0, 600.0);
        state
    }

    fn escape() -> Message {
        Message::RawEvent(event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            modified_key: keyboard::Key::Named(keyboard::key::Named::Escape),
            physical_key: keyboard::key::Physical::Unidentified(
                keyboard::key::NativeCode::Unidentified,
            ),
            location: keyboard::Location::Standard,
            modifiers: keyboard::Modifiers::default(),
            text: None,
            repeat: false,
        }))
    }

    fn char_press(c: &str) -> Message {
        Message::RawEvent(event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Character(c.into()),
            modified_key: keyboard::Key::Character(c.into()),
            physical_key: keyboard::key::Physical::Unidentified(
                keyboard::key::NativeCode::Unidentified,
            ),
            location: keyboard::Location::Standard,
            modifiers: keyboard::Modifiers::default(),
            text: None,
            repeat: false,
        }))
    }

    fn mouse_move(x: f32, y: f32) -> Message {
        Message::RawEvent(event::Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(x, y),
        }))
    }

    fn left_press() -> Message {
        Message::RawEvent(event::Event::Mouse(mouse::Event::ButtonPressed(
            mouse::Button::Left,
        )))
    }

    fn left_release() -> Message {
        Message::RawEvent(event::Event::Mouse(mouse::Event::ButtonReleased(
            mouse::Button::Left,
        )))
    }

    #[test]
    fn open_reports_requested_coordinates() {
        let gallery = gallery();
        let mut state = state();

        let (effect, _) = state.handle(
            &gallery,
            Message::Open {
                group: "g".into(),
                index: 1,
                origin: Some(1),
            },
        );
        assert_eq!(
            effect,
            Effect::Lifecycle(LifecycleEvent::Opened {
                group: "g".into(),
                index: 1
            })
        );
        assert!(state.is_open());
        assert_eq!(state.caption(), Some("B"));
        assert!(state.is_loading());
    }

    #[test]
    fn open_with_invalid_target_is_silent() {
        let gallery = gallery();
        let mut state = state();

        let (effect, _) = state.handle(
            &gallery,
            Message::Open {
                group: "missing".into(),
                index: 0,
                origin: None,
            },
        );
        assert_eq!(effect, Effect::None);
        assert!(!state.is_open());
        assert!(state.caption().is_none());
    }

    #[test]
    fn navigate_is_blocked_while_zoomed() {
        let gallery = gallery();
        let mut state = state();
        state.handle(
            &gallery,
            Message::Open {
                group: "g".into(),
                index: 0,
                origin: None,
            },
        );
        state.handle(&gallery, Message::ZoomIn);

        let (effect, _) = state.handle(&gallery, Message::Navigate(Direction::Next));
        assert_eq!(effect, Effect::None);
        assert_eq!(state.session().current().map(|s| s.index), Some(0));
    }

    #[test]
    fn navigate_wraps_and_reports_new_index() {
        let gallery = gallery();
        let mut state = state();
        state.handle(
            &gallery,
            Message::Open {
                group: "g".into(),
                index: 2,
                origin: None,
            },
        );

        let (effect, _) = state.handle(&gallery, Message::Navigate(Direction::Next));
        assert_eq!(
            effect,
            Effect::Lifecycle(LifecycleEvent::Navigated {
                group: "g".into(),
                index: 0
            })
        );
        assert_eq!(state.caption(), Some("A"));
    }

    #[test]
    fn escape_resets_zoom_then_closes() {
        let gallery = gallery();
        let mut state = state();
        state.handle(
            &gallery,
            Message::Open {
                group: "g".into(),
                index: 0,
                origin: Some(0),
            },
        );
        state.handle(&gallery, Message::ZoomIn);
        assert!(state.scale().get() > 1.0);

        let (effect, _) = state.handle(&gallery, escape());
        assert_eq!(effect, Effect::None);
        assert_eq!(state.scale().get(), 1.0);
        assert!(state.is_open());

        let (effect, _) = state.handle(&gallery, escape());
        assert_eq!(
            effect,
            Effect::Lifecycle(LifecycleEvent::Closed {
                restore_focus_to: Some(0)
            })
        );
        assert!(!state.is_open());
    }

    #[test]
    fn close_clears_image_and_caption() {
        let gallery = gallery();
        let mut state = state();
        state.handle(
            &gallery,
            Message::Open {
                group: "g".into(),
                index: 0,
                origin: None,
            },
        );

        state.handle(&gallery, Message::Close);
        assert!(state.image().is_none());
        assert!(state.caption().is_none());
        assert!(!state.is_loading());
    }

    #[test]
    fn stale_load_completion_is_dropped() {
        let gallery = gallery();
        let mut state = state();
        state.handle(
            &gallery,
            Message::Open {
                group: "g".into(),
                index: 0,
                origin: None,
            },
        );
        // Move on before a.jpg finishes loading
        state.handle(&gallery, Message::Navigate(Direction::Next));

        let stale = ImageData::from_rgba(2, 2, vec![0u8; 16]);
        state.handle(
            &gallery,
            Message::ImageLoaded {
                path: PathBuf::from("/g/a.jpg"),
                result: Ok(stale),
            },
        );
        assert!(state.image().is_none());
        assert!(state.is_loading());
    }

    #[test]
    fn failed_load_keeps_caption() {
        let gallery = gallery();
        let mut state = state();
        state.handle(
            &gallery,
            Message::Open {
                group: "g".into(),
                index: 0,
                origin: None,
            },
        );

        state.handle(
            &gallery,
            Message::ImageLoaded {
                path: PathBuf::from("/g/a.jpg"),
                result: Err(error::Error::Io("gone".into())),
            },
        );
        assert!(state.image().is_none());
        assert_eq!(state.caption(), Some("A"));
        assert!(!state.is_loading());
    }

    #[test]
    fn toolbar_zoom_steps_compound_and_reset_returns_to_rest() {
        let gallery = gallery();
        let mut state = state();
        state.handle(
            &gallery,
            Message::Open {
                group: "g".into(),
                index: 0,
                origin: None,
            },
        );

        for _ in 0..5 {
            state.handle(&gallery, Message::ZoomIn);
        }
        assert_eq!(state.scale().as_percent(), 249);

        state.handle(&gallery, Message::ResetZoom);
        assert_eq!(state.scale().get(), 1.0);
        assert_eq!(state.pan(), Vector::new(0.0, 0.0));
    }

    #[test]
    fn zoom_disabled_config_ignores_zoom_requests() {
        let gallery = gallery();
        let config = Config {
            zoom_enabled: Some(false),
            ..Config::default()
        };
        let mut state = State::new(&config);
        state.viewport = Size::new(800.0, 600.0);
        state.handle(
            &gallery,
            Message::Open {
                group: "g".into(),
                index: 0,
                origin: None,
            },
        );

        state.handle(&gallery, Message::ZoomIn);
        assert_eq!(state.scale().get(), 1.0);
        assert!(!state.shows_toolbar());
    }

    #[test]
    fn preloaded_neighbor_is_served_from_cache() {
        let gallery = gallery();
        let mut state = state();
        state.handle(
            &gallery,
            Message::Open {
                group: "g".into(),
                index: 0,
                origin: None,
            },
        );

        let neighbor = ImageData::from_rgba(4, 4, vec![0u8; 64]);
        state.handle(
            &gallery,
            Message::Preloaded {
                path: PathBuf::from("/g/b.jpg"),
                result: Ok(neighbor),
            },
        );

        state.handle(&gallery, Message::Navigate(Direction::Next));
        // Cache hit: the image is available synchronously
        assert!(!state.is_loading());
        assert_eq!(state.image().map(|i| i.width), Some(4));
    }

    #[test]
    fn viewport_resize_reclamps_pan() {
        let gallery = gallery();
        let mut state = state();
        state.handle(
            &gallery,
            Message::Open {
                group: "g".into(),
                index: 0,
                origin: None,
            },
        );
        let image = ImageData::from_rgba(800, 600, vec![0u8; 800 * 600 * 4]);
        state.handle(
            &gallery,
            Message::ImageLoaded {
                path: PathBuf::from("/g/a.jpg"),
                result: Ok(image),
            },
        );
        state.handle(&gallery, Message::ZoomIn);
        state.handle(&gallery, Message::ZoomIn);

        // Shrinking the viewport must pull the pan back into bounds
        state.handle(&gallery, Message::ViewportResized(Size::new(400.0, 300.0)));
        let bounds = state.content_bounds();
        assert!(bounds.width > 0.0);
        let base = state.base_size();
        let scaled = base.width * state.scale().get();
        let limit = (scaled - 400.0) / 2.0 + crate::config::PAN_OVERSCROLL_MARGIN;
        assert!(state.pan().x.abs() <= limit + 0.001);
    }

    #[test]
    fn scroll_offset_is_centered_at_rest_and_tracks_pan() {
        let gallery = gallery();
        let mut state = state();
        state.handle(
            &gallery,
            Message::Open {
                group: "g".into(),
                index: 0,
                origin: None,
            },
        );
        let image = ImageData::from_rgba(800, 600, vec![0u8; 800 * 600 * 4]);
        state.handle(
            &gallery,
            Message::ImageLoaded {
                path: PathBuf::from("/g/a.jpg"),
                result: Ok(image),
            },
        );

        // Unzoomed: the image fits, no scroll offset
        let offset = state.scroll_offset();
        assert_eq!(offset.x, 0.0);
        assert_eq!(offset.y, 0.0);

        // At 2x the 1600x1200 content overhangs an 800x600 viewport by
        // 800x600; centered means half of that on each side
        state.handle(&gallery, Message::ZoomIn);
        for _ in 0..3 {
            state.handle(&gallery, Message::ZoomIn);
        }
        let scaled = state.base_size().width * state.scale().get();
        let expected_x = (scaled - 800.0) / 2.0 - state.pan().x;
        assert!((state.scroll_offset().x - expected_x).abs() < 0.001);
    }

    #[test]
    fn zoom_keys_stay_centered_after_a_drag_pan() {
        let gallery = gallery();
        let mut state = state();
        state.handle(
            &gallery,
            Message::Open {
                group: "g".into(),
                index: 0,
                origin: None,
            },
        );
        let image = ImageData::from_rgba(800, 600, vec![0u8; 800 * 600 * 4]);
        state.handle(
            &gallery,
            Message::ImageLoaded {
                path: PathBuf::from("/g/a.jpg"),
                result: Ok(image),
            },
        );
        state.handle(&gallery, Message::ZoomIn);
        state.handle(&gallery, Message::ZoomIn);

        // Drag the zoomed image off center
        state.handle(&gallery, mouse_move(400.0, 300.0));
        state.handle(&gallery, left_press());
        state.handle(&gallery, mouse_move(450.0, 330.0));
        state.handle(&gallery, left_release());
        assert_eq!(state.pan(), Vector::new(50.0, 30.0));

        // A viewport-center anchored zoom scales the pan by exactly the
        // step factor; anchoring at the panned content box would not.
        let before = state.pan();
        state.handle(&gallery, char_press("+"));
        let factor = crate::config::DEFAULT_WHEEL_ZOOM_FACTOR;
        assert!((state.pan().x - before.x * factor).abs() < 0.001);
        assert!((state.pan().y - before.y * factor).abs() < 0.001);
    }

    #[test]
    fn click_navigation_waits_for_the_image() {
        let gallery = gallery();
        let mut state = state();
        state.handle(
            &gallery,
            Message::Open {
                group: "g".into(),
                index: 0,
                origin: None,
            },
        );
        assert!(state.is_loading());

        // A click on the right half while the pane shows the loading
        // placeholder must not navigate or close.
        state.handle(&gallery, mouse_move(600.0, 300.0));
        state.handle(&gallery, left_press());
        state.handle(&gallery, left_release());
        assert!(state.is_open());
        assert_eq!(state.session().current().map(|s| s.index), Some(0));
    }

    #[test]
    fn presses_on_modal_chrome_do_not_close() {
        let gallery = gallery();
        let mut state = state();
        state.handle(
            &gallery,
            Message::Open {
                group: "g".into(),
                index: 0,
                origin: None,
            },
        );

        // Caption bar padding at the top
        state.handle(&gallery, mouse_move(400.0, 20.0));
        state.handle(&gallery, left_press());
        state.handle(&gallery, left_release());
        assert!(state.is_open());

        // Toolbar padding at the bottom
        state.handle(&gallery, mouse_move(400.0, 580.0));
        state.handle(&gallery, left_press());
        state.handle(&gallery, left_release());
        assert!(state.is_open());
    }

    #[test]
    fn focus_ring_cycles_through_raw_tab_events() {
        let gallery = gallery();
        let mut state = state();
        state.handle(
            &gallery,
            Message::Open {
                group: "g".into(),
                index: 0,
                origin: None,
            },
        );
        assert_eq!(state.focus_target(), FocusTarget::Close);

        let tab = Message::RawEvent(event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Tab),
            modified_key: keyboard::Key::Named(keyboard::key::Named::Tab),
            physical_key: keyboard::key::Physical::Unidentified(
                keyboard::key::NativeCode::Unidentified,
            ),
            location: keyboard::Location::Standard,
            modifiers: keyboard::Modifiers::default(),
            text: None,
            repeat: false,
        }));
        state.handle(&gallery, tab);
        assert_eq!(state.focus_target(), FocusTarget::Content);
    }
}
