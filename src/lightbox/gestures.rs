// SPDX-License-Identifier: MPL-2.0
//! Gesture interpreter: turns raw window events into viewer intents.
//!
//! The interpreter is a pure state machine over mouse, keyboard, and touch
//! events. It owns only gesture bookkeeping (cursor, active drag, pinch,
//! pending swipe, double-click window); what the intents do to the image is
//! the transform engine's and session's business. Events that reach it are
//! already uncaptured by widgets, so a press on the close button or the
//! toolbar never arrives here.

use crate::config::{DOUBLE_CLICK_RADIUS, DOUBLE_CLICK_WINDOW_MS};
use crate::lightbox::session::Direction;
use iced::{event, keyboard, mouse, touch, Point, Rectangle, Size, Vector};
use std::time::{Duration, Instant};

/// What the viewer should do in response to a gesture.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Navigate(Direction),
    /// Multiply the scale by `factor`, anchored at a viewport point.
    ZoomAt { anchor: Point, factor: f32 },
    /// Set the scale absolutely, anchored at a viewport point. Pinch uses
    /// this so finger spread maps to scale without per-event compounding.
    ScaleTo { anchor: Point, scale: f32 },
    ToggleZoom { anchor: Point },
    Pan { delta: Vector },
    ResetZoom,
    Close,
    CycleFocus { backward: bool },
}

/// Read-only facts the interpreter needs from the viewer.
#[derive(Debug, Clone, Copy)]
pub struct GestureContext {
    /// Current zoom scale; 1.0 means unzoomed.
    pub scale: f32,
    /// Window size; keyboard zoom anchors at its center.
    pub viewport: Size,
    /// Where the image content sits in the window. Presses outside it hit
    /// the backdrop.
    pub content_bounds: Rectangle,
    /// False while the viewer is loading or showing a failure placeholder.
    pub has_image: bool,
    /// Caption bar strip; presses there are chrome, not backdrop.
    pub top_bar: Rectangle,
    /// Zoom toolbar strip, when the toolbar is shown.
    pub toolbar: Option<Rectangle>,
    pub zoom_enabled: bool,
    pub wheel_zoom_factor: f32,
    /// Minimum horizontal travel for a swipe to count as navigation.
    pub swipe_threshold: f32,
}

impl GestureContext {
    fn zoomed(&self) -> bool {
        self.scale > 1.0
    }

    fn viewport_center(&self) -> Point {
        Point::new(self.viewport.width / 2.0, self.viewport.height / 2.0)
    }

    fn content_center(&self) -> Point {
        self.content_bounds.center()
    }

    fn in_chrome(&self, position: Point) -> bool {
        self.top_bar.contains(position)
            || self.toolbar.is_some_and(|bar| bar.contains(position))
    }
}

#[derive(Debug, Clone, Copy)]
struct PinchState {
    start_distance: f32,
    start_scale: f32,
    center: Point,
}

#[derive(Debug, Clone, Copy)]
struct PressRecord {
    at: Instant,
    position: Point,
}

/// Stateful interpreter for one open viewer. Reset when the modal closes.
#[derive(Debug, Default)]
pub struct GestureInterpreter {
    cursor: Option<Point>,
    /// Last cursor/finger position while a drag-pan is active.
    drag_last: Option<Point>,
    /// Pointer-down position of a potential swipe or click, unzoomed only.
    swipe_start: Option<Point>,
    pinch: Option<PinchState>,
    fingers: Vec<(touch::Finger, Point)>,
    last_press: Option<PressRecord>,
    /// Set when a press completed a double click; the matching release must
    /// not be read as a click or swipe.
    suppress_release: bool,
}

impl GestureInterpreter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears transient gesture state, keeping the tracked cursor.
    pub fn reset(&mut self) {
        let cursor = self.cursor;
        *self = Self::default();
        self.cursor = cursor;
    }

    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    /// Interprets one raw event. Returns `None` for events that mean
    /// nothing in the current state.
    pub fn interpret(&mut self, event: &event::Event, ctx: &GestureContext) -> Option<Intent> {
        match event {
            event::Event::Keyboard(keyboard_event) => self.interpret_key(keyboard_event, ctx),
            event::Event::Mouse(mouse_event) => self.interpret_mouse(mouse_event, ctx),
            event::Event::Touch(touch_event) => self.interpret_touch(touch_event, ctx),
            _ => None,
        }
    }

    fn interpret_key(
        &mut self,
        event: &keyboard::Event,
        ctx: &GestureContext,
    ) -> Option<Intent> {
        let keyboard::Event::KeyPressed { key, modifiers, .. } = event else {
            return None;
        };
        match key {
            keyboard::Key::Named(keyboard::key::Named::Escape) => {
                // First Escape only resets zoom; a second one closes.
                if ctx.zoomed() {
                    Some(Intent::ResetZoom)
                } else {
                    Some(Intent::Close)
                }
            }
            keyboard::Key::Named(keyboard::key::Named::Tab) => Some(Intent::CycleFocus {
                backward: modifiers.shift(),
            }),
            keyboard::Key::Named(keyboard::key::Named::ArrowRight) if !ctx.zoomed() => {
                Some(Intent::Navigate(Direction::Next))
            }
            keyboard::Key::Named(keyboard::key::Named::ArrowLeft) if !ctx.zoomed() => {
                Some(Intent::Navigate(Direction::Previous))
            }
            keyboard::Key::Character(c) if ctx.zoom_enabled => match c.as_str() {
                "+" | "=" => Some(Intent::ZoomAt {
                    anchor: ctx.viewport_center(),
                    factor: ctx.wheel_zoom_factor,
                }),
                "-" => Some(Intent::ZoomAt {
                    anchor: ctx.viewport_center(),
                    factor: 1.0 / ctx.wheel_zoom_factor,
                }),
                "0" => Some(Intent::ResetZoom),
                _ => None,
            },
            _ => None,
        }
    }

    fn interpret_mouse(&mut self, event: &mouse::Event, ctx: &GestureContext) -> Option<Intent> {
        match event {
            mouse::Event::CursorMoved { position } => {
                self.cursor = Some(*position);
                let last = self.drag_last?;
                if !ctx.zoomed() {
                    return None;
                }
                self.drag_last = Some(*position);
                Some(Intent::Pan {
                    delta: Vector::new(position.x - last.x, position.y - last.y),
                })
            }
            mouse::Event::CursorLeft => {
                self.cursor = None;
                self.drag_last = None;
                self.swipe_start = None;
                None
            }
            mouse::Event::WheelScrolled { delta } => {
                if !ctx.zoom_enabled {
                    return None;
                }
                let anchor = self.cursor?;
                let steps = scroll_steps(delta);
                if steps == 0.0 {
                    return None;
                }
                let factor = if steps > 0.0 {
                    ctx.wheel_zoom_factor
                } else {
                    1.0 / ctx.wheel_zoom_factor
                };
                Some(Intent::ZoomAt { anchor, factor })
            }
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                let position = self.cursor?;
                self.handle_press(position, ctx)
            }
            mouse::Event::ButtonReleased(mouse::Button::Left) => {
                let position = self.cursor?;
                self.handle_release(position, ctx)
            }
            _ => None,
        }
    }

    fn interpret_touch(&mut self, event: &touch::Event, ctx: &GestureContext) -> Option<Intent> {
        match event {
            touch::Event::FingerPressed { id, position } => {
                self.fingers.retain(|(f, _)| f != id);
                self.fingers.push((*id, *position));
                match self.fingers.len() {
                    1 => {
                        if ctx.zoomed() {
                            self.drag_last = Some(*position);
                        } else {
                            self.swipe_start = Some(*position);
                        }
                        None
                    }
                    2 => {
                        // A second finger turns any drag or swipe into a pinch.
                        self.drag_last = None;
                        self.swipe_start = None;
                        let a = self.fingers[0].1;
                        let b = self.fingers[1].1;
                        self.pinch = Some(PinchState {
                            start_distance: distance(a, b).max(f32::EPSILON),
                            start_scale: ctx.scale,
                            center: midpoint(a, b),
                        });
                        None
                    }
                    _ => None,
                }
            }
            touch::Event::FingerMoved { id, position } => {
                if let Some(slot) = self.fingers.iter_mut().find(|(f, _)| f == id) {
                    slot.1 = *position;
                }
                if let (Some(pinch), 2) = (self.pinch, self.fingers.len()) {
                    if !ctx.zoom_enabled {
                        return None;
                    }
                    let d = distance(self.fingers[0].1, self.fingers[1].1);
                    let target = pinch.start_scale * (d / pinch.start_distance);
                    return Some(Intent::ScaleTo {
                        anchor: pinch.center,
                        scale: target,
                    });
                }
                if let Some(last) = self.drag_last {
                    if ctx.zoomed() {
                        self.drag_last = Some(*position);
                        return Some(Intent::Pan {
                            delta: Vector::new(position.x - last.x, position.y - last.y),
                        });
                    }
                }
                None
            }
            touch::Event::FingerLifted { id, position }
            | touch::Event::FingerLost { id, position } => {
                self.fingers.retain(|(f, _)| f != id);
                if self.fingers.len() < 2 {
                    self.pinch = None;
                }
                self.drag_last = None;
                let start = self.swipe_start.take()?;
                if ctx.zoomed() {
                    return None;
                }
                swipe_direction(start, *position, ctx.swipe_threshold).map(Intent::Navigate)
            }
        }
    }

    fn handle_press(&mut self, position: Point, ctx: &GestureContext) -> Option<Intent> {
        if ctx.in_chrome(position) {
            // Caption bar and toolbar are modal chrome; a press on their
            // padding is neither backdrop nor content.
            self.last_press = None;
            self.swipe_start = None;
            return None;
        }
        if !ctx.content_bounds.contains(position) {
            // Backdrop press closes regardless of zoom state.
            self.last_press = None;
            return Some(Intent::Close);
        }

        let is_double = self.last_press.is_some_and(|press| {
            press.at.elapsed() < Duration::from_millis(DOUBLE_CLICK_WINDOW_MS)
                && distance(press.position, position) <= DOUBLE_CLICK_RADIUS
        });

        if is_double && ctx.zoom_enabled {
            self.last_press = None;
            self.suppress_release = true;
            self.swipe_start = None;
            self.drag_last = None;
            return Some(Intent::ToggleZoom { anchor: position });
        }

        self.last_press = Some(PressRecord {
            at: Instant::now(),
            position,
        });
        if ctx.zoomed() {
            self.drag_last = Some(position);
        } else {
            self.swipe_start = Some(position);
        }
        None
    }

    fn handle_release(&mut self, position: Point, ctx: &GestureContext) -> Option<Intent> {
        self.drag_last = None;
        if self.suppress_release {
            self.suppress_release = false;
            self.swipe_start = None;
            return None;
        }
        let start = self.swipe_start.take()?;
        if ctx.zoomed() {
            return None;
        }
        if let Some(direction) = swipe_direction(start, position, ctx.swipe_threshold) {
            return Some(Intent::Navigate(direction));
        }
        // A short press is a click: left half goes back, right half forward.
        // Only once an image is displayed; a loading or failed pane has no
        // halves to click.
        if ctx.has_image && distance(start, position) <= DOUBLE_CLICK_RADIUS {
            let direction = if position.x < ctx.content_center().x {
                Direction::Previous
            } else {
                Direction::Next
            };
            return Some(Intent::Navigate(direction));
        }
        None
    }
}

/// Positive for zoom-in scrolls, negative for zoom-out.
fn scroll_steps(delta: &mouse::ScrollDelta) -> f32 {
    match delta {
        mouse::ScrollDelta::Lines { y, .. } => *y,
        mouse::ScrollDelta::Pixels { y, .. } => *y / 120.0,
    }
}

/// Swiping left reveals the next image, right the previous one. Vertical
/// travel larger than the horizontal component cancels the swipe.
fn swipe_direction(start: Point, end: Point, threshold: f32) -> Option<Direction> {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    if dx.abs() < threshold || dy.abs() > dx.abs() {
        return None;
    }
    Some(if dx < 0.0 {
        Direction::Next
    } else {
        Direction::Previous
    })
}

fn distance(a: Point, b: Point) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

fn midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}
