// SPDX-License-Identifier: MPL-2.0
//! Modal viewer lifecycle: which image is open, in which group, and the
//! wrapping navigation between neighbors.
//!
//! The session is either closed or open on one (group, index) pair. Opening
//! records where focus came from so it can be restored on close. Invalid
//! open requests are silently ignored and leave the session closed.

use crate::gallery::GalleryIndex;

/// Direction of in-group navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

impl Direction {
    pub fn offset(self) -> isize {
        match self {
            Direction::Next => 1,
            Direction::Previous => -1,
        }
    }
}

/// An open viewer positioned on one gallery entry.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenSession {
    pub group: String,
    pub index: usize,
    /// Flat grid position the viewer was opened from; focus returns there
    /// on close.
    pub origin: Option<usize>,
}

/// Lifecycle transitions, surfaced so the shell can drive animations and
/// focus without re-deriving them from state diffs.
#[derive(Debug, Clone, PartialEq)]
pub enum LifecycleEvent {
    Opened { group: String, index: usize },
    Navigated { group: String, index: usize },
    Closed { restore_focus_to: Option<usize> },
}

/// Closed-or-open state machine for the modal viewer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    open: Option<OpenSession>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn current(&self) -> Option<&OpenSession> {
        self.open.as_ref()
    }

    /// While the viewer is open the grid behind it must not scroll.
    pub fn locks_scroll(&self) -> bool {
        self.is_open()
    }

    /// Opens the viewer on `(group, index)`. A group or index that does not
    /// exist in the gallery leaves the session closed and returns `None`.
    pub fn open(
        &mut self,
        gallery: &GalleryIndex,
        group: &str,
        index: usize,
        origin: Option<usize>,
    ) -> Option<LifecycleEvent> {
        gallery.entry(group, index)?;
        self.open = Some(OpenSession {
            group: group.to_string(),
            index,
            origin,
        });
        Some(LifecycleEvent::Opened {
            group: group.to_string(),
            index,
        })
    }

    /// Moves one step within the open group, wrapping at both ends.
    /// No-op when the viewer is closed.
    pub fn navigate(
        &mut self,
        gallery: &GalleryIndex,
        direction: Direction,
    ) -> Option<LifecycleEvent> {
        let session = self.open.as_mut()?;
        let len = gallery.group_len(&session.group);
        if len == 0 {
            return None;
        }
        session.index = wrap_step(session.index, direction, len);
        Some(LifecycleEvent::Navigated {
            group: session.group.clone(),
            index: session.index,
        })
    }

    /// Index of the neighbor in `direction` without moving, for preloading.
    pub fn neighbor(&self, gallery: &GalleryIndex, direction: Direction) -> Option<usize> {
        let session = self.open.as_ref()?;
        let len = gallery.group_len(&session.group);
        (len > 0).then(|| wrap_step(session.index, direction, len))
    }

    /// Closes the viewer. No-op when already closed.
    pub fn close(&mut self) -> Option<LifecycleEvent> {
        let session = self.open.take()?;
        Some(LifecycleEvent::Closed {
            restore_focus_to: session.origin,
        })
    }
}

fn wrap_step(index: usize, direction: Direction, len: usize) -> usize {
    let len = len as isize;
    let next = (index as isize + direction.offset()).rem_euclid(len);
    next as usize
}
