// SPDX-License-Identifier: MPL-2.0
//! Focus containment for the open modal.
//!
//! While the viewer is open, Tab cycles between exactly two stops: the
//! close control and the image content. Shift+Tab walks the same ring
//! backwards. The ring is tiny on purpose; everything else in the modal is
//! reachable by dedicated shortcuts.

/// Focusable stops inside the modal, in forward tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Close,
    Content,
}

/// Two-stop focus ring for the modal viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusRing {
    current: FocusTarget,
}

impl FocusRing {
    /// The close control receives focus when the modal opens.
    pub fn new() -> Self {
        Self {
            current: FocusTarget::Close,
        }
    }

    pub fn current(&self) -> FocusTarget {
        self.current
    }

    /// Advances the ring. With two stops, forward and backward both land on
    /// the other stop; the direction still matters to callers that extend
    /// the ring.
    pub fn cycle(&mut self, backward: bool) -> FocusTarget {
        let _ = backward;
        self.current = match self.current {
            FocusTarget::Close => FocusTarget::Content,
            FocusTarget::Content => FocusTarget::Close,
        };
        self.current
    }
}

impl Default for FocusRing {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_starts_on_close_control() {
        assert_eq!(FocusRing::new().current(), FocusTarget::Close);
    }

    #[test]
    fn tab_cycles_between_the_two_stops() {
        let mut ring = FocusRing::new();
        assert_eq!(ring.cycle(false), FocusTarget::Content);
        assert_eq!(ring.cycle(false), FocusTarget::Close);
    }

    #[test]
    fn shift_tab_also_wraps() {
        let mut ring = FocusRing::new();
        assert_eq!(ring.cycle(true), FocusTarget::Content);
        assert_eq!(ring.cycle(true), FocusTarget::Close);
    }
}
