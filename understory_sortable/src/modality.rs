// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input modality selection.
//!
//! The engine decides once, at construction, whether it drives reordering
//! through native drag events ([`InputModality::Desktop`]) or through pointer
//! events plus hit testing ([`InputModality::Touch`]). The choice never changes
//! for the lifetime of a [`Sortable`](crate::list::Sortable).

/// How reorder gestures reach the engine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputModality {
    /// Native drag-and-drop events (drag start, enter, over, end).
    #[default]
    Desktop,
    /// Pointer down on an item, window-scoped move and up, hit-tested targets.
    Touch,
}

impl InputModality {
    /// Probe the execution environment.
    ///
    /// Any sign of touch input selects [`InputModality::Touch`], since native
    /// drag events are not delivered for touch on most platforms.
    pub const fn probe(caps: Capabilities) -> Self {
        if caps.touch_events || caps.max_touch_points > 0 {
            Self::Touch
        } else {
            Self::Desktop
        }
    }
}

/// Environment capabilities consulted by [`InputModality::probe`].
///
/// In a browser these are `"ontouchstart" in window` and
/// `navigator.maxTouchPoints`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Capabilities {
    /// The environment exposes touch events.
    pub touch_events: bool,
    /// Maximum simultaneous touch points reported by the environment.
    pub max_touch_points: u32,
}

/// Configured modality: probe, or force one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModalityPreference {
    /// Decide from [`Capabilities`].
    #[default]
    Probe,
    /// Always use native drag events.
    Desktop,
    /// Always use pointer events.
    Touch,
}

impl ModalityPreference {
    /// Resolve the preference against the environment.
    pub const fn resolve(self, caps: Capabilities) -> InputModality {
        match self {
            Self::Probe => InputModality::probe(caps),
            Self::Desktop => InputModality::Desktop,
            Self::Touch => InputModality::Touch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_defaults_to_desktop() {
        assert_eq!(
            InputModality::probe(Capabilities::default()),
            InputModality::Desktop
        );
    }

    #[test]
    fn probe_detects_touch_from_either_signal() {
        let events = Capabilities {
            touch_events: true,
            max_touch_points: 0,
        };
        let points = Capabilities {
            touch_events: false,
            max_touch_points: 5,
        };
        assert_eq!(InputModality::probe(events), InputModality::Touch);
        assert_eq!(InputModality::probe(points), InputModality::Touch);
    }

    #[test]
    fn forced_preference_ignores_capabilities() {
        let touchy = Capabilities {
            touch_events: true,
            max_touch_points: 10,
        };
        assert_eq!(
            ModalityPreference::Desktop.resolve(touchy),
            InputModality::Desktop
        );
        assert_eq!(
            ModalityPreference::Touch.resolve(Capabilities::default()),
            InputModality::Touch
        );
        assert_eq!(
            ModalityPreference::Probe.resolve(touchy),
            InputModality::Touch
        );
    }
}
