// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine configuration.

use core::time::Duration;

use crate::modality::ModalityPreference;

/// Default minimum interval between committed touch reorder steps.
pub const DEFAULT_THROTTLE_INTERVAL: Duration = Duration::from_millis(100);

/// Which press origins may start a drag.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragOrigin {
    /// Any point on an item surface starts a drag.
    ///
    /// Requesting handle props switches a list configured this way to
    /// [`DragOrigin::Handle`] for the rest of its lifetime.
    #[default]
    Anywhere,
    /// Only handles start a drag; item content stays selectable.
    Handle,
}

/// Rate limit for hit-tested (touch) reorder steps.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Throttle {
    /// Every qualifying move commits.
    Off,
    /// Moves arriving less than this long after the last committed step are dropped.
    Interval(Duration),
}

impl Default for Throttle {
    fn default() -> Self {
        Self::Interval(DEFAULT_THROTTLE_INTERVAL)
    }
}

impl Throttle {
    /// Whether a move at `now` may commit, given the time of the last committed step.
    pub fn admits(self, last: Option<Duration>, now: Duration) -> bool {
        match (self, last) {
            (Self::Off, _) | (_, None) => true,
            (Self::Interval(min), Some(last)) => now.saturating_sub(last) >= min,
        }
    }
}

/// Configuration for a [`Sortable`](crate::list::Sortable).
///
/// ```
/// use core::time::Duration;
/// use understory_sortable::config::{DragOrigin, SortableConfig, Throttle};
/// use understory_sortable::modality::ModalityPreference;
///
/// let config = SortableConfig::new()
///     .with_drag_origin(DragOrigin::Handle)
///     .with_throttle(Throttle::Interval(Duration::from_millis(50)))
///     .with_modality(ModalityPreference::Touch);
/// assert_eq!(config.drag_origin, DragOrigin::Handle);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SortableConfig {
    /// Initial drag origin policy.
    pub drag_origin: DragOrigin,
    /// Touch step rate limit.
    pub throttle: Throttle,
    /// Modality selection.
    pub modality: ModalityPreference,
}

impl SortableConfig {
    /// Default configuration: drag anywhere, 100 ms touch throttle, probed modality.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the drag origin policy.
    #[must_use]
    pub fn with_drag_origin(mut self, origin: DragOrigin) -> Self {
        self.drag_origin = origin;
        self
    }

    /// Set the touch step rate limit.
    #[must_use]
    pub fn with_throttle(mut self, throttle: Throttle) -> Self {
        self.throttle = throttle;
        self
    }

    /// Set the modality preference.
    #[must_use]
    pub fn with_modality(mut self, modality: ModalityPreference) -> Self {
        self.modality = modality;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_admits_first_step_and_after_gap() {
        let t = Throttle::default();
        assert!(t.admits(None, Duration::ZERO));
        let last = Some(Duration::from_millis(1_000));
        assert!(!t.admits(last, Duration::from_millis(1_010)));
        assert!(!t.admits(last, Duration::from_millis(1_099)));
        assert!(t.admits(last, Duration::from_millis(1_100)));
    }

    #[test]
    fn clock_going_backwards_is_throttled() {
        let t = Throttle::default();
        assert!(!t.admits(Some(Duration::from_millis(500)), Duration::from_millis(10)));
    }

    #[test]
    fn off_admits_everything() {
        let last = Some(Duration::from_millis(5));
        assert!(Throttle::Off.admits(last, Duration::from_millis(5)));
    }

    #[test]
    fn builder_sets_fields() {
        let c = SortableConfig::new()
            .with_drag_origin(DragOrigin::Handle)
            .with_throttle(Throttle::Off)
            .with_modality(ModalityPreference::Desktop);
        assert_eq!(c.drag_origin, DragOrigin::Handle);
        assert_eq!(c.throttle, Throttle::Off);
        assert_eq!(c.modality, ModalityPreference::Desktop);
        assert_eq!(
            SortableConfig::default().throttle,
            Throttle::Interval(DEFAULT_THROTTLE_INTERVAL)
        );
    }
}
