//! Line clipping algorithms.
//!
//! This module provides multiple clipper implementations that can be
//! swapped at runtime for testing and comparison purposes.
//!
//! Available algorithms:
//! - [`NaiveClipper`]: Full-containment check with Cohen-Sutherland fallback
//! - [`CohenSutherlandClipper`]: Classic outcode-based boundary walking
//! - [`MidpointClipper`]: Recursive bisection down to a precision threshold
//!
//! All three agree on whether a segment is visible, partially visible or
//! invisible; only the exact boundary coordinates may differ (the midpoint
//! clipper is accurate to its configured threshold).

mod cohen_sutherland;
mod midpoint;
mod naive;

pub use cohen_sutherland::CohenSutherlandClipper;
pub use midpoint::MidpointClipper;
pub use naive::NaiveClipper;

use crate::segment::Segment;
use crate::window::ClipWindow;

/// Result of clipping one segment against one window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClipResult {
    /// The whole input lies inside the window; endpoints are unchanged.
    Visible(Segment),
    /// The sub-segment of the input that lies inside the window.
    Clipped(Segment),
    /// No part of the input lies inside the window.
    Invisible,
}

impl ClipResult {
    /// The surviving geometry, if any.
    pub fn segment(&self) -> Option<&Segment> {
        match self {
            ClipResult::Visible(segment) | ClipResult::Clipped(segment) => Some(segment),
            ClipResult::Invisible => None,
        }
    }

    /// True unless the segment was clipped away entirely.
    pub fn is_visible(&self) -> bool {
        !matches!(self, ClipResult::Invisible)
    }
}

/// Trait for line clipping algorithms.
///
/// Implementors compute the part of a segment that lies inside a window.
/// This allows swapping between clipping strategies (outcode walking,
/// bisection, etc.) for testing and comparison.
pub trait LineClipper {
    /// Clips `segment` against `window`.
    ///
    /// Returns the inside sub-segment, or `None` when no part of the
    /// segment is inside. A fully inside segment comes back unchanged.
    fn clip_line(&self, segment: &Segment, window: &ClipWindow) -> Option<Segment>;
}

/// Available clipping algorithms.
///
/// Use this enum to select which clipper the engine should use.
/// Can be changed at runtime via `Engine::set_clipper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClipperType {
    /// Containment check that falls back to Cohen-Sutherland for anything
    /// not fully inside. Output is bit-identical to Cohen-Sutherland.
    Naive,
    /// Outcode-based clipping; exact intersections, at most four boundary
    /// replacements per segment.
    #[default]
    CohenSutherland,
    /// Recursive midpoint subdivision; approximate to a configurable
    /// precision threshold, no divisions.
    Midpoint,
}

impl std::fmt::Display for ClipperType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipperType::Naive => write!(f, "Naive"),
            ClipperType::CohenSutherland => write!(f, "CohenSutherland"),
            ClipperType::Midpoint => write!(f, "Midpoint"),
        }
    }
}

/// Dispatcher that holds all three clipper implementations.
pub struct ClipperDispatcher {
    naive: NaiveClipper,
    cohen_sutherland: CohenSutherlandClipper,
    midpoint: MidpointClipper,
    active: ClipperType,
}

impl ClipperDispatcher {
    pub fn new(clipper_type: ClipperType) -> Self {
        Self {
            naive: NaiveClipper::new(),
            cohen_sutherland: CohenSutherlandClipper::new(),
            midpoint: MidpointClipper::new(),
            active: clipper_type,
        }
    }

    pub fn set_type(&mut self, clipper_type: ClipperType) {
        self.active = clipper_type;
    }

    pub fn active_type(&self) -> ClipperType {
        self.active
    }

    /// Sets the precision threshold of the midpoint clipper.
    pub fn set_midpoint_threshold(&mut self, threshold: f32) {
        self.midpoint.set_threshold(threshold);
    }

    /// Clips a segment and classifies the outcome.
    ///
    /// A result equal to the input means the segment was entirely inside
    /// (no algorithm moves an endpoint that is already in the window).
    pub fn clip(&self, segment: &Segment, window: &ClipWindow) -> ClipResult {
        match self.clip_line(segment, window) {
            Some(inside) if inside == *segment => ClipResult::Visible(inside),
            Some(inside) => ClipResult::Clipped(inside),
            None => ClipResult::Invisible,
        }
    }
}

impl Default for ClipperDispatcher {
    fn default() -> Self {
        Self::new(ClipperType::default())
    }
}

impl LineClipper for ClipperDispatcher {
    #[inline]
    fn clip_line(&self, segment: &Segment, window: &ClipWindow) -> Option<Segment> {
        match self.active {
            ClipperType::Naive => self.naive.clip_line(segment, window),
            ClipperType::CohenSutherland => self.cohen_sutherland.clip_line(segment, window),
            ClipperType::Midpoint => self.midpoint.clip_line(segment, window),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> ClipWindow {
        ClipWindow::new(50.0, 50.0, 250.0, 250.0, 1).unwrap()
    }

    #[test]
    fn dispatcher_classifies_visible_segments() {
        let dispatcher = ClipperDispatcher::default();
        let seg = Segment::from_coords(100.0, 100.0, 200.0, 200.0);
        assert_eq!(dispatcher.clip(&seg, &window()), ClipResult::Visible(seg));
    }

    #[test]
    fn dispatcher_classifies_clipped_segments() {
        let dispatcher = ClipperDispatcher::default();
        let seg = Segment::from_coords(0.0, 0.0, 300.0, 300.0);
        match dispatcher.clip(&seg, &window()) {
            ClipResult::Clipped(inside) => assert_ne!(inside, seg),
            other => panic!("expected Clipped, got {other:?}"),
        }
    }

    #[test]
    fn dispatcher_classifies_invisible_segments() {
        let dispatcher = ClipperDispatcher::default();
        let seg = Segment::from_coords(300.0, 300.0, 400.0, 400.0);
        assert_eq!(dispatcher.clip(&seg, &window()), ClipResult::Invisible);
        assert!(!dispatcher.clip(&seg, &window()).is_visible());
    }

    #[test]
    fn clipping_is_idempotent() {
        // Re-clipping a clipped segment against the same window returns it
        // unchanged, for every algorithm
        for clipper_type in [
            ClipperType::Naive,
            ClipperType::CohenSutherland,
            ClipperType::Midpoint,
        ] {
            let dispatcher = ClipperDispatcher::new(clipper_type);
            let seg = Segment::from_coords(0.0, 0.0, 300.0, 300.0);
            let inside = *dispatcher.clip(&seg, &window()).segment().unwrap();
            assert_eq!(
                dispatcher.clip(&inside, &window()),
                ClipResult::Visible(inside),
                "{clipper_type} is not idempotent"
            );
        }
    }

    #[test]
    fn switching_the_active_clipper() {
        let mut dispatcher = ClipperDispatcher::default();
        assert_eq!(dispatcher.active_type(), ClipperType::CohenSutherland);
        dispatcher.set_type(ClipperType::Midpoint);
        assert_eq!(dispatcher.active_type(), ClipperType::Midpoint);
    }

    #[test]
    fn clipper_type_display_names() {
        assert_eq!(ClipperType::Naive.to_string(), "Naive");
        assert_eq!(ClipperType::CohenSutherland.to_string(), "CohenSutherland");
        assert_eq!(ClipperType::Midpoint.to_string(), "Midpoint");
    }
}
