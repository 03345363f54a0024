//! Midpoint-subdivision line clipping.
//!
//! Divide-and-conquer alternative to Cohen-Sutherland: a segment that can
//! neither be accepted nor rejected whole is split at its midpoint and both
//! halves are resolved recursively. No divisions are involved, only
//! averaging, which made the approach attractive on hardware where division
//! was expensive. Accuracy is bounded by the precision threshold: clipped
//! endpoints can land up to one threshold away (per axis) from the exact
//! boundary intersection.

use super::LineClipper;
use crate::math::vec2::Vec2;
use crate::segment::Segment;
use crate::window::ClipWindow;

/// Default precision threshold: subdivision stops once a piece spans less
/// than one unit in both axes.
pub const DEFAULT_THRESHOLD: f32 = 1.0;

/// Default recursion bound. 140 halvings shrink the largest finite f32
/// extent below any practical threshold; only absurdly extreme inputs
/// exhaust the bound, and those classify as invisible instead of
/// recursing without limit.
pub const DEFAULT_MAX_DEPTH: u32 = 140;

/// Recursive bisection clipper with a configurable precision threshold.
#[derive(Debug, Clone, Copy)]
pub struct MidpointClipper {
    threshold: f32,
    max_depth: u32,
}

impl Default for MidpointClipper {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl MidpointClipper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a clipper with a custom precision threshold.
    pub fn with_threshold(threshold: f32) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn set_threshold(&mut self, threshold: f32) {
        self.threshold = threshold;
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    pub fn set_max_depth(&mut self, max_depth: u32) {
        self.max_depth = max_depth;
    }

    fn clip_recursive(
        &self,
        a: Vec2,
        b: Vec2,
        window: &ClipWindow,
        depth: u32,
    ) -> Option<Segment> {
        if window.contains(a) && window.contains(b) {
            return Some(Segment::new(a, b));
        }

        let piece = Segment::new(a, b);
        if window.rejects_segment(&piece) {
            return None;
        }

        // Sub-threshold pieces are treated as the point at their start.
        let extent = piece.extent();
        if extent.x < self.threshold && extent.y < self.threshold {
            return if window.contains(a) {
                Some(Segment::new(a, a))
            } else {
                None
            };
        }

        if depth == 0 {
            // Coordinates so extreme they cannot shrink below the threshold
            // within the bound; give up on this segment only.
            return None;
        }

        let mid = a.midpoint(b);
        let front = self.clip_recursive(a, mid, window, depth - 1);
        let back = self.clip_recursive(mid, b, window, depth - 1);
        match (front, back) {
            // Both halves survive: the visible part spans from the front
            // half's start to the back half's end.
            (Some(front), Some(back)) => Some(Segment::new(front.a, back.b)),
            (Some(front), None) => Some(front),
            (None, Some(back)) => Some(back),
            (None, None) => None,
        }
    }
}

impl LineClipper for MidpointClipper {
    fn clip_line(&self, segment: &Segment, window: &ClipWindow) -> Option<Segment> {
        // NaN defeats every comparison the recursion prunes with, turning
        // the bisection into a full binary tree. Non-finite endpoints are
        // classified invisible up front.
        if !segment.a.is_finite() || !segment.b.is_finite() {
            return None;
        }
        self.clip_recursive(segment.a, segment.b, window, self.max_depth)
    }
}
