//! The naive clipper.
//!
//! Checks for full containment and hands everything else to
//! Cohen-Sutherland. A standalone analytic slope-intersection method is
//! deliberately not implemented: the delegation keeps this clipper's output
//! bit-identical to [`CohenSutherlandClipper`], which the cross-algorithm
//! tests rely on.

use super::{CohenSutherlandClipper, LineClipper};
use crate::segment::Segment;
use crate::window::ClipWindow;

/// Containment check with Cohen-Sutherland fallback.
#[derive(Debug, Default, Clone, Copy)]
pub struct NaiveClipper {
    fallback: CohenSutherlandClipper,
}

impl NaiveClipper {
    pub fn new() -> Self {
        Self {
            fallback: CohenSutherlandClipper::new(),
        }
    }
}

impl LineClipper for NaiveClipper {
    fn clip_line(&self, segment: &Segment, window: &ClipWindow) -> Option<Segment> {
        if window.contains_segment(segment) {
            return Some(*segment);
        }
        self.fallback.clip_line(segment, window)
    }
}
