//! Cohen-Sutherland line clipping.
//!
//! The classic outcode algorithm: endpoints are classified against the
//! window's four extended half-planes, trivially accepted or rejected where
//! the codes allow it, and otherwise walked onto the violated boundary one
//! edge at a time with an exact parametric intersection.

use super::LineClipper;
use crate::math::vec2::Vec2;
use crate::outcode::Outcode;
use crate::segment::Segment;
use crate::window::ClipWindow;

// Each loop pass either resolves the segment or replaces one endpoint with
// a boundary intersection. Four boundaries bound the replacements, so the
// fifth pass must accept or reject. One spare pass keeps the loop finite
// even for coordinates that break the outcode invariants (NaN).
const MAX_PASSES: u32 = 6;

/// Exact outcode-based clipper.
#[derive(Debug, Default, Clone, Copy)]
pub struct CohenSutherlandClipper;

impl CohenSutherlandClipper {
    pub fn new() -> Self {
        Self
    }

    /// Intersects the line through `a`-`b` with the window boundary named
    /// by `code`, testing bits in fixed order: TOP, BOTTOM, RIGHT, LEFT.
    ///
    /// The divisor is never zero here: a TOP or BOTTOM bit implies the two
    /// endpoints are on opposite sides of a horizontal boundary (dy != 0),
    /// and likewise RIGHT/LEFT implies dx != 0. A zero divisor would mean
    /// the outcode logic is broken, not the input.
    fn boundary_intersection(a: Vec2, b: Vec2, code: Outcode, window: &ClipWindow) -> Vec2 {
        if code.contains(Outcode::TOP) {
            debug_assert!(b.y != a.y, "TOP outcode with horizontal segment");
            Vec2::new(
                a.x + (b.x - a.x) * (window.y_max() - a.y) / (b.y - a.y),
                window.y_max(),
            )
        } else if code.contains(Outcode::BOTTOM) {
            debug_assert!(b.y != a.y, "BOTTOM outcode with horizontal segment");
            Vec2::new(
                a.x + (b.x - a.x) * (window.y_min() - a.y) / (b.y - a.y),
                window.y_min(),
            )
        } else if code.contains(Outcode::RIGHT) {
            debug_assert!(b.x != a.x, "RIGHT outcode with vertical segment");
            Vec2::new(
                window.x_max(),
                a.y + (b.y - a.y) * (window.x_max() - a.x) / (b.x - a.x),
            )
        } else if code.contains(Outcode::LEFT) {
            debug_assert!(b.x != a.x, "LEFT outcode with vertical segment");
            Vec2::new(
                window.x_min(),
                a.y + (b.y - a.y) * (window.x_min() - a.x) / (b.x - a.x),
            )
        } else {
            unreachable!("boundary intersection needs an outside outcode")
        }
    }
}

impl LineClipper for CohenSutherlandClipper {
    fn clip_line(&self, segment: &Segment, window: &ClipWindow) -> Option<Segment> {
        let (mut a, mut b) = (segment.a, segment.b);
        let mut code_a = Outcode::compute(a, window);
        let mut code_b = Outcode::compute(b, window);

        for _ in 0..MAX_PASSES {
            if code_a.is_inside() && code_b.is_inside() {
                // Trivial accept: both endpoints inside (or on the border)
                return Some(Segment::new(a, b));
            }
            if code_a.intersects(code_b) {
                // Trivial reject: both endpoints beyond the same boundary
                return None;
            }

            // Walk the outside endpoint onto the boundary it violates,
            // preferring the first endpoint when both are outside.
            let outside = if !code_a.is_inside() { code_a } else { code_b };
            let intersection = Self::boundary_intersection(a, b, outside, window);
            if outside == code_a {
                a = intersection;
                code_a = Outcode::compute(a, window);
            } else {
                b = intersection;
                code_b = Outcode::compute(b, window);
            }
        }

        // Only reachable with non-finite coordinates; treat as invisible.
        None
    }
}
