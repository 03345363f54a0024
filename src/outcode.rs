//! 4-bit region codes for trivial accept/reject tests.
//!
//! An [`Outcode`] classifies a point against the four half-planes extending
//! a window's edges. Cohen-Sutherland uses the codes to accept or reject a
//! segment without computing intersections whenever possible.

use crate::math::vec2::Vec2;
use crate::window::ClipWindow;

/// Region code of a point relative to a clip window.
///
/// Bit layout: LEFT = 0001, RIGHT = 0010, BOTTOM = 0100, TOP = 1000.
/// A code of zero means the point is inside the window or on its boundary.
/// LEFT/RIGHT and BOTTOM/TOP are mutually exclusive per axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcode(u8);

impl Outcode {
    pub const INSIDE: Self = Self(0b0000);
    pub const LEFT: Self = Self(0b0001);
    pub const RIGHT: Self = Self(0b0010);
    pub const BOTTOM: Self = Self(0b0100);
    pub const TOP: Self = Self(0b1000);

    /// Computes the region code of `point` relative to `window`.
    pub fn compute(point: Vec2, window: &ClipWindow) -> Self {
        let mut code = Self::INSIDE.0;
        if point.x < window.x_min() {
            code |= Self::LEFT.0;
        } else if point.x > window.x_max() {
            code |= Self::RIGHT.0;
        }
        if point.y < window.y_min() {
            code |= Self::BOTTOM.0;
        } else if point.y > window.y_max() {
            code |= Self::TOP.0;
        }
        Self(code)
    }

    /// True if the point was inside the window (all bits clear).
    pub fn is_inside(self) -> bool {
        self.0 == 0
    }

    /// True if two codes share an outside half-plane. When the codes of
    /// both endpoints intersect, the whole segment is trivially invisible.
    pub fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// True if this code has the given boundary bit set.
    pub fn contains(self, boundary: Self) -> bool {
        self.0 & boundary.0 != 0
    }

    /// Raw bit representation.
    pub fn bits(self) -> u8 {
        self.0
    }
}
