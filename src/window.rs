//! Axis-aligned clip windows.
//!
//! A [`ClipWindow`] is the rectangular visibility boundary every clipping
//! algorithm works against. Windows carry a priority so several of them can
//! overlap; lower values take precedence when more than one window could
//! claim a segment (see the `resolver` module).

use crate::math::vec2::Vec2;
use crate::segment::Segment;
use std::fmt;

/// Error returned when window bounds are inverted.
///
/// A window with `x_min > x_max` or `y_min > y_max` is a configuration
/// mistake and is rejected at construction time, before any clipping logic
/// can see it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowError {
    InvalidBounds {
        x_min: f32,
        y_min: f32,
        x_max: f32,
        y_max: f32,
    },
}

impl fmt::Display for WindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowError::InvalidBounds {
                x_min,
                y_min,
                x_max,
                y_max,
            } => write!(
                f,
                "invalid window bounds: ({x_min}, {y_min})-({x_max}, {y_max})"
            ),
        }
    }
}

impl std::error::Error for WindowError {}

/// An axis-aligned rectangular clip window with a priority.
///
/// Bounds are inclusive on every edge: a point lying exactly on the border
/// counts as inside. Windows are plain configuration values, created once
/// and never mutated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipWindow {
    x_min: f32,
    y_min: f32,
    x_max: f32,
    y_max: f32,
    priority: u32,
}

impl ClipWindow {
    /// Creates a new window, validating that the bounds are not inverted.
    ///
    /// # Arguments
    /// * `x_min`, `y_min` - Lower-left corner
    /// * `x_max`, `y_max` - Upper-right corner
    /// * `priority` - Precedence among overlapping windows (lower wins)
    pub fn new(
        x_min: f32,
        y_min: f32,
        x_max: f32,
        y_max: f32,
        priority: u32,
    ) -> Result<Self, WindowError> {
        if x_min > x_max || y_min > y_max {
            return Err(WindowError::InvalidBounds {
                x_min,
                y_min,
                x_max,
                y_max,
            });
        }
        Ok(Self {
            x_min,
            y_min,
            x_max,
            y_max,
            priority,
        })
    }

    pub fn x_min(&self) -> f32 {
        self.x_min
    }

    pub fn y_min(&self) -> f32 {
        self.y_min
    }

    pub fn x_max(&self) -> f32 {
        self.x_max
    }

    pub fn y_max(&self) -> f32 {
        self.y_max
    }

    pub fn priority(&self) -> u32 {
        self.priority
    }

    /// Returns true if `point` lies inside the window or on its boundary.
    pub fn contains(&self, point: Vec2) -> bool {
        self.x_min <= point.x
            && point.x <= self.x_max
            && self.y_min <= point.y
            && point.y <= self.y_max
    }

    /// Returns true if both endpoints of `segment` lie inside the window.
    ///
    /// The window is convex, so this means the whole segment is inside.
    pub fn contains_segment(&self, segment: &Segment) -> bool {
        self.contains(segment.a) && self.contains(segment.b)
    }

    /// Returns true if both endpoints lie strictly beyond the same single
    /// boundary, which means no part of the segment can be inside.
    ///
    /// This is the cheap trivial-reject test; a segment that fails it may
    /// still miss the window (e.g. diagonally past a corner) and needs a
    /// real clipping algorithm to decide.
    pub fn rejects_segment(&self, segment: &Segment) -> bool {
        let (a, b) = (segment.a, segment.b);
        (a.x < self.x_min && b.x < self.x_min)
            || (a.x > self.x_max && b.x > self.x_max)
            || (a.y < self.y_min && b.y < self.y_min)
            || (a.y > self.y_max && b.y > self.y_max)
    }
}
