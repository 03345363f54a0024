//! Multi-window priority resolution.
//!
//! Several clip windows may overlap on screen. Each carries a priority and
//! the window with the lowest value examines a segment first: the first
//! window that can claim the segment (fully containing it, or clipping a
//! non-empty piece out of it) wins, and later windows never see it. A
//! window the segment is trivially outside of simply passes it along.

use crate::clipper::{ClipperDispatcher, ClipperType, LineClipper};
use crate::segment::Segment;
use crate::window::ClipWindow;

/// Classification of a segment against a priority-ordered window list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Visibility {
    /// The claiming window contains the whole segment; endpoints are
    /// unchanged. `window` indexes into the resolver's window list.
    FullyVisible { window: usize, segment: Segment },
    /// The segment straddles the claiming window's boundary; `segment` is
    /// the piece inside it.
    PartiallyVisible { window: usize, segment: Segment },
    /// No window contains any part of the segment.
    Invisible,
}

impl Visibility {
    /// The surviving geometry, if any.
    pub fn segment(&self) -> Option<&Segment> {
        match self {
            Visibility::FullyVisible { segment, .. }
            | Visibility::PartiallyVisible { segment, .. } => Some(segment),
            Visibility::Invisible => None,
        }
    }

    /// Index of the claiming window, if any.
    pub fn window(&self) -> Option<usize> {
        match self {
            Visibility::FullyVisible { window, .. }
            | Visibility::PartiallyVisible { window, .. } => Some(*window),
            Visibility::Invisible => None,
        }
    }

    /// True unless no window claimed the segment.
    pub fn is_visible(&self) -> bool {
        !matches!(self, Visibility::Invisible)
    }
}

/// Resolves which window claims `segment` and clips against it.
///
/// `windows` must already be sorted by ascending priority (the engine keeps
/// its list sorted; `classify` sorts a copy for one-shot callers). The
/// selected algorithm only influences where clipped endpoints land, never
/// the visible/invisible verdict.
pub fn resolve(
    segment: &Segment,
    windows: &[ClipWindow],
    clipper: &dyn LineClipper,
) -> Visibility {
    for (index, window) in windows.iter().enumerate() {
        if window.contains_segment(segment) {
            // First match wins, even if a later window also contains it
            return Visibility::FullyVisible {
                window: index,
                segment: *segment,
            };
        }
        if window.rejects_segment(segment) {
            // This window cannot claim the segment; try the next one
            continue;
        }
        if let Some(inside) = clipper.clip_line(segment, window) {
            return Visibility::PartiallyVisible {
                window: index,
                segment: inside,
            };
        }
    }
    Visibility::Invisible
}

/// One-shot classification of a segment against a window list.
///
/// Sorts a copy of `windows` by ascending priority (ties keep their input
/// order) and resolves with a freshly built clipper of the requested type.
/// Callers classifying many segments should configure an
/// [`Engine`](crate::engine::Engine) instead and reuse it.
pub fn classify(
    segment: &Segment,
    windows: &[ClipWindow],
    clipper_type: ClipperType,
) -> Visibility {
    let mut sorted = windows.to_vec();
    sorted.sort_by_key(|w| w.priority());
    resolve(segment, &sorted, &ClipperDispatcher::new(clipper_type))
}
