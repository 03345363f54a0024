//! A 2D line-segment clipping engine.
//!
//! This crate classifies line segments against one or more prioritized,
//! axis-aligned clip windows using three classical algorithms: a naive
//! containment check, Cohen-Sutherland outcode clipping, and recursive
//! midpoint subdivision. Every segment comes back fully visible, partially
//! visible (with the clipped sub-segment), or invisible.
//!
//! # Quick Start
//!
//! ```
//! use scissor::prelude::*;
//!
//! let window = ClipWindow::new(50.0, 50.0, 250.0, 250.0, 1).unwrap();
//! let mut engine = Engine::with_windows(vec![window]);
//! engine.set_clipper(ClipperType::CohenSutherland);
//!
//! let segment = Segment::from_coords(0.0, 0.0, 300.0, 300.0);
//! match engine.classify(&segment) {
//!     Visibility::PartiallyVisible { segment, .. } => {
//!         assert_eq!(segment.a.x, 50.0);
//!     }
//!     other => panic!("unexpected classification: {other:?}"),
//! }
//! ```

// Public API - exposed to library consumers
pub mod clipper;
pub mod engine;
pub mod math;
pub mod outcode;
pub mod resolver;
pub mod segment;
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use clipper::{ClipResult, ClipperDispatcher, ClipperType, LineClipper};
pub use engine::{BatchSummary, Engine};
pub use resolver::{classify, resolve, Visibility};
pub use segment::Segment;
pub use window::{ClipWindow, WindowError};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use scissor::prelude::*;
/// ```
pub mod prelude {
    // Engine
    pub use crate::engine::{BatchSummary, Engine};

    // Clipping
    pub use crate::clipper::{ClipResult, ClipperType, LineClipper};

    // Geometry
    pub use crate::math::vec2::Vec2;
    pub use crate::segment::Segment;
    pub use crate::window::{ClipWindow, WindowError};

    // Classification
    pub use crate::resolver::{classify, Visibility};
}
