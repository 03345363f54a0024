//! Core clipping engine.
//!
//! The [`Engine`] struct is the main entry point for callers that classify
//! many segments against a fixed window configuration: it owns the
//! priority-sorted window list and the selected clipping algorithm, and
//! resolves one segment or a whole batch at a time. Rendering, input and
//! persistence live entirely outside this crate; a presentation layer feeds
//! segments in and draws whatever geometry comes back.

use crate::clipper::ClipperDispatcher;
use crate::resolver::{resolve, Visibility};
use crate::segment::Segment;
use crate::window::ClipWindow;

pub use crate::clipper::ClipperType;

pub struct Engine {
    windows: Vec<ClipWindow>,
    clipper: ClipperDispatcher,
}

impl Engine {
    /// Creates an engine with no windows and the default algorithm
    /// (Cohen-Sutherland). Until a window is added every segment
    /// classifies as invisible.
    pub fn new() -> Self {
        Self {
            windows: Vec::new(),
            clipper: ClipperDispatcher::default(),
        }
    }

    /// Creates an engine with an initial window list.
    pub fn with_windows(windows: Vec<ClipWindow>) -> Self {
        let mut engine = Self::new();
        engine.set_windows(windows);
        engine
    }

    /// Replaces the window list. Windows are kept sorted by ascending
    /// priority; equal priorities keep their insertion order.
    pub fn set_windows(&mut self, windows: Vec<ClipWindow>) {
        self.windows = windows;
        self.windows.sort_by_key(|w| w.priority());
    }

    /// Adds one window, keeping the list sorted by ascending priority.
    pub fn add_window(&mut self, window: ClipWindow) {
        self.windows.push(window);
        self.windows.sort_by_key(|w| w.priority());
    }

    /// The configured windows in resolution order.
    pub fn windows(&self) -> &[ClipWindow] {
        &self.windows
    }

    pub fn set_clipper(&mut self, clipper_type: ClipperType) {
        self.clipper.set_type(clipper_type);
    }

    pub fn clipper(&self) -> ClipperType {
        self.clipper.active_type()
    }

    /// Sets the midpoint clipper's precision threshold (default one unit
    /// per axis). Only affects classifications made with
    /// [`ClipperType::Midpoint`].
    pub fn set_midpoint_threshold(&mut self, threshold: f32) {
        self.clipper.set_midpoint_threshold(threshold);
    }

    /// Classifies one segment against the configured windows.
    pub fn classify(&self, segment: &Segment) -> Visibility {
        resolve(segment, &self.windows, &self.clipper)
    }

    /// Classifies a batch of segments.
    ///
    /// Segments are independent: a degenerate or pathological segment only
    /// affects its own slot in the output.
    pub fn classify_batch(&self, segments: &[Segment]) -> Vec<Visibility> {
        segments.iter().map(|seg| self.classify(seg)).collect()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Classification counts over a batch of segments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub fully_visible: usize,
    pub partially_visible: usize,
    pub invisible: usize,
}

impl BatchSummary {
    /// Tallies a batch of classifications.
    pub fn tally(results: &[Visibility]) -> Self {
        let mut summary = Self::default();
        for result in results {
            match result {
                Visibility::FullyVisible { .. } => summary.fully_visible += 1,
                Visibility::PartiallyVisible { .. } => summary.partially_visible += 1,
                Visibility::Invisible => summary.invisible += 1,
            }
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.fully_visible + self.partially_visible + self.invisible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_windows() -> Vec<ClipWindow> {
        vec![
            ClipWindow::new(50.0, 50.0, 250.0, 250.0, 1).unwrap(),
            ClipWindow::new(150.0, 100.0, 280.0, 200.0, 2).unwrap(),
            ClipWindow::new(80.0, 150.0, 220.0, 270.0, 3).unwrap(),
        ]
    }

    #[test]
    fn default_engine_has_no_windows_and_cohen_sutherland() {
        let engine = Engine::default();
        assert!(engine.windows().is_empty());
        assert_eq!(engine.clipper(), ClipperType::CohenSutherland);
        // No windows: everything is invisible
        let seg = Segment::from_coords(0.0, 0.0, 10.0, 10.0);
        assert_eq!(engine.classify(&seg), Visibility::Invisible);
    }

    #[test]
    fn windows_are_kept_in_priority_order() {
        let mut engine = Engine::new();
        engine.set_windows(vec![
            ClipWindow::new(80.0, 150.0, 220.0, 270.0, 3).unwrap(),
            ClipWindow::new(50.0, 50.0, 250.0, 250.0, 1).unwrap(),
        ]);
        engine.add_window(ClipWindow::new(150.0, 100.0, 280.0, 200.0, 2).unwrap());

        let priorities: Vec<u32> = engine.windows().iter().map(|w| w.priority()).collect();
        assert_eq!(priorities, vec![1, 2, 3]);
    }

    #[test]
    fn classify_respects_the_selected_algorithm() {
        let mut engine = Engine::with_windows(demo_windows());
        let seg = Segment::from_coords(0.0, 0.0, 300.0, 300.0);

        let exact = engine.classify(&seg);
        engine.set_clipper(ClipperType::Midpoint);
        let approximate = engine.classify(&seg);

        // Same verdict, approximately the same geometry
        assert_eq!(exact.window(), approximate.window());
        let exact_seg = exact.segment().unwrap();
        let approx_seg = approximate.segment().unwrap();
        assert!((exact_seg.a.x - approx_seg.a.x).abs() <= 1.0);
        assert!((exact_seg.b.x - approx_seg.b.x).abs() <= 1.0);
    }

    #[test]
    fn batch_summary_counts_every_class() {
        let engine = Engine::with_windows(demo_windows());
        let segments = [
            Segment::from_coords(100.0, 100.0, 200.0, 200.0), // fully visible
            Segment::from_coords(0.0, 0.0, 300.0, 300.0),     // partially visible
            Segment::from_coords(300.0, 300.0, 400.0, 400.0), // invisible
            Segment::from_coords(60.0, 60.0, 70.0, 70.0),     // fully visible
        ];
        let results = engine.classify_batch(&segments);
        let summary = BatchSummary::tally(&results);
        assert_eq!(summary.fully_visible, 2);
        assert_eq!(summary.partially_visible, 1);
        assert_eq!(summary.invisible, 1);
        assert_eq!(summary.total(), segments.len());
    }

    #[test]
    fn pathological_segment_does_not_poison_the_batch() {
        let mut engine = Engine::with_windows(demo_windows());
        engine.set_clipper(ClipperType::Midpoint);

        let segments = [
            Segment::from_coords(f32::NAN, f32::NAN, f32::NAN, f32::NAN),
            Segment::from_coords(100.0, 100.0, 200.0, 200.0),
        ];
        let results = engine.classify_batch(&segments);
        assert_eq!(results[0], Visibility::Invisible);
        assert!(results[1].is_visible());
    }

    #[test]
    fn midpoint_threshold_is_configurable() {
        let mut engine = Engine::with_windows(demo_windows());
        engine.set_clipper(ClipperType::Midpoint);
        engine.set_midpoint_threshold(0.01);

        let seg = Segment::from_coords(0.0, 0.0, 300.0, 300.0);
        let inside = *engine.classify(&seg).segment().unwrap();
        assert!((inside.a.x - 50.0).abs() <= 0.01);
        assert!((inside.b.x - 250.0).abs() <= 0.01);
    }
}
