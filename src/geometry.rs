//! Panel geometry and the pure update functions driven by drag and resize
//! gestures.
//!
//! All values are CSS pixels in viewport coordinates. Nothing here clamps to
//! the viewport: a panel may be dragged partly or fully off-screen.


/// A point in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Construct a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise `self - origin`.
    #[must_use]
    pub fn delta_from(self, origin: Self) -> (f64, f64) {
        (self.x - origin.x, self.y - origin.y)
    }
}

/// An axis-aligned box: top-left corner plus size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Distance from the viewport's left edge.
    pub left: f64,
    /// Distance from the viewport's top edge.
    pub top: f64,
    /// Box width.
    pub width: f64,
    /// Box height.
    pub height: f64,
}

impl Rect {
    /// Construct a rect.
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Top-left corner.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }
}

/// Which side of the panel a resize handle controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Right edge: pointer delta grows the width.
    Right,
    /// Bottom edge: pointer delta grows the height.
    Bottom,
    /// Left edge: pointer delta shrinks the width and moves `left`.
    Left,
    /// Top edge: pointer delta shrinks the height and moves `top`.
    Top,
    /// Bottom-right corner: behaves as `Right` and `Bottom` together.
    Both,
}

impl Edge {
    /// All edges, in the order their handles are usually laid out.
    pub const ALL: [Self; 5] =
        [Self::Right, Self::Bottom, Self::Left, Self::Top, Self::Both];

    /// CSS class of the handle element for this edge
    /// (`resizer-right`, `resizer-both`, ...).
    #[must_use]
    pub fn handle_class(self) -> &'static str {
        match self {
            Self::Right => "resizer-right",
            Self::Bottom => "resizer-bottom",
            Self::Left => "resizer-left",
            Self::Top => "resizer-top",
            Self::Both => "resizer-both",
        }
    }

    /// Inverse of [`Edge::handle_class`], looking at every class of an
    /// element's class list.
    #[must_use]
    pub fn from_class_list<'a>(
        mut classes: impl Iterator<Item = &'a str>,
    ) -> Option<Self> {
        classes.find_map(|class| {
            Self::ALL.into_iter().find(|edge| edge.handle_class() == class)
        })
    }
}

/// How the panel is positioned on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    /// Stylesheet default: pinned to the bottom/right corner, position not
    /// owned by this crate.
    #[default]
    Anchored,
    /// Absolutely positioned via top/left; bottom/right released.
    Absolute,
}

/// Position and size of the panel element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanelGeometry {
    /// Current box. Only meaningful once `placement` is
    /// [`Placement::Absolute`].
    pub rect: Rect,
    /// Positioning mode.
    pub placement: Placement,
}

impl PanelGeometry {
    /// Whether the panel is already top/left anchored.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.placement == Placement::Absolute
    }

    /// Switch to absolute positioning at the given on-screen box. A panel
    /// that is already absolute keeps its own rect.
    pub fn make_absolute(&mut self, bounds: Rect) {
        if self.placement == Placement::Anchored {
            self.rect = bounds;
            self.placement = Placement::Absolute;
        }
    }
}

// ── Gesture math ─────────────────────────────────────────────────────────

/// New top-left corner after dragging: `origin` shifted by the cumulative
/// pointer delta since `start`.
#[must_use]
pub fn dragged(origin: Point, start: Point, pointer: Point) -> Point {
    let (dx, dy) = pointer.delta_from(start);
    Point::new(origin.x + dx, origin.y + dy)
}

/// New box after resizing `origin` from `edge` by the pointer delta since
/// `start`.
///
/// A candidate width or height is applied only when it is strictly greater
/// than `min_size`; otherwise that dimension (and, for the left/top edges,
/// the matching position) keeps its value from `current`. The two axes are
/// decided independently.
#[must_use]
pub fn resized(
    current: Rect,
    origin: Rect,
    edge: Edge,
    start: Point,
    pointer: Point,
    min_size: f64,
) -> Rect {
    let (dx, dy) = pointer.delta_from(start);
    let mut next = current;

    match edge {
        Edge::Right | Edge::Both => {
            let width = origin.width + dx;
            if width > min_size {
                next.width = width;
            }
        }
        Edge::Left => {
            let width = origin.width - dx;
            if width > min_size {
                next.width = width;
                next.left = origin.left + dx;
            }
        }
        Edge::Bottom | Edge::Top => {}
    }

    match edge {
        Edge::Bottom | Edge::Both => {
            let height = origin.height + dy;
            if height > min_size {
                next.height = height;
            }
        }
        Edge::Top => {
            let height = origin.height - dy;
            if height > min_size {
                next.height = height;
                next.top = origin.top + dy;
            }
        }
        Edge::Right | Edge::Left => {}
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN: f64 = 300.0;

    fn panel() -> Rect {
        Rect::new(100.0, 50.0, 400.0, 500.0)
    }

    #[test]
    fn drag_applies_cumulative_delta() {
        let moved = dragged(
            Point::new(100.0, 50.0),
            Point::new(10.0, 10.0),
            Point::new(-40.0, 30.0),
        );
        assert_eq!(moved, Point::new(50.0, 70.0));
    }

    #[test]
    fn drag_is_not_clamped_to_viewport() {
        let moved = dragged(
            Point::new(0.0, 0.0),
            Point::new(500.0, 500.0),
            Point::new(0.0, 0.0),
        );
        assert_eq!(moved, Point::new(-500.0, -500.0));
    }

    /// Resize `panel()` from a gesture that started at the origin.
    fn resize_by(edge: Edge, dx: f64, dy: f64) -> Rect {
        let r = panel();
        resized(r, r, edge, Point::default(), Point::new(dx, dy), MIN)
    }

    #[test]
    fn right_edge_grows_width_only() {
        let out = resize_by(Edge::Right, 25.0, 99.0);
        assert_eq!(out, Rect::new(100.0, 50.0, 425.0, 500.0));
    }

    #[test]
    fn left_edge_keeps_right_side_anchored() {
        let r = panel();
        let out = resize_by(Edge::Left, -30.0, 0.0);
        assert_eq!(out.width, 430.0);
        assert_eq!(out.left, 70.0);
        assert_eq!(out.left + out.width, r.left + r.width);
    }

    #[test]
    fn top_edge_keeps_bottom_side_anchored() {
        let out = resize_by(Edge::Top, 0.0, 100.0);
        assert_eq!(out.height, 400.0);
        assert_eq!(out.top, 150.0);
    }

    #[test]
    fn shrinking_below_minimum_keeps_previous_dimension() {
        let r = panel();
        // 400 - 150 = 250 is below the threshold.
        let out = resize_by(Edge::Right, -150.0, 0.0);
        assert_eq!(out, r);
    }

    #[test]
    fn exactly_minimum_is_rejected() {
        let out = resize_by(Edge::Right, -100.0, 0.0);
        assert_eq!(out.width, 400.0);
    }

    #[test]
    fn rejected_candidate_keeps_last_applied_value_not_origin() {
        let origin = panel();
        let after_first = resized(
            origin,
            origin,
            Edge::Right,
            Point::default(),
            Point::new(-80.0, 0.0),
            MIN,
        );
        assert_eq!(after_first.width, 320.0);
        let after_second = resized(
            after_first,
            origin,
            Edge::Right,
            Point::default(),
            Point::new(-120.0, 0.0),
            MIN,
        );
        assert_eq!(after_second.width, 320.0);
    }

    #[test]
    fn corner_axes_are_independent() {
        // Width candidate 250 is rejected, height candidate 560 applies.
        let out = resize_by(Edge::Both, -150.0, 60.0);
        assert_eq!(out.width, 400.0);
        assert_eq!(out.height, 560.0);
    }

    #[test]
    fn make_absolute_only_converts_once() {
        let mut geometry = PanelGeometry::default();
        geometry.make_absolute(panel());
        assert!(geometry.is_absolute());
        geometry.make_absolute(Rect::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(geometry.rect, panel());
    }

    #[test]
    fn edge_from_class_list() {
        let classes = ["resizer", "resizer-left"];
        assert_eq!(
            Edge::from_class_list(classes.iter().copied()),
            Some(Edge::Left)
        );
        assert_eq!(Edge::from_class_list(["resizer"].into_iter()), None);
    }
}
