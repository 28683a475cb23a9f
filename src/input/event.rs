use crate::geometry::{Edge, Point, Rect};

/// Platform-agnostic pointer events.
///
/// These are fed into a [`PanelInput`](super::PanelInput), which turns them
/// into panel geometry updates.
///
/// # Example
///
/// ```ignore
/// let transition = panel_input.handle(PointerEvent::Down {
///     region: HitRegion::Header,
///     at: Point::new(120.0, 40.0),
///     bounds: header_parent.bounding_rect(),
/// });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed over one of the panel's handles.
    Down {
        /// Which handle received the press.
        region: HitRegion,
        /// Pointer position in viewport coordinates.
        at: Point,
        /// The panel's on-screen box at the time of the press, used when
        /// the panel is converted to absolute positioning.
        bounds: Rect,
    },
    /// Pointer moved anywhere on the page.
    Move {
        /// Pointer position in viewport coordinates.
        at: Point,
    },
    /// Button released anywhere on the page.
    Up,
}

/// The part of the panel that was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitRegion {
    /// The title bar; starts a drag.
    Header,
    /// A resize handle for the given edge.
    Resizer(Edge),
}
