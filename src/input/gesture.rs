use crate::geometry::{Edge, Point, Rect};

/// Which kind of gesture a transition refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureKind {
    /// Moving the panel by its header.
    Drag,
    /// Resizing the panel from one edge or corner.
    Resize(Edge),
}

/// Gesture state machine.
///
/// Each active variant carries everything captured at pointer-down, so a
/// move event can recompute the geometry from scratch instead of
/// accumulating per-event deltas.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    /// No button held over a handle.
    #[default]
    Idle,
    /// Header pressed; panel follows the pointer.
    Dragging {
        /// Pointer position at pointer-down.
        start: Point,
        /// Panel top-left corner at pointer-down.
        origin: Point,
    },
    /// Resize handle pressed.
    Resizing {
        /// Edge being dragged.
        edge: Edge,
        /// Pointer position at pointer-down.
        start: Point,
        /// Panel box at pointer-down.
        origin: Rect,
    },
}

impl GestureState {
    /// Whether a gesture is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Kind of the active gesture, if any.
    #[must_use]
    pub fn kind(&self) -> Option<GestureKind> {
        match self {
            Self::Idle => None,
            Self::Dragging { .. } => Some(GestureKind::Drag),
            Self::Resizing { edge, .. } => Some(GestureKind::Resize(*edge)),
        }
    }
}

/// Observable result of feeding one pointer event to the state machine.
///
/// Hosts attach their page-wide move/up listeners on `Began` and must detach
/// both of them on `Ended`. Every `Began` is followed by exactly one `Ended`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureTransition {
    /// Idle → active.
    Began(GestureKind),
    /// Geometry changed during an active gesture.
    Moved,
    /// Active → idle.
    Ended(GestureKind),
}
