//! Converts raw pointer events into panel geometry updates.
//!
//! `PanelInput` owns the panel geometry and the gesture state machine. It is
//! the only thing that sits between page-level pointer events and the
//! position/size the host applies to the panel element.

use super::event::{HitRegion, PointerEvent};
use super::gesture::{GestureState, GestureTransition};
use crate::geometry::{self, PanelGeometry, Point, Rect};
use crate::options::FeatureOptions;

/// Owns panel geometry and the drag/resize state machine.
///
/// # Usage
///
/// ```ignore
/// match panel_input.handle(event) {
///     Some(GestureTransition::Began(_)) => host.attach_move_and_up(),
///     Some(GestureTransition::Moved) => host.apply(panel_input.geometry()),
///     Some(GestureTransition::Ended(_)) => host.detach_move_and_up(),
///     None => {}
/// }
/// ```
#[derive(Debug, Clone)]
pub struct PanelInput {
    geometry: PanelGeometry,
    state: GestureState,
    min_size: f64,
    draggable: bool,
    resizable: bool,
}

impl PanelInput {
    /// Create an idle processor for an anchored panel.
    #[must_use]
    pub fn new(min_size: f64, features: &FeatureOptions) -> Self {
        Self {
            geometry: PanelGeometry::default(),
            state: GestureState::Idle,
            min_size,
            draggable: features.draggable,
            resizable: features.resizable,
        }
    }

    /// Current panel geometry.
    #[must_use]
    pub fn geometry(&self) -> &PanelGeometry {
        &self.geometry
    }

    /// Current gesture state.
    #[must_use]
    pub fn state(&self) -> &GestureState {
        &self.state
    }

    /// Minimum width/height a resize may produce (exclusive).
    #[must_use]
    pub fn min_size(&self) -> f64 {
        self.min_size
    }

    /// Process one pointer event.
    ///
    /// Returns `None` when the event has no effect: a press while another
    /// gesture is active, a press on a disabled handle, or any move/release
    /// while idle.
    pub fn handle(&mut self, event: PointerEvent) -> Option<GestureTransition> {
        match event {
            PointerEvent::Down { region, at, bounds } => {
                self.handle_down(region, at, bounds)
            }
            PointerEvent::Move { at } => self.handle_move(at),
            PointerEvent::Up => self.handle_up(),
        }
    }

    fn handle_down(
        &mut self,
        region: HitRegion,
        at: Point,
        bounds: Rect,
    ) -> Option<GestureTransition> {
        if self.state.is_active() {
            log::debug!("ignoring {region:?} press during {:?}", self.state);
            return None;
        }
        let enabled = match region {
            HitRegion::Header => self.draggable,
            HitRegion::Resizer(_) => self.resizable,
        };
        if !enabled {
            return None;
        }

        self.geometry.make_absolute(bounds);
        let rect = self.geometry.rect;

        self.state = match region {
            HitRegion::Header => GestureState::Dragging {
                start: at,
                origin: rect.origin(),
            },
            HitRegion::Resizer(edge) => GestureState::Resizing {
                edge,
                start: at,
                origin: rect,
            },
        };
        self.state.kind().map(GestureTransition::Began)
    }

    fn handle_move(&mut self, at: Point) -> Option<GestureTransition> {
        match self.state {
            GestureState::Idle => None,
            GestureState::Dragging { start, origin } => {
                let corner = geometry::dragged(origin, start, at);
                self.geometry.rect.left = corner.x;
                self.geometry.rect.top = corner.y;
                Some(GestureTransition::Moved)
            }
            GestureState::Resizing {
                edge,
                start,
                origin,
            } => {
                self.geometry.rect = geometry::resized(
                    self.geometry.rect,
                    origin,
                    edge,
                    start,
                    at,
                    self.min_size,
                );
                Some(GestureTransition::Moved)
            }
        }
    }

    fn handle_up(&mut self) -> Option<GestureTransition> {
        let kind = self.state.kind()?;
        self.state = GestureState::Idle;
        Some(GestureTransition::Ended(kind))
    }
}
