//! Input handling: pointer event types, the gesture state machine, and the
//! processor that turns raw pointer events into panel geometry updates.

/// Platform-agnostic pointer events.
pub mod event;
/// Tagged gesture state (idle / dragging / resizing).
pub mod gesture;
/// Enter-key routing for the panel's text fields.
pub mod keyboard;
/// Applies pointer events to the panel geometry.
pub mod processor;

pub use event::{HitRegion, PointerEvent};
pub use gesture::{GestureKind, GestureState, GestureTransition};
pub use keyboard::{EnterAction, InputField};
pub use processor::PanelInput;
