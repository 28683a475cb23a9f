//! Event listeners whose lifetime is tied to a Rust value.
//!
//! Dropping a [`Listener`] removes it from its target, so a set of
//! listeners held in one struct is always attached and detached together.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, EventTarget};

/// One `addEventListener` registration.
pub(crate) struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
    attached: bool,
}

impl Listener {
    /// Register `handler` for `kind` events on `target`.
    pub(crate) fn new<F>(
        target: &EventTarget,
        kind: &'static str,
        handler: F,
    ) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(
            kind,
            callback.as_ref().unchecked_ref(),
        )?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
            attached: true,
        })
    }

    /// Remove the registration but keep the closure alive. Needed when the
    /// listener is detached from inside its own callback: the closure may
    /// only be dropped after the callback returns.
    pub(crate) fn detach(&mut self) {
        if !self.attached {
            return;
        }
        if let Err(e) = self.target.remove_event_listener_with_callback(
            self.kind,
            self.callback.as_ref().unchecked_ref(),
        ) {
            log::warn!(
                "failed to remove {} listener: {}",
                self.kind,
                super::describe(&e)
            );
        }
        self.attached = false;
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        self.detach();
    }
}
