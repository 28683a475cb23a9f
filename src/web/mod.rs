//! Browser shell: binds a [`ChatController`] to the page's widget markup.
//!
//! JavaScript creates one [`ChatWidget`] after the DOM is ready and keeps it
//! alive for the lifetime of the page; `free()`-ing it removes every
//! listener it registered.
//!
//! ```js
//! import init, { ChatWidget } from "./chatpane.js";
//! await init();
//! const widget = new ChatWidget(null); // or a TOML options string
//! ```

mod dom;
mod fetch;
mod listener;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, EventTarget, KeyboardEvent, MouseEvent};

use self::dom::PanelView;
use self::listener::Listener;
use crate::controller::{ChatController, SendStep};
use crate::error::ChatError;
use crate::geometry::{Edge, Point};
use crate::input::{
    EnterAction, GestureTransition, HitRegion, InputField, PointerEvent,
};
use crate::options::WidgetOptions;

/// Controller, view and the listeners of the gesture in progress.
struct Widget {
    controller: RefCell<ChatController>,
    view: PanelView,
    /// Page-wide move/up listeners, present exactly while a gesture is
    /// active.
    gesture: RefCell<Option<GestureListeners>>,
}

impl Widget {
    fn sync(&self) {
        if let Err(e) = self.view.render(&self.controller.borrow()) {
            log::error!("render failed: {e}");
        }
    }

    fn sync_geometry(&self) {
        let controller = self.controller.borrow();
        if let Err(e) = self.view.apply_geometry(controller.geometry()) {
            log::error!("geometry update failed: {e}");
        }
    }
}

/// The chat panel mounted on the current document.
#[wasm_bindgen]
pub struct ChatWidget {
    widget: Rc<Widget>,
    _listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl ChatWidget {
    /// Mount on the current document. `options_toml` overrides the default
    /// [`WidgetOptions`]; pass `"classic"` for the plain preset.
    #[wasm_bindgen(constructor)]
    pub fn new(options_toml: Option<String>) -> Result<ChatWidget, JsValue> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        let options = match options_toml.as_deref() {
            None => WidgetOptions::default(),
            Some("classic") => WidgetOptions::classic(),
            Some(toml) => WidgetOptions::from_toml_str(toml)?,
        };
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| ChatError::Dom("no document".into()))?;

        let widget = Rc::new(Widget {
            controller: RefCell::new(ChatController::new(options)),
            view: PanelView::locate(&document)?,
            gesture: RefCell::new(None),
        });
        let listeners = wire(&widget)?;
        widget.sync();
        log::info!("chat widget mounted");

        Ok(ChatWidget {
            widget,
            _listeners: listeners,
        })
    }

    /// Show or hide the panel, as the toggle button does.
    pub fn toggle(&self) -> bool {
        let visible = self.widget.controller.borrow_mut().toggle();
        self.widget.sync();
        visible
    }

    /// Whether a session token is held.
    #[wasm_bindgen(js_name = isAuthenticated)]
    pub fn is_authenticated(&self) -> bool {
        self.widget.controller.borrow().is_authenticated()
    }
}

// ── Wiring ───────────────────────────────────────────────────────────────

fn wire(widget: &Rc<Widget>) -> Result<Vec<Listener>, ChatError> {
    let view = &widget.view;
    let mut listeners = Vec::new();

    let toggle = view.element("chat-toggle")?;
    listeners.push(on(&toggle, "click", widget, |w, _| {
        let _ = w.controller.borrow_mut().toggle();
        w.sync();
    })?);
    let login = view.element("login-button")?;
    listeners.push(on(&login, "click", widget, |w, _| submit_login(w))?);
    let send = view.element("send-button")?;
    listeners.push(on(&send, "click", widget, |w, _| send_message(w))?);

    let fields =
        [InputField::Message, InputField::Username, InputField::Password];
    for field in fields {
        let element = view.element(field.element_id())?;
        listeners.push(on(&element, "keypress", widget, move |w, event| {
            let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if key.key() != "Enter" {
                return;
            }
            event.prevent_default();
            handle_enter(w, field.on_enter());
        })?);
    }

    let header = view.header()?;
    listeners.push(on(&header, "mousedown", widget, |w, event| {
        start_gesture(w, HitRegion::Header, &event);
    })?);
    for resizer in view.resizers()? {
        let Some(edge) =
            Edge::from_class_list(resizer.class_name().split_whitespace())
        else {
            log::warn!("resizer without edge class: {}", resizer.class_name());
            continue;
        };
        listeners.push(on(&resizer, "mousedown", widget, move |w, event| {
            start_gesture(w, HitRegion::Resizer(edge), &event);
        })?);
    }

    Ok(listeners)
}

/// Register a listener whose handler receives the shared widget.
fn on<F>(
    target: &EventTarget,
    kind: &'static str,
    widget: &Rc<Widget>,
    mut handler: F,
) -> Result<Listener, ChatError>
where
    F: FnMut(&Rc<Widget>, Event) + 'static,
{
    let widget = Rc::clone(widget);
    Listener::new(target, kind, move |event| handler(&widget, event))
        .map_err(dom_error)
}

fn handle_enter(widget: &Rc<Widget>, action: EnterAction) {
    match action {
        EnterAction::SendMessage => send_message(widget),
        EnterAction::SubmitLogin => submit_login(widget),
        EnterAction::FocusPassword => {
            if let Err(e) = widget.view.focus_field(InputField::Password) {
                log::warn!("{e}");
            }
        }
    }
}

// ── Network actions ──────────────────────────────────────────────────────

fn submit_login(widget: &Rc<Widget>) {
    let (Ok(username), Ok(password)) = (
        widget.view.field_value(InputField::Username),
        widget.view.field_value(InputField::Password),
    ) else {
        log::error!("login form fields missing");
        return;
    };
    let (request, url) = {
        let controller = widget.controller.borrow();
        (
            controller.begin_login(&username, &password),
            controller.options().endpoints.login_url(),
        )
    };

    let widget = Rc::clone(widget);
    spawn_local(async move {
        let result = fetch::login(&url, &request).await;
        let _ = widget.controller.borrow_mut().finish_login(result);
        widget.sync();
    });
}

fn send_message(widget: &Rc<Widget>) {
    let text = match widget.view.field_value(InputField::Message) {
        Ok(text) => text,
        Err(e) => {
            log::error!("{e}");
            return;
        }
    };
    let step = widget.controller.borrow_mut().begin_send(&text);
    if step == SendStep::Ignored {
        return;
    }
    if let Err(e) = widget.view.clear_field(InputField::Message) {
        log::warn!("{e}");
    }
    widget.sync();

    let SendStep::Dispatch(dispatch) = step else {
        return;
    };
    let url = widget.controller.borrow().options().endpoints.chat_url();
    let widget = Rc::clone(widget);
    spawn_local(async move {
        let result =
            fetch::chat(&url, &dispatch.token, &dispatch.request).await;
        widget.controller.borrow_mut().finish_send(result);
        widget.sync();
    });
}

// ── Gestures ─────────────────────────────────────────────────────────────

/// The move/up pair registered for one gesture. Both are attached together
/// and, being owned by one value, removed together.
struct GestureListeners {
    moved: Listener,
    released: Listener,
}

impl GestureListeners {
    fn attach(widget: &Rc<Widget>) -> Result<Self, ChatError> {
        let document: EventTarget = widget
            .view
            .element("chat-popup")?
            .owner_document()
            .ok_or_else(|| ChatError::Dom("panel is detached".into()))?
            .into();

        let moved = on(&document, "mousemove", widget, |w, event| {
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            mouse.prevent_default();
            let transition = w
                .controller
                .borrow_mut()
                .handle_pointer(PointerEvent::Move { at: point_of(mouse) });
            if transition == Some(GestureTransition::Moved) {
                w.sync_geometry();
            }
        })?;
        let released = on(&document, "mouseup", widget, |w, _| {
            let transition =
                w.controller.borrow_mut().handle_pointer(PointerEvent::Up);
            if matches!(transition, Some(GestureTransition::Ended(_))) {
                end_gesture(w);
            }
        })?;
        Ok(Self { moved, released })
    }

    fn detach(&mut self) {
        self.moved.detach();
        self.released.detach();
    }
}

fn start_gesture(widget: &Rc<Widget>, region: HitRegion, event: &Event) {
    let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
        return;
    };
    mouse.prevent_default();

    let down = PointerEvent::Down {
        region,
        at: point_of(mouse),
        bounds: widget.view.panel_bounds(),
    };
    let transition = widget.controller.borrow_mut().handle_pointer(down);
    let Some(GestureTransition::Began(kind)) = transition else {
        return;
    };
    log::debug!("gesture began: {kind:?}");
    widget.sync_geometry();

    match GestureListeners::attach(widget) {
        Ok(listeners) => *widget.gesture.borrow_mut() = Some(listeners),
        Err(e) => {
            log::error!("could not track gesture: {e}");
            let _ =
                widget.controller.borrow_mut().handle_pointer(PointerEvent::Up);
        }
    }
}

/// Runs inside the mouseup callback, so the closures are only dropped once
/// that callback has returned.
fn end_gesture(widget: &Rc<Widget>) {
    let finished = widget.gesture.borrow_mut().take();
    if let Some(mut listeners) = finished {
        listeners.detach();
        spawn_local(async move { drop(listeners) });
    }
}

fn point_of(event: &MouseEvent) -> Point {
    Point::new(f64::from(event.client_x()), f64::from(event.client_y()))
}

// ── JS value helpers ─────────────────────────────────────────────────────

/// Best-effort text for a thrown JS value.
fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn dom_error(value: JsValue) -> ChatError {
    ChatError::Dom(describe(&value))
}

impl From<ChatError> for JsValue {
    fn from(e: ChatError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}
