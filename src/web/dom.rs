//! Reads from and writes to the widget's DOM elements.
//!
//! Expected markup (ids and classes):
//!
//! ```html
//! <button id="chat-toggle"></button>
//! <div id="chat-popup" class="hidden">
//!   <div class="chat-header"></div>
//!   <div id="chat-box"></div>
//!   <input id="message"> <button id="send-button"></button>
//!   <div class="resizer resizer-right"></div> ...
//! </div>
//! <div id="login-modal" class="hidden">
//!   <input id="username"> <input id="password" type="password">
//!   <button id="login-button"></button>
//! </div>
//! ```

use std::cell::Cell;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use super::dom_error;
use crate::controller::ChatController;
use crate::error::ChatError;
use crate::geometry::{PanelGeometry, Rect};
use crate::input::InputField;

const HIDDEN: &str = "hidden";
const TYPING_INDICATOR_ID: &str = "typing-indicator";

/// Handles to the long-lived widget elements plus render bookkeeping.
pub(crate) struct PanelView {
    document: Document,
    popup: HtmlElement,
    chat_box: Element,
    login_modal: Element,
    /// Log entries already appended to `chat_box`.
    rendered: Cell<usize>,
}

// ── Lookup ───────────────────────────────────────────────────────────────

impl PanelView {
    /// Find the widget elements in `document`.
    pub(crate) fn locate(document: &Document) -> Result<Self, ChatError> {
        let popup = by_id(document, "chat-popup")?
            .dyn_into::<HtmlElement>()
            .map_err(|_| {
                ChatError::Dom("#chat-popup is not an HTML element".into())
            })?;
        Ok(Self {
            document: document.clone(),
            popup,
            chat_box: by_id(document, "chat-box")?,
            login_modal: by_id(document, "login-modal")?,
            rendered: Cell::new(0),
        })
    }

    /// Element by id.
    pub(crate) fn element(&self, id: &str) -> Result<Element, ChatError> {
        by_id(&self.document, id)
    }

    /// The drag handle.
    pub(crate) fn header(&self) -> Result<Element, ChatError> {
        self.popup
            .query_selector(".chat-header")
            .map_err(dom_error)?
            .ok_or_else(|| ChatError::Dom("missing .chat-header".into()))
    }

    /// All resize handles inside the panel.
    pub(crate) fn resizers(&self) -> Result<Vec<Element>, ChatError> {
        let nodes = self
            .popup
            .query_selector_all(".resizer")
            .map_err(dom_error)?;
        Ok((0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }

    fn input(&self, field: InputField) -> Result<HtmlInputElement, ChatError> {
        self.element(field.element_id())?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| {
                let id = field.element_id();
                ChatError::Dom(format!("#{id} is not an input"))
            })
    }
}

// ── Form fields ──────────────────────────────────────────────────────────

impl PanelView {
    /// Current text of a field.
    pub(crate) fn field_value(
        &self,
        field: InputField,
    ) -> Result<String, ChatError> {
        Ok(self.input(field)?.value())
    }

    /// Empty a field.
    pub(crate) fn clear_field(
        &self,
        field: InputField,
    ) -> Result<(), ChatError> {
        self.input(field)?.set_value("");
        Ok(())
    }

    /// Move keyboard focus to a field.
    pub(crate) fn focus_field(
        &self,
        field: InputField,
    ) -> Result<(), ChatError> {
        self.input(field)?.focus().map_err(dom_error)
    }
}

// ── Geometry ─────────────────────────────────────────────────────────────

impl PanelView {
    /// On-screen position plus CSS width/height of the panel.
    pub(crate) fn panel_bounds(&self) -> Rect {
        let rect = self.popup.get_bounding_client_rect();
        let computed = web_sys::window()
            .and_then(|w| w.get_computed_style(&self.popup).ok().flatten());
        let css = |name: &str, fallback: f64| {
            computed
                .as_ref()
                .and_then(|style| style.get_property_value(name).ok())
                .and_then(|value| {
                    value.trim_end_matches("px").parse::<f64>().ok()
                })
                .unwrap_or(fallback)
        };
        Rect::new(
            rect.left(),
            rect.top(),
            css("width", rect.width()),
            css("height", rect.height()),
        )
    }

    /// Write an absolute geometry to the panel's inline style. Anchored
    /// panels are left to the stylesheet.
    pub(crate) fn apply_geometry(
        &self,
        geometry: &PanelGeometry,
    ) -> Result<(), ChatError> {
        if !geometry.is_absolute() {
            return Ok(());
        }
        let r = geometry.rect;
        let style = self.popup.style();
        for (name, value) in [
            ("position", "absolute".to_owned()),
            ("bottom", "auto".to_owned()),
            ("right", "auto".to_owned()),
            ("left", format!("{}px", r.left)),
            ("top", format!("{}px", r.top)),
            ("width", format!("{}px", r.width)),
            ("height", format!("{}px", r.height)),
        ] {
            style.set_property(name, &value).map_err(dom_error)?;
        }
        Ok(())
    }
}

// ── Rendering ────────────────────────────────────────────────────────────

impl PanelView {
    /// Bring the page in line with the controller: visibility classes, new
    /// log entries, typing indicator.
    pub(crate) fn render(
        &self,
        controller: &ChatController,
    ) -> Result<(), ChatError> {
        set_hidden(&self.popup, !controller.is_visible())?;
        set_hidden(&self.login_modal, !controller.login_prompt_visible())?;

        let log = controller.log();
        for message in log.since(self.rendered.get()) {
            let rendered = message.render(controller.message_style());
            let entry = self.document.create_element("div").map_err(dom_error)?;
            for class in rendered.classes {
                entry.class_list().add_1(class).map_err(dom_error)?;
            }
            entry.set_inner_html(&rendered.markup);
            let _ = self.chat_box.append_child(&entry).map_err(dom_error)?;
        }
        self.rendered.set(log.len());

        self.render_typing_indicator(controller.typing_indicator_visible())?;
        self.chat_box.set_scroll_top(self.chat_box.scroll_height());
        Ok(())
    }

    fn render_typing_indicator(&self, visible: bool) -> Result<(), ChatError> {
        let existing = self.document.get_element_by_id(TYPING_INDICATOR_ID);
        match (visible, existing) {
            // Re-appending moves it below any entries added this round.
            (true, Some(indicator)) => {
                let _ = self
                    .chat_box
                    .append_child(&indicator)
                    .map_err(dom_error)?;
            }
            (true, None) => {
                let indicator =
                    self.document.create_element("div").map_err(dom_error)?;
                indicator.set_id(TYPING_INDICATOR_ID);
                indicator
                    .class_list()
                    .add_1("typing-indicator")
                    .map_err(dom_error)?;
                indicator
                    .set_inner_html("<span></span><span></span><span></span>");
                let _ = self
                    .chat_box
                    .append_child(&indicator)
                    .map_err(dom_error)?;
            }
            (false, Some(indicator)) => indicator.remove(),
            (false, None) => {}
        }
        Ok(())
    }
}

fn by_id(document: &Document, id: &str) -> Result<Element, ChatError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| ChatError::Dom(format!("missing #{id}")))
}

fn set_hidden(element: &Element, hidden: bool) -> Result<(), ChatError> {
    let _ = element
        .class_list()
        .toggle_with_force(HIDDEN, hidden)
        .map_err(dom_error)?;
    Ok(())
}
