//! Chat panel controller: owns visibility, the session, the message log and
//! the panel geometry.
//!
//! Network work is split into `begin_*` / `finish_*` halves so an async host
//! (the browser) can release its borrow of the controller while a request
//! is outstanding; drag, resize and toggle keep working in the meantime.
//! Blocking hosts use [`ChatController::submit_login`] and
//! [`ChatController::send`], which run both halves over a [`Transport`].

use crate::api::{
    ChatRequest, ChatResponse, LoginReply, LoginRequest, Transport,
};
use crate::error::ChatError;
use crate::geometry::PanelGeometry;
use crate::input::{GestureTransition, PanelInput, PointerEvent};
use crate::messages::{MessageLog, MessageStyle, Role};
use crate::options::WidgetOptions;
use crate::session::{Session, SessionToken};

/// How a login attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Token stored, login form hidden.
    Accepted,
    /// The server answered but did not issue a token.
    Rejected,
    /// No decodable answer (network or body error).
    Failed,
}

/// An authenticated chat request ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatDispatch {
    /// Token to send as `Authorization: Bearer`.
    pub token: SessionToken,
    /// Request body.
    pub request: ChatRequest,
}

/// What [`ChatController::begin_send`] decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendStep {
    /// Blank input; nothing logged, nothing sent.
    Ignored,
    /// No session: login form shown, nothing sent.
    LoginRequired,
    /// The caller must perform this request and report back through
    /// [`ChatController::finish_send`].
    Dispatch(ChatDispatch),
}

/// The interactive panel controller.
#[derive(Debug, Clone)]
pub struct ChatController {
    options: WidgetOptions,
    visible: bool,
    login_prompt: bool,
    session: Session,
    log: MessageLog,
    /// Chat requests started but not yet finished.
    in_flight: usize,
    input: PanelInput,
}

// ── Construction ─────────────────────────────────────────────────────────

impl ChatController {
    /// Create a hidden, logged-out panel. When the panel does not prompt on
    /// open, the login form starts out shown and stays up until a login is
    /// accepted.
    #[must_use]
    pub fn new(options: WidgetOptions) -> Self {
        let input =
            PanelInput::new(options.layout.min_size, &options.features);
        let login_prompt = !options.features.prompt_login_on_open;
        Self {
            options,
            visible: false,
            login_prompt,
            session: Session::default(),
            log: MessageLog::default(),
            in_flight: 0,
            input,
        }
    }
}

// ── Accessors ────────────────────────────────────────────────────────────

impl ChatController {
    /// Active options.
    #[must_use]
    pub fn options(&self) -> &WidgetOptions {
        &self.options
    }

    /// Whether the panel is shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the login form is shown.
    #[must_use]
    pub fn login_prompt_visible(&self) -> bool {
        self.login_prompt
    }

    /// Whether a session token is held.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// The message log.
    #[must_use]
    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    /// Rendering style for log entries.
    #[must_use]
    pub fn message_style(&self) -> MessageStyle {
        self.options.features.message_style
    }

    /// Number of chat requests awaiting a response.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Whether the typing indicator should be shown.
    #[must_use]
    pub fn typing_indicator_visible(&self) -> bool {
        self.options.features.typing_indicator && self.in_flight > 0
    }

    /// Panel position and size.
    #[must_use]
    pub fn geometry(&self) -> &PanelGeometry {
        self.input.geometry()
    }
}

// ── Visibility ───────────────────────────────────────────────────────────

impl ChatController {
    /// Show or hide the panel and return the new visibility. Opening the
    /// panel without a session surfaces the login form.
    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        if self.visible
            && !self.session.is_authenticated()
            && self.options.features.prompt_login_on_open
        {
            self.login_prompt = true;
        }
        log::debug!("panel visible: {}", self.visible);
        self.visible
    }
}

// ── Login ────────────────────────────────────────────────────────────────

impl ChatController {
    /// Build the login request for the submitted form.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn begin_login(&self, username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.to_owned(),
            password: password.to_owned(),
        }
    }

    /// Apply the result of a login request.
    pub fn finish_login(
        &mut self,
        result: Result<LoginReply, ChatError>,
    ) -> LoginOutcome {
        match result {
            Ok(reply) => {
                if let Some(token) = reply.accepted_token() {
                    self.session.store(token);
                    self.login_prompt = false;
                    self.log.push(
                        Role::Success,
                        self.options.text.login_success.clone(),
                    );
                    log::info!("login accepted");
                    LoginOutcome::Accepted
                } else {
                    self.log.push(
                        Role::System,
                        self.options.text.login_failed.clone(),
                    );
                    log::info!("login rejected (ok: {})", reply.ok);
                    LoginOutcome::Rejected
                }
            }
            Err(e) => {
                log::error!("Login error: {e}");
                self.log
                    .push(Role::System, self.options.text.login_error.clone());
                LoginOutcome::Failed
            }
        }
    }

    /// Run a complete login over a blocking transport.
    pub fn submit_login(
        &mut self,
        transport: &impl Transport,
        username: &str,
        password: &str,
    ) -> LoginOutcome {
        let request = self.begin_login(username, password);
        self.finish_login(transport.login(&request))
    }
}

// ── Chat ─────────────────────────────────────────────────────────────────

impl ChatController {
    /// Log the user's message and decide whether a request goes out.
    ///
    /// On [`SendStep::Dispatch`] the typing indicator is raised until the
    /// matching [`finish_send`](Self::finish_send).
    pub fn begin_send(&mut self, text: &str) -> SendStep {
        let message = text.trim();
        if message.is_empty() {
            return SendStep::Ignored;
        }
        self.log.push(Role::User, message);

        let Some(token) = self.session.token().cloned() else {
            self.log
                .push(Role::System, self.options.text.login_required.clone());
            self.login_prompt = true;
            return SendStep::LoginRequired;
        };

        self.in_flight += 1;
        SendStep::Dispatch(ChatDispatch {
            token,
            request: ChatRequest {
                message: message.to_owned(),
            },
        })
    }

    /// Apply the result of a chat request started by
    /// [`begin_send`](Self::begin_send).
    pub fn finish_send(&mut self, result: Result<ChatResponse, ChatError>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        match result {
            Ok(response) => self.log.push(Role::Bot, response.reply),
            Err(e) => {
                log::error!("Chat error: {e}");
                self.log
                    .push(Role::System, self.options.text.send_failed.clone());
            }
        }
    }

    /// Run a complete send over a blocking transport. Returns the step taken;
    /// for [`SendStep::Dispatch`] the reply is already in the log.
    pub fn send(&mut self, transport: &impl Transport, text: &str) -> SendStep {
        let step = self.begin_send(text);
        if let SendStep::Dispatch(dispatch) = &step {
            let result = transport.chat(&dispatch.token, &dispatch.request);
            self.finish_send(result);
        }
        step
    }
}

// ── Pointer gestures ─────────────────────────────────────────────────────

impl ChatController {
    /// Feed a pointer event to the drag/resize state machine.
    pub fn handle_pointer(
        &mut self,
        event: PointerEvent,
    ) -> Option<GestureTransition> {
        self.input.handle(event)
    }
}
