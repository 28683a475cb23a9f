/// Text inputs that react to the Enter key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    /// The chat message box.
    Message,
    /// Login form, username box.
    Username,
    /// Login form, password box.
    Password,
}

/// What pressing Enter in an [`InputField`] should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnterAction {
    /// Send the message box contents.
    SendMessage,
    /// Move focus to the password box.
    FocusPassword,
    /// Submit the login form.
    SubmitLogin,
}

impl InputField {
    /// Element id of this field in the widget markup.
    #[must_use]
    pub fn element_id(self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::Username => "username",
            Self::Password => "password",
        }
    }

    /// Action bound to Enter in this field.
    #[must_use]
    pub fn on_enter(self) -> EnterAction {
        match self {
            Self::Message => EnterAction::SendMessage,
            Self::Username => EnterAction::FocusPassword,
            Self::Password => EnterAction::SubmitLogin,
        }
    }
}
