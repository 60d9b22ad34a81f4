//! UI events understood by the adapter.

/// A key pressed while the input field has focus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// The designated submit key.
    Enter,
    /// A printable character, appended to the field.
    Char(char),
    /// Removes the last character.
    Backspace,
    /// Anything else; ignored.
    Other,
}

/// A user action delivered by the front end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    /// Replace the input field's text.
    Input(String),
    /// A key press on the input field.
    Key(Key),
    /// The submit control was activated.
    SubmitClicked,
    /// The reset control was activated.
    ResetClicked,
}
