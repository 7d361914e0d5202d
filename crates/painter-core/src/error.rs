use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Errors surfaced by markup commands.
pub enum MarkupError {
    #[error("focus must be in editor")]
    /// The editor had no input focus; nothing was changed.
    EditorNotFocused,

    #[error("invalid selector: {0:?}")]
    /// An erase selector could not be parsed.
    InvalidSelector(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Failures reported by a [`Clipboard`](crate::Clipboard) implementation.
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    /// The host could not provide clipboard contents.
    Unavailable(String),

    #[error("clipboard holds no text")]
    /// The clipboard holds something other than text.
    NotText,
}
