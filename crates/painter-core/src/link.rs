//! Turning clipboard URLs into Markdown links.

use painter_lang::MarkupSpec;
use tracing::debug;
use url::Url;

use crate::error::ClipboardError;

/// Path extensions that are embedded as images rather than linked.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "tiff"];

/// Host clipboard capability.
pub trait Clipboard {
    /// Read the current clipboard text.
    fn read_text(&mut self) -> Result<String, ClipboardError>;
}

impl Clipboard for String {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        Ok(self.clone())
    }
}

/// Parse `text` as an absolute URL with a host.
pub fn parse_link_target(text: &str) -> Option<Url> {
    let url = Url::parse(text.trim()).ok()?;
    url.host_str().filter(|host| !host.is_empty())?;
    Some(url)
}

/// Returns `true` if the URL path ends in an image extension.
pub fn is_image_url(url: &Url) -> bool {
    url.path()
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// Resolve the link sentinel against the clipboard.
///
/// A URL on the clipboard becomes the link target (`](<url>)`), and an image URL also switches
/// the prefix to `![`. Any failure keeps `spec` as it is.
pub fn resolve_link_markup<C: Clipboard + ?Sized>(
    spec: &MarkupSpec,
    clipboard: &mut C,
) -> MarkupSpec {
    if !spec.wants_clipboard_link() {
        return spec.clone();
    }

    let text = match clipboard.read_text() {
        Ok(text) => text,
        Err(err) => {
            debug!(%err, "clipboard read failed, keeping plain link markup");
            return spec.clone();
        }
    };

    let text = text.trim();
    let Some(url) = parse_link_target(text) else {
        debug!("clipboard does not hold a URL, keeping plain link markup");
        return spec.clone();
    };

    let mut resolved = spec.clone();
    resolved.suffix = format!("]({text})");
    if is_image_url(&url) {
        resolved.prefix = "![".to_string();
    }
    debug!(prefix = %resolved.prefix, suffix = %resolved.suffix, "resolved clipboard link");
    resolved
}
