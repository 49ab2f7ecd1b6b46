use std::fmt;

use zoon::JsValue;

/// Failure to reach a part of the browser environment the toolkit needs.
///
/// Validation problems are never reported through this type, see
/// [`Validity`](crate::input::Validity).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    /// `window` is not available (not running in a browser main thread).
    NoWindow,
    /// `window.document` is missing.
    NoDocument,
    /// The document has no `<body>` to attach overlays to.
    NoBody,
    /// A fetched asset answered with a non-success HTTP status.
    Fetch { url: String, status: u16 },
    /// The payload did not parse into an `<svg>` document.
    InvalidSvg,
    /// A DOM call threw. Holds the stringified exception.
    Js(String),
}

impl fmt::Display for DomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomError::NoWindow => write!(f, "no global `window`"),
            DomError::NoDocument => write!(f, "window has no document"),
            DomError::NoBody => write!(f, "document has no body"),
            DomError::Fetch { url, status } => write!(f, "fetching '{url}' failed with status {status}"),
            DomError::InvalidSvg => write!(f, "payload is not an SVG document"),
            DomError::Js(message) => write!(f, "DOM call failed: {message}"),
        }
    }
}

impl std::error::Error for DomError {}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"));
        DomError::Js(message)
    }
}

/// Returns `document.body` or the reason it is unreachable.
pub(crate) fn body() -> Result<web_sys::HtmlElement, DomError> {
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    let document = window.document().ok_or(DomError::NoDocument)?;
    document.body().ok_or(DomError::NoBody)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_missing_piece() {
        assert_eq!(DomError::NoBody.to_string(), "document has no body");
        assert_eq!(
            DomError::Js("boom".to_string()).to_string(),
            "DOM call failed: boom"
        );
        let fetch = DomError::Fetch {
            url: "/static/icons/add.svg".to_string(),
            status: 404,
        };
        assert_eq!(
            fetch.to_string(),
            "fetching '/static/icons/add.svg' failed with status 404"
        );
    }
}
