//! SVG icons fetched from the static asset directory and inlined into the DOM.
//!
//! Inline `<svg>` (instead of `<img>`) lets the stylesheet recolor icons
//! through `currentColor`.

use wasm_bindgen_futures::JsFuture;
use zoon::{JsCast, UnwrapThrowExt};

use crate::classes;
use crate::error::DomError;

const LOG_DEBUG: bool = cfg!(feature = "debug-logging");

pub const ICON_DIR: &str = "/static/icons";

pub fn icon_url(name: &str) -> String {
    format!("{ICON_DIR}/{name}.svg")
}

/// Fetches `url` and parses the body as a standalone SVG document.
pub async fn svg(url: &str) -> Result<web_sys::Element, DomError> {
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await?
        .dyn_into::<web_sys::Response>()?;
    if !response.ok() {
        return Err(DomError::Fetch {
            url: url.to_string(),
            status: response.status(),
        });
    }
    let text = JsFuture::from(response.text()?).await?;
    let text = text
        .as_string()
        .ok_or_else(|| DomError::Js("response body is not a string".to_string()))?;
    parse_svg(&text)
}

/// Parses SVG markup into a detached `<svg>` element.
pub fn parse_svg(text: &str) -> Result<web_sys::Element, DomError> {
    let parser = web_sys::DomParser::new()?;
    let document = parser.parse_from_string(text, web_sys::SupportedType::ImageSvgXml)?;
    let root = document.document_element().ok_or(DomError::InvalidSvg)?;
    // Malformed XML still yields a document, with a `<parsererror>` somewhere in it.
    if root.local_name() != "svg" || root.query_selector("parsererror")?.is_some() {
        return Err(DomError::InvalidSvg);
    }
    Ok(root)
}

/// Loads the SVG at `url` and marks it with the `icon` class.
pub async fn svg_icon(url: &str) -> Result<web_sys::Element, DomError> {
    let element = svg(url).await?;
    element.class_list().add_1(classes::ICON).unwrap_throw();
    if LOG_DEBUG {
        zoon::println!("[icon] loaded '{url}'");
    }
    Ok(element)
}

/// Loads `<ICON_DIR>/<name>.svg` as an icon.
pub async fn icon(name: impl Into<String>) -> Result<web_sys::Element, DomError> {
    let url = icon_url(&name.into());
    svg_icon(&url).await
}
