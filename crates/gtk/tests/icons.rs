//! Browser tests for SVG icon loading and buttons with late content.
#![cfg(target_arch = "wasm32")]

mod support;

use notifyme_gtk::classes;
use notifyme_gtk::icon::{parse_svg, svg, svg_icon};
use notifyme_gtk::zoon::Timer;
use notifyme_gtk::{DomError, ElementParams, button_with};
use wasm_bindgen_test::*;

use support::*;

wasm_bindgen_test_configure!(run_in_browser);

const PLUS_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16"><path d="M7 1h2v14H7zM1 7h14v2H1z"/></svg>"#;

/// `PLUS_SVG` as a `data:` URL, so fetching needs no server.
fn plus_svg_url() -> String {
    let encoded: String = PLUS_SVG
        .chars()
        .map(|c| match c {
            '<' => "%3C".to_string(),
            '>' => "%3E".to_string(),
            '"' => "%22".to_string(),
            '#' => "%23".to_string(),
            ' ' => "%20".to_string(),
            c => c.to_string(),
        })
        .collect();
    format!("data:image/svg+xml,{encoded}")
}

#[wasm_bindgen_test]
fn parses_svg_markup_into_an_svg_element() {
    let element = parse_svg(PLUS_SVG).unwrap();
    assert_eq!(element.local_name(), "svg");
    assert_eq!(element.get_attribute("viewBox").as_deref(), Some("0 0 16 16"));
}

#[wasm_bindgen_test]
fn rejects_markup_that_is_not_svg() {
    assert_eq!(parse_svg("<div>not an icon</div>"), Err(DomError::InvalidSvg));
    assert_eq!(parse_svg("<svg><unclosed></svg>"), Err(DomError::InvalidSvg));
}

#[wasm_bindgen_test]
async fn svg_icon_fetches_and_marks_the_element() {
    let icon = svg_icon(&plus_svg_url()).await.unwrap();
    assert_eq!(icon.local_name(), "svg");
    assert!(icon.class_list().contains(classes::ICON));
}

#[wasm_bindgen_test]
async fn missing_asset_is_an_error() {
    assert!(svg("/static/icons/does-not-exist.svg").await.is_err());
}

#[wasm_bindgen_test]
async fn button_with_appends_content_once_it_resolves() {
    let content = document().create_element("span").unwrap();
    content.set_text_content(Some("late"));
    let button = button_with(async move { Ok(content) }, ElementParams::new().cls("toolbar"));
    assert!(button.has_class("toolbar"));
    assert_eq!(button.element().child_element_count(), 0);

    Timer::sleep(10).await;
    assert_eq!(button.element().child_element_count(), 1);
    assert_eq!(button.element().text_content().as_deref(), Some("late"));
}

#[wasm_bindgen_test]
async fn button_with_stays_usable_when_content_fails() {
    let button = button_with(
        async { Err(DomError::InvalidSvg) },
        ElementParams::new().attr("title", "Add tag"),
    );
    Timer::sleep(10).await;
    assert_eq!(button.element().child_element_count(), 0);
    assert_eq!(button.element().get_attribute("title").as_deref(), Some("Add tag"));
}
