#![allow(dead_code)]

use notifyme_gtk::zoon::{JsCast, UnwrapThrowExt};

pub fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

pub fn body() -> web_sys::HtmlElement {
    document().body().unwrap()
}

pub fn count(selector: &str) -> u32 {
    document().query_selector_all(selector).unwrap().length()
}

pub fn query(selector: &str) -> Option<web_sys::HtmlElement> {
    document()
        .query_selector(selector)
        .unwrap()
        .map(|element| element.unchecked_into::<web_sys::HtmlElement>())
}

/// Elements matching `selector` inside `root`, in document order.
pub fn query_all(root: &web_sys::Element, selector: &str) -> Vec<web_sys::HtmlElement> {
    let list = root.query_selector_all(selector).unwrap();
    (0..list.length())
        .filter_map(|index| list.get(index))
        .map(|node| node.unchecked_into::<web_sys::HtmlElement>())
        .collect()
}

pub fn click(element: &web_sys::HtmlElement) {
    element.click();
}

pub fn type_text(input: &web_sys::HtmlInputElement, value: &str) {
    input.set_value(value);
    let event = web_sys::Event::new("input").unwrap_throw();
    input.dispatch_event(&event).unwrap_throw();
}

pub fn pointer_down(x: i32, y: i32) {
    let init = web_sys::MouseEventInit::new();
    init.set_client_x(x);
    init.set_client_y(y);
    init.set_bubbles(true);
    let event = web_sys::MouseEvent::new_with_mouse_event_init_dict("pointerdown", &init).unwrap_throw();
    document().dispatch_event(&event).unwrap_throw();
}

pub fn click_at(element: &web_sys::HtmlElement, x: i32, y: i32) {
    let init = web_sys::MouseEventInit::new();
    init.set_client_x(x);
    init.set_client_y(y);
    init.set_bubbles(true);
    let event = web_sys::MouseEvent::new_with_mouse_event_init_dict("click", &init).unwrap_throw();
    element.dispatch_event(&event).unwrap_throw();
}

pub fn set_fixed_size(element: &web_sys::HtmlElement, width: u32, height: u32) {
    element
        .style()
        .set_css_text(&format!("position: fixed; width: {width}px; height: {height}px;"));
}
