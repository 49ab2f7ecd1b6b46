use std::cell::RefCell;

use zoon::UnwrapThrowExt;

use crate::element::{Child, ElementParams};
use crate::event::EventListener;

const LOG_DROPS: bool = cfg!(feature = "debug-logging");

/// One DOM element together with everything it keeps alive.
///
/// A `Node` exclusively owns its element: children appended through it are
/// moved into it, listeners registered on it live in it, and dropping it
/// detaches the element from the document. Subtree mutation goes through
/// `&self` so widgets can re-render from inside their own event handlers.
pub struct Node {
    element: web_sys::HtmlElement,
    children: RefCell<Vec<Child>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl Node {
    pub(crate) fn from_element(element: web_sys::HtmlElement) -> Self {
        Self {
            element,
            children: RefCell::new(Vec::new()),
            listeners: RefCell::new(Vec::new()),
        }
    }

    pub fn element(&self) -> &web_sys::HtmlElement {
        &self.element
    }

    /// Appends `children` after the existing ones.
    ///
    /// Widget children are attached first and then get their
    /// [`on_render`](crate::Widget::on_render) call with this node's element
    /// as the parent, so geometry queries inside it see a connected node.
    pub fn append(&self, children: impl IntoIterator<Item = Child>) {
        for child in children {
            let child = match child {
                Child::Node(node) => {
                    self.element.append_child(node.element()).unwrap_throw();
                    Child::Node(node)
                }
                Child::Widget(widget) => {
                    self.element
                        .append_child(widget.node().element())
                        .unwrap_throw();
                    widget.on_render(&self.element);
                    Child::Widget(widget)
                }
                Child::Text(text) => {
                    let text_node = zoon::document().create_text_node(&text);
                    self.element.append_child(&text_node).unwrap_throw();
                    Child::Raw(text_node.into())
                }
                Child::Raw(raw) => {
                    self.element.append_child(&raw).unwrap_throw();
                    Child::Raw(raw)
                }
            };
            self.children.borrow_mut().push(child);
        }
    }

    /// Removes every existing child, then appends `children`.
    pub fn replace(&self, children: impl IntoIterator<Item = Child>) {
        let stale = self.children.take();
        self.element.set_text_content(None);
        // Dropped outside the borrow: dropping a widget may run arbitrary code.
        drop(stale);
        self.append(children);
    }

    pub fn child_count(&self) -> usize {
        self.children.borrow().len()
    }

    /// Registers a listener that lives as long as this node.
    pub fn listen(&self, event_type: &'static str, callback: impl FnMut(web_sys::Event) + 'static) {
        let listener = EventListener::new(self.element.as_ref(), event_type, callback);
        self.listeners.borrow_mut().push(listener);
    }

    pub fn set_class(&self, class: &str, enabled: bool) {
        let class_list = self.element.class_list();
        if enabled {
            class_list.add_1(class).unwrap_throw();
        } else {
            class_list.remove_1(class).unwrap_throw();
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.element.class_list().contains(class)
    }

    pub(crate) fn apply(&self, params: ElementParams) {
        let ElementParams {
            cls,
            text,
            css,
            attrs,
            props,
            handlers,
        } = params;
        if let Some(cls) = cls {
            let class_list = self.element.class_list();
            for class in cls.split_whitespace() {
                class_list.add_1(class).unwrap_throw();
            }
        }
        if let Some(text) = text {
            self.element.set_text_content(Some(&text));
        }
        if let Some(css) = css {
            self.element.style().set_css_text(&css);
        }
        for (name, value) in attrs {
            self.element.set_attribute(&name, &value).unwrap_throw();
        }
        for (name, value) in props {
            js_sys::Reflect::set(&self.element, &name.as_str().into(), &value).unwrap_throw();
        }
        for (event_type, handler) in handlers {
            self.listen(event_type, handler);
        }
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        if LOG_DROPS {
            zoon::println!("[Node] dropped <{}>", self.element.tag_name().to_lowercase());
        }
        self.element.remove();
    }
}
