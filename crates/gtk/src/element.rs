//! Declarative element construction.
//!
//! ```rust,ignore
//! let login = button("Login", ElementParams::new()
//!     .cls("button-primary disabled")
//!     .on_click(|_| submit()));
//! let form = column(ElementParams::new().cls("surface gap-1 pad-1"), [
//!     span("Username", ElementParams::new()).into(),
//!     username_input.into(),
//!     login.into(),
//! ]);
//! ```

use zoon::{JsCast, JsValue, Task, UnwrapThrowExt};

use crate::classes;
use crate::error::DomError;
use crate::node::Node;
use crate::widget::Widget;

pub(crate) type Handler = Box<dyn FnMut(web_sys::Event)>;

/// Configuration applied to a freshly created element.
///
/// `cls`, `text` and `css` are the reserved keys; everything else goes through
/// one of the typed maps: `attrs` become HTML attributes, `props` are assigned
/// as JS properties (`value`, `type`, `checked`, ...), and handlers become
/// event listeners owned by the resulting [`Node`].
#[derive(Default)]
pub struct ElementParams {
    pub cls: Option<String>,
    pub text: Option<String>,
    pub css: Option<String>,
    pub attrs: Vec<(String, String)>,
    pub props: Vec<(String, JsValue)>,
    pub(crate) handlers: Vec<(&'static str, Handler)>,
}

impl ElementParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds space-separated classes. Repeated calls accumulate.
    pub fn cls(mut self, cls: impl AsRef<str>) -> Self {
        let cls = cls.as_ref();
        self.cls = Some(match self.cls.take() {
            Some(existing) => format!("{existing} {cls}"),
            None => cls.to_string(),
        });
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn css(mut self, css: impl Into<String>) -> Self {
        self.css = Some(css.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    pub fn prop(mut self, name: impl Into<String>, value: impl Into<JsValue>) -> Self {
        self.props.push((name.into(), value.into()));
        self
    }

    pub fn on(mut self, event_type: &'static str, handler: impl FnMut(web_sys::Event) + 'static) -> Self {
        self.handlers.push((event_type, Box::new(handler)));
        self
    }

    pub fn on_click(self, mut handler: impl FnMut(web_sys::MouseEvent) + 'static) -> Self {
        self.on("click", move |event| {
            if let Ok(event) = event.dyn_into::<web_sys::MouseEvent>() {
                handler(event);
            }
        })
    }

    /// Layers `other` on top of `self`: classes accumulate, `text`/`css` of
    /// `other` win, and its attributes, properties and handlers are applied
    /// after ours.
    pub fn merge(mut self, other: ElementParams) -> Self {
        if let Some(cls) = other.cls {
            self = self.cls(cls);
        }
        if other.text.is_some() {
            self.text = other.text;
        }
        if other.css.is_some() {
            self.css = other.css;
        }
        self.attrs.extend(other.attrs);
        self.props.extend(other.props);
        self.handlers.extend(other.handlers);
        self
    }
}

/// Anything that can be appended to a [`Node`].
pub enum Child {
    Node(Node),
    Widget(Box<dyn Widget>),
    Text(String),
    Raw(web_sys::Node),
}

impl From<Node> for Child {
    fn from(node: Node) -> Self {
        Child::Node(node)
    }
}

impl<W: Widget + 'static> From<W> for Child {
    fn from(widget: W) -> Self {
        Child::Widget(Box::new(widget))
    }
}

impl From<Box<dyn Widget>> for Child {
    fn from(widget: Box<dyn Widget>) -> Self {
        Child::Widget(widget)
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Child::Text(text)
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Child::Text(text.to_string())
    }
}

impl From<web_sys::Node> for Child {
    fn from(raw: web_sys::Node) -> Self {
        Child::Raw(raw)
    }
}

impl From<web_sys::Element> for Child {
    fn from(raw: web_sys::Element) -> Self {
        Child::Raw(raw.into())
    }
}

/// Creates a detached `<tag>` element, configures it and appends `children`.
///
/// Nothing is attached to the document here; the caller decides where the
/// returned node goes.
pub fn el(tag: &str, params: ElementParams, children: impl IntoIterator<Item = Child>) -> Node {
    let element = zoon::document()
        .create_element(tag)
        .unwrap_throw()
        .unchecked_into::<web_sys::HtmlElement>();
    let node = Node::from_element(element);
    node.apply(params);
    node.append(children);
    node
}

pub fn div(params: ElementParams, children: impl IntoIterator<Item = Child>) -> Node {
    el("div", params, children)
}

pub fn row(params: ElementParams, children: impl IntoIterator<Item = Child>) -> Node {
    let node = div(params, children);
    node.set_class(classes::ROW, true);
    node
}

pub fn column(params: ElementParams, children: impl IntoIterator<Item = Child>) -> Node {
    let node = div(params, children);
    node.set_class(classes::COLUMN, true);
    node
}

pub fn span(text: impl Into<String>, params: ElementParams) -> Node {
    el("span", params.text(text), [])
}

pub fn button(label: impl Into<Child>, params: ElementParams) -> Node {
    el("button", params, [label.into()])
}

/// A button whose content arrives later, typically an [`icon`](crate::icon::icon).
///
/// The button is returned (and clickable) right away. `child` is appended once
/// it resolves; a failed load is logged and leaves the button as built.
pub fn button_with(
    child: impl std::future::Future<Output = Result<web_sys::Element, DomError>> + 'static,
    params: ElementParams,
) -> Node {
    let node = el("button", params, []);
    let element = node.element().clone();
    Task::start(async move {
        match child.await {
            Ok(child) => {
                element.append_child(&child).unwrap_throw();
            }
            Err(error) => zoon::eprintln!("[button] failed to load content: {error}"),
        }
    });
    node
}

/// Pushes the following siblings of a row to the far end.
pub fn flex_divider() -> Node {
    div(ElementParams::new().cls(classes::FLEX_DIVIDER), [])
}
