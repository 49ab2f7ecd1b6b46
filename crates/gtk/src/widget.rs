use std::ops::Deref;

use crate::element::Child;
use crate::error::{self, DomError};
use crate::node::Node;

/// A retained UI component that owns exactly one root [`Node`].
pub trait Widget {
    fn node(&self) -> &Node;

    /// Called once right after the root node was attached under `parent`.
    ///
    /// The node is connected at that point, so layout queries such as
    /// `getBoundingClientRect` return real values.
    fn on_render(&self, parent: &web_sys::Element) {
        let _ = parent;
    }

    fn append(&self, children: impl IntoIterator<Item = Child>)
    where
        Self: Sized,
    {
        self.node().append(children);
    }

    /// Full-subtree replace. No stale child survives it.
    fn replace(&self, children: impl IntoIterator<Item = Child>)
    where
        Self: Sized,
    {
        self.node().replace(children);
    }
}

/// A widget attached to a host element for as long as this guard lives.
///
/// This is how callers own the lifecycle of top-level overlays such as a
/// [`Dialog`](crate::Dialog): mount to show, drop (or [`unmount`](Self::unmount))
/// to hide.
pub struct Mounted<W: Widget> {
    widget: Option<W>,
}

impl<W: Widget> Mounted<W> {
    pub fn on(host: &web_sys::Element, widget: W) -> Result<Self, DomError> {
        host.append_child(widget.node().element())?;
        widget.on_render(host);
        Ok(Self {
            widget: Some(widget),
        })
    }

    pub fn on_body(widget: W) -> Result<Self, DomError> {
        let body = error::body()?;
        Self::on(&body, widget)
    }

    /// Detaches the widget and hands it back.
    pub fn unmount(mut self) -> Option<W> {
        let widget = self.widget.take();
        if let Some(widget) = &widget {
            widget.node().element().remove();
        }
        widget
    }
}

impl<W: Widget> Deref for Mounted<W> {
    type Target = W;

    fn deref(&self) -> &W {
        // Only `unmount` empties the slot and it consumes `self`.
        self.widget.as_ref().expect("mounted widget is present until unmount")
    }
}

impl<W: Widget> Drop for Mounted<W> {
    fn drop(&mut self) {
        if let Some(widget) = &self.widget {
            widget.node().element().remove();
        }
    }
}
