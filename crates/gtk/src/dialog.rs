use crate::classes;
use crate::element::{Child, ElementParams, column, div};
use crate::node::Node;
use crate::widget::Widget;

/// Modal container: a full-viewport backdrop around a column of content.
///
/// It has no dismissal logic of its own. Show it by mounting it
/// (see [`Mounted`](crate::Mounted)) and hide it by dropping the mount.
pub struct Dialog {
    root: Node,
    dialog: web_sys::HtmlElement,
}

impl Dialog {
    /// `params` and `children` configure the inner column, not the backdrop.
    pub fn new(params: ElementParams, children: impl IntoIterator<Item = Child>) -> Self {
        let content = column(params, children);
        let dialog = content.element().clone();
        let root = div(
            ElementParams::new().cls(classes::DIALOG_CONTAINER),
            [content.into()],
        );
        Self { root, dialog }
    }

    pub fn dialog_element(&self) -> &web_sys::HtmlElement {
        &self.dialog
    }
}

impl Widget for Dialog {
    fn node(&self) -> &Node {
        &self.root
    }
}
