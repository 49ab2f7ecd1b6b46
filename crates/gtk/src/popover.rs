use zoon::UnwrapThrowExt;

use crate::classes;
use crate::element::{Child, ElementParams, div};
use crate::error::{self, DomError};
use crate::geometry::{self, Position, Rect};
use crate::manager::Floating;
use crate::node::Node;
use crate::widget::Widget;

const LOG_DEBUG: bool = cfg!(feature = "debug-logging");

/// A floating overlay anchored at a viewport point captured on creation.
///
/// Placement needs the rendered size, so it happens in
/// [`on_render`](Widget::on_render) after the node is attached. Dismissal is
/// the [`PopoverManager`](crate::PopoverManager)'s job.
pub struct Popover {
    root: Node,
    anchor_x: f64,
    anchor_y: f64,
}

impl Popover {
    pub fn new(x: f64, y: f64, content: impl Into<Child>) -> Self {
        Self {
            root: div(ElementParams::new().cls(classes::POPOVER), [content.into()]),
            anchor_x: x,
            anchor_y: y,
        }
    }

    /// Measures the attached node, then writes `left`/`top` in px.
    pub fn place(&self) -> Position {
        let size = Rect::from(&self.root.element().get_bounding_client_rect()).size();
        let position = geometry::place_popover(self.anchor_x, self.anchor_y, size, viewport_width());
        let style = self.root.element().style();
        style
            .set_property("left", &format!("{}px", position.left))
            .unwrap_throw();
        style
            .set_property("top", &format!("{}px", position.top))
            .unwrap_throw();
        if LOG_DEBUG {
            zoon::println!(
                "[Popover] anchor=({}, {}) size={}x{} -> left={} top={}",
                self.anchor_x,
                self.anchor_y,
                size.width,
                size.height,
                position.left,
                position.top
            );
        }
        position
    }
}

impl Widget for Popover {
    fn node(&self) -> &Node {
        &self.root
    }

    fn on_render(&self, _parent: &web_sys::Element) {
        self.place();
    }
}

impl Floating for Popover {
    fn bounds(&self) -> Rect {
        Rect::from(&self.root.element().get_bounding_client_rect())
    }

    fn attach(&self) -> Result<(), DomError> {
        let body = error::body()?;
        body.append_child(self.root.element())?;
        self.on_render(&body);
        Ok(())
    }

    fn detach(&self) {
        self.root.element().remove();
    }
}

fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or_default()
}
