use crate::element::{ElementParams, column};
use crate::error::DomError;
use crate::manager::PopoverManager;
use crate::node::Node;
use crate::popover::Popover;
use crate::widget::{Mounted, Widget};

/// Root widget of a page. Owns the process-wide popover slot.
pub struct App {
    root: Node,
    popovers: PopoverManager,
}

impl App {
    /// Creates the root column and installs the click-outside listener.
    pub fn new() -> Result<Self, DomError> {
        let popovers = PopoverManager::new();
        popovers.install_dismiss_listener()?;
        Ok(Self {
            root: column(ElementParams::new().cls("vert-expand"), []),
            popovers,
        })
    }

    /// Handle for widgets that open popovers (e.g. [`TagPicker`](crate::TagPicker)).
    pub fn popovers(&self) -> PopoverManager {
        self.popovers.clone()
    }

    pub fn popover(&self, popover: Popover) -> Result<(), DomError> {
        self.popovers.open(popover)
    }

    pub fn dismiss_popover(&self) -> bool {
        self.popovers.dismiss()
    }

    pub fn attach_to_body(self) -> Result<Mounted<App>, DomError> {
        Mounted::on_body(self)
    }
}

impl Widget for App {
    fn node(&self) -> &Node {
        &self.root
    }
}
