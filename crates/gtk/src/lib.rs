//! A small retained-mode widget toolkit that builds straight on the browser DOM.
//!
//! Widgets own exactly one root element each and re-render by replacing
//! their whole subtree. There is no diffing; a re-render costs
//! O(subtree size).
//!
//! ```text
//! App (root column, owns PopoverManager)
//!   └── Node / Widget tree built with `element::el` and friends
//!        ├── Input / PasswordInput   validated text entry
//!        ├── TagPicker               ordered tag editor, opens Popovers
//!        ├── button_with(icon(..))   button whose SVG icon loads asynchronously
//!        └── Dialog                  caller-mounted modal backdrop
//! PopoverManager
//!   └── at most one attached Popover + one document `pointerdown` listener
//! ```

pub mod action;
pub mod app;
pub mod classes;
pub mod dialog;
pub mod element;
pub mod error;
pub mod event;
pub mod geometry;
pub mod icon;
pub mod input;
pub mod manager;
pub mod node;
pub mod popover;
pub mod tags;
pub mod widget;

pub use action::{Busy, BusyGuard};
pub use app::App;
pub use dialog::Dialog;
pub use element::{Child, ElementParams, button, button_with, column, div, el, flex_divider, row, span};
pub use error::DomError;
pub use event::EventListener;
pub use geometry::{Position, Rect, Size};
pub use icon::icon;
pub use input::{Input, PasswordInput, Validator, Validity, Visibility, validator};
pub use manager::{Floating, PopoverManager, WeakPopoverManager};
pub use node::Node;
pub use popover::Popover;
pub use tags::{TagList, TagPicker};
pub use widget::{Mounted, Widget};

pub use zoon;
