use std::cell::RefCell;
use std::rc::{Rc, Weak};

use serde::{Deserialize, Serialize};

use crate::classes;
use crate::element::{Child, ElementParams, button, button_with, div, row, span};
use crate::error::DomError;
use crate::icon;
use crate::input::{Input, Validator};
use crate::manager::PopoverManager;
use crate::node::Node;
use crate::popover::Popover;
use crate::widget::Widget;

const LOG_DEBUG: bool = cfg!(feature = "debug-logging");

pub const ADD_LABEL: &str = "Add";
pub const CANCEL_LABEL: &str = "Cancel";
pub const REMOVE_LABEL: &str = "❌";
pub const ADD_ICON: &str = "add";
pub const ADD_TRIGGER_TITLE: &str = "Add tag";

/// Ordered, non-deduplicated list of tags. Insertion order is render order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagList(Vec<String>);

impl TagList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, tag: impl Into<String>) {
        self.0.push(tag.into());
    }

    /// Removes the first entry equal to `tag`. Later duplicates stay.
    pub fn remove_first(&mut self, tag: &str) -> bool {
        match self.0.iter().position(|existing| existing == tag) {
            Some(index) => {
                self.0.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for TagList {
    fn from(tags: Vec<String>) -> Self {
        Self(tags)
    }
}

impl<S: Into<String>> FromIterator<S> for TagList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

// --- TagPicker ---

struct Picker {
    root: Node,
    tags: RefCell<TagList>,
    validator: Validator,
    popovers: PopoverManager,
}

/// Inline editor for a [`TagList`]: one removable chip per tag and a
/// trailing "add" icon button that asks for a new tag in a popover.
///
/// Every mutation re-renders the whole picker.
#[derive(Clone)]
pub struct TagPicker {
    picker: Rc<Picker>,
}

impl TagPicker {
    /// `validator` is reused by the input of every "add" popover.
    pub fn new(tags: impl Into<TagList>, validator: Validator, popovers: PopoverManager) -> Self {
        let picker = Self {
            picker: Rc::new(Picker {
                root: div(ElementParams::new().cls(classes::TAG_PICKER), []),
                tags: RefCell::new(tags.into()),
                validator,
                popovers,
            }),
        };
        picker.render();
        picker
    }

    fn from_weak(picker: &Weak<Picker>) -> Option<Self> {
        picker.upgrade().map(|picker| Self { picker })
    }

    pub fn tags(&self) -> TagList {
        self.picker.tags.borrow().clone()
    }

    pub fn render(&self) {
        let tags = self.tags();
        let weak = Rc::downgrade(&self.picker);
        let mut children = tags
            .iter()
            .map(|tag| chip(&weak, tag).into())
            .collect::<Vec<Child>>();
        children.push(add_trigger(&weak).into());
        self.picker.root.replace(children);
    }

    /// Opens the "add" popover anchored at `(x, y)`, replacing any open one.
    pub fn add_tag(&self, x: f64, y: f64) -> Result<(), DomError> {
        let input = Input::new(self.picker.validator.clone());
        let weak = Rc::downgrade(&self.picker);
        let popovers = self.picker.popovers.downgrade();
        let confirm = button(
            ADD_LABEL,
            ElementParams::new().cls(classes::BUTTON_PRIMARY).on_click({
                let input = input.clone();
                let popovers = popovers.clone();
                move |_| {
                    if let Some(picker) = TagPicker::from_weak(&weak) {
                        picker.confirm_add(input.value());
                    }
                    if let Some(popovers) = popovers.upgrade() {
                        popovers.dismiss();
                    }
                }
            }),
        );
        let cancel = button(
            CANCEL_LABEL,
            ElementParams::new().cls(classes::BUTTON).on_click(move |_| {
                if let Some(popovers) = popovers.upgrade() {
                    popovers.dismiss();
                }
            }),
        );
        let content = div(
            ElementParams::new().cls("column surface pad-1 gap-1"),
            [
                input.into(),
                row(ElementParams::new().cls("gap-1"), [confirm.into(), cancel.into()]).into(),
            ],
        );
        self.picker.popovers.open(Popover::new(x, y, content))
    }

    /// What the popover's "Add" button does: append `value` and re-render.
    pub fn confirm_add(&self, value: impl Into<String>) {
        let value = value.into();
        if LOG_DEBUG {
            zoon::println!("[TagPicker] add '{value}'");
        }
        self.picker.tags.borrow_mut().push(value);
        self.render();
    }

    /// Removes the first tag equal to `value` and re-renders.
    pub fn remove_tag(&self, value: &str) -> bool {
        let removed = self.picker.tags.borrow_mut().remove_first(value);
        if LOG_DEBUG {
            zoon::println!("[TagPicker] remove '{value}': {removed}");
        }
        self.render();
        removed
    }
}

impl Widget for TagPicker {
    fn node(&self) -> &Node {
        &self.picker.root
    }
}

fn chip(picker: &Weak<Picker>, tag: &str) -> Node {
    let picker = picker.clone();
    let value = tag.to_string();
    div(
        ElementParams::new().cls(classes::TAG_PICKER_TAG),
        [
            span(tag, ElementParams::new()).into(),
            button(
                REMOVE_LABEL,
                ElementParams::new()
                    .cls(classes::BUTTON_CLEAR)
                    .on_click(move |_| {
                        if let Some(picker) = TagPicker::from_weak(&picker) {
                            picker.remove_tag(&value);
                        }
                    }),
            )
            .into(),
        ],
    )
}

fn add_trigger(picker: &Weak<Picker>) -> Node {
    let picker = picker.clone();
    button_with(
        icon::icon(ADD_ICON),
        ElementParams::new()
            .cls(classes::TAG_PICKER_ADD)
            .attr("title", ADD_TRIGGER_TITLE)
            .on_click(move |event| {
                let Some(picker) = TagPicker::from_weak(&picker) else {
                    return;
                };
                let (x, y) = (f64::from(event.client_x()), f64::from(event.client_y()));
                if let Err(error) = picker.add_tag(x, y) {
                    zoon::eprintln!("[TagPicker] failed to open the add popover: {error}");
                }
            }),
    )
}
