//! Validated text entry.
//!
//! Every `input` event re-runs the validator synchronously; there is no
//! debouncing. The result drives an error tooltip below the field and is
//! reported through the validity callback.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use zoon::{JsCast, UnwrapThrowExt};

use crate::classes;
use crate::element::{Child, ElementParams, button, div, el, row};
use crate::node::Node;
use crate::widget::Widget;

const LOG_DEBUG: bool = cfg!(feature = "debug-logging");

pub const SHOW_LABEL: &str = "SHOW";
pub const HIDE_LABEL: &str = "HIDE";

/// Maps a candidate value to an error message; `None` means valid.
pub type Validator = Rc<dyn Fn(&str) -> Option<String>>;

pub fn validator(f: impl Fn(&str) -> Option<String> + 'static) -> Validator {
    Rc::new(f)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Validity {
    Valid,
    Invalid(String),
}

impl Validity {
    pub fn of(validator: &dyn Fn(&str) -> Option<String>, value: &str) -> Self {
        match validator(value) {
            Some(message) => Validity::Invalid(message),
            None => Validity::Valid,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Validity::Valid)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Validity::Valid => None,
            Validity::Invalid(message) => Some(message),
        }
    }
}

/// Masking mode of a [`PasswordInput`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Masked,
    Revealed,
}

impl Visibility {
    pub fn toggled(self) -> Self {
        match self {
            Visibility::Masked => Visibility::Revealed,
            Visibility::Revealed => Visibility::Masked,
        }
    }

    /// Value of the `<input type>` for this mode.
    pub fn input_type(self) -> &'static str {
        match self {
            Visibility::Masked => "password",
            Visibility::Revealed => "text",
        }
    }

    /// Label of the toggle button, naming what a click will do.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Visibility::Masked => SHOW_LABEL,
            Visibility::Revealed => HIDE_LABEL,
        }
    }
}

// --- Field ---

/// State shared by both input widgets: the `<input>`, its tooltip and the
/// element that receives the error style.
struct Field {
    root: Node,
    input: web_sys::HtmlInputElement,
    tooltip: web_sys::HtmlElement,
    error_target: web_sys::HtmlElement,
    validator: Validator,
    on_validity: RefCell<Rc<dyn Fn(bool)>>,
    validity: RefCell<Validity>,
    notifying: Cell<bool>,
}

impl Field {
    /// `layout` receives the built `<input>` node and returns what goes above
    /// the tooltip plus the element that gets the `error` class.
    fn new(
        validator: Validator,
        input_params: ElementParams,
        layout: impl FnOnce(Node) -> (Child, web_sys::HtmlElement),
    ) -> Rc<Self> {
        Rc::new_cyclic(|field: &Weak<Field>| {
            let field = field.clone();
            let input_node = el(
                "input",
                input_params.on("input", move |_| {
                    if let Some(field) = field.upgrade() {
                        field.is_valid();
                    }
                }),
                [],
            );
            let input = input_node
                .element()
                .clone()
                .unchecked_into::<web_sys::HtmlInputElement>();
            let tooltip_node = div(
                ElementParams::new()
                    .cls(classes::TOOLTIP_DESTRUCTIVE)
                    .cls(classes::HIDDEN),
                [],
            );
            let tooltip = tooltip_node.element().clone();
            let (body, error_target) = layout(input_node);
            let root = div(
                ElementParams::new().cls(classes::TOOLTIP_CONTAINER),
                [body, tooltip_node.into()],
            );
            Field {
                root,
                input,
                tooltip,
                error_target,
                validator,
                on_validity: RefCell::new(Rc::new(|_| {})),
                validity: RefCell::new(Validity::Valid),
                notifying: Cell::new(false),
            }
        })
    }

    fn is_valid(&self) -> bool {
        let validity = Validity::of(self.validator.as_ref(), &self.input.value());
        let valid = validity.is_valid();
        if LOG_DEBUG {
            zoon::println!("[Input] validated '{}': {:?}", self.input.value(), validity);
        }
        self.show(validity);
        self.notify(valid);
        valid
    }

    fn show(&self, validity: Validity) {
        let tooltip_classes = self.tooltip.class_list();
        let target_classes = self.error_target.class_list();
        match &validity {
            Validity::Invalid(message) => {
                tooltip_classes.remove_1(classes::HIDDEN).unwrap_throw();
                self.tooltip.set_text_content(Some(message));
                target_classes.add_1(classes::INPUT_ERROR).unwrap_throw();
            }
            Validity::Valid => {
                tooltip_classes.add_1(classes::HIDDEN).unwrap_throw();
                target_classes.remove_1(classes::INPUT_ERROR).unwrap_throw();
            }
        }
        *self.validity.borrow_mut() = validity;
    }

    /// A callback may validate other inputs, which may validate this one
    /// again. The nested call refreshes the display but does not notify.
    fn notify(&self, valid: bool) {
        if self.notifying.replace(true) {
            return;
        }
        let callback = self.on_validity.borrow().clone();
        callback(valid);
        self.notifying.set(false);
    }
}

// --- Input ---

/// A text field with a validator and an error tooltip.
///
/// Cloning gives another handle to the same widget.
#[derive(Clone)]
pub struct Input {
    field: Rc<Field>,
}

impl Input {
    pub fn new(validator: Validator) -> Self {
        Self::with_params(validator, ElementParams::new())
    }

    /// `params` configure the `<input>` element itself, e.g. a preset
    /// `value` or a `placeholder`.
    pub fn with_params(validator: Validator, params: ElementParams) -> Self {
        let input_params = ElementParams::new()
            .cls(classes::INPUT)
            .attr("type", "text")
            .merge(params);
        let field = Field::new(validator, input_params, |input| {
            let error_target = input.element().clone();
            (input.into(), error_target)
        });
        Self { field }
    }

    /// Replaces the callback receiving the result of every validation.
    pub fn on_validity_change(&self, callback: impl Fn(bool) + 'static) {
        *self.field.on_validity.borrow_mut() = Rc::new(callback);
    }

    /// Runs the validator on the current value, updates the error display
    /// and notifies the validity callback.
    pub fn is_valid(&self) -> bool {
        self.field.is_valid()
    }

    /// Shows an externally produced error (e.g. a rejected request) without
    /// running the validator. The next input event re-validates as usual.
    pub fn set_error(&self, message: impl Into<String>) {
        self.field.show(Validity::Invalid(message.into()));
    }

    /// The state currently on display.
    pub fn validity(&self) -> Validity {
        self.field.validity.borrow().clone()
    }

    pub fn value(&self) -> String {
        self.field.input.value()
    }

    /// Sets the value without dispatching an `input` event.
    pub fn set_value(&self, value: &str) {
        self.field.input.set_value(value);
    }

    pub fn input_element(&self) -> &web_sys::HtmlInputElement {
        &self.field.input
    }

    pub fn tooltip_element(&self) -> &web_sys::HtmlElement {
        &self.field.tooltip
    }
}

impl Widget for Input {
    fn node(&self) -> &Node {
        &self.field.root
    }
}

// --- PasswordInput ---

/// A masked [`Input`] with a SHOW/HIDE toggle.
///
/// The toggle only flips the masking mode; it never validates.
#[derive(Clone)]
pub struct PasswordInput {
    field: Rc<Field>,
    visibility: Rc<Cell<Visibility>>,
}

impl PasswordInput {
    pub fn new(validator: Validator) -> Self {
        Self::with_params(validator, ElementParams::new())
    }

    pub fn with_params(validator: Validator, params: ElementParams) -> Self {
        let visibility = Rc::new(Cell::new(Visibility::Masked));
        let input_params = ElementParams::new()
            .attr("type", Visibility::Masked.input_type())
            .merge(params);
        let field = Field::new(validator, input_params, {
            let visibility = visibility.clone();
            move |input| {
                let input_element = input
                    .element()
                    .clone()
                    .unchecked_into::<web_sys::HtmlInputElement>();
                let toggle = button(
                    Visibility::Masked.toggle_label(),
                    ElementParams::new().cls(classes::BUTTON_CLEAR).on_click({
                        move |event| {
                            let next = visibility.get().toggled();
                            visibility.set(next);
                            input_element.set_type(next.input_type());
                            if let Some(button) = event
                                .current_target()
                                .and_then(|target| target.dyn_into::<web_sys::HtmlElement>().ok())
                            {
                                button.set_text_content(Some(next.toggle_label()));
                            }
                        }
                    }),
                );
                let container = row(
                    ElementParams::new().cls(classes::INPUT),
                    [input.into(), toggle.into()],
                );
                let error_target = container.element().clone();
                (container.into(), error_target)
            }
        });
        Self { field, visibility }
    }

    pub fn on_validity_change(&self, callback: impl Fn(bool) + 'static) {
        *self.field.on_validity.borrow_mut() = Rc::new(callback);
    }

    pub fn is_valid(&self) -> bool {
        self.field.is_valid()
    }

    pub fn set_error(&self, message: impl Into<String>) {
        self.field.show(Validity::Invalid(message.into()));
    }

    pub fn validity(&self) -> Validity {
        self.field.validity.borrow().clone()
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility.get()
    }

    pub fn value(&self) -> String {
        self.field.input.value()
    }

    pub fn set_value(&self, value: &str) {
        self.field.input.set_value(value);
    }

    pub fn input_element(&self) -> &web_sys::HtmlInputElement {
        &self.field.input
    }

    pub fn tooltip_element(&self) -> &web_sys::HtmlElement {
        &self.field.tooltip
    }
}

impl Widget for PasswordInput {
    fn node(&self) -> &Node {
        &self.field.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reject_empty() -> Validator {
        validator(|value| value.is_empty().then(|| "Required.".to_string()))
    }

    #[test]
    fn validity_follows_validator() {
        let validator = reject_empty();
        assert_eq!(
            Validity::of(validator.as_ref(), ""),
            Validity::Invalid("Required.".to_string())
        );
        assert_eq!(Validity::of(validator.as_ref(), "ok"), Validity::Valid);
    }

    #[test]
    fn validity_is_idempotent_for_same_value() {
        let validator = reject_empty();
        let first = Validity::of(validator.as_ref(), "");
        let second = Validity::of(validator.as_ref(), "");
        assert_eq!(first, second);
        assert!(!first.is_valid());
        assert_eq!(first.message(), Some("Required."));
    }

    #[test]
    fn valid_has_no_message() {
        assert_eq!(Validity::Valid.message(), None);
        assert!(Validity::Valid.is_valid());
    }

    #[test]
    fn visibility_toggle_round_trips_labels() {
        let masked = Visibility::default();
        assert_eq!(masked, Visibility::Masked);
        assert_eq!(masked.input_type(), "password");
        assert_eq!(masked.toggle_label(), "SHOW");

        let revealed = masked.toggled();
        assert_eq!(revealed.input_type(), "text");
        assert_eq!(revealed.toggle_label(), "HIDE");
        assert_eq!(revealed.toggled(), Visibility::Masked);
    }
}
