use std::rc::{Rc, Weak};

use notifyme_gtk::classes;
use notifyme_gtk::{
    Busy, ElementParams, Input, Node, PasswordInput, Widget, button, column, span,
};
use serde::Serialize;
use zoon::{Task, UnwrapThrowExt, web_sys};
use zoon::futures_util::future::LocalBoxFuture;

use crate::validators;

const LOG_DEBUG: bool = cfg!(feature = "debug-logging");

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Sends credentials to the backend. Resolves to the backend's error message
/// on failure.
pub type SubmitFn = Rc<dyn Fn(Credentials) -> LocalBoxFuture<'static, Result<(), String>>>;

struct Form {
    root: Node,
    username: Input,
    password: PasswordInput,
    submit_button: web_sys::HtmlElement,
    busy: Busy,
    on_submit: SubmitFn,
}

/// Username + password form. The Login button is enabled only while both
/// fields are valid, and a pending login blocks further submits.
#[derive(Clone)]
pub struct LoginForm {
    form: Rc<Form>,
}

impl LoginForm {
    pub fn new(on_submit: SubmitFn) -> Self {
        let form = Rc::new_cyclic(|form: &Weak<Form>| {
            let username = Input::with_params(
                validators::username(),
                ElementParams::new().attr("autocomplete", "username"),
            );
            let password = PasswordInput::with_params(
                validators::password(),
                ElementParams::new().attr("autocomplete", "current-password"),
            );
            watch_fields(&username, &password, form);
            let submit = button(
                "Login",
                ElementParams::new()
                    .cls(classes::BUTTON_PRIMARY)
                    .cls(classes::DISABLED)
                    .on_click({
                        let form = form.clone();
                        move |_| {
                            if let Some(form) = form.upgrade() {
                                form.submit();
                            }
                        }
                    }),
            );
            let submit_button = submit.element().clone();
            let root = column(
                ElementParams::new().cls("vert-center horiz-center vert-expand"),
                [column(
                    ElementParams::new()
                        .cls("surface gap-1 pad-1")
                        .css("min-width: 90%"),
                    [
                        span("Username", ElementParams::new()).into(),
                        username.clone().into(),
                        span("Password", ElementParams::new()).into(),
                        password.clone().into(),
                        submit.into(),
                    ],
                )
                .into()],
            );
            Form {
                root,
                username,
                password,
                submit_button,
                busy: Busy::new(),
                on_submit,
            }
        });
        Self { form }
    }

    pub fn username(&self) -> &Input {
        &self.form.username
    }

    pub fn password(&self) -> &PasswordInput {
        &self.form.password
    }

    pub fn submit_button(&self) -> &web_sys::HtmlElement {
        &self.form.submit_button
    }

    pub fn is_busy(&self) -> bool {
        self.form.busy.is_busy()
    }

    pub fn submit(&self) {
        self.form.submit();
    }
}

impl Widget for LoginForm {
    fn node(&self) -> &Node {
        &self.form.root
    }
}

fn watch_fields(username: &Input, password: &PasswordInput, form: &Weak<Form>) {
    let refresh = {
        let form = form.clone();
        move |_valid: bool| {
            if let Some(form) = form.upgrade() {
                form.refresh_submit_button();
            }
        }
    };
    username.on_validity_change(refresh.clone());
    password.on_validity_change(refresh);
}

impl Form {
    fn fields_valid(&self) -> bool {
        self.username.is_valid() && self.password.is_valid()
    }

    fn refresh_submit_button(&self) {
        let enabled = self.fields_valid() && !self.busy.is_busy();
        self.set_submit_enabled(enabled);
    }

    fn set_submit_enabled(&self, enabled: bool) {
        let class_list = self.submit_button.class_list();
        if enabled {
            class_list.remove_1(classes::DISABLED).unwrap_throw();
        } else {
            class_list.add_1(classes::DISABLED).unwrap_throw();
        }
    }

    fn submit(self: &Rc<Self>) {
        if !self.fields_valid() {
            return;
        }
        let Some(guard) = self.busy.try_start() else {
            if LOG_DEBUG {
                zoon::println!("[Login] submit ignored: previous request pending");
            }
            return;
        };
        self.set_submit_enabled(false);
        let credentials = Credentials {
            username: self.username.value(),
            password: self.password.value(),
        };
        let request = (self.on_submit)(credentials);
        let form = Rc::downgrade(self);
        Task::start(async move {
            let result = request.await;
            drop(guard);
            // The form may have been torn down while the request was pending.
            let Some(form) = form.upgrade() else {
                return;
            };
            match result {
                Ok(()) => {
                    if LOG_DEBUG {
                        zoon::println!("[Login] signed in as '{}'", form.username.value());
                    }
                    form.refresh_submit_button();
                }
                Err(message) => {
                    // Stays disabled until the user edits a field again.
                    form.password.set_error(message);
                    form.set_submit_enabled(false);
                }
            }
        });
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::cell::Cell;

    use wasm_bindgen_test::*;
    use zoon::Timer;
    use zoon::futures_util::FutureExt;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn type_text(input: &web_sys::HtmlInputElement, value: &str) {
        input.set_value(value);
        let event = web_sys::Event::new("input").unwrap_throw();
        input.dispatch_event(&event).unwrap_throw();
    }

    fn counting_submit(
        calls: Rc<Cell<u32>>,
        result: impl Fn() -> LocalBoxFuture<'static, Result<(), String>> + 'static,
    ) -> SubmitFn {
        Rc::new(move |_credentials: Credentials| {
            calls.set(calls.get() + 1);
            result()
        })
    }

    fn fill_valid(form: &LoginForm) {
        type_text(form.username().input_element(), "alice");
        type_text(form.password().input_element(), "correct horse");
    }

    #[wasm_bindgen_test]
    fn button_enables_only_when_both_fields_are_valid() {
        let calls = Rc::new(Cell::new(0));
        let form = LoginForm::new(counting_submit(calls.clone(), || {
            std::future::pending().boxed_local()
        }));
        let button = form.submit_button();
        assert!(button.class_list().contains(classes::DISABLED));

        type_text(form.username().input_element(), "alice");
        assert!(button.class_list().contains(classes::DISABLED));

        type_text(form.password().input_element(), "short");
        assert!(button.class_list().contains(classes::DISABLED));

        type_text(form.password().input_element(), "long enough");
        assert!(!button.class_list().contains(classes::DISABLED));

        form.submit_button().click();
        assert_eq!(calls.get(), 1);
    }

    #[wasm_bindgen_test]
    fn invalid_form_never_submits() {
        let calls = Rc::new(Cell::new(0));
        let form = LoginForm::new(counting_submit(calls.clone(), || {
            async { Ok(()) }.boxed_local()
        }));
        type_text(form.username().input_element(), "no");
        form.submit_button().click();
        assert_eq!(calls.get(), 0);
    }

    #[wasm_bindgen_test]
    fn double_click_while_pending_submits_once() {
        let calls = Rc::new(Cell::new(0));
        let form = LoginForm::new(counting_submit(calls.clone(), || {
            std::future::pending().boxed_local()
        }));
        fill_valid(&form);
        form.submit_button().click();
        form.submit_button().click();
        assert_eq!(calls.get(), 1);
        assert!(form.is_busy());
        assert!(form.submit_button().class_list().contains(classes::DISABLED));
    }

    #[wasm_bindgen_test]
    async fn rejected_submit_is_shown_on_the_password_field() {
        let calls = Rc::new(Cell::new(0));
        let form = LoginForm::new(counting_submit(calls.clone(), || {
            async { Err("Incorrect password.".to_string()) }.boxed_local()
        }));
        fill_valid(&form);
        form.submit();
        Timer::sleep(20).await;

        assert!(!form.is_busy());
        let tooltip = form.password().tooltip_element();
        assert_eq!(tooltip.text_content().as_deref(), Some("Incorrect password."));
        assert!(!tooltip.class_list().contains(classes::HIDDEN));
        assert!(form.submit_button().class_list().contains(classes::DISABLED));
    }
}
