use std::cell::RefCell;
use std::rc::Rc;

use notifyme_gtk::{App, DomError, ElementParams, Mounted, TagPicker, Widget, column, row, span};
use zoon::Timer;
use zoon::futures_util::FutureExt;

mod login;
mod validators;

use login::{Credentials, LoginForm, SubmitFn};

/// Delay of the offline login stand-in, so the pending state is visible.
const OFFLINE_LOGIN_DELAY_MS: u32 = 400;

thread_local! {
    /// The mounted page root. It stays attached for the lifetime of the tab.
    static ROOT: RefCell<Option<Mounted<App>>> = const { RefCell::new(None) };
}

fn main() {
    if let Err(error) = start() {
        zoon::eprintln!("[frontend] failed to start: {error}");
    }
}

fn start() -> Result<(), DomError> {
    let app = App::new()?;
    let login = LoginForm::new(offline_login());
    let interests = TagPicker::new(
        vec!["rust".to_string(), "wasm".to_string()],
        validators::tag(),
        app.popovers(),
    );
    app.replace([
        login.into(),
        column(
            ElementParams::new().cls("surface gap-1 pad-1"),
            [
                span("Interests", ElementParams::new()).into(),
                row(ElementParams::new().cls("gap-1"), [interests.into()]).into(),
            ],
        )
        .into(),
    ]);
    let mounted = app.attach_to_body()?;
    ROOT.with_borrow_mut(|root| *root = Some(mounted));
    Ok(())
}

/// Stand-in for the network layer: rejects the username "taken".
fn offline_login() -> SubmitFn {
    Rc::new(|credentials: Credentials| {
        async move {
            Timer::sleep(OFFLINE_LOGIN_DELAY_MS).await;
            if credentials.username == "taken" {
                Err("Incorrect username or password.".to_string())
            } else {
                zoon::println!("[frontend] signed in as '{}'", credentials.username);
                Ok(())
            }
        }
        .boxed_local()
    })
}
