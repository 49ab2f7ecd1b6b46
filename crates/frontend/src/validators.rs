//! Field validators shared by the pages.

use notifyme_gtk::{Validator, validator};

pub const USERNAME_MIN: usize = 4;
pub const USERNAME_MAX: usize = 32;
pub const PASSWORD_MIN: usize = 8;
pub const TAG_MAX: usize = 32;

pub fn username_error(username: &str) -> Option<String> {
    let length = username.chars().count();
    if length < USERNAME_MIN {
        return Some("Username is too short.".to_string());
    }
    if length > USERNAME_MAX {
        return Some("Username is too long.".to_string());
    }
    if !username.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Some("Username can only contain letters and numbers".to_string());
    }
    None
}

pub fn password_error(password: &str) -> Option<String> {
    (password.chars().count() < PASSWORD_MIN).then(|| "Password is too short.".to_string())
}

pub fn tag_error(tag: &str) -> Option<String> {
    let tag = tag.trim();
    if tag.is_empty() {
        return Some("Tag can't be empty.".to_string());
    }
    if tag.chars().count() > TAG_MAX {
        return Some("Tag is too long.".to_string());
    }
    None
}

pub fn username() -> Validator {
    validator(username_error)
}

pub fn password() -> Validator {
    validator(password_error)
}

pub fn tag() -> Validator {
    validator(tag_error)
}
