//! CSS class names applied by the toolkit.
//!
//! Stylesheets are expected to define these; tests query them.

pub const ROW: &str = "row";
pub const COLUMN: &str = "column";
pub const FLEX_DIVIDER: &str = "mar-right-auto";

pub const HIDDEN: &str = "hidden";
pub const DISABLED: &str = "disabled";

pub const TOOLTIP_CONTAINER: &str = "tooltip-container";
pub const TOOLTIP_DESTRUCTIVE: &str = "tooltip-destructive";
pub const INPUT: &str = "input";
pub const INPUT_ERROR: &str = "error";

pub const BUTTON: &str = "button";
pub const BUTTON_PRIMARY: &str = "button-primary";
pub const BUTTON_CLEAR: &str = "button-clear";
pub const ICON: &str = "icon";

pub const POPOVER: &str = "popover";
pub const DIALOG_CONTAINER: &str = "dialog-container";
pub const SURFACE: &str = "surface";

pub const TAG_PICKER: &str = "TagPicker row gap-1";
pub const TAG_PICKER_TAG: &str = "TagPicker__tag vert-center row gap-0 pad-0";
pub const TAG_PICKER_ADD: &str = "TagPicker__add button";
