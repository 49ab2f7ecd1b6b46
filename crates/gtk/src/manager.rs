//! Single active popover.
//!
//! The manager is the only owner of the attached popover. Opening a new one
//! always detaches the previous one first, and a single document-level
//! `pointerdown` listener dismisses the active popover when the pointer
//! lands outside its bounding box.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use zoon::JsCast;

use crate::error::DomError;
use crate::event::EventListener;
use crate::geometry::Rect;
use crate::popover::Popover;

const LOG_DEBUG: bool = cfg!(feature = "debug-logging");

/// Something the manager can attach, measure and detach.
pub trait Floating {
    /// Current bounding box in viewport coordinates.
    fn bounds(&self) -> Rect;
    fn attach(&self) -> Result<(), DomError>;
    fn detach(&self);
}

struct Slot<F> {
    active: RefCell<Option<F>>,
    dismiss_listener: RefCell<Option<EventListener>>,
}

/// Handle to the popover slot. Clones share the same slot.
pub struct PopoverManager<F = Popover> {
    slot: Rc<Slot<F>>,
}

impl<F> Clone for PopoverManager<F> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

impl<F: Floating + 'static> Default for PopoverManager<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Floating + 'static> PopoverManager<F> {
    /// An empty manager. No listener is installed until
    /// [`install_dismiss_listener`](Self::install_dismiss_listener).
    pub fn new() -> Self {
        Self {
            slot: Rc::new(Slot {
                active: RefCell::new(None),
                dismiss_listener: RefCell::new(None),
            }),
        }
    }

    /// Attaches `popover`, detaching the active one first. Never stacks.
    pub fn open(&self, popover: F) -> Result<(), DomError> {
        self.dismiss();
        popover.attach()?;
        if LOG_DEBUG {
            zoon::println!("[PopoverManager] opened popover");
        }
        *self.slot.active.borrow_mut() = Some(popover);
        Ok(())
    }

    /// Detaches the active popover. Returns whether there was one.
    pub fn dismiss(&self) -> bool {
        // Take it out first: dropping a popover may run the handler that called us.
        let previous = self.slot.active.borrow_mut().take();
        match previous {
            Some(popover) => {
                popover.detach();
                if LOG_DEBUG {
                    zoon::println!("[PopoverManager] dismissed popover");
                }
                true
            }
            None => false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.slot.active.borrow().is_some()
    }

    pub fn with_active<R>(&self, f: impl FnOnce(&F) -> R) -> Option<R> {
        self.slot.active.borrow().as_ref().map(f)
    }

    /// Dismisses the active popover if `(x, y)` is outside its bounds.
    /// Returns whether a popover was dismissed.
    pub fn handle_pointer_down(&self, x: f64, y: f64) -> bool {
        let outside = self
            .with_active(|popover| !popover.bounds().contains(x, y))
            .unwrap_or(false);
        outside && self.dismiss()
    }

    /// Installs the document-level `pointerdown` listener. Calling it again is
    /// a no-op; the listener lives as long as the last manager handle.
    pub fn install_dismiss_listener(&self) -> Result<(), DomError> {
        if self.slot.dismiss_listener.borrow().is_some() {
            return Ok(());
        }
        let document = web_sys::window()
            .ok_or(DomError::NoWindow)?
            .document()
            .ok_or(DomError::NoDocument)?;
        let slot = Rc::downgrade(&self.slot);
        let listener = EventListener::new(document.as_ref(), "pointerdown", move |event| {
            let Some(slot) = slot.upgrade() else {
                return;
            };
            let Some(event) = event.dyn_ref::<web_sys::MouseEvent>() else {
                return;
            };
            let manager = PopoverManager { slot };
            manager.handle_pointer_down(f64::from(event.client_x()), f64::from(event.client_y()));
        });
        *self.slot.dismiss_listener.borrow_mut() = Some(listener);
        Ok(())
    }

    pub fn has_dismiss_listener(&self) -> bool {
        self.slot.dismiss_listener.borrow().is_some()
    }

    pub fn downgrade(&self) -> WeakPopoverManager<F> {
        WeakPopoverManager {
            slot: Rc::downgrade(&self.slot),
        }
    }
}

/// Non-owning handle for event handlers that live inside a popover.
pub struct WeakPopoverManager<F = Popover> {
    slot: Weak<Slot<F>>,
}

impl<F> Clone for WeakPopoverManager<F> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

impl<F: Floating + 'static> WeakPopoverManager<F> {
    pub fn upgrade(&self) -> Option<PopoverManager<F>> {
        self.slot.upgrade().map(|slot| PopoverManager { slot })
    }
}
