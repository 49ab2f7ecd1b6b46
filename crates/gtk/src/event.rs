use zoon::{Closure, JsCast, UnwrapThrowExt};

const LOG_DROPS: bool = cfg!(feature = "debug-logging");

/// A DOM event listener that stays registered for as long as this value lives.
///
/// Dropping it unregisters the callback from its target and frees the closure.
/// Nodes and managers keep their listeners in fields, so a listener never
/// outlives the thing it was installed for.
pub struct EventListener {
    target: web_sys::EventTarget,
    event_type: &'static str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl EventListener {
    pub fn new(
        target: &web_sys::EventTarget,
        event_type: &'static str,
        callback: impl FnMut(web_sys::Event) + 'static,
    ) -> Self {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(callback);
        target
            .add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())
            .unwrap_throw();
        Self {
            target: target.clone(),
            event_type,
            closure,
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        if LOG_DROPS {
            zoon::println!("[EventListener] dropped '{}'", self.event_type);
        }
        // Removing a listener that is not registered is a no-op in the DOM.
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event_type, self.closure.as_ref().unchecked_ref());
    }
}
