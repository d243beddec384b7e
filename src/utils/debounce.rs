use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;

/// Listens for window resizes and runs `callback` once the window has been
/// still for `delay_ms`.
///
/// Returns `None` outside a browser window. The listener is removed when the
/// returned value is dropped, so keep it alive for the component's lifetime:
///
/// ```rust,ignore
/// use_effect_with(container_ref.clone(), move |_| {
///     let listener = debounced_resize_listener(150, move || redraw());
///     move || drop(listener)
/// });
/// ```
pub fn debounced_resize_listener<F>(delay_ms: u32, callback: F) -> Option<EventListener>
where
    F: Fn() + 'static,
{
    let window = web_sys::window()?;
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let callback = Rc::new(callback);

    Some(EventListener::new(&window, "resize", move |_| {
        // Dropping a Timeout cancels it
        pending.borrow_mut().take();

        let cb = callback.clone();
        *pending.borrow_mut() = Some(Timeout::new(delay_ms, move || cb()));
    }))
}
