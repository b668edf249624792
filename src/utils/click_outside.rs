use leptos::html::Div;
use leptos::*;
use wasm_bindgen::JsCast;

/// Calls `close` on every mouse press outside `container`, for dropdowns.
/// The listener is removed with the calling component.
pub fn close_on_click_outside(container: NodeRef<Div>, close: impl Fn() + 'static) {
    let handle = window_event_listener(ev::mousedown, move |ev| {
        let Some(container) = container.get_untracked() else {
            return;
        };
        let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        if !container.contains(target.as_ref()) {
            close();
        }
    });
    on_cleanup(move || handle.remove());
}
