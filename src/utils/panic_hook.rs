use leptos::logging::log;
use std::panic;

/// Chains a hook after the current one that explains reactive-owner
/// disposal panics, which here usually mean a debounced search or a
/// pending fetch outlived its page.
pub fn set_custom_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        original_hook(panic_info);

        let message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else {
            "Unknown panic".to_string()
        };

        if message.contains("OwnerDisposed") || message.contains("disposed") {
            log!("[PANIC] A signal was used after its owner was disposed. Check:");
            log!("[PANIC] 1. Search callbacks that fire after the home page unmounted");
            log!("[PANIC] 2. Effects on the item page running after navigation");
            log!("[PANIC] Deferred work should go through utils::leptos_owner::with_owner_safe");
        }
        if let Some(location) = panic_info.location() {
            log!("[PANIC] at {}:{}", location.file(), location.line());
        }
    }));
}

/// Call once at startup, after `console_error_panic_hook::set_once`.
pub fn init() {
    log!("[PANIC_HOOK] Setting up custom panic hook");
    set_custom_panic_hook();
}
