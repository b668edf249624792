use leptos::Owner;

/// Runs `f` under `owner`, the reactive scope captured when a timer or
/// request was started. When that scope has been disposed (the page
/// unmounted meanwhile) the work is skipped and logged.
pub fn with_owner_safe<F, R>(owner: Option<Owner>, log_context: &str, f: F) -> Option<R>
where
    F: FnOnce() -> R,
{
    let Some(owner) = owner else {
        leptos::logging::log!("[OWNER] No Leptos owner captured: {}", log_context);
        return None;
    };
    match leptos::try_with_owner(owner, f) {
        Ok(value) => Some(value),
        Err(_) => {
            leptos::logging::log!("[OWNER] Owner disposed, skipping: {}", log_context);
            None
        }
    }
}
