use leptos::logging::log;
use std::panic;

/// Installs `console_error_panic_hook` and adds a hint when the panic comes
/// from touching a disposed reactive owner, e.g. a feed response landing
/// after its screen was left.
pub fn set_custom_panic_hook() {
    panic::set_hook(Box::new(|panic_info| {
        console_error_panic_hook::hook(panic_info);

        let message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.as_str()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s
        } else {
            "Unknown panic"
        };

        if message.contains("OwnerDisposed") || message.contains("disposed") {
            log!("[PANIC] A signal was used after its component was unmounted.");
            log!("[PANIC] Async work (such as the feed request) must check Liveness before updating state.");
        }
    }));
}

/// Call once from the browser entry point.
pub fn init() {
    log!("[PANIC_HOOK] Setting up custom panic hook");
    set_custom_panic_hook();
}
