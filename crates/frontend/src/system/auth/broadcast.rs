//! Cross-tab session invalidation.
//!
//! Logging out writes a marker key to `localStorage`; the browser fires a
//! `storage` event in every *other* tab of the same origin, where the
//! listener clears that tab's session state. The tab that initiated the
//! logout never receives the event, which is fine: it already cleared its
//! own state directly.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::context::Session;
use super::storage;

const LOGOUT_MARKER_KEY: &str = "session_logout_marker";

/// Notify the other tabs that this session ended.
pub fn announce_logout() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Ok(Some(local)) = window.local_storage() {
        // The value only has to differ from the previous one for the
        // storage event to fire.
        let marker = uuid::Uuid::new_v4().to_string();
        let _ = local.set_item(LOGOUT_MARKER_KEY, &marker);
    }
}

/// Install the `storage` listener that tears this tab's session down when
/// another tab logs out. The listener lives for the whole application, so
/// the closure is intentionally leaked.
pub fn listen_for_remote_logout(set_session: WriteSignal<Session>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::<dyn FnMut(web_sys::StorageEvent)>::new(
        move |ev: web_sys::StorageEvent| {
            if ev.key().as_deref() == Some(LOGOUT_MARKER_KEY) {
                storage::clear_tokens();
                set_session.set(Session::default());
                log::info!("Session cleared by logout in another tab");
            }
        },
    );
    let _ = window
        .add_event_listener_with_callback("storage", closure.as_ref().unchecked_ref());
    closure.forget();
}
