use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Quiet period before a search value is considered settled. Tuned for
/// human typing cadence on a search box.
pub const DEFAULT_DEBOUNCE_MS: u32 = 350;

/// Mirrors `source` into the returned signal once the value has been
/// stable for `delay_ms`.
///
/// Every new input value restarts the timer; only the most recent value
/// is ever emitted, intermediate values are never queued. Dropping the
/// pending `Timeout` cancels the underlying browser timer, which is what
/// models the restart.
pub fn use_debounced(source: Signal<String>, delay_ms: u32) -> ReadSignal<String> {
    let (debounced, set_debounced) = signal(source.get_untracked());
    let pending = StoredValue::new_local(None::<Timeout>);

    Effect::new(move |_| {
        let value = source.get();
        if value == debounced.get_untracked() {
            // Input returned to the already-settled value: a timer armed
            // for a stale value must not fire.
            pending.set_value(None);
            return;
        }
        let timeout = Timeout::new(delay_ms, move || {
            pending.set_value(None);
            set_debounced.set(value);
        });
        pending.set_value(Some(timeout));
    });

    debounced
}
