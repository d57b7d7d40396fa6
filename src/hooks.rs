use gloo_timers::callback::Interval;
use yew::prelude::*;

/// Runs `on_tick` every `period_ms` while `active` is true.
///
/// The `Interval` lives inside the effect, so at most one exists at a time.
/// Its destructor runs when `active` flips or the component unmounts, and
/// dropping the handle cancels the browser timer.
#[hook]
pub fn use_ticker(active: bool, period_ms: u32, on_tick: Callback<()>) {
    use_effect_with((active, period_ms), move |&(active, period_ms)| {
        let interval = active.then(|| {
            log::debug!("Ticker armed every {} ms", period_ms);
            Interval::new(period_ms, move || on_tick.emit(()))
        });
        move || {
            if let Some(interval) = interval {
                log::debug!("Ticker released");
                drop(interval);
            }
        }
    });
}
