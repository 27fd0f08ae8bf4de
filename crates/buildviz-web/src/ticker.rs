use buildviz_core::{DashboardConfig, Ticker};
use leptos::prelude::*;

/// Owns the browser interval behind a [`Ticker`]. Dropping the guard clears
/// the interval and stops the ticker, so no callback runs afterwards.
pub struct TickerGuard {
    handle: Option<IntervalHandle>,
    ticker: RwSignal<Ticker>,
}

impl TickerGuard {
    pub fn start(config: &DashboardConfig, ticker: RwSignal<Ticker>) -> Self {
        let interval = config.tick_interval();
        let handle = set_interval_with_handle(
            move || {
                ticker.try_update(|t| t.tick());
            },
            interval,
        );
        if let Err(e) = &handle {
            web_sys::console::error_2(&"failed to start ticker".into(), e);
        }
        Self {
            handle: handle.ok(),
            ticker,
        }
    }
}

impl Drop for TickerGuard {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.clear();
        }
        self.ticker.try_update_untracked(|t| t.stop());
    }
}

/// Starts driving `ticker` and ties the interval to the current owner: the
/// guard is dropped when the owner is cleaned up.
pub fn arm_ticker(config: &DashboardConfig, ticker: RwSignal<Ticker>) {
    let guard = TickerGuard::start(config, ticker);
    on_cleanup(move || drop(guard));
}

/// Arms a ticker for the current component. Returns the rotating stage index.
pub fn use_ticker(config: &DashboardConfig) -> Signal<usize> {
    let ticker = RwSignal::new(Ticker::armed(config));
    arm_ticker(config, ticker);
    Signal::derive(move || ticker.with(|t| t.stage()))
}
