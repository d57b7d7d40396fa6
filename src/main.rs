//! Main module for the Race Timer application using Yew.
//! Owns the session reducer and wires the ticker and view components to it.

use race_timer::config::{APP_TITLE, TICK_PERIOD_MS, TICK_STEP_MS};
use race_timer::{Action, RaceSession};
use std::rc::Rc;
use yew::prelude::*;

mod components;
mod hooks;

use components::{LeaderboardPanel, PresetSelect, StopwatchPanel};
use hooks::use_ticker;

// ──────────────────────────────────────────────────────────────────────────────
// Session reducer

/// Reducer state: the one long-lived session of the page.
#[derive(Default, PartialEq)]
struct SessionState {
    session: RaceSession,
}

impl Reducible for SessionState {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Action) -> Rc<Self> {
        if matches!(action, Action::Tick(_)) && !self.session.is_running() {
            return self;
        }
        // Cheap: the leaderboard is shared until this action edits it.
        let mut session = self.session.clone();
        if !session.apply(action) {
            // Nothing changed; skip the re-render.
            return self;
        }
        Rc::new(SessionState { session })
    }
}

// ──────────────────────────────────────────────────────────────────────────────

/// Primary application component.
#[function_component(Main)]
fn main_component() -> Html {
    let state = use_reducer(SessionState::default);
    let session = &state.session;
    // State to control settings visibility
    let settings_visible = use_state(|| false);

    let on_action = {
        let dispatcher = state.dispatcher();
        Callback::from(move |action: Action| dispatcher.dispatch(action))
    };

    // One interval while running, released as soon as the clock stops
    {
        let dispatcher = state.dispatcher();
        use_ticker(
            session.is_running(),
            TICK_PERIOD_MS,
            Callback::from(move |_| dispatcher.dispatch(Action::Tick(TICK_STEP_MS))),
        );
    }

    html! {
        <div class="container">
            <header class="app-header">
                <h1>{ APP_TITLE }</h1>
            </header>

            <div class="layout">
                <section class="stopwatch-column">
                    <StopwatchPanel
                        elapsed_label={session.elapsed_label()}
                        display_points={session.display_points()}
                        double_points={session.double_points()}
                        is_running={session.is_running()}
                        can_commit={session.can_commit()}
                        on_action={on_action.clone()}
                    />

                    // Settings section (collapsible)
                    <div class="settings-section">
                        <button class="settings-toggle"
                            aria-expanded={(*settings_visible).to_string()}
                            onclick={
                                let settings_visible = settings_visible.clone();
                                Callback::from(move |_| {
                                    settings_visible.set(!*settings_visible);
                                })
                            }
                        >
                            <span class="settings-title">{ "Settings" }</span>
                            if !*settings_visible {
                                <span class="settings-summary">{ format!("Points: {}", session.preset()) }</span>
                            }
                        </button>

                        if *settings_visible {
                            <div class="settings-content">
                                <PresetSelect preset={session.preset()} on_action={on_action.clone()} />
                            </div>
                        }
                    </div>
                </section>

                <section class="leaderboard-column">
                    <LeaderboardPanel
                        leaderboard={session.shared_leaderboard()}
                        on_action={on_action}
                    />
                </section>
            </div>
        </div>
    }
}

/// Entry point: installs logging and the panic hook, then renders the app.
fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Starting race timer");
    yew::Renderer::<Main>::new().render();
}
