//! Pure Yew view components for the race timer.
//!
//! Components only render what they are given and report gestures back as
//! `Action`s; all state lives in the session reducer owned by `main`.

use race_timer::config::FASTEST_MARKER;
use race_timer::{Action, Leaderboard, ScoreEntry, ScoringPreset, Team};
use std::rc::Rc;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

/// CSS class carrying a team's colours.
fn team_class(team: Team) -> &'static str {
    match team {
        Team::Spartans => "team-spartans",
        Team::Ninjas => "team-ninjas",
        Team::Apaches => "team-apaches",
        Team::Vikings => "team-vikings",
        Team::Centurions => "team-centurions",
    }
}

#[derive(Properties, PartialEq)]
pub struct StopwatchPanelProps {
    pub elapsed_label: String,
    pub display_points: u32,
    pub double_points: bool,
    pub is_running: bool,
    pub can_commit: bool,
    pub on_action: Callback<Action>,
}

/// Time readout, points preview, transport buttons and team assignment.
#[function_component(StopwatchPanel)]
pub fn stopwatch_panel(props: &StopwatchPanelProps) -> Html {
    let send = |action: Action| props.on_action.reform(move |_: MouseEvent| action);

    html! {
        <div class="stopwatch-panel">
            <div class="readout">
                <div class="elapsed">{ &props.elapsed_label }</div>
                <div class="points-header">
                    <span class="points-title">{ "POINTS" }</span>
                    <button
                        class={classes!("double-toggle", props.double_points.then_some("active"))}
                        aria-pressed={props.double_points.to_string()}
                        onclick={send(Action::ToggleDouble)}
                    >
                        { "x2" }
                    </button>
                </div>
                <div class="points-value">{ props.display_points }</div>
            </div>

            <div class="transport">
                <button class="btn-primary start-pause" onclick={send(Action::ToggleRunning)}>
                    { if props.is_running { "PAUSE" } else { "START" } }
                </button>
                <button class="btn-secondary reset" title="Reset" onclick={send(Action::Reset)}>
                    { "↺" }
                </button>
            </div>

            <div class="team-buttons">
                { for Team::ALL.iter().map(|&team| html! {
                    <button
                        key={team.name()}
                        class={classes!("team-button", team_class(team))}
                        disabled={!props.can_commit}
                        onclick={send(Action::Commit(team))}
                    >
                        { format!("ADD TO {}", team.name().to_uppercase()) }
                    </button>
                }) }
            </div>

            <button
                class="btn-secondary discard"
                disabled={!props.can_commit}
                onclick={send(Action::Discard)}
            >
                { "DISCARD RESULT" }
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LeaderboardPanelProps {
    pub leaderboard: Rc<Leaderboard>,
    pub on_action: Callback<Action>,
}

#[function_component(LeaderboardPanel)]
pub fn leaderboard_panel(props: &LeaderboardPanelProps) -> Html {
    let on_reset_all = props.on_action.reform(|_: MouseEvent| Action::ResetAll);

    html! {
        <div class="leaderboard-panel">
            <div class="leaderboard-header">
                <h2>{ "LEADERBOARD" }</h2>
                <button class="btn-primary small" onclick={on_reset_all}>{ "RESET ALL" }</button>
            </div>
            <div class="team-cards">
                { for Team::ALL.iter().map(|&team| render_team_card(&props.leaderboard, team, &props.on_action)) }
            </div>
        </div>
    }
}

/// One team's name, total and entries.
fn render_team_card(board: &Leaderboard, team: Team, on_action: &Callback<Action>) -> Html {
    let entries = board.entries(team);

    html! {
        <div key={team.name()} class={classes!("team-card", team_class(team))}>
            <div class="team-card-header">
                <h3>{ team.name().to_uppercase() }</h3>
                <div class="team-total">{ board.total_for(team) }</div>
            </div>
            if !entries.is_empty() {
                <div class="team-entries">
                    { for entries.iter().map(|entry| {
                        render_entry_row(entry, team, board.is_fastest(&entry.time), on_action)
                    }) }
                </div>
            }
        </div>
    }
}

fn render_entry_row(
    entry: &ScoreEntry,
    team: Team,
    fastest: bool,
    on_action: &Callback<Action>,
) -> Html {
    let id = entry.id;
    let on_remove = on_action.reform(move |_: MouseEvent| Action::RemoveEntry(team, id));

    html! {
        <div key={id.to_string()} class="entry-row">
            <span class="entry-time">
                { &entry.time }
                if fastest {
                    <span class="fastest-marker">{ FASTEST_MARKER }</span>
                }
            </span>
            <span class="entry-actions">
                <span class="entry-points">{ format!("+{}", entry.points) }</span>
                <button class="entry-remove" title="Remove entry" onclick={on_remove}>{ "✕" }</button>
            </span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PresetSelectProps {
    pub preset: ScoringPreset,
    pub on_action: Callback<Action>,
}

/// Drop-down choosing which points table scores new results.
#[function_component(PresetSelect)]
pub fn preset_select(props: &PresetSelectProps) -> Html {
    let onchange = props.on_action.reform(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        let preset: ScoringPreset = select.value().parse().unwrap_or_default();
        Action::SetPreset(preset)
    });

    html! {
        <div class="form-group">
            <label for="preset_select">{ "Points Table:" }</label>
            <select id="preset_select" {onchange}>
                { for ScoringPreset::ALL.iter().map(|&preset| html! {
                    <option
                        value={preset.name()}
                        selected={preset == props.preset}
                    >
                        { format!("{} (0 points from {}s)", preset.name(), preset.zero_points_from_ms() / 1000) }
                    </option>
                }) }
            </select>
        </div>
    }
}
