//! Statistics Panel Component
//!
//! Completion numbers across every team of the current user,
//! overall and for the tasks assigned to them.

use leptos::prelude::*;

use coopera_core::model::UserTeam;
use coopera_core::stats::{format_percent, StatusBreakdown, TeamStatistics};
use coopera_core::{Route, UserStatistics};

use crate::hooks::use_all_tasks;
use crate::store::{store_member_index, use_app_store, AppStateStoreFields};

/// Four counters for one task set
#[component]
fn BreakdownCard(title: &'static str, breakdown: StatusBreakdown, completion: f64, average: f64) -> impl IntoView {
    view! {
        <div class="stats-card">
            <h2>{title}</h2>
            <dl class="stats-grid">
                <dt>"Total"</dt><dd>{breakdown.total}</dd>
                <dt>"Open"</dt><dd>{breakdown.open}</dd>
                <dt>"In progress"</dt><dd>{breakdown.in_progress}</dd>
                <dt>"Completed"</dt><dd>{breakdown.completed}</dd>
                <dt>"Completion"</dt><dd>{format_percent(completion)}</dd>
                <dt>"Avg. points"</dt><dd>{format!("{:.1}", average)}</dd>
            </dl>
        </div>
    }
}

#[component]
fn TeamStatsRow(stats: TeamStatistics) -> impl IntoView {
    let board = Route::Board(stats.team_id);
    view! {
        <tr>
            <td><a href=board.path()>{stats.team_name}</a></td>
            <td>{stats.role.as_str()}</td>
            <td>{format!("{}/{}", stats.completed_tasks, stats.total_tasks)}</td>
            <td>{format_percent(stats.completion_rate)}</td>
            <td>{format!("{}/{}", stats.my_completed_tasks, stats.my_tasks)}</td>
            <td>{format_percent(stats.my_completion_rate)}</td>
        </tr>
    }
}

#[component]
pub fn StatsPanel() -> impl IntoView {
    let store = use_app_store();
    let (tasks, state) = use_all_tasks();

    let stats = Memo::new(move |_| {
        let index = store_member_index(&store);
        let username = store.user().with(|u| u.as_ref().map(|u| u.username.clone())).unwrap_or_default();
        let teams: Vec<UserTeam> = store.teams().with(|teams| {
            teams
                .iter()
                .map(|team| UserTeam {
                    id: team.id,
                    name: team.name.clone(),
                    role: team.role_of(&username).unwrap_or_default(),
                })
                .collect()
        });
        tasks.with(|all| {
            let assigned = index.assigned_tasks(all);
            UserStatistics::compute(all, &assigned, &teams)
        })
    });

    view! {
        <div class="stats-page">
            <header class="stats-header">
                <h1>"Statistics"</h1>
                {move || state.loading.get().then(|| view! { <span class="loading">"Loading..."</span> })}
            </header>

            {move || state.error.get().map(|err| view! {
                <div class="inline-error">{format!("Could not load tasks: {}", err)}</div>
            })}

            {move || {
                let s = stats.get();
                view! {
                    <div class="stats-summary">
                        <BreakdownCard
                            title="All tasks"
                            breakdown=s.overall
                            completion=s.completion_rate
                            average=s.average_points
                        />
                        <BreakdownCard
                            title="My tasks"
                            breakdown=s.personal
                            completion=s.personal_completion_rate
                            average=s.personal_average_points
                        />
                        <div class="stats-card efficiency">
                            <h2>"Efficiency"</h2>
                            <span class="stats-big">{format_percent(s.efficiency)}</span>
                            <span class="stats-hint">"Share of all completed tasks that were yours"</span>
                        </div>
                    </div>
                }
            }}

            <table class="stats-teams">
                <thead>
                    <tr>
                        <th>"Team"</th>
                        <th>"Role"</th>
                        <th>"Completed"</th>
                        <th>"Rate"</th>
                        <th>"Mine"</th>
                        <th>"My rate"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || stats.get().per_team
                        key=|t| (t.team_id, t.total_tasks, t.completed_tasks, t.my_tasks, t.my_completed_tasks, t.role)
                        children=|t| view! { <TeamStatsRow stats=t /> }
                    />
                </tbody>
            </table>
        </div>
    }
}
