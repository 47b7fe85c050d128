//! Data Hooks
//!
//! Loading and error state around data-access calls.
//! Loads are guarded so that a response arriving after a newer load, or after
//! the owning view is gone, is dropped instead of overwriting state.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{debug, warn};

use coopera_core::model::{Task, TeamId};
use coopera_core::{ApiError, ApiResult, BoardHandle, FetchGuard, TaskBoard};

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

/// Loading/error signals shared by every hook
#[derive(Clone, Copy)]
pub struct FetchState {
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<ApiError>>,
    guard: StoredValue<FetchGuard>,
}

impl FetchState {
    pub fn new() -> Self {
        let guard = FetchGuard::new();
        let on_unmount = guard.clone();
        on_cleanup(move || on_unmount.cancel());
        Self {
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            guard: StoredValue::new(guard),
        }
    }

    /// Start a load and hand its result to `apply`, unless superseded meanwhile
    pub fn load<T, Fut, F>(&self, fut: Fut, apply: F)
    where
        T: 'static,
        Fut: Future<Output = ApiResult<T>> + 'static,
        F: FnOnce(T) + 'static,
    {
        let guard = self.guard.get_value();
        let ticket = guard.begin();
        let state = *self;
        state.loading.set(true);
        spawn_local(async move {
            let result = fut.await;
            if !guard.is_current(ticket) {
                debug!("[HOOK] dropping stale response");
                return;
            }
            state.loading.set(false);
            match result {
                Ok(value) => {
                    state.error.set(None);
                    apply(value);
                }
                Err(err) => {
                    warn!("[HOOK] load failed: {}", err);
                    state.error.set(Some(err));
                }
            }
        });
    }

    /// Await a create/update/delete call, keep its error and pass it on
    pub async fn mutate<T>(&self, fut: impl Future<Output = ApiResult<T>>) -> ApiResult<T> {
        let _ = self.loading.try_set(true);
        let result = fut.await;
        let _ = self.loading.try_set(false);
        if let Err(err) = &result {
            let _ = self.error.try_set(Some(err.clone()));
        }
        result
    }
}

/// Board signal usable by the optimistic move flow
#[derive(Clone, Copy)]
pub struct BoardSignal(pub RwSignal<TaskBoard>);

impl BoardHandle for BoardSignal {
    fn with_board<R>(&self, f: impl FnOnce(&mut TaskBoard) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}

/// Loads the logged-in user whenever the session username changes
pub fn use_current_user() -> FetchState {
    let ctx = use_app_context();
    let store = use_app_store();
    let state = FetchState::new();

    Effect::new(move |_| match ctx.username.get() {
        Some(username) => {
            let api = ctx.api();
            state.load(
                async move { api.find_user_by_username(&username).await },
                move |user| store.user().set(Some(user)),
            );
        }
        None => {
            store.user().set(None);
            store.teams().set(Vec::new());
        }
    });

    state
}

/// Teams of the current user, written into the app store
#[derive(Clone, Copy)]
pub struct TeamsHook {
    pub state: FetchState,
    trigger: RwSignal<u32>,
}

impl TeamsHook {
    pub fn refetch(&self) {
        self.trigger.update(|v| *v += 1);
    }
}

pub fn use_teams() -> TeamsHook {
    let ctx = use_app_context();
    let store = use_app_store();
    let hook = TeamsHook { state: FetchState::new(), trigger: RwSignal::new(0) };

    Effect::new(move |_| {
        let _ = hook.trigger.get();
        let Some(user_id) = store.user().with(|u| u.as_ref().map(|u| u.id)) else {
            return;
        };
        let api = ctx.api();
        hook.state.load(
            async move { api.list_teams(user_id).await },
            move |teams| store.teams().set(teams),
        );
    });

    hook
}

/// One team's tasks, held in a board owned by the calling view
#[derive(Clone, Copy)]
pub struct TasksHook {
    pub board: RwSignal<TaskBoard>,
    pub state: FetchState,
    trigger: RwSignal<u32>,
}

impl TasksHook {
    pub fn handle(&self) -> BoardSignal {
        BoardSignal(self.board)
    }

    pub fn refetch(&self) {
        self.trigger.update(|v| *v += 1);
    }
}

pub fn use_team_tasks(team_id: TeamId) -> TasksHook {
    let ctx = use_app_context();
    let hook = TasksHook {
        board: RwSignal::new(TaskBoard::default()),
        state: FetchState::new(),
        trigger: RwSignal::new(0),
    };

    Effect::new(move |_| {
        let _ = hook.trigger.get();
        let api = ctx.api();
        let board = hook.board;
        hook.state.load(
            async move { api.list_tasks(team_id).await },
            move |tasks| board.update(|b| b.replace_all(tasks)),
        );
    });

    hook
}

/// Tasks of every team the user belongs to, for statistics
pub fn use_all_tasks() -> (ReadSignal<Vec<Task>>, FetchState) {
    let ctx = use_app_context();
    let store = use_app_store();
    let (tasks, set_tasks) = signal(Vec::<Task>::new());
    let state = FetchState::new();

    Effect::new(move |_| {
        let team_ids: Vec<TeamId> = store.teams().with(|teams| teams.iter().map(|t| t.id).collect());
        let api = ctx.api();
        state.load(
            async move {
                let mut all = Vec::new();
                for team_id in team_ids {
                    all.extend(api.list_tasks(team_id).await?);
                }
                Ok(all)
            },
            move |all| set_tasks.set(all),
        );
    });

    (tasks, state)
}
