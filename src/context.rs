//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use log::{error, info};

use coopera_core::{ApiClient, ApiConfig, ApiError, Route};

use crate::session;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<ApiConfig>,
    /// Route parsed from the location hash - read
    pub route: ReadSignal<Route>,
    /// Route parsed from the location hash - write
    set_route: WriteSignal<Route>,
    /// Logged-in username from the session store - read
    pub username: ReadSignal<Option<String>>,
    /// Logged-in username from the session store - write
    set_username: WriteSignal<Option<String>>,
    /// Message shown in the notice banner - read
    pub notice: ReadSignal<Option<String>>,
    /// Message shown in the notice banner - write
    set_notice: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(config: ApiConfig, initial_route: Route) -> Self {
        let (route, set_route) = signal(initial_route);
        let (username, set_username) = signal(session::load_username());
        let (notice, set_notice) = signal(None::<String>);
        Self {
            config: StoredValue::new(config),
            route,
            set_route,
            username,
            set_username,
            notice,
            set_notice,
        }
    }

    /// Fresh client for the configured backend
    pub fn api(&self) -> ApiClient {
        ApiClient::new(self.config.get_value())
    }

    /// Change the location hash; the hashchange listener updates `route`
    pub fn navigate(&self, route: Route) {
        let path = route.path();
        match web_sys::window() {
            Some(win) if win.location().set_hash(&path).is_ok() => {}
            _ => self.set_route.set(route),
        }
    }

    /// Called by the hashchange listener
    pub fn sync_route(&self, route: Route) {
        self.set_route.set(route);
    }

    pub fn login(&self, username: &str) {
        info!("[SESSION] logged in as {}", username);
        session::store_username(username);
        self.set_username.set(Some(username.to_string()));
    }

    pub fn logout(&self) {
        session::clear();
        self.set_username.set(None);
        self.navigate(Route::Login);
    }

    /// Show an error to the user
    pub fn notify_error(&self, context: &str, err: &ApiError) {
        error!("[UI] {}: {}", context, err);
        self.set_notice.set(Some(format!("{}: {}", context, err)));
    }

    pub fn dismiss_notice(&self) {
        self.set_notice.set(None);
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

/// Backend location: `COOPERA_API_URL` at build time, else the page origin
pub fn resolve_api_config() -> ApiConfig {
    if let Some(url) = option_env!("COOPERA_API_URL") {
        return ApiConfig::new(url);
    }
    let origin = web_sys::window()
        .and_then(|win| win.location().origin().ok())
        .unwrap_or_default();
    ApiConfig::from_origin(&origin)
}
