//! Route Table
//!
//! Hash-based client routes and the session guard in front of them.

use crate::model::TeamId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Teams,
    Team(TeamId),
    Board(TeamId),
    Stats,
    NotFound,
}

impl Route {
    /// Parse a location hash such as `#/teams/3/board`
    pub fn parse(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_matches('/');
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Teams,
            ["login"] => Route::Login,
            ["teams"] => Route::Teams,
            ["stats"] => Route::Stats,
            ["teams", id] => id.parse().map(Route::Team).unwrap_or(Route::NotFound),
            ["teams", id, "board"] => id.parse().map(Route::Board).unwrap_or(Route::NotFound),
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Login => "#/login".to_string(),
            Route::Teams => "#/teams".to_string(),
            Route::Team(id) => format!("#/teams/{}", id),
            Route::Board(id) => format!("#/teams/{}/board", id),
            Route::Stats => "#/stats".to_string(),
            Route::NotFound => "#/404".to_string(),
        }
    }

    pub fn requires_session(&self) -> bool {
        !matches!(self, Route::Login | Route::NotFound)
    }
}

/// Where the user actually lands for `route`
pub fn guard(route: Route, has_session: bool) -> Route {
    match route {
        Route::Login if has_session => Route::Teams,
        r if r.requires_session() && !has_session => Route::Login,
        r => r,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_paths() {
        assert_eq!(Route::parse(""), Route::Teams);
        assert_eq!(Route::parse("#/login"), Route::Login);
        assert_eq!(Route::parse("#/teams/3"), Route::Team(3));
        assert_eq!(Route::parse("#/teams/3/board/"), Route::Board(3));
        assert_eq!(Route::parse("#/teams/abc"), Route::NotFound);
        assert_eq!(Route::parse("#/nowhere"), Route::NotFound);
    }

    #[test]
    fn test_path_round_trips() {
        for route in [Route::Login, Route::Teams, Route::Team(4), Route::Board(9), Route::Stats] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn test_guard_redirects() {
        assert_eq!(guard(Route::Board(1), false), Route::Login);
        assert_eq!(guard(Route::Login, true), Route::Teams);
        assert_eq!(guard(Route::Stats, true), Route::Stats);
        assert_eq!(guard(Route::NotFound, false), Route::NotFound);
    }
}
