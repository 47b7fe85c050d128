//! API Configuration
//!
//! Where the REST backend lives.

/// Path of the REST API below the site origin
pub const DEFAULT_API_PATH: &str = "/api/v1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Absolute base url, without trailing slash
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self { base_url: base_url.trim_end_matches('/').to_string() }
    }

    /// API served by the same origin as the page (`https://host` -> `https://host/api/v1`)
    pub fn from_origin(origin: &str) -> Self {
        Self::new(format!("{}{}", origin.trim_end_matches('/'), DEFAULT_API_PATH))
    }

    /// Full url of a resource such as `tasks` or `tasks/status`
    pub fn endpoint(&self, resource: &str) -> String {
        format!("{}/{}", self.base_url, resource.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_origin_appends_api_path() {
        let config = ApiConfig::from_origin("https://coopera.app/");
        assert_eq!(config.base_url, "https://coopera.app/api/v1");
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let config = ApiConfig::new("http://localhost:8000/api/v1/");
        assert_eq!(config.endpoint("tasks/status"), "http://localhost:8000/api/v1/tasks/status");
        assert_eq!(config.endpoint("/teams"), "http://localhost:8000/api/v1/teams");
    }
}
