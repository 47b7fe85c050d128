//! REST Data Access
//!
//! One async method per backend call, organized by resource.
//! Every call checks the status, decodes the body and maps it to domain entities.

mod team;
mod task;
mod membership;
mod user;

use log::{debug, warn};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};

/// HTTP client bound to one backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { http: reqwest::Client::new(), config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn request(&self, method: Method, resource: &str) -> RequestBuilder {
        let url = self.config.endpoint(resource);
        debug!("[API] {} {}", method, url);
        self.http.request(method, url)
    }

    /// Send the request and return the body of a 2xx response
    async fn execute(&self, request: RequestBuilder) -> ApiResult<String> {
        let response = request.send().await.map_err(|e| {
            warn!("[API] transport failure: {}", e);
            ApiError::from(e)
        })?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            warn!("[API] request failed with {}: {}", status.as_u16(), body);
            return Err(ApiError::Http { status: status.as_u16(), body });
        }
        Ok(body)
    }

    async fn fetch_one<D, T>(&self, request: RequestBuilder) -> ApiResult<T>
    where
        D: DeserializeOwned,
        T: TryFrom<D, Error = ApiError>,
    {
        let body = self.execute(request).await?;
        decode_one(&body)
    }

    async fn fetch_list<D, T>(&self, request: RequestBuilder) -> ApiResult<Vec<T>>
    where
        D: DeserializeOwned,
        T: TryFrom<D, Error = ApiError>,
    {
        let body = self.execute(request).await?;
        decode_list(&body)
    }

    /// For calls answered with 204 or a body the client does not need
    async fn fetch_empty(&self, request: RequestBuilder) -> ApiResult<()> {
        self.execute(request).await.map(|_| ())
    }
}

pub(crate) fn decode_one<D, T>(body: &str) -> ApiResult<T>
where
    D: DeserializeOwned,
    T: TryFrom<D, Error = ApiError>,
{
    let dto: D = serde_json::from_str(body)?;
    T::try_from(dto)
}

pub(crate) fn decode_list<D, T>(body: &str) -> ApiResult<Vec<T>>
where
    D: DeserializeOwned,
    T: TryFrom<D, Error = ApiError>,
{
    let dtos: Vec<D> = serde_json::from_str(body)?;
    dtos.into_iter().map(T::try_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::{TaskDto, TeamDto};
    use crate::model::{Task, Team};

    #[test]
    fn test_decode_list_maps_every_entry() {
        let body = r#"[
            {"id": 1, "name": "A", "created_at": "2024-01-01T00:00:00Z", "created_by_user": 1, "members": []},
            {"id": 2, "name": "B", "created_at": "2024-01-02T00:00:00Z", "created_by_user": 1, "members": []}
        ]"#;
        let teams: Vec<Team> = decode_list::<TeamDto, Team>(body).unwrap();
        assert_eq!(teams.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_decode_one_malformed_json() {
        let result = decode_one::<TaskDto, Task>("<html>502</html>");
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_decode_list_fails_on_bad_entry() {
        let body = r#"[{"id": 1, "team_id": 1, "title": "t", "points": -2, "status": "open",
            "created_by_user": 1, "created_at": "2024-01-01T00:00:00Z", "updated_at": "2024-01-01T00:00:00Z"}]"#;
        assert!(matches!(decode_list::<TaskDto, Task>(body), Err(ApiError::Decode(_))));
    }
}
