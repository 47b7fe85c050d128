//! Team Calls

use log::info;
use reqwest::Method;

use super::ApiClient;
use crate::dto::{CreateTeamRequest, TeamDto, UpdateTeamRequest};
use crate::error::ApiResult;
use crate::model::{Team, TeamId, UserId};

impl ApiClient {
    /// Teams the user belongs to, with their member lists
    pub async fn list_teams(&self, user_id: UserId) -> ApiResult<Vec<Team>> {
        let request = self.request(Method::GET, "teams").query(&[("user_id", user_id)]);
        self.fetch_list::<TeamDto, Team>(request).await
    }

    pub async fn get_team(&self, team_id: TeamId) -> ApiResult<Team> {
        let request = self.request(Method::GET, "teams").query(&[("team_id", team_id)]);
        self.fetch_one::<TeamDto, Team>(request).await
    }

    pub async fn create_team(&self, body: &CreateTeamRequest) -> ApiResult<Team> {
        let request = self.request(Method::POST, "teams").json(body);
        let team = self.fetch_one::<TeamDto, Team>(request).await?;
        info!("[API] created team {} ({})", team.id, team.name);
        Ok(team)
    }

    pub async fn update_team(&self, body: &UpdateTeamRequest) -> ApiResult<Team> {
        let request = self.request(Method::PATCH, "teams").json(body);
        self.fetch_one::<TeamDto, Team>(request).await
    }

    pub async fn delete_team(&self, team_id: TeamId, current_user_id: UserId) -> ApiResult<()> {
        let request = self
            .request(Method::DELETE, "teams")
            .query(&[("team_id", team_id), ("current_user_id", current_user_id)]);
        self.fetch_empty(request).await?;
        info!("[API] deleted team {}", team_id);
        Ok(())
    }
}
