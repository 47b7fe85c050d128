//! User wire shapes.

use serde::{Deserialize, Serialize};

use super::{format_timestamp, parse_role, parse_timestamp};
use crate::error::ApiError;
use crate::model::{TeamId, User, UserId, UserTeam};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserTeamDto {
    pub id: TeamId,
    pub name: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: UserId,
    pub telegram_id: i64,
    pub username: String,
    pub created_at: String,
    #[serde(default)]
    pub teams: Vec<UserTeamDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateUserRequest {
    pub telegram_id: i64,
    pub username: String,
}

impl From<&UserTeam> for UserTeamDto {
    fn from(team: &UserTeam) -> Self {
        Self { id: team.id, name: team.name.clone(), role: team.role.as_str().to_string() }
    }
}

impl TryFrom<UserTeamDto> for UserTeam {
    type Error = ApiError;

    fn try_from(dto: UserTeamDto) -> Result<Self, Self::Error> {
        Ok(Self { id: dto.id, role: parse_role("user.teams.role", &dto.role)?, name: dto.name })
    }
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            telegram_id: user.telegram_id,
            username: user.username.clone(),
            created_at: format_timestamp(&user.created_at),
            teams: user.teams.iter().map(UserTeamDto::from).collect(),
        }
    }
}

impl TryFrom<UserDto> for User {
    type Error = ApiError;

    fn try_from(dto: UserDto) -> Result<Self, Self::Error> {
        Ok(Self {
            id: dto.id,
            telegram_id: dto.telegram_id,
            created_at: parse_timestamp("user.created_at", &dto.created_at)?,
            username: dto.username,
            teams: dto.teams.into_iter().map(UserTeam::try_from).collect::<Result<_, _>>()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MemberRole;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_user_round_trip() {
        let user = User {
            id: 5,
            telegram_id: 987654321,
            username: "alice".to_string(),
            created_at: Utc.with_ymd_and_hms(2023, 12, 24, 18, 0, 0).unwrap(),
            teams: vec![
                UserTeam { id: 1, name: "Core".to_string(), role: MemberRole::Member },
                UserTeam { id: 2, name: "Ops".to_string(), role: MemberRole::Manager },
            ],
        };
        assert_eq!(User::try_from(UserDto::from(&user)).unwrap(), user);
        assert_eq!(user.role_in(2), Some(MemberRole::Manager));
    }

    #[test]
    fn test_user_without_teams_field() {
        let body = r#"{"id": 1, "telegram_id": 77, "username": "bob", "created_at": "2024-01-01T00:00:00Z"}"#;
        let user = User::try_from(serde_json::from_str::<UserDto>(body).unwrap()).unwrap();
        assert!(user.teams.is_empty());
    }
}
