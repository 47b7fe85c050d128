//! Team and member wire shapes.

use serde::{Deserialize, Serialize};

use super::{format_timestamp, parse_role, parse_timestamp};
use crate::error::ApiError;
use crate::model::{Member, MemberId, Team, TeamId, UserId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberDto {
    pub member_id: MemberId,
    pub username: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamDto {
    pub id: TeamId,
    pub name: String,
    pub created_at: String,
    pub created_by_user: UserId,
    #[serde(default)]
    pub members: Vec<MemberDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateTeamRequest {
    pub name: String,
    pub created_by_user: UserId,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateTeamRequest {
    pub team_id: TeamId,
    pub current_user_id: UserId,
    pub name: String,
}

impl From<&Member> for MemberDto {
    fn from(member: &Member) -> Self {
        Self {
            member_id: member.member_id,
            username: member.username.clone(),
            role: member.role.as_str().to_string(),
        }
    }
}

impl TryFrom<MemberDto> for Member {
    type Error = ApiError;

    fn try_from(dto: MemberDto) -> Result<Self, Self::Error> {
        Ok(Self {
            member_id: dto.member_id,
            role: parse_role("member.role", &dto.role)?,
            username: dto.username,
        })
    }
}

impl From<&Team> for TeamDto {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id,
            name: team.name.clone(),
            created_at: format_timestamp(&team.created_at),
            created_by_user: team.created_by_user,
            members: team.members.iter().map(MemberDto::from).collect(),
        }
    }
}

impl TryFrom<TeamDto> for Team {
    type Error = ApiError;

    fn try_from(dto: TeamDto) -> Result<Self, Self::Error> {
        let mut members: Vec<Member> = Vec::with_capacity(dto.members.len());
        for member in dto.members {
            let member = Member::try_from(member)?;
            // Member ids are unique within a team; keep the first occurrence
            if !members.iter().any(|m| m.member_id == member.member_id) {
                members.push(member);
            }
        }
        Ok(Self {
            id: dto.id,
            created_at: parse_timestamp("team.created_at", &dto.created_at)?,
            name: dto.name,
            created_by_user: dto.created_by_user,
            members,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MemberRole;
    use chrono::{TimeZone, Utc};

    fn sample_team() -> Team {
        Team {
            id: 3,
            name: "Platform".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 2, 10, 8, 0, 0).unwrap(),
            created_by_user: 11,
            members: vec![
                Member { member_id: 7, username: "alice".to_string(), role: MemberRole::Manager },
                Member { member_id: 9, username: "bob".to_string(), role: MemberRole::Member },
            ],
        }
    }

    #[test]
    fn test_team_round_trip() {
        let team = sample_team();
        let decoded = Team::try_from(TeamDto::from(&team)).unwrap();
        assert_eq!(decoded, team);
    }

    #[test]
    fn test_member_round_trip() {
        let member = Member { member_id: 4, username: "dana".to_string(), role: MemberRole::Manager };
        assert_eq!(Member::try_from(MemberDto::from(&member)).unwrap(), member);
    }

    #[test]
    fn test_team_decodes_snake_case_body() {
        let body = r#"{
            "id": 1,
            "name": "Ops",
            "created_at": "2024-01-01T00:00:00Z",
            "created_by_user": 5,
            "members": [{"member_id": 2, "username": "eve", "role": "manager"}]
        }"#;
        let dto: TeamDto = serde_json::from_str(body).unwrap();
        let team = Team::try_from(dto).unwrap();
        assert_eq!(team.created_by_user, 5);
        assert_eq!(team.role_of("eve"), Some(MemberRole::Manager));
    }

    #[test]
    fn test_team_missing_required_field_fails() {
        let body = r#"{"id": 1, "created_at": "2024-01-01T00:00:00Z", "created_by_user": 5}"#;
        assert!(serde_json::from_str::<TeamDto>(body).is_err());
    }

    #[test]
    fn test_unknown_role_is_decode_error() {
        let dto = MemberDto { member_id: 1, username: "x".to_string(), role: "owner".to_string() };
        assert!(matches!(Member::try_from(dto), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_duplicate_member_ids_collapse() {
        let mut dto = TeamDto::from(&sample_team());
        dto.members.push(MemberDto { member_id: 7, username: "alice".to_string(), role: "manager".to_string() });
        let team = Team::try_from(dto).unwrap();
        assert_eq!(team.members.len(), 2);
    }
}
