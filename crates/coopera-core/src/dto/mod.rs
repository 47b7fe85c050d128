//! Wire Schemas
//!
//! One struct per request/response body, in the backend's snake_case shape,
//! plus the mapping between each schema and its domain entity.
//! Encoding is `From<&Entity>`, decoding is `TryFrom<Dto>` and fails with
//! `ApiError::Decode` when a value cannot be represented in the domain.

mod team;
mod task;
mod user;
mod membership;

pub use team::{CreateTeamRequest, MemberDto, TeamDto, UpdateTeamRequest};
pub use task::{CreateTaskRequest, TaskDto, UpdateTaskRequest, UpdateTaskStatusRequest};
pub use user::{CreateUserRequest, UserDto, UserTeamDto};
pub use membership::{CreateMembershipRequest, UpdateMembershipRequest};

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

use crate::error::{ApiError, ApiResult};
use crate::model::MemberRole;

/// Parse a wire timestamp; offset-less timestamps are read as UTC
pub(crate) fn parse_timestamp(field: &str, value: &str) -> ApiResult<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|_| ApiError::decode(format!("{field}: invalid timestamp {value:?}")))
}

pub(crate) fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

pub(crate) fn parse_role(field: &str, value: &str) -> ApiResult<MemberRole> {
    MemberRole::parse(value).ok_or_else(|| ApiError::decode(format!("{field}: unknown role {value:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_timestamp_variants() {
        let expected = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        assert_eq!(parse_timestamp("t", "2024-05-01T12:30:00Z").unwrap(), expected);
        assert_eq!(parse_timestamp("t", "2024-05-01T15:30:00+03:00").unwrap(), expected);
        assert_eq!(parse_timestamp("t", "2024-05-01T12:30:00").unwrap(), expected);
        assert_eq!(parse_timestamp("t", "2024-05-01T12:30:00.000").unwrap(), expected);
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        let err = parse_timestamp("task.created_at", "yesterday").unwrap_err();
        assert!(matches!(err, ApiError::Decode(msg) if msg.contains("task.created_at")));
    }
}
