//! Membership request bodies. Responses reuse `MemberDto`.

use serde::Serialize;

use crate::model::{MemberId, MemberRole, TeamId, UserId};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateMembershipRequest {
    pub team_id: TeamId,
    pub username: String,
    pub role: String,
    pub current_user_id: UserId,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateMembershipRequest {
    pub member_id: MemberId,
    pub role: String,
    pub current_user_id: UserId,
}

impl UpdateMembershipRequest {
    pub fn new(member_id: MemberId, role: MemberRole, current_user_id: UserId) -> Self {
        Self { member_id, role: role.as_str().to_string(), current_user_id }
    }
}
