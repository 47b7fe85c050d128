//! Membership Calls

use log::info;
use reqwest::Method;

use super::ApiClient;
use crate::dto::{CreateMembershipRequest, MemberDto, UpdateMembershipRequest};
use crate::error::ApiResult;
use crate::model::{Member, MemberId, UserId};

impl ApiClient {
    /// Invite a user into a team; returns the new membership
    pub async fn create_membership(&self, body: &CreateMembershipRequest) -> ApiResult<Member> {
        let request = self.request(Method::POST, "memberships").json(body);
        let member = self.fetch_one::<MemberDto, Member>(request).await?;
        info!("[API] {} joined team {} as {}", member.username, body.team_id, member.role.as_str());
        Ok(member)
    }

    pub async fn update_membership(&self, body: &UpdateMembershipRequest) -> ApiResult<()> {
        let request = self.request(Method::PATCH, "memberships").json(body);
        self.fetch_empty(request).await
    }

    pub async fn delete_membership(&self, member_id: MemberId, current_user_id: UserId) -> ApiResult<()> {
        let request = self
            .request(Method::DELETE, "memberships")
            .query(&[("member_id", member_id), ("current_user_id", current_user_id)]);
        self.fetch_empty(request).await
    }
}
