//! User Calls

use reqwest::Method;

use super::ApiClient;
use crate::dto::{CreateUserRequest, UserDto};
use crate::error::ApiResult;
use crate::model::{User, UserId};

impl ApiClient {
    pub async fn get_user(&self, user_id: UserId) -> ApiResult<User> {
        let request = self.request(Method::GET, "users").query(&[("user_id", user_id)]);
        self.fetch_one::<UserDto, User>(request).await
    }

    /// Look a user up by Telegram username; 404 when unknown
    pub async fn find_user_by_username(&self, username: &str) -> ApiResult<User> {
        let request = self.request(Method::GET, "users").query(&[("username", username)]);
        self.fetch_one::<UserDto, User>(request).await
    }

    pub async fn create_user(&self, body: &CreateUserRequest) -> ApiResult<User> {
        let request = self.request(Method::POST, "users").json(body);
        self.fetch_one::<UserDto, User>(request).await
    }
}
