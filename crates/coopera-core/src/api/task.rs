//! Task Calls

use async_trait::async_trait;
use log::info;
use reqwest::Method;

use super::ApiClient;
use crate::board::TaskStatusGateway;
use crate::dto::{CreateTaskRequest, TaskDto, UpdateTaskRequest, UpdateTaskStatusRequest};
use crate::error::ApiResult;
use crate::model::{Task, TaskId, TeamId, UserId};

impl ApiClient {
    pub async fn list_tasks(&self, team_id: TeamId) -> ApiResult<Vec<Task>> {
        let request = self.request(Method::GET, "tasks").query(&[("team_id", team_id)]);
        self.fetch_list::<TaskDto, Task>(request).await
    }

    pub async fn create_task(&self, body: &CreateTaskRequest) -> ApiResult<Task> {
        let request = self.request(Method::POST, "tasks").json(body);
        let task = self.fetch_one::<TaskDto, Task>(request).await?;
        info!("[API] created task {} in team {}", task.id, task.team_id);
        Ok(task)
    }

    pub async fn update_task(&self, body: &UpdateTaskRequest) -> ApiResult<Task> {
        let request = self.request(Method::PATCH, "tasks").json(body);
        self.fetch_one::<TaskDto, Task>(request).await
    }

    /// Status-only patch; the backend may answer 204
    pub async fn update_task_status(&self, body: &UpdateTaskStatusRequest) -> ApiResult<()> {
        let request = self.request(Method::PATCH, "tasks/status").json(body);
        self.fetch_empty(request).await
    }

    pub async fn delete_task(&self, task_id: TaskId, current_user_id: UserId) -> ApiResult<()> {
        let request = self
            .request(Method::DELETE, "tasks")
            .query(&[("task_id", task_id), ("current_user_id", current_user_id)]);
        self.fetch_empty(request).await?;
        info!("[API] deleted task {}", task_id);
        Ok(())
    }
}

#[async_trait(?Send)]
impl TaskStatusGateway for ApiClient {
    async fn update_status(&self, request: &UpdateTaskStatusRequest) -> ApiResult<()> {
        self.update_task_status(request).await
    }
}
