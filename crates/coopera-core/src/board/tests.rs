//! Board Store Tests
//!
//! Local mutations and the optimistic move flow against a scripted gateway.

use std::cell::RefCell;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use super::*;
use crate::dto::UpdateTaskStatusRequest;
use crate::model::TaskStatus;

fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, hour, 0, 0).unwrap()
}

fn make_task(id: TaskId, status: TaskStatus) -> Task {
    Task {
        id,
        team_id: 1,
        title: format!("Task {}", id),
        description: String::new(),
        points: 1,
        status,
        assigned_to_member: None,
        created_by_user: 1,
        created_at: at(8),
        updated_at: at(8),
    }
}

fn sample_board() -> TaskBoard {
    TaskBoard::new(vec![
        make_task(1, TaskStatus::Open),
        make_task(2, TaskStatus::Assigned),
        make_task(3, TaskStatus::Open),
        make_task(4, TaskStatus::Completed),
    ])
}

/// Gateway that records what the board looked like when the request went out
struct ScriptedGateway<'a> {
    board: &'a RefCell<TaskBoard>,
    fail_with: Option<ApiError>,
    calls: RefCell<Vec<(UpdateTaskStatusRequest, Option<TaskStatus>)>>,
}

impl<'a> ScriptedGateway<'a> {
    fn new(board: &'a RefCell<TaskBoard>, fail_with: Option<ApiError>) -> Self {
        Self { board, fail_with, calls: RefCell::new(Vec::new()) }
    }
}

#[async_trait(?Send)]
impl TaskStatusGateway for ScriptedGateway<'_> {
    async fn update_status(&self, request: &UpdateTaskStatusRequest) -> ApiResult<()> {
        let local_status = self.board.borrow().get(request.task_id).map(|t| t.status.clone());
        self.calls.borrow_mut().push((request.clone(), local_status));
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[test]
fn test_columns_are_filtered_views() {
    let board = sample_board();
    let open: Vec<TaskId> = board.column(Column::Open).iter().map(|t| t.id).collect();
    assert_eq!(open, vec![1, 3]);
    assert!(board.column(Column::InReview).is_empty());
    assert_eq!(
        board.column_counts(),
        [(Column::Open, 2), (Column::Assigned, 1), (Column::InReview, 0), (Column::Completed, 1)]
    );
}

#[test]
fn test_tasks_outside_columns_are_not_shown() {
    let board = TaskBoard::new(vec![make_task(1, TaskStatus::InProgress), make_task(2, TaskStatus::parse("blocked"))]);
    assert!(Column::ALL.iter().all(|c| board.column(*c).is_empty()));
    assert_eq!(board.len(), 2);
}

#[test]
fn test_remove_keeps_order_of_others() {
    let mut board = sample_board();
    let removed = board.remove(2).expect("task 2 should exist");
    assert_eq!(removed.id, 2);
    let ids: Vec<TaskId> = board.tasks().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 3, 4]);
    assert!(board.remove(2).is_none());
}

#[test]
fn test_add_and_update() {
    let mut board = sample_board();
    board.add(make_task(5, TaskStatus::Open));
    assert_eq!(board.tasks().last().map(|t| t.id), Some(5));

    let mut edited = make_task(3, TaskStatus::Open);
    edited.title = "Renamed".to_string();
    assert!(board.update(edited));
    assert_eq!(board.tasks()[2].title, "Renamed");
    assert!(!board.update(make_task(99, TaskStatus::Open)));

    board.add(make_task(1, TaskStatus::Completed));
    assert_eq!(board.len(), 5);
    assert_eq!(board.tasks()[0].status, TaskStatus::Completed);
}

#[test]
fn test_replace_all() {
    let mut board = sample_board();
    board.replace_all(vec![make_task(9, TaskStatus::Open)]);
    assert_eq!(board.len(), 1);
    assert!(board.get(1).is_none());
}

#[test]
fn test_same_column_move_is_noop() {
    let mut board = sample_board();
    let before = board.clone();
    assert_eq!(board.begin_move(1, Column::Open, Column::Open, at(9)), Ok(None));
    assert_eq!(board, before);
}

#[test]
fn test_move_of_unknown_task_is_rejected() {
    let mut board = sample_board();
    assert!(matches!(board.begin_move(42, Column::Open, Column::Assigned, at(9)), Err(ApiError::Validation(_))));
}

#[test]
fn test_rollback_skipped_after_newer_move() {
    let mut board = sample_board();
    let first = board.begin_move(1, Column::Open, Column::Assigned, at(9)).unwrap().unwrap();
    let _second = board.begin_move(1, Column::Assigned, Column::Completed, at(10)).unwrap().unwrap();

    assert!(!board.rollback(&first));
    assert_eq!(board.get(1).unwrap().status, TaskStatus::Completed);
}

#[tokio::test]
async fn test_move_applies_before_request() {
    let board = RefCell::new(sample_board());
    let gateway = ScriptedGateway::new(&board, None);

    let outcome = move_task(&board, &gateway, 77, 1, Column::Open, Column::InReview, at(9)).await;
    assert_eq!(outcome, Ok(MoveOutcome::Moved));

    let calls = gateway.calls.borrow();
    assert_eq!(calls.len(), 1);
    let (request, status_when_sent) = &calls[0];
    assert_eq!(request.task_id, 1);
    assert_eq!(request.current_user_id, 77);
    assert_eq!(request.status, "in_review");
    assert_eq!(status_when_sent, &Some(TaskStatus::InReview));

    let task = board.borrow().get(1).cloned().unwrap();
    assert_eq!(task.status, TaskStatus::InReview);
    assert_eq!(task.updated_at, at(9));
}

#[tokio::test]
async fn test_failed_move_rolls_back() {
    let board = RefCell::new(sample_board());
    let error = ApiError::Http { status: 500, body: "boom".to_string() };
    let gateway = ScriptedGateway::new(&board, Some(error.clone()));

    let outcome = move_task(&board, &gateway, 77, 2, Column::Assigned, Column::Completed, at(9)).await;
    assert_eq!(outcome, Err(error));
    assert_eq!(gateway.calls.borrow()[0].1, Some(TaskStatus::Completed));

    let task = board.borrow().get(2).cloned().unwrap();
    assert_eq!(task.status, TaskStatus::Assigned);
    assert_eq!(task.updated_at, at(8));
}

#[tokio::test]
async fn test_same_column_move_sends_nothing() {
    let board = RefCell::new(sample_board());
    let gateway = ScriptedGateway::new(&board, None);

    let outcome = move_task(&board, &gateway, 77, 4, Column::Completed, Column::Completed, at(9)).await;
    assert_eq!(outcome, Ok(MoveOutcome::Unchanged));
    assert!(gateway.calls.borrow().is_empty());
    assert_eq!(*board.borrow(), sample_board());
}
