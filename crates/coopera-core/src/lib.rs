//! Coopera client core
//!
//! Everything below the view layer: domain entities, wire schemas and their
//! mapping, REST data access, the local task board with optimistic moves,
//! statistics, permissions and routing rules. No DOM access, so it builds and
//! tests natively as well as on wasm32.

pub mod error;
pub mod config;
pub mod model;
pub mod dto;
pub mod api;
pub mod board;
pub mod stats;
pub mod permissions;
pub mod fetch_guard;
pub mod route;

pub use error::{ApiError, ApiResult};
pub use config::ApiConfig;
pub use api::ApiClient;
pub use board::{move_task, BoardHandle, MoveOutcome, TaskBoard, TaskStatusGateway};
pub use fetch_guard::{FetchGuard, FetchTicket};
pub use route::{guard, Route};
pub use stats::{MemberIndex, UserStatistics};
