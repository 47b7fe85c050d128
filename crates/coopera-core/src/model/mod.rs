//! Domain Layer
//!
//! Entities as the views and the board work with them, after mapping from the wire.

mod entity;
mod team;
mod task;
mod user;
mod draft;

pub use entity::{Entity, MemberId, TaskId, TeamId, UserId};
pub use team::{Member, MemberRole, Team};
pub use task::{Column, Task, TaskStatus};
pub use user::{User, UserTeam};
pub use draft::{InviteDraft, TaskDraft, TeamDraft};
