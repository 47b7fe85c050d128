//! Core Entity Trait
//!
//! Every domain entity has a unique id.
//! Stores look entities up and replace them by this id.

pub type TeamId = u64;
pub type TaskId = u64;
pub type UserId = u64;
/// Team-scoped identity of a user; the same user has a different member id in every team
pub type MemberId = u64;

/// Core trait for all domain entities
pub trait Entity: Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}
