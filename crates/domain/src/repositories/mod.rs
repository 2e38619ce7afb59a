//! Per-aggregate persistence ports.
//!
//! These traits belong to the domain and carry no storage assumptions; any
//! backend (in-memory, SQL, ...) can satisfy them. Each port offers the
//! common `get`/`save`/`delete`/`exists` operations plus aggregate-specific
//! finders. `save` has upsert semantics keyed by id; `delete` is a no-op
//! when the id is absent.
//!
//! Uniqueness and limit checks exposed here are check-then-act: they are
//! race-free only within the unit-of-work scope the caller controls. A
//! backend shared by concurrently open transactions should additionally
//! enforce unique constraints at the storage layer.

mod repo;
mod user_profile;
mod vault;
mod workspace;

pub use repo::RepoRepository;
pub use user_profile::UserProfileRepository;
pub use vault::VaultRepository;
pub use workspace::{ResourceCounts, WorkspaceRepository};
