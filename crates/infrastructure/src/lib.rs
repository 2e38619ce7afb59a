//! Infrastructure layer for Symphony
//!
//! This crate provides concrete implementations of the domain's persistence
//! ports (the four repositories and the unit of work). The repository
//! pattern keeps the domain free of storage assumptions, so backends can be
//! swapped without touching the services.
//!
//! Currently one backend is provided:
//!
//! - `memory` - an in-memory store with snapshot-based transactions,
//!   suitable for tests, demos, and embedding.
//!
//! ## Usage
//!
//! ```rust
//! use symphony_infrastructure::MemoryStore;
//! use symphony_domain::unit_of_work::UnitOfWorkProvider;
//!
//! # async fn demo() -> symphony_domain::DomainResult<()> {
//! let store = MemoryStore::new();
//! let uow = store.begin().await?;
//! // ... work through uow.user_profiles(), uow.workspaces(), ...
//! uow.commit().await?;
//! # Ok(())
//! # }
//! ```

pub mod memory;

pub use memory::{MemoryStore, MemoryUnitOfWork};
