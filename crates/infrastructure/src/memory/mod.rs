//! In-memory persistence backend.
//!
//! A [`MemoryStore`] holds the committed state of all four aggregates behind
//! an `RwLock`. Each unit of work operates on a private snapshot of that
//! state: reads and writes go to the snapshot, `commit` publishes it back to
//! the store, and dropping the unit of work discards it. Partial writes are
//! therefore never observable from other scopes.
//!
//! Isolation is snapshot-level with last-writer-wins between concurrently
//! open units of work; the intended deployment model is one operation per
//! transaction. Cascade deletes (user profile -> workspaces -> repos and
//! vaults) are implemented here, as the persistence-layer contract the
//! services rely on.

mod repositories;
mod store;
mod unit_of_work;

pub(crate) use store::StoreState;

pub use store::MemoryStore;
pub use unit_of_work::MemoryUnitOfWork;
