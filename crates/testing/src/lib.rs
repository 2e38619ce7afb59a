//! Testing utilities for the Symphony management core.
//!
//! This crate provides:
//! - Test fixtures for all domain entities with randomized, realistic data
//! - Builder patterns for precise test data construction
//!
//! # Examples
//!
//! ```
//! use symphony_testing::{builders::*, fixtures::*};
//! use symphony_domain::WorkspaceType;
//!
//! // Create a random test profile
//! let profile = create_test_user_profile();
//!
//! // Build a workspace with exact fields
//! let workspace = WorkspaceBuilder::new()
//!     .with_user_profile_id(profile.id)
//!     .with_name("Research Lab")
//!     .with_workspace_type(WorkspaceType::Research)
//!     .build();
//! ```

pub mod builders;
pub mod fixtures;
