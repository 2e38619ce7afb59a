//! Error types for the Symphony domain.
//!
//! This module defines the domain error taxonomy: validation failures,
//! missing entities, uniqueness conflicts, quota violations, and ownership
//! violations. Every error carries a machine-readable code and an HTTP
//! status mapping for the transport layer; the domain itself never performs
//! that translation.

use crate::identifiers::{RepoId, UserProfileId, VaultId, WorkspaceId};

/// Top-level domain error type
///
/// Raised synchronously from within a domain-service method. An error aborts
/// the enclosing unit of work and propagates unchanged to the caller; the
/// domain layer never swallows, downgrades, or retries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Malformed input, detected at construction or field-update time
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A referenced id does not exist
    #[error("Not found: {0}")]
    NotFound(#[from] NotFoundError),

    /// Uniqueness violation detected before any write
    #[error("Already exists: {0}")]
    AlreadyExists(#[from] AlreadyExistsError),

    /// Quota violation
    #[error("Limit exceeded: {0}")]
    LimitExceeded(#[from] LimitExceededError),

    /// Ownership violation
    #[error("Ownership error: {0}")]
    Ownership(#[from] OwnershipError),

    /// Storage backend failure
    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    /// Get the error code for this error
    ///
    /// Error codes are used by callers for programmatic error handling.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::AlreadyExists(_) => "ALREADY_EXISTS",
            Self::LimitExceeded(e) => e.error_code(),
            Self::Ownership(_) => "WORKSPACE_NOT_OWNED_BY_USER",
            Self::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::NotFound(_) => 404,
            Self::AlreadyExists(_) => 409,
            Self::LimitExceeded(_) => 422,
            Self::Ownership(_) => 403,
            Self::Storage(_) => 503,
        }
    }

    /// Check if this error is retryable
    ///
    /// Limit and conflict errors are permanent for the given input and must
    /// be corrected by the caller. Only storage failures are transient.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

/// Field validation failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Username does not satisfy the username rules
    #[error("invalid username '{0}': must be at least 3 characters, alphanumeric or underscore, starting with a letter")]
    InvalidUsername(String),

    /// Email is not of the `local@domain.tld` shape
    #[error("invalid email '{0}'")]
    InvalidEmail(String),

    /// Name is blank, too long, or contains forbidden characters
    #[error("invalid name '{0}'")]
    InvalidName(String),

    /// Path is blank or not a valid path
    #[error("invalid path '{0}'")]
    InvalidPath(String),

    /// Remote URL is not a recognized git remote form
    #[error("invalid remote URL '{0}'")]
    InvalidRemoteUrl(String),

    /// Workspace type is not one of the allowed values
    #[error("invalid workspace type '{0}'")]
    InvalidWorkspaceType(String),
}

impl ValidationError {
    /// Name of the field that failed validation
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidUsername(_) => "username",
            Self::InvalidEmail(_) => "email",
            Self::InvalidName(_) => "name",
            Self::InvalidPath(_) => "path",
            Self::InvalidRemoteUrl(_) => "remote_url",
            Self::InvalidWorkspaceType(_) => "workspace_type",
        }
    }
}

/// Entity lookup failures, one variant per aggregate
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotFoundError {
    /// User profile not found
    #[error("user profile {0} not found")]
    UserProfile(UserProfileId),

    /// No user profile with this username
    #[error("user profile with username '{0}' not found")]
    UserProfileByUsername(String),

    /// No user profile with this email
    #[error("user profile with email '{0}' not found")]
    UserProfileByEmail(String),

    /// Workspace not found
    #[error("workspace {0} not found")]
    Workspace(WorkspaceId),

    /// Repo not found
    #[error("repo {0} not found")]
    Repo(RepoId),

    /// Vault not found
    #[error("vault {0} not found")]
    Vault(VaultId),
}

/// Uniqueness conflicts, detected before any write
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlreadyExistsError {
    /// Username is already taken by another profile
    #[error("username '{0}' is already taken")]
    Username(String),

    /// Email is already registered to another profile
    #[error("email '{0}' is already registered")]
    Email(String),

    /// Workspace name already used by the same user
    #[error("workspace '{name}' already exists for user {user_id}")]
    WorkspaceName {
        /// The conflicting workspace name
        name: String,
        /// The user the name collides for
        user_id: UserProfileId,
    },

    /// Repo name already used inside the workspace
    #[error("repo '{name}' already exists in workspace {workspace_id}")]
    RepoName {
        /// The conflicting repo name
        name: String,
        /// The workspace the name collides in
        workspace_id: WorkspaceId,
    },

    /// Vault name already used inside the workspace
    #[error("vault '{name}' already exists in workspace {workspace_id}")]
    VaultName {
        /// The conflicting vault name
        name: String,
        /// The workspace the name collides in
        workspace_id: WorkspaceId,
    },
}

/// Resource-count quota violations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LimitExceededError {
    /// The user already has the maximum number of workspaces
    #[error("workspace limit reached ({limit} per user)")]
    Workspaces {
        /// The enforced limit
        limit: usize,
    },

    /// The workspace already has the maximum number of repos
    #[error("repo limit reached ({limit} per workspace)")]
    Repos {
        /// The enforced limit
        limit: usize,
    },

    /// The workspace already has the maximum number of vaults
    #[error("vault limit reached ({limit} per workspace)")]
    Vaults {
        /// The enforced limit
        limit: usize,
    },
}

impl LimitExceededError {
    /// Get the error code for this limit violation
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Workspaces { .. } => "WORKSPACE_LIMIT_EXCEEDED",
            Self::Repos { .. } => "REPO_LIMIT_EXCEEDED",
            Self::Vaults { .. } => "VAULT_LIMIT_EXCEEDED",
        }
    }
}

/// Authorization failures on the ownership chain
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OwnershipError {
    /// The acting user does not own the workspace (or the workspace owning
    /// the targeted repo or vault)
    #[error("workspace {workspace_id} is not owned by user {user_id}")]
    WorkspaceNotOwnedByUser {
        /// The workspace being accessed
        workspace_id: WorkspaceId,
        /// The user who attempted the access
        user_id: UserProfileId,
    },
}

/// Domain-wide result type
pub type DomainResult<T> = Result<T, DomainError>;
