//! Field validation rules shared by the aggregates.
//!
//! All rules are pure functions over the proposed value, so callers can
//! validate before assigning a field. An aggregate is never observable in a
//! half-valid state.

use crate::errors::ValidationError;
use url::Url;

/// Maximum length (in characters) for workspace, repo, and vault names.
pub const MAX_NAME_LEN: usize = 255;

/// Characters that are never allowed in repo and vault names.
const FORBIDDEN_NAME_CHARS: &[char] = &['<', '>', ':', '"', '|', '?', '*', '\0'];

/// Validate a username.
///
/// Rules: at least 3 characters, only alphanumeric characters and
/// underscores, and the first character must be a letter.
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    let invalid = || ValidationError::InvalidUsername(username.to_string());

    if username.chars().count() < 3 {
        return Err(invalid());
    }
    let first = username.chars().next().ok_or_else(invalid)?;
    if !first.is_alphabetic() {
        return Err(invalid());
    }
    if !username.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return Err(invalid());
    }
    Ok(())
}

/// Validate an email address against the simple `local@domain.tld` shape.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let invalid = || ValidationError::InvalidEmail(email.to_string());

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.is_empty() {
        return Err(invalid());
    }
    // Exactly one '@' in the whole address
    if domain.contains('@') {
        return Err(invalid());
    }
    if !domain.contains('.') {
        return Err(invalid());
    }
    Ok(())
}

/// Validate a workspace name: non-blank, at most 255 characters.
pub fn validate_workspace_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() || name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Validate a repo or vault name.
///
/// Workspace name rules plus: no path separators and none of the characters
/// that are unsafe in directory names (`< > : " | ? *` or NUL).
pub fn validate_resource_name(name: &str) -> Result<(), ValidationError> {
    validate_workspace_name(name)?;
    if name.contains(['/', '\\']) || name.contains(FORBIDDEN_NAME_CHARS) {
        return Err(ValidationError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Validate a filesystem path: non-blank and free of NUL bytes.
pub fn validate_path(path: &str) -> Result<(), ValidationError> {
    if path.trim().is_empty() || path.contains('\0') {
        return Err(ValidationError::InvalidPath(path.to_string()));
    }
    Ok(())
}

/// Validate a git remote URL.
///
/// Accepted forms:
/// - scheme URLs (`http://`, `https://`, `git://`, `ssh://`), which must
///   parse as a URL
/// - `git@host:path` SSH remotes
/// - SCP-style `user@host:path` remotes
pub fn validate_remote_url(remote_url: &str) -> Result<(), ValidationError> {
    let invalid = || ValidationError::InvalidRemoteUrl(remote_url.to_string());

    let url = remote_url.trim();
    if url.is_empty() {
        return Err(invalid());
    }

    if url.contains("://") {
        let parsed = Url::parse(url).map_err(|_| invalid())?;
        return match parsed.scheme() {
            "http" | "https" | "git" | "ssh" => Ok(()),
            _ => Err(invalid()),
        };
    }

    if url.starts_with("git@") {
        return Ok(());
    }

    // SCP-style user@host:path
    if url.contains(':') && !url.starts_with('/') {
        return Ok(());
    }

    Err(invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_rules() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("a_1").is_ok());
        assert!(validate_username("ab").is_err()); // too short
        assert!(validate_username("1alice").is_err()); // starts with digit
        assert!(validate_username("_alice").is_err()); // starts with underscore
        assert!(validate_username("ali ce").is_err()); // space
        assert!(validate_username("ali-ce").is_err()); // hyphen
    }

    #[test]
    fn email_rules() {
        assert!(validate_email("alice@example.com").is_ok());
        assert!(validate_email("a@b.co").is_ok());
        assert!(validate_email("alice").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("alice@").is_err());
        assert!(validate_email("alice@example").is_err()); // no dot in domain
        assert!(validate_email("a@b@c.com").is_err()); // two @
    }

    #[test]
    fn workspace_name_rules() {
        assert!(validate_workspace_name("Lab").is_ok());
        assert!(validate_workspace_name("a/b").is_ok()); // separators allowed here
        assert!(validate_workspace_name("").is_err());
        assert!(validate_workspace_name("   ").is_err());
        assert!(validate_workspace_name(&"x".repeat(256)).is_err());
        assert!(validate_workspace_name(&"x".repeat(255)).is_ok());
    }

    #[test]
    fn resource_name_rules() {
        assert!(validate_resource_name("proj1").is_ok());
        assert!(validate_resource_name("my-repo.git").is_ok());
        assert!(validate_resource_name("a/b").is_err());
        assert!(validate_resource_name("a\\b").is_err());
        for c in ['<', '>', ':', '"', '|', '?', '*'] {
            assert!(validate_resource_name(&format!("bad{c}name")).is_err());
        }
    }

    #[test]
    fn path_rules() {
        assert!(validate_path("/p").is_ok());
        assert!(validate_path("relative/path").is_ok());
        assert!(validate_path("").is_err());
        assert!(validate_path("  ").is_err());
        assert!(validate_path("a\0b").is_err());
    }

    #[test]
    fn remote_url_rules() {
        assert!(validate_remote_url("https://github.com/acme/proj.git").is_ok());
        assert!(validate_remote_url("http://host/repo").is_ok());
        assert!(validate_remote_url("git://host/repo").is_ok());
        assert!(validate_remote_url("ssh://git@host/repo").is_ok());
        assert!(validate_remote_url("git@github.com:acme/proj.git").is_ok());
        assert!(validate_remote_url("user@host:path/to/repo").is_ok());
        assert!(validate_remote_url("").is_err());
        assert!(validate_remote_url("ftp://host/repo").is_err());
        assert!(validate_remote_url("/local/path").is_err());
        assert!(validate_remote_url("just-a-name").is_err());
    }
}
