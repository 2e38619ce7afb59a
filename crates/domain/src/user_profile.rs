//! UserProfile aggregate: global user data and the identity anchor.
//!
//! A user profile does not hold references to its workspaces in memory; the
//! ownership relation is reconstructed through repository queries on
//! `user_profile_id`. Deleting a profile cascades to all of its workspaces
//! at the persistence layer.

use crate::errors::ValidationError;
use crate::identifiers::UserProfileId;
use crate::validation;
use crate::Attributes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User profile aggregate root.
///
/// Username and email formats are enforced here; their *uniqueness* is
/// enforced at the service/repository boundary, not by the entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique identifier
    pub id: UserProfileId,
    /// Unique account name
    pub username: String,
    /// Unique email address
    pub email: String,
    /// Arbitrary user preferences
    #[serde(default)]
    pub preferences: Attributes,
    /// Creation timestamp (UTC)
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp (UTC)
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Create a new user profile, validating username and email.
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        preferences: Attributes,
    ) -> Result<Self, ValidationError> {
        let username = username.into();
        let email = email.into();
        validation::validate_username(&username)?;
        validation::validate_email(&email)?;

        let now = Utc::now();
        Ok(Self {
            id: UserProfileId::new(),
            username,
            email,
            preferences,
            created_at: now,
            updated_at: now,
        })
    }

    /// Change the username. The proposed value is validated before the
    /// stored field is touched.
    pub fn update_username(&mut self, username: impl Into<String>) -> Result<(), ValidationError> {
        let username = username.into();
        validation::validate_username(&username)?;
        self.username = username;
        self.touch();
        Ok(())
    }

    /// Change the email address. The proposed value is validated before the
    /// stored field is touched.
    pub fn update_email(&mut self, email: impl Into<String>) -> Result<(), ValidationError> {
        let email = email.into();
        validation::validate_email(&email)?;
        self.email = email;
        self.touch();
        Ok(())
    }

    /// Merge the given entries into the preferences map.
    ///
    /// Existing keys are overwritten, other keys are kept.
    pub fn update_preferences(&mut self, updates: Attributes) {
        self.preferences.extend(updates);
        self.touch();
    }

    /// Replace the preferences map wholesale.
    ///
    /// Used by the profile update operation, which carries full-map
    /// semantics; contrast with [`UserProfile::update_preferences`].
    pub fn replace_preferences(&mut self, preferences: Attributes) {
        self.preferences = preferences;
        self.touch();
    }

    /// Bump the modification timestamp.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn profile() -> UserProfile {
        UserProfile::new("alice", "alice@example.com", Attributes::new()).unwrap()
    }

    #[test]
    fn construction_validates_fields() {
        assert!(UserProfile::new("alice", "alice@example.com", Attributes::new()).is_ok());

        let err = UserProfile::new("al", "alice@example.com", Attributes::new()).unwrap_err();
        assert_eq!(err.field(), "username");

        let err = UserProfile::new("alice", "not-an-email", Attributes::new()).unwrap_err();
        assert_eq!(err.field(), "email");
    }

    #[test]
    fn update_email_rejects_invalid_and_keeps_old_value() {
        let mut p = profile();
        let before = p.updated_at;

        assert!(p.update_email("bad").is_err());
        assert_eq!(p.email, "alice@example.com");
        assert_eq!(p.updated_at, before);

        assert!(p.update_email("new@example.org").is_ok());
        assert_eq!(p.email, "new@example.org");
    }

    #[test]
    fn update_preferences_merges() {
        let mut p = profile();
        p.update_preferences(Attributes::from_iter([
            ("theme".to_string(), json!("dark")),
            ("lang".to_string(), json!("en")),
        ]));
        p.update_preferences(Attributes::from_iter([(
            "theme".to_string(),
            json!("light"),
        )]));

        assert_eq!(p.preferences["theme"], json!("light"));
        assert_eq!(p.preferences["lang"], json!("en"));
    }

    #[test]
    fn replace_preferences_drops_old_keys() {
        let mut p = profile();
        p.update_preferences(Attributes::from_iter([("theme".to_string(), json!("dark"))]));
        p.replace_preferences(Attributes::from_iter([("lang".to_string(), json!("de"))]));

        assert!(p.preferences.get("theme").is_none());
        assert_eq!(p.preferences["lang"], json!("de"));
    }
}
