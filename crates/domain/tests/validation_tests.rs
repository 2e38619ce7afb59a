//! Property tests for aggregate construction.
//!
//! Generated valid inputs must always construct; inputs violating a rule
//! must fail with an error naming the offending field.

use proptest::prelude::*;
use symphony_domain::{repo::Repo, user_profile::UserProfile, Attributes, WorkspaceId};

fn valid_username() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_]{2,30}"
}

fn valid_email() -> impl Strategy<Value = String> {
    "[a-z0-9]{1,10}@[a-z0-9]{1,10}\\.[a-z]{2,4}"
}

proptest! {
    #[test]
    fn valid_profiles_always_construct(username in valid_username(), email in valid_email()) {
        let profile = UserProfile::new(&username, &email, Attributes::new()).unwrap();
        prop_assert_eq!(profile.username, username);
        prop_assert_eq!(profile.email, email);
        prop_assert_eq!(profile.created_at, profile.updated_at);
    }

    #[test]
    fn short_usernames_are_rejected(username in "[a-zA-Z]{1,2}", email in valid_email()) {
        let err = UserProfile::new(&username, &email, Attributes::new()).unwrap_err();
        prop_assert_eq!(err.field(), "username");
    }

    #[test]
    fn usernames_starting_with_digit_are_rejected(
        username in "[0-9][a-zA-Z0-9_]{2,10}",
        email in valid_email(),
    ) {
        let err = UserProfile::new(&username, &email, Attributes::new()).unwrap_err();
        prop_assert_eq!(err.field(), "username");
    }

    #[test]
    fn emails_without_at_are_rejected(username in valid_username(), email in "[a-z0-9.]{1,20}") {
        let err = UserProfile::new(&username, &email, Attributes::new()).unwrap_err();
        prop_assert_eq!(err.field(), "email");
    }

    #[test]
    fn repo_names_with_separators_are_rejected(
        prefix in "[a-z]{1,8}",
        suffix in "[a-z]{1,8}",
        sep in prop::sample::select(vec!['/', '\\', '<', '>', ':', '"', '|', '?', '*']),
    ) {
        let name = format!("{prefix}{sep}{suffix}");
        let err = Repo::new(WorkspaceId::new(), name, "/p", None, Attributes::new()).unwrap_err();
        prop_assert_eq!(err.field(), "name");
    }

    #[test]
    fn repo_round_trips_through_json(name in "[a-z][a-z0-9_-]{0,40}", path in "/[a-z0-9/]{1,40}") {
        let repo = Repo::new(WorkspaceId::new(), &name, &path, None, Attributes::new()).unwrap();
        let json = serde_json::to_string(&repo).unwrap();
        let back: Repo = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(repo, back);
    }
}
