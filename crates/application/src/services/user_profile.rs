use std::sync::Arc;

use tracing::{debug, info, instrument};

use symphony_domain::{
    AlreadyExistsError, Attributes, DomainResult, LimitExceededError, NotFoundError, UnitOfWork,
    UnitOfWorkProvider, UserProfile, UserProfileId, UserProfileRepository,
};

use super::Limits;

/// Lifecycle and uniqueness rules for user profiles.
pub struct UserProfileService {
    provider: Arc<dyn UnitOfWorkProvider>,
    limits: Limits,
}

impl UserProfileService {
    /// Creates a service with the default [`Limits`].
    pub fn new(provider: Arc<dyn UnitOfWorkProvider>) -> Self {
        Self::with_limits(provider, Limits::default())
    }

    /// Creates a service with explicit limits.
    pub fn with_limits(provider: Arc<dyn UnitOfWorkProvider>, limits: Limits) -> Self {
        Self { provider, limits }
    }

    /// Creates a profile after checking username and email uniqueness.
    ///
    /// The username check runs first, so a request that collides on both
    /// fields reports the username conflict.
    #[instrument(skip(self, preferences))]
    pub async fn create_user_profile(
        &self,
        username: &str,
        email: &str,
        preferences: Option<Attributes>,
    ) -> DomainResult<UserProfile> {
        let profile = UserProfile::new(username, email, preferences.unwrap_or_default())?;

        let uow = self.provider.begin().await?;
        if uow.user_profiles().username_exists(username, None).await? {
            return Err(AlreadyExistsError::Username(username.to_string()).into());
        }
        if uow.user_profiles().email_exists(email, None).await? {
            return Err(AlreadyExistsError::Email(email.to_string()).into());
        }
        let saved = uow.user_profiles().save(&profile).await?;
        uow.commit().await?;

        info!(user_id = %saved.id, "user profile created");
        Ok(saved)
    }

    /// Fetches a profile by id.
    #[instrument(skip(self))]
    pub async fn get_user_profile(&self, user_id: UserProfileId) -> DomainResult<UserProfile> {
        let uow = self.provider.begin().await?;
        uow.user_profiles()
            .get(user_id)
            .await?
            .ok_or_else(|| NotFoundError::UserProfile(user_id).into())
    }

    /// Fetches a profile by username.
    #[instrument(skip(self))]
    pub async fn get_user_profile_by_username(&self, username: &str) -> DomainResult<UserProfile> {
        let uow = self.provider.begin().await?;
        uow.user_profiles()
            .get_by_username(username)
            .await?
            .ok_or_else(|| NotFoundError::UserProfileByUsername(username.to_string()).into())
    }

    /// Fetches a profile by email.
    #[instrument(skip(self))]
    pub async fn get_user_profile_by_email(&self, email: &str) -> DomainResult<UserProfile> {
        let uow = self.provider.begin().await?;
        uow.user_profiles()
            .get_by_email(email)
            .await?
            .ok_or_else(|| NotFoundError::UserProfileByEmail(email.to_string()).into())
    }

    /// Applies a partial update to a profile.
    ///
    /// Uniqueness is re-checked for any field that actually changes, excluding
    /// the profile itself. Provided preferences replace the stored map
    /// wholesale.
    #[instrument(skip(self, preferences))]
    pub async fn update_user_profile(
        &self,
        user_id: UserProfileId,
        username: Option<&str>,
        email: Option<&str>,
        preferences: Option<Attributes>,
    ) -> DomainResult<UserProfile> {
        let uow = self.provider.begin().await?;
        let mut profile = uow
            .user_profiles()
            .get(user_id)
            .await?
            .ok_or(NotFoundError::UserProfile(user_id))?;

        if let Some(username) = username {
            if username != profile.username {
                if uow
                    .user_profiles()
                    .username_exists(username, Some(user_id))
                    .await?
                {
                    return Err(AlreadyExistsError::Username(username.to_string()).into());
                }
                profile.update_username(username)?;
            }
        }
        if let Some(email) = email {
            if email != profile.email {
                if uow.user_profiles().email_exists(email, Some(user_id)).await? {
                    return Err(AlreadyExistsError::Email(email.to_string()).into());
                }
                profile.update_email(email)?;
            }
        }
        if let Some(preferences) = preferences {
            profile.replace_preferences(preferences);
        }
        profile.touch();

        let saved = uow.user_profiles().save(&profile).await?;
        uow.commit().await?;

        info!(user_id = %saved.id, "user profile updated");
        Ok(saved)
    }

    /// Deletes a profile and everything it owns.
    #[instrument(skip(self))]
    pub async fn delete_user_profile(&self, user_id: UserProfileId) -> DomainResult<()> {
        let uow = self.provider.begin().await?;
        if !uow.user_profiles().exists(user_id).await? {
            return Err(NotFoundError::UserProfile(user_id).into());
        }
        uow.user_profiles().delete(user_id).await?;
        uow.commit().await?;

        info!(%user_id, "user profile deleted");
        Ok(())
    }

    /// Whether the user is still under the workspace ceiling.
    #[instrument(skip(self))]
    pub async fn can_create_workspace(&self, user_id: UserProfileId) -> DomainResult<bool> {
        let uow = self.provider.begin().await?;
        if !uow.user_profiles().exists(user_id).await? {
            return Err(NotFoundError::UserProfile(user_id).into());
        }
        let count = uow.user_profiles().count_workspaces(user_id).await?;
        debug!(%user_id, count, "workspace count checked");
        Ok(count < self.limits.max_workspaces_per_user)
    }

    /// Fails with a limit error when the user cannot add another workspace.
    pub async fn check_workspace_limit(&self, user_id: UserProfileId) -> DomainResult<()> {
        if !self.can_create_workspace(user_id).await? {
            return Err(LimitExceededError::Workspaces {
                limit: self.limits.max_workspaces_per_user,
            }
            .into());
        }
        Ok(())
    }
}
