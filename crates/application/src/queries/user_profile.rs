//! User profile queries and their handlers.

use std::sync::Arc;

use async_trait::async_trait;

use symphony_domain::{UnitOfWorkProvider, UserProfileId};

use crate::dto::UserProfileDto;
use crate::services::UserProfileService;
use crate::ApplicationResult;

use super::{Query, QueryHandler};

/// Fetches a profile by id.
#[derive(Debug, Clone)]
pub struct GetUserProfileQuery {
    /// Profile to fetch.
    pub user_id: UserProfileId,
}

impl Query for GetUserProfileQuery {
    type Output = UserProfileDto;
}

/// Looks a profile up by username.
#[derive(Debug, Clone)]
pub struct GetUserProfileByUsernameQuery {
    /// Username to look up.
    pub username: String,
}

impl Query for GetUserProfileByUsernameQuery {
    type Output = UserProfileDto;
}

/// Looks a profile up by email.
#[derive(Debug, Clone)]
pub struct GetUserProfileByEmailQuery {
    /// Email to look up.
    pub email: String,
}

impl Query for GetUserProfileByEmailQuery {
    type Output = UserProfileDto;
}

/// Handler for [`GetUserProfileQuery`].
pub struct GetUserProfileHandler {
    service: UserProfileService,
}

impl GetUserProfileHandler {
    /// Builds the handler over a unit-of-work provider.
    pub fn new(provider: Arc<dyn UnitOfWorkProvider>) -> Self {
        Self {
            service: UserProfileService::new(provider),
        }
    }
}

#[async_trait]
impl QueryHandler<GetUserProfileQuery> for GetUserProfileHandler {
    async fn handle(&self, query: GetUserProfileQuery) -> ApplicationResult<UserProfileDto> {
        let profile = self.service.get_user_profile(query.user_id).await?;
        Ok(UserProfileDto::from(profile))
    }
}

/// Handler for [`GetUserProfileByUsernameQuery`].
pub struct GetUserProfileByUsernameHandler {
    service: UserProfileService,
}

impl GetUserProfileByUsernameHandler {
    /// Builds the handler over a unit-of-work provider.
    pub fn new(provider: Arc<dyn UnitOfWorkProvider>) -> Self {
        Self {
            service: UserProfileService::new(provider),
        }
    }
}

#[async_trait]
impl QueryHandler<GetUserProfileByUsernameQuery> for GetUserProfileByUsernameHandler {
    async fn handle(
        &self,
        query: GetUserProfileByUsernameQuery,
    ) -> ApplicationResult<UserProfileDto> {
        let profile = self
            .service
            .get_user_profile_by_username(&query.username)
            .await?;
        Ok(UserProfileDto::from(profile))
    }
}

/// Handler for [`GetUserProfileByEmailQuery`].
pub struct GetUserProfileByEmailHandler {
    service: UserProfileService,
}

impl GetUserProfileByEmailHandler {
    /// Builds the handler over a unit-of-work provider.
    pub fn new(provider: Arc<dyn UnitOfWorkProvider>) -> Self {
        Self {
            service: UserProfileService::new(provider),
        }
    }
}

#[async_trait]
impl QueryHandler<GetUserProfileByEmailQuery> for GetUserProfileByEmailHandler {
    async fn handle(
        &self,
        query: GetUserProfileByEmailQuery,
    ) -> ApplicationResult<UserProfileDto> {
        let profile = self.service.get_user_profile_by_email(&query.email).await?;
        Ok(UserProfileDto::from(profile))
    }
}
