use async_trait::async_trait;

use crate::modules::rating::domain::entities::User;

/// Auth/session collaborator. Only rating writes require a user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CurrentUserProvider: Send + Sync {
    async fn get_current_user(&self) -> Option<User>;
}
