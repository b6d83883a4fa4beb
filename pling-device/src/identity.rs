use async_trait::async_trait;
use uuid::Uuid;

/// Source of the currently authenticated user, if any.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn current_user_id(&self) -> Option<Uuid>;
}
