use crate::{dto::input, error::Error};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokensService: Send + Sync {
    async fn upsert_token(&self, push_token: input::PushToken) -> Result<(), Error>;
}
