use super::TokensService;
use crate::{dto::input, error::Error, repository::PushTokensRepository};
use axum::async_trait;
use std::sync::Arc;
use time::OffsetDateTime;

pub struct TokensServiceImpl {
    repository: Arc<dyn PushTokensRepository>,
}

impl TokensServiceImpl {
    pub fn new(repository: Arc<dyn PushTokensRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl TokensService for TokensServiceImpl {
    ///
    /// Registers device push token. Registering the same token again
    /// updates its owner and device type
    ///
    /// ### Errors
    /// - [Error::Validation] when token is empty
    ///
    async fn upsert_token(&self, push_token: input::PushToken) -> Result<(), Error> {
        if push_token.token.is_empty() {
            return Err(Error::Validation("token cannot be empty"));
        }

        tracing::info!("registering push token");

        let updated_at = OffsetDateTime::now_utc();
        self.repository
            .upsert(
                &push_token.token,
                push_token.user_id,
                push_token.device_type,
                updated_at,
            )
            .await?;

        tracing::info!("registered push token");

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        dto::DeviceType,
        repository::{self, MockPushTokensRepository},
    };
    use uuid::Uuid;

    #[tokio::test]
    async fn upsert_token_values_passed_to_repository() {
        let user_id = Uuid::new_v4();
        let before_upsert = OffsetDateTime::now_utc();
        let mut repository = MockPushTokensRepository::new();
        repository.expect_upsert().returning(
            move |token, repository_user_id, device_type, updated_at| {
                let after_upsert = OffsetDateTime::now_utc();
                assert_eq!(token, "ExponentPushToken[xxx]");
                assert_eq!(repository_user_id, Some(user_id));
                assert_eq!(device_type, DeviceType::Android);
                assert!(before_upsert <= updated_at && updated_at <= after_upsert);
                Ok(())
            },
        );
        let service = TokensServiceImpl::new(Arc::new(repository));

        service
            .upsert_token(input::PushToken {
                token: "ExponentPushToken[xxx]".to_string(),
                user_id: Some(user_id),
                device_type: DeviceType::Android,
            })
            .await
            .unwrap();

        // assertions happen in mock
    }

    #[tokio::test]
    async fn upsert_token_twice_passes_latest_owner() {
        let first_user_id = Uuid::new_v4();
        let second_user_id = Uuid::new_v4();
        let mut repository = MockPushTokensRepository::new();
        let mut sequence = mockall::Sequence::new();
        repository
            .expect_upsert()
            .once()
            .in_sequence(&mut sequence)
            .returning(move |token, repository_user_id, _, _| {
                assert_eq!(token, "ExponentPushToken[xxx]");
                assert_eq!(repository_user_id, Some(first_user_id));
                Ok(())
            });
        repository
            .expect_upsert()
            .once()
            .in_sequence(&mut sequence)
            .returning(move |token, repository_user_id, device_type, _| {
                assert_eq!(token, "ExponentPushToken[xxx]");
                assert_eq!(repository_user_id, Some(second_user_id));
                assert_eq!(device_type, DeviceType::Ios);
                Ok(())
            });
        let service = TokensServiceImpl::new(Arc::new(repository));

        service
            .upsert_token(input::PushToken {
                token: "ExponentPushToken[xxx]".to_string(),
                user_id: Some(first_user_id),
                device_type: DeviceType::Android,
            })
            .await
            .unwrap();
        service
            .upsert_token(input::PushToken {
                token: "ExponentPushToken[xxx]".to_string(),
                user_id: Some(second_user_id),
                device_type: DeviceType::Ios,
            })
            .await
            .unwrap();

        // assertions happen in mocks
    }

    #[tokio::test]
    async fn upsert_token_empty_token() {
        let repository = MockPushTokensRepository::new();
        let service = TokensServiceImpl::new(Arc::new(repository));

        let upsert_result = service
            .upsert_token(input::PushToken {
                token: "".to_string(),
                user_id: None,
                device_type: DeviceType::Ios,
            })
            .await;

        assert!(matches!(upsert_result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn upsert_token_database_error() {
        let mut repository = MockPushTokensRepository::new();
        repository.expect_upsert().returning(|_, _, _, _| {
            Err(repository::Error::Mongo(
                mongodb::error::ErrorKind::Custom(Arc::new("any database error")).into(),
            ))
        });
        let service = TokensServiceImpl::new(Arc::new(repository));

        let upsert_result = service
            .upsert_token(input::PushToken {
                token: "ExponentPushToken[xxx]".to_string(),
                user_id: None,
                device_type: DeviceType::Web,
            })
            .await;

        assert!(matches!(upsert_result, Err(Error::Database(_))));
    }
}
