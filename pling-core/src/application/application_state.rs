use super::ApplicationEnv;
use crate::{
    repository::{PushNotificationsRepositoryImpl, PushTokensRepositoryImpl},
    service::{
        dispatch_service::{DispatchService, DispatchServiceImpl, ExpoPushGateway},
        notifications_service::{NotificationsService, NotificationsServiceImpl},
        tokens_service::{TokensService, TokensServiceImpl},
    },
};
use axum::extract::FromRef;
use expo_push_client::{ExpoPushClient, ExpoPushClientConfig};
use mongodb::{options::ClientOptions, Client};
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub tokens_service: Arc<dyn TokensService>,
    pub notifications_service: Arc<dyn NotificationsService>,
    pub dispatch_service: Arc<dyn DispatchService>,
}

pub struct ApplicationStateToClose {
    pub db_client: Client,
}

pub async fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    tracing::info!("connecting to database");
    let db_client_options = ClientOptions::parse(&env.db_connection_string).await?;
    let db_client = Client::with_options(db_client_options)?;
    let db = db_client.database(&env.db_name);

    tracing::info!("creating repositories");
    let push_tokens_repository = PushTokensRepositoryImpl::new(db.clone()).await?;
    let push_tokens_repository = Arc::new(push_tokens_repository);

    let push_notifications_repository = PushNotificationsRepositoryImpl::new(db).await?;
    let push_notifications_repository = Arc::new(push_notifications_repository);

    tracing::info!("creating services");
    let config = ExpoPushClientConfig {
        url: env.gateway_url.clone(),
        request_timeout: env.gateway_request_timeout,
    };
    let expo_push_client = ExpoPushClient::new(config)?;
    let push_gateway = ExpoPushGateway::new(expo_push_client);
    let push_gateway = Arc::new(push_gateway);

    let tokens_service = TokensServiceImpl::new(push_tokens_repository.clone());
    let tokens_service = Arc::new(tokens_service);

    let notifications_service =
        NotificationsServiceImpl::new(push_notifications_repository.clone());
    let notifications_service = Arc::new(notifications_service);

    let dispatch_service = DispatchServiceImpl::new(
        push_tokens_repository,
        push_notifications_repository,
        push_gateway,
    );
    let dispatch_service = Arc::new(dispatch_service);

    Ok((
        ApplicationState {
            tokens_service,
            notifications_service,
            dispatch_service,
        },
        ApplicationStateToClose { db_client },
    ))
}
