use crate::{
    application::{ApplicationMiddleware, ApplicationState},
    dto::{input, output},
    error::Error,
    service::{
        dispatch_service::DispatchService, notifications_service::NotificationsService,
        tokens_service::TokensService,
    },
};
use axum::{
    extract::State,
    http::StatusCode,
    routing::{post, put},
    Json, Router,
};
use std::sync::Arc;

pub fn routing(application_middleware: &ApplicationMiddleware) -> Router<ApplicationState> {
    Router::new()
        .route("/api/v1/tokens", put(put_token))
        .route("/api/v1/notifications", post(post_notification))
        .route("/api/v1/notifications/dispatch", post(post_dispatch))
        .route_layer(application_middleware.body_limit.clone())
}

async fn put_token(
    State(tokens_service): State<Arc<dyn TokensService>>,
    Json(push_token): Json<input::PushToken>,
) -> Result<StatusCode, Error> {
    tokens_service.upsert_token(push_token).await?;

    Ok(StatusCode::NO_CONTENT)
}

async fn post_notification(
    State(notifications_service): State<Arc<dyn NotificationsService>>,
    Json(notification): Json<input::Notification>,
) -> Result<(StatusCode, Json<output::NotificationId>), Error> {
    let notification_id = notifications_service
        .create_notification(notification)
        .await?;

    Ok((StatusCode::CREATED, Json(notification_id)))
}

async fn post_dispatch(
    State(dispatch_service): State<Arc<dyn DispatchService>>,
    Json(event): Json<input::DispatchEvent>,
) -> Result<Json<output::DispatchOutcome>, Error> {
    let outcome = dispatch_service.dispatch(event.record).await?;

    Ok(Json(outcome))
}
