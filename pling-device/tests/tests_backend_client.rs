use axum::{
    extract::State,
    http::StatusCode,
    routing::{post, put},
    Json, Router,
};
use pling_device::{
    dto::{DeviceType, PushAddress},
    store::{BackendClient, BackendClientConfig, NotificationsStore, TokenStore},
    Error,
};
use tokio::sync::mpsc::{unbounded_channel, UnboundedSender};
use uuid::Uuid;

async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}")
}

fn create_client(base_url: String) -> BackendClient {
    BackendClient::new(BackendClientConfig { base_url })
}

#[tokio::test]
async fn upsert_token_sends_expected_body() {
    let (tx, mut rx) = unbounded_channel();
    let router = Router::new()
        .route(
            "/api/v1/tokens",
            put(
                |State(tx): State<UnboundedSender<serde_json::Value>>,
                 Json(body): Json<serde_json::Value>| async move {
                    tx.send(body).unwrap();
                    StatusCode::NO_CONTENT
                },
            ),
        )
        .with_state(tx);
    let base_url = spawn_backend(router).await;
    let client = create_client(base_url);
    let user_id = Uuid::new_v4();

    client
        .upsert_token(
            &PushAddress("ExponentPushToken[abc]".to_string()),
            Some(user_id),
            DeviceType::Android,
        )
        .await
        .unwrap();

    let body = rx.recv().await.unwrap();
    assert_eq!(body["token"], "ExponentPushToken[abc]");
    assert_eq!(body["user_id"], user_id.to_string());
    assert_eq!(body["device_type"], "android");
}

#[tokio::test]
async fn upsert_token_anonymous_user_serialized_as_null() {
    let (tx, mut rx) = unbounded_channel();
    let router = Router::new()
        .route(
            "/api/v1/tokens",
            put(
                |State(tx): State<UnboundedSender<serde_json::Value>>,
                 Json(body): Json<serde_json::Value>| async move {
                    tx.send(body).unwrap();
                    StatusCode::NO_CONTENT
                },
            ),
        )
        .with_state(tx);
    let base_url = spawn_backend(router).await;
    let client = create_client(base_url);

    client
        .upsert_token(
            &PushAddress("ExponentPushToken[abc]".to_string()),
            None,
            DeviceType::Ios,
        )
        .await
        .unwrap();

    let body = rx.recv().await.unwrap();
    assert_eq!(body["user_id"], serde_json::Value::Null);
}

#[tokio::test]
async fn upsert_token_backend_status() {
    let router = Router::new().route(
        "/api/v1/tokens",
        put(|| async { StatusCode::UNPROCESSABLE_ENTITY }),
    );
    let base_url = spawn_backend(router).await;
    let client = create_client(base_url);

    let result = client
        .upsert_token(&PushAddress("".to_string()), None, DeviceType::Web)
        .await;

    assert!(matches!(
        result,
        Err(Error::BackendStatus(StatusCode::UNPROCESSABLE_ENTITY))
    ));
}

#[tokio::test]
async fn create_notification_sends_expected_body() {
    let (tx, mut rx) = unbounded_channel();
    let router = Router::new()
        .route(
            "/api/v1/notifications",
            post(
                |State(tx): State<UnboundedSender<serde_json::Value>>,
                 Json(body): Json<serde_json::Value>| async move {
                    tx.send(body).unwrap();
                    (
                        StatusCode::CREATED,
                        Json(serde_json::json!({ "id": "66b0f8a2e4b0a1d2c3e4f5a6" })),
                    )
                },
            ),
        )
        .with_state(tx);
    let base_url = spawn_backend(router).await;
    let client = create_client(base_url);

    client
        .create_notification("title", "message", None)
        .await
        .unwrap();

    let body = rx.recv().await.unwrap();
    assert_eq!(body["title"], "title");
    assert_eq!(body["message"], "message");
    assert_eq!(body["user_id"], serde_json::Value::Null);
}

#[tokio::test]
async fn create_notification_backend_status() {
    let router = Router::new().route(
        "/api/v1/notifications",
        post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let base_url = spawn_backend(router).await;
    let client = create_client(base_url);

    let result = client.create_notification("title", "message", None).await;

    assert!(matches!(
        result,
        Err(Error::BackendStatus(StatusCode::INTERNAL_SERVER_ERROR))
    ));
}

#[tokio::test]
async fn backend_unreachable() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = create_client(format!("http://{addr}"));

    let result = client
        .upsert_token(&PushAddress("token".to_string()), None, DeviceType::Ios)
        .await;

    assert!(matches!(result, Err(Error::Backend(_))));
}
