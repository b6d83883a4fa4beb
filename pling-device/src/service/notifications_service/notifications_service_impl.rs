use super::NotificationsService;
use crate::{
    dto::LocalNotification,
    platform::NotificationCenter,
    reporter::{ErrorKind, ErrorReporter},
    store::NotificationsStore,
    IdentityProvider,
};
use async_trait::async_trait;
use std::sync::Arc;

pub struct NotificationsServiceImpl {
    notifications_store: Arc<dyn NotificationsStore>,
    notification_center: Arc<dyn NotificationCenter>,
    identity_provider: Arc<dyn IdentityProvider>,
    error_reporter: Arc<dyn ErrorReporter>,
}

impl NotificationsServiceImpl {
    pub fn new(
        notifications_store: Arc<dyn NotificationsStore>,
        notification_center: Arc<dyn NotificationCenter>,
        identity_provider: Arc<dyn IdentityProvider>,
        error_reporter: Arc<dyn ErrorReporter>,
    ) -> Self {
        Self {
            notifications_store,
            notification_center,
            identity_provider,
            error_reporter,
        }
    }
}

#[async_trait]
impl NotificationsService for NotificationsServiceImpl {
    async fn create_notification(&self, title: &str, message: &str) -> bool {
        let user_id = self.identity_provider.current_user_id().await;

        match self
            .notifications_store
            .create_notification(title, message, user_id)
            .await
        {
            Ok(()) => true,
            Err(err) => {
                self.error_reporter
                    .report(ErrorKind::NotificationCreateFailed, &err.to_string());
                false
            }
        }
    }

    async fn show_local_notification(&self, title: &str, body: &str) {
        let notification = LocalNotification {
            title: title.to_string(),
            body: body.to_string(),
            sound: true,
        };

        if let Err(err) = self.notification_center.present(notification).await {
            self.error_reporter
                .report(ErrorKind::LocalDisplayFailed, &err.to_string());
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        platform::MockNotificationCenter, reporter::MockErrorReporter,
        store::MockNotificationsStore, Error, MockIdentityProvider,
    };
    use uuid::Uuid;

    struct Mocks {
        notifications_store: MockNotificationsStore,
        notification_center: MockNotificationCenter,
        identity_provider: MockIdentityProvider,
        error_reporter: MockErrorReporter,
    }

    impl Mocks {
        fn new() -> Self {
            Self {
                notifications_store: MockNotificationsStore::new(),
                notification_center: MockNotificationCenter::new(),
                identity_provider: MockIdentityProvider::new(),
                error_reporter: MockErrorReporter::new(),
            }
        }

        fn into_service(self) -> NotificationsServiceImpl {
            NotificationsServiceImpl::new(
                Arc::new(self.notifications_store),
                Arc::new(self.notification_center),
                Arc::new(self.identity_provider),
                Arc::new(self.error_reporter),
            )
        }
    }

    #[tokio::test]
    async fn create_notification_values_passed_to_store() {
        let user_id = Uuid::new_v4();
        let mut mocks = Mocks::new();
        mocks
            .identity_provider
            .expect_current_user_id()
            .returning(move || Some(user_id));
        mocks
            .notifications_store
            .expect_create_notification()
            .once()
            .returning(move |title, message, create_user_id| {
                assert_eq!(title, "title");
                assert_eq!(message, "message");
                assert_eq!(create_user_id, Some(user_id));
                Ok(())
            });
        let service = mocks.into_service();

        let created = service.create_notification("title", "message").await;

        assert!(created);
    }

    #[tokio::test]
    async fn create_notification_anonymous_user() {
        let mut mocks = Mocks::new();
        mocks
            .identity_provider
            .expect_current_user_id()
            .returning(|| None);
        mocks
            .notifications_store
            .expect_create_notification()
            .once()
            .returning(|_, _, create_user_id| {
                assert_eq!(create_user_id, None);
                Ok(())
            });
        let service = mocks.into_service();

        let created = service.create_notification("title", "message").await;

        assert!(created);
    }

    #[tokio::test]
    async fn create_notification_store_error() {
        let mut mocks = Mocks::new();
        mocks
            .identity_provider
            .expect_current_user_id()
            .returning(|| None);
        mocks
            .notifications_store
            .expect_create_notification()
            .returning(|_, _, _| {
                Err(Error::BackendStatus(
                    reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                ))
            });
        mocks
            .error_reporter
            .expect_report()
            .once()
            .returning(|kind, _| assert_eq!(kind, ErrorKind::NotificationCreateFailed));
        let service = mocks.into_service();

        let created = service.create_notification("title", "message").await;

        assert!(!created);
    }

    #[tokio::test]
    async fn show_local_notification_values_passed_to_center() {
        let mut mocks = Mocks::new();
        mocks
            .notification_center
            .expect_present()
            .once()
            .returning(|notification| {
                assert_eq!(notification.title, "title");
                assert_eq!(notification.body, "body");
                assert!(notification.sound);
                Ok(())
            });
        let service = mocks.into_service();

        service.show_local_notification("title", "body").await;

        // assertions happen in mock
    }

    #[tokio::test]
    async fn show_local_notification_present_error_reported() {
        let mut mocks = Mocks::new();
        mocks
            .notification_center
            .expect_present()
            .returning(|_| Err(Error::Platform("scheduling failed".to_string())));
        mocks
            .error_reporter
            .expect_report()
            .once()
            .returning(|kind, _| assert_eq!(kind, ErrorKind::LocalDisplayFailed));
        let service = mocks.into_service();

        service.show_local_notification("title", "body").await;

        // assertions happen in mock
    }
}
